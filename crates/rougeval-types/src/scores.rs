use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

/// Flat metric map parsed from a ROUGE report, e.g. `"ROUGE-2-F" -> 0.18423`.
/// Which keys are present depends on the enabled metric families and the
/// selection mode the report was parsed with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RougeScores {
	metrics: BTreeMap<String, f64>,
}

#[derive(Tabled)]
struct ScoreRow {
	metric: String,
	score: f64,
}

impl RougeScores {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, metric: impl Into<String>, value: f64) {
		self.metrics.insert(metric.into(), value);
	}

	pub fn get(&self, metric: &str) -> Option<f64> {
		self.metrics.get(metric).copied()
	}

	pub fn contains(&self, metric: &str) -> bool {
		self.metrics.contains_key(metric)
	}

	pub fn len(&self) -> usize {
		self.metrics.len()
	}

	pub fn is_empty(&self) -> bool {
		self.metrics.is_empty()
	}

	/// Metric name/value pairs in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
		self.metrics.iter().map(|(k, v)| (k.as_str(), *v))
	}

	/// Render the scores as a small table for terminal display.
	pub fn score_table(&self) -> String {
		let rows: Vec<ScoreRow> = self
			.iter()
			.map(|(metric, score)| ScoreRow { metric: metric.to_string(), score })
			.collect();
		let table = Table::new(rows);
		format!("{}\n", table)
	}

	pub fn to_json_pretty(&self) -> String {
		serde_json::to_string_pretty(&self.metrics).unwrap_or_default()
	}
}

impl FromIterator<(String, f64)> for RougeScores {
	fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
		Self { metrics: iter.into_iter().collect() }
	}
}
