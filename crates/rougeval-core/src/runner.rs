use std::path::Path;
use std::time::Duration;

use tracing::debug;

use rougeval_types::{RougeScores, SummarySet};

use crate::command::CommandTemplate;
use crate::config::RougeConfig;
use crate::error::Result;
use crate::parser::{ReportParser, ScoreSelection};
use crate::{jobfile, process, staging};

/// A configured ROUGE evaluator. Construction validates the configuration and
/// caches the scorer command template; one instance then serves any number of
/// evaluation calls.
pub struct Rouge {
	config: RougeConfig,
	command: CommandTemplate,
	parser: ReportParser,
}

impl Rouge {
	pub fn new(config: RougeConfig) -> Result<Self> {
		let command = CommandTemplate::new(&config)?;
		let parser = ReportParser::new(&config)?;
		Ok(Self { config, command, parser })
	}

	pub fn config(&self) -> &RougeConfig {
		&self.config
	}

	/// Stage the corpus, run the scorer, and return its raw report text.
	///
	/// The staging directory, whether `output_dir` or a generated temporary
	/// one, is removed before this returns, on success and on failure alike.
	pub fn evaluate_raw(
		&self,
		summary: &SummarySet,
		reference: &SummarySet,
		output_dir: Option<&Path>,
	) -> Result<String> {
		let corpus = staging::stage(summary, reference, output_dir)?;
		let job_file = jobfile::write(&corpus)?;
		let timeout = self.config.timeout_secs.map(Duration::from_secs);

		let outcome = process::run(self.command.command(&job_file), timeout);
		// The staging tree goes away before any process error surfaces.
		drop(corpus);

		let output = outcome?;
		debug!(bytes = output.merged.len(), "decoding scorer report");
		Ok(String::from_utf8(output.merged)?)
	}

	/// Run the scorer and parse the report with the default selection:
	/// `<metric>-R`/`-P`/`-F` keys for every enabled family.
	pub fn evaluate(
		&self,
		summary: &SummarySet,
		reference: &SummarySet,
		output_dir: Option<&Path>,
	) -> Result<RougeScores> {
		let raw = self.evaluate_raw(summary, reference, output_dir)?;
		Ok(self.parser.parse(&raw, ScoreSelection::default()))
	}

	/// Convert a previously captured report into scores. `recall_only` and
	/// `f_measure_only` are mutually exclusive; neither gives the default
	/// suffixed keys.
	pub fn scores_from_output(
		&self,
		output: &str,
		recall_only: bool,
		f_measure_only: bool,
	) -> Result<RougeScores> {
		let selection = ScoreSelection::from_flags(recall_only, f_measure_only)?;
		Ok(self.parser.parse(output, selection))
	}
}
