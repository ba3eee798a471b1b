//! Report parser: extracts `A ROUGE-<TAG> Average_<R|P|F>: <float>` lines
//! from the scorer's free-text report into a flat metric map.

use regex::Regex;

use rougeval_types::RougeScores;

use crate::config::RougeConfig;
use crate::error::{Result, RougeError};

/// Which statistic of each metric family lands in the result map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoreSelection {
    /// Recall under `<metric>-R`, precision under `<metric>-P`, F-measure
    /// under `<metric>-F`, as their report lines appear.
    #[default]
    Full,
    /// Only recall, stored under the bare metric name.
    RecallOnly,
    /// Only F-measure, stored under the bare metric name.
    FMeasureOnly,
}

impl ScoreSelection {
    /// Translate the two boolean mode flags; setting both is rejected.
    pub fn from_flags(recall_only: bool, f_measure_only: bool) -> Result<Self> {
        match (recall_only, f_measure_only) {
            (true, true) => Err(RougeError::Config(
                "recall_only and f_measure_only are mutually exclusive".into(),
            )),
            (true, false) => Ok(ScoreSelection::RecallOnly),
            (false, true) => Ok(ScoreSelection::FMeasureOnly),
            (false, false) => Ok(ScoreSelection::Full),
        }
    }
}

/// Parses scorer reports under the same configuration that built the command
/// line, so family gating and the ROUGE-W weight always agree with what the
/// scorer was actually asked to compute.
#[derive(Debug, Clone)]
pub struct ReportParser {
    line: Regex,
    su4: bool,
    lcs: bool,
    wlcs: bool,
    w_tag: String,
}

impl ReportParser {
    pub fn new(config: &RougeConfig) -> Result<Self> {
        let line = Regex::new(r"A ROUGE-([\w.-]+) Average_([RPF]): ([0-9.]+)")
            .map_err(|e| RougeError::Config(format!("score-line pattern: {e}")))?;
        Ok(Self {
            line,
            su4: config.rouge_su4,
            lcs: config.rouge_l,
            wlcs: config.rouge_w,
            w_tag: format!("W-{}", config.rouge_w_weight),
        })
    }

    /// Scan the report in emission order. The running counter `n` tracks
    /// which ROUGE-N block is being read; it advances only when the current
    /// order's F-measure line goes by, which is the one ordering guarantee
    /// the report gives. SU4, L, and W lines populate keys only when the
    /// corresponding family was enabled; ROUGE-N is always live for the
    /// current `n`.
    pub fn parse(&self, output: &str, selection: ScoreSelection) -> RougeScores {
        let mut scores = RougeScores::new();
        let mut n: u32 = 1;

        for line in output.lines() {
            let Some(caps) = self.line.captures(line) else {
                continue;
            };
            let tag = caps.get(1).map_or("", |m| m.as_str());
            let stat = caps.get(2).map_or("", |m| m.as_str());
            let value: f64 = match caps.get(3).map_or("", |m| m.as_str()).parse() {
                Ok(v) => v,
                Err(_) => continue,
            };

            let is_current_order = tag == n.to_string();
            let metric = match tag {
                "SU4" if self.su4 => "ROUGE-SU4".to_string(),
                "L" if self.lcs => "ROUGE-L".to_string(),
                t if self.wlcs && t == self.w_tag => format!("ROUGE-{t}"),
                _ if is_current_order => format!("ROUGE-{n}"),
                // Disabled family, or an order other than the current one.
                _ => continue,
            };

            match (selection, stat) {
                (ScoreSelection::Full, "R") => scores.insert(format!("{metric}-R"), value),
                (ScoreSelection::Full, "P") => scores.insert(format!("{metric}-P"), value),
                (ScoreSelection::Full, "F") => scores.insert(format!("{metric}-F"), value),
                (ScoreSelection::RecallOnly, "R") => scores.insert(metric, value),
                (ScoreSelection::FMeasureOnly, "F") => scores.insert(metric, value),
                _ => {}
            }

            // Advances in every selection mode, including the ones that
            // discard F values.
            if is_current_order && stat == "F" {
                n += 1;
            }
        }

        scores
    }
}
