//! rougeval-core: pipeline around the external ROUGE-1.5.5 scorer.
//! Stage summary corpora to disk, emit the job descriptor, run the Perl tool
//! as a blocking child process, and parse its report into a flat metric map.
//! See `examples/simple.rs` for a quickstart.

pub mod command;
pub mod config;
pub mod error;
pub mod jobfile;
pub mod parser;
pub mod process;
pub mod runner;
pub mod staging;

pub use command::CommandTemplate;
pub use config::{LengthUnit, RougeConfig, ScoringFormula};
pub use error::{Result, RougeError};
pub use parser::{ReportParser, ScoreSelection};
pub use runner::Rouge;
pub use staging::StagedCorpus;

pub use rougeval_types::{RougeScores, Summary, SummarySet};
