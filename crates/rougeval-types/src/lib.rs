//! rougeval-types: shared data model for the ROUGE evaluation pipeline.
//! Summary corpora go in, a flat metric map comes out.

pub mod corpus;
pub mod scores;

pub use corpus::{Summary, SummarySet};
pub use scores::RougeScores;
