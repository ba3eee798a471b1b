use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RougeError};

/// How one peer score is aggregated across a document's reference variants:
/// model average (`-f A`) or best model (`-f B`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringFormula {
    #[default]
    Average,
    Best,
}

impl ScoringFormula {
    pub(crate) fn flag(self) -> &'static str {
        match self {
            ScoringFormula::Average => "A",
            ScoringFormula::Best => "B",
        }
    }
}

impl FromStr for ScoringFormula {
    type Err = RougeError;

    /// `"average"` selects model averaging. Any other non-empty value selects
    /// best-model scoring; historical configs relied on that fallback, so it
    /// is kept at the string boundary. The empty string is rejected.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" => Err(RougeError::Config(
                "scoring formula must be 'average' or 'best'".into(),
            )),
            "average" => Ok(ScoringFormula::Average),
            _ => Ok(ScoringFormula::Best),
        }
    }
}

/// Unit of the peer-summary length limit: first N words (`-l`) or bytes (`-b`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    #[default]
    Words,
    Bytes,
}

impl LengthUnit {
    pub(crate) fn flag(self) -> &'static str {
        match self {
            LengthUnit::Words => "-l",
            LengthUnit::Bytes => "-b",
        }
    }
}

/// Scoring options for one evaluator instance. Immutable once handed to
/// [`crate::Rouge::new`]; the same values drive both the scorer command line
/// and the later report parse, so the two can never disagree (the ROUGE-W
/// weight in particular appears in both).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RougeConfig {
    /// Path to the `ROUGE-1.5.5.pl` script.
    pub rouge_path: PathBuf,
    /// Path to the ROUGE data directory, passed as `-e`.
    pub data_path: PathBuf,
    /// Program used to run the scorer script. Overriding it lets tests drive
    /// the pipeline with a stub scorer.
    #[serde(default = "default_entrypoint")]
    pub entrypoint: String,
    /// Compute ROUGE-N for every order up to this one. Must be positive.
    #[serde(default = "default_n_gram")]
    pub n_gram: u32,
    /// Compute ROUGE-SU4: unigrams plus skip-bigrams with gaps up to four words.
    #[serde(default = "default_true")]
    pub rouge_su4: bool,
    /// Compute ROUGE-L (longest common subsequence).
    #[serde(default)]
    pub rouge_l: bool,
    /// Compute ROUGE-W (weighted LCS).
    #[serde(default)]
    pub rouge_w: bool,
    #[serde(default = "default_w_weight")]
    pub rouge_w_weight: f64,
    /// Porter-stem both peer and model summaries before scoring.
    #[serde(default = "default_true")]
    pub stemming: bool,
    /// Remove stopwords before scoring.
    #[serde(default)]
    pub stopwords: bool,
    /// Truncate peer summaries to `length` units before scoring.
    #[serde(default = "default_true")]
    pub length_limit: bool,
    #[serde(default = "default_length")]
    pub length: u32,
    #[serde(default)]
    pub length_unit: LengthUnit,
    /// Report confidence intervals at the `confidence` level.
    #[serde(default)]
    pub confidence_interval: bool,
    #[serde(default = "default_confidence")]
    pub confidence: u32,
    #[serde(default)]
    pub scoring_formula: ScoringFormula,
    /// Bootstrap-resample with `samples` sampling points.
    #[serde(default = "default_true")]
    pub resampling: bool,
    #[serde(default = "default_samples")]
    pub samples: u32,
    /// Weigh recall against precision with `alpha` (`-p`). Alpha near 1
    /// favors precision, near 0 favors recall.
    #[serde(default = "default_true")]
    pub balance: bool,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Kill the scorer and fail if it runs longer than this. `None` blocks
    /// until the scorer exits, however long that takes.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_entrypoint() -> String {
    "perl".to_string()
}

fn default_n_gram() -> u32 {
    2
}

fn default_true() -> bool {
    true
}

fn default_w_weight() -> f64 {
    1.2
}

fn default_length() -> u32 {
    100
}

fn default_confidence() -> u32 {
    95
}

fn default_samples() -> u32 {
    1000
}

fn default_alpha() -> f64 {
    0.5
}

impl Default for RougeConfig {
    fn default() -> Self {
        Self {
            rouge_path: PathBuf::new(),
            data_path: PathBuf::new(),
            entrypoint: default_entrypoint(),
            n_gram: default_n_gram(),
            rouge_su4: true,
            rouge_l: false,
            rouge_w: false,
            rouge_w_weight: default_w_weight(),
            stemming: true,
            stopwords: false,
            length_limit: true,
            length: default_length(),
            length_unit: LengthUnit::Words,
            confidence_interval: false,
            confidence: default_confidence(),
            scoring_formula: ScoringFormula::Average,
            resampling: true,
            samples: default_samples(),
            balance: true,
            alpha: default_alpha(),
            timeout_secs: None,
        }
    }
}

impl RougeConfig {
    /// Defaults with the two required paths filled in.
    pub fn new(rouge_path: impl Into<PathBuf>, data_path: impl Into<PathBuf>) -> Self {
        Self {
            rouge_path: rouge_path.into(),
            data_path: data_path.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from a YAML file. Omitted fields take their
    /// defaults, same as [`RougeConfig::default`].
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            RougeError::io(format!("failed to read config {}", path.display()), e)
        })?;
        serde_yaml::from_str(&text)
            .map_err(|e| RougeError::Config(format!("{}: {e}", path.display())))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.rouge_path.as_os_str().is_empty() {
            return Err(RougeError::Config("rouge_path must be specified".into()));
        }
        if self.data_path.as_os_str().is_empty() {
            return Err(RougeError::Config("data_path must be specified".into()));
        }
        if self.n_gram == 0 {
            return Err(RougeError::Config("n-gram order must be positive".into()));
        }
        if self.length_limit && self.length == 0 {
            return Err(RougeError::Config("length limit must be positive".into()));
        }
        Ok(())
    }
}
