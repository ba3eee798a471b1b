//! Corpus materializer: writes the peer and model summary sets to the on-disk
//! layout ROUGE reads, one `{doc}_{variant}.txt` file per summary, one
//! sentence per line.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;

use rougeval_types::SummarySet;

use crate::error::{Result, RougeError};

/// Subdirectory holding peer (system) summaries.
pub const SYSTEM_DIR: &str = "system";
/// Subdirectory holding model (reference) summaries.
pub const MODEL_DIR: &str = "reference";

/// Root of one evaluation's staging tree. A generated root rides on
/// [`TempDir`]; a caller-supplied root is removed explicitly. Either way the
/// tree is gone once the value drops.
#[derive(Debug)]
enum StagingRoot {
    Generated(TempDir),
    Supplied(PathBuf),
}

impl StagingRoot {
    fn path(&self) -> &Path {
        match self {
            StagingRoot::Generated(dir) => dir.path(),
            StagingRoot::Supplied(path) => path,
        }
    }
}

impl Drop for StagingRoot {
    fn drop(&mut self) {
        if let StagingRoot::Supplied(path) = self {
            let _ = fs::remove_dir_all(&path);
        }
    }
}

/// A materialized corpus: the staging root plus the per-document filename
/// lists the job descriptor references. Dropping it deletes the whole tree,
/// no matter how far the evaluation got.
#[derive(Debug)]
pub struct StagedCorpus {
    root: StagingRoot,
    /// Absolute path of the peer-summary directory.
    pub system_dir: PathBuf,
    /// Absolute path of the model-summary directory.
    pub model_dir: PathBuf,
    /// `peer_files[i]` lists the staged filenames of document `i`'s peer
    /// variants, in variant order.
    pub peer_files: Vec<Vec<String>>,
    pub model_files: Vec<Vec<String>>,
}

impl StagedCorpus {
    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

/// Stage both summary sets under `output_dir`, or under a fresh temporary
/// directory when none is given. Fails before touching the filesystem when
/// the document counts differ; fails if the root already holds a staged
/// corpus, since staged filenames must never be reused within a root.
pub fn stage(
    summary: &SummarySet,
    reference: &SummarySet,
    output_dir: Option<&Path>,
) -> Result<StagedCorpus> {
    if summary.len() != reference.len() {
        return Err(RougeError::SizeMismatch {
            summary: summary.len(),
            reference: reference.len(),
        });
    }

    let root = match output_dir {
        None => StagingRoot::Generated(
            TempDir::new()
                .map_err(|e| RougeError::io("failed to create staging directory", e))?,
        ),
        Some(path) => {
            fs::create_dir_all(path).map_err(|e| {
                RougeError::io(
                    format!("failed to create staging directory {}", path.display()),
                    e,
                )
            })?;
            StagingRoot::Supplied(absolute(path)?)
        }
    };

    let system_dir = root.path().join(SYSTEM_DIR);
    let model_dir = root.path().join(MODEL_DIR);
    for dir in [&system_dir, &model_dir] {
        // Non-recursive create: a leftover tree from a previous run is an error.
        fs::create_dir(dir).map_err(|e| {
            RougeError::io(format!("failed to create summary directory {}", dir.display()), e)
        })?;
    }

    let peer_files = write_set(&system_dir, summary)?;
    let model_files = write_set(&model_dir, reference)?;

    debug!(
        root = %root.path().display(),
        peers = summary.variant_count(),
        models = reference.variant_count(),
        "staged corpus"
    );

    Ok(StagedCorpus { root, system_dir, model_dir, peer_files, model_files })
}

fn write_set(dir: &Path, set: &SummarySet) -> Result<Vec<Vec<String>>> {
    let mut lists = Vec::with_capacity(set.documents.len());
    for (i, variants) in set.documents.iter().enumerate() {
        let mut files = Vec::with_capacity(variants.len());
        for (j, summary) in variants.iter().enumerate() {
            let name = format!("{i}_{j}.txt");
            let path = dir.join(&name);
            let mut body = summary.sentences.join("\n");
            body.push('\n');
            fs::write(&path, body).map_err(|e| {
                RougeError::io(format!("failed to write staged summary {}", path.display()), e)
            })?;
            files.push(name);
        }
        lists.push(files);
    }
    Ok(lists)
}

/// Resolve a path against the working directory without touching symlinks.
pub(crate) fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|e| RougeError::io("failed to resolve working directory", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn two_document_sets() -> (SummarySet, SummarySet) {
        let summary = SummarySet::from(vec![
            vec![vec!["The cat sat."]],
            vec![vec!["Dogs bark.", "Cats do not."]],
        ]);
        let reference = SummarySet::from(vec![
            vec![vec!["A cat sat."], vec!["The cat sat down."]],
            vec![vec!["Dogs bark loudly."]],
        ]);
        (summary, reference)
    }

    #[test]
    fn stages_one_file_per_variant() {
        let (summary, reference) = two_document_sets();
        let corpus = stage(&summary, &reference, None).unwrap();

        let count = |dir: &Path| fs::read_dir(dir).unwrap().count();
        assert_eq!(count(&corpus.system_dir), summary.variant_count());
        assert_eq!(count(&corpus.model_dir), reference.variant_count());
        assert_eq!(corpus.peer_files, vec![vec!["0_0.txt"], vec!["1_0.txt"]]);
        assert_eq!(
            corpus.model_files,
            vec![vec!["0_0.txt".to_string(), "0_1.txt".to_string()], vec!["1_0.txt".to_string()]]
        );
    }

    #[test]
    fn size_mismatch_is_rejected_before_any_write() {
        let (summary, _) = two_document_sets();
        let reference = SummarySet::from(vec![vec![vec!["Only one document."]]]);
        let err = stage(&summary, &reference, None).unwrap_err();
        assert!(matches!(err, RougeError::SizeMismatch { summary: 2, reference: 1 }));
    }

    #[test]
    fn staged_files_round_trip_sentences() {
        let (summary, reference) = two_document_sets();
        let corpus = stage(&summary, &reference, None).unwrap();

        let text = fs::read_to_string(corpus.system_dir.join("1_0.txt")).unwrap();
        assert_eq!(text, "Dogs bark.\nCats do not.\n");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, summary.documents[1][0].sentences);
    }

    #[test]
    fn generated_root_is_removed_on_drop() {
        let (summary, reference) = two_document_sets();
        let corpus = stage(&summary, &reference, None).unwrap();
        let root = corpus.root().to_path_buf();
        assert!(root.is_dir());
        drop(corpus);
        assert!(!root.exists());
    }

    #[test]
    fn supplied_root_is_removed_on_drop() {
        let scratch = tempfile::tempdir().unwrap();
        let root = scratch.path().join("staging");
        let (summary, reference) = two_document_sets();
        let corpus = stage(&summary, &reference, Some(&root)).unwrap();
        assert!(root.join(SYSTEM_DIR).is_dir());
        drop(corpus);
        assert!(!root.exists());
    }

    #[test]
    fn reused_root_is_rejected() {
        let scratch = tempfile::tempdir().unwrap();
        let root = scratch.path().join("staging");
        let (summary, reference) = two_document_sets();

        fs::create_dir_all(root.join(SYSTEM_DIR)).unwrap();
        let err = stage(&summary, &reference, Some(&root)).unwrap_err();
        assert!(matches!(err, RougeError::Io { .. }));
    }
}
