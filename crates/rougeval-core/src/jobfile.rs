//! Job-descriptor builder: renders the `config.xml` document that tells ROUGE
//! which staged files to score against which.

use std::fs;
use std::path::PathBuf;

use crate::error::{Result, RougeError};
use crate::staging::StagedCorpus;

/// Letter identifiers ROUGE accepts for model summaries within one EVAL
/// block, assigned to reference variants by position.
pub const MODEL_IDS: [char; 7] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];

/// Filename of the job descriptor inside the staging root.
pub const JOB_FILE: &str = "config.xml";

/// Render the descriptor: one `<EVAL>` block per document with 1-based IDs,
/// peer references with 1-based numeric IDs, model references with letter IDs.
/// Staged filenames are control-free ASCII, so nothing needs escaping.
pub fn render(corpus: &StagedCorpus) -> Result<String> {
    let mut doc = String::from("<ROUGE-EVAL version=\"1.0\">\n");

    for (i, (peers, models)) in corpus.peer_files.iter().zip(&corpus.model_files).enumerate() {
        if models.len() > MODEL_IDS.len() {
            return Err(RougeError::ModelIdsExhausted {
                document: i,
                variants: models.len(),
                capacity: MODEL_IDS.len(),
            });
        }

        doc.push_str(&format!("<EVAL ID=\"{}\">\n", i + 1));
        doc.push_str(&format!("<PEER-ROOT>{}</PEER-ROOT>\n", corpus.system_dir.display()));
        doc.push_str(&format!("<MODEL-ROOT>{}</MODEL-ROOT>\n", corpus.model_dir.display()));
        // The bare quote line is how this descriptor has always been written;
        // ROUGE-1.5.5 accepts it and downstream diffs depend on the exact bytes.
        doc.push_str("<INPUT-FORMAT TYPE=\"SPL\">\n\"</INPUT-FORMAT>\n");

        doc.push_str("<PEERS>\n");
        for (j, name) in peers.iter().enumerate() {
            doc.push_str(&format!("<P ID=\"{}\">{}</P>\n", j + 1, name));
        }
        doc.push_str("</PEERS>\n");

        doc.push_str("<MODELS>\n");
        for (j, name) in models.iter().enumerate() {
            doc.push_str(&format!("<M ID=\"{}\">{}</M>\n", MODEL_IDS[j], name));
        }
        doc.push_str("</MODELS>\n");
        doc.push_str("</EVAL>\n");
    }

    doc.push_str("</ROUGE-EVAL>\n");
    Ok(doc)
}

/// Render and write the descriptor to `config.xml` in the staging root,
/// returning its path.
pub fn write(corpus: &StagedCorpus) -> Result<PathBuf> {
    let text = render(corpus)?;
    let path = corpus.root().join(JOB_FILE);
    fs::write(&path, text).map_err(|e| {
        RougeError::io(format!("failed to write job descriptor {}", path.display()), e)
    })?;
    Ok(path)
}
