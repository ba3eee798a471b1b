use rougeval_core::{Rouge, RougeConfig, SummarySet};

fn main() -> anyhow::Result<()> {
    let rouge_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/opt/ROUGE/ROUGE-1.5.5.pl".to_string());
    let data_path = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "/opt/ROUGE/data".to_string());

    // Two documents, one system summary each, two references for the first.
    let summary = SummarySet::from(vec![
        vec![vec!["The cat sat."]],
        vec![vec!["Dogs bark loudly.", "Cats stay quiet."]],
    ]);
    let reference = SummarySet::from(vec![
        vec![vec!["A cat sat."], vec!["The cat sat down."]],
        vec![vec!["Dogs bark loudly."]],
    ]);

    let rouge = Rouge::new(RougeConfig::new(rouge_path, data_path))?;
    let scores = rouge.evaluate(&summary, &reference, None)?;
    println!("{}", scores.score_table());

    Ok(())
}
