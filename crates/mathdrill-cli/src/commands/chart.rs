//! The `mathdrill chart` command.

use std::path::PathBuf;

use anyhow::Result;

use mathdrill_core::ledger::ProgressLedger;
use mathdrill_report::write_progress_chart;

pub fn execute(quiz: Option<String>, output: PathBuf, results_path: PathBuf) -> Result<()> {
    let ledger = ProgressLedger::new(results_path);
    let records = ledger.load_all();

    let selected: Vec<_> = match &quiz {
        Some(name) => records.into_iter().filter(|r| &r.quiz == name).collect(),
        None => records,
    };

    write_progress_chart(&selected, quiz.as_deref(), &output)?;
    println!("Chart written to {}", output.display());
    Ok(())
}
