//! The `mathdrill list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use mathdrill_checkers::CheckerRegistry;
use mathdrill_core::bank::QuestionBank;

pub fn execute(bank_path: PathBuf, checkers_dir: PathBuf) -> Result<()> {
    let bank = QuestionBank::load(&bank_path);
    let registry = CheckerRegistry::load(&checkers_dir)?;

    if bank.is_empty() {
        println!("No quizzes in the bank. Run `mathdrill init` or `mathdrill add` to create one.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Quiz", "Questions", "Checker"]);
    for (name, questions) in bank.iter() {
        let checker = registry
            .kind_of(name)
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "none".to_string());
        table.add_row(vec![name.clone(), questions.len().to_string(), checker]);
    }

    println!("{table}");
    Ok(())
}
