//! The `mathdrill run` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use mathdrill_checkers::CheckerRegistry;
use mathdrill_core::bank::QuestionBank;
use mathdrill_core::catalog::QuizCatalog;
use mathdrill_core::ledger::ProgressLedger;
use mathdrill_core::model::{Answer, Question};
use mathdrill_core::session::{run_session, SessionOutcome};
use mathdrill_core::traits::SessionIo;

/// Terminal-backed session I/O.
struct ConsoleIo;

impl SessionIo for ConsoleIo {
    fn prompt_answer(
        &mut self,
        index: usize,
        total: usize,
        question: &Question,
    ) -> io::Result<String> {
        println!("\nQuestion {index}/{total}: {}", question.text);
        print!("Your answer: ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line)
    }

    fn on_verdict(&mut self, correct: bool, expected: &Answer) {
        if correct {
            println!("Correct!");
        } else {
            println!("Wrong. The correct answer was: {expected}");
        }
    }

    fn on_complete(&mut self, outcome: &SessionOutcome) {
        println!("\nFinal score: {}/{}", outcome.score, outcome.total);
    }
}

pub fn execute(
    quiz: Option<String>,
    questions: usize,
    bank_path: PathBuf,
    checkers_dir: PathBuf,
    results_path: PathBuf,
) -> Result<()> {
    anyhow::ensure!(questions >= 1, "--questions must be at least 1");

    let bank = QuestionBank::load(&bank_path);
    let registry = CheckerRegistry::load(&checkers_dir)?;
    let catalog = QuizCatalog::new(bank, registry.instantiate_all());

    let available = catalog.list_quizzes();
    let Some(quiz) = quiz else {
        if available.is_empty() {
            anyhow::bail!(
                "no quizzes available; check {} or run `mathdrill init`",
                bank_path.display()
            );
        }
        eprintln!("Available quizzes:");
        for name in &available {
            eprintln!("  {name}");
        }
        anyhow::bail!("pass --quiz <name> to start a session");
    };

    let (checker, selected) = catalog.select_quiz(&quiz, questions)?;

    println!(
        "Starting quiz: {quiz} ({} questions, {} checker)",
        selected.len(),
        checker.name()
    );
    let outcome = run_session(checker, &selected, &mut ConsoleIo);

    let ledger = ProgressLedger::new(results_path);
    match ledger.append(&quiz, outcome.score, outcome.total) {
        Ok(()) => println!("Results saved to {}", ledger.path().display()),
        Err(e) => eprintln!("Warning: could not save results: {e:#}"),
    }

    Ok(())
}
