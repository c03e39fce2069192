//! The `mathdrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Starter question bank
    std::fs::create_dir_all("quizzes")?;
    let bank_path = std::path::Path::new("quizzes/quiz_data.json");
    if bank_path.exists() {
        println!("quizzes/quiz_data.json already exists, skipping.");
    } else {
        std::fs::write(bank_path, STARTER_BANK)?;
        println!("Created quizzes/quiz_data.json");
    }

    // Checker descriptors for the stock quizzes
    std::fs::create_dir_all("checkers")?;
    let descriptor_path = std::path::Path::new("checkers/stock.toml");
    if descriptor_path.exists() {
        println!("checkers/stock.toml already exists, skipping.");
    } else {
        std::fs::write(descriptor_path, STOCK_DESCRIPTOR)?;
        println!("Created checkers/stock.toml");
    }

    // The results store is created on first append.
    std::fs::create_dir_all("data")?;

    println!("\nNext steps:");
    println!("  1. Run: mathdrill list");
    println!("  2. Run: mathdrill run --quiz \"Basic Arithmetic\"");
    println!("  3. Run: mathdrill stats");

    Ok(())
}

const STARTER_BANK: &str = r#"{
    "Basic Arithmetic": [
        { "question": "12 + 7 = ?", "answer": 19 },
        { "question": "9 * 6 = ?", "answer": 54 },
        { "question": "100 - 42 = ?", "answer": 58 },
        { "question": "1.5 + 2.25 = ?", "answer": 3.75 }
    ],
    "Fractions": [
        { "question": "1/2 + 1/4 = ?", "answer": "3/4" },
        { "question": "2/3 of 1/2 = ?", "answer": "1/3" },
        { "question": "Simplify 6/8", "answer": "3/4" }
    ],
    "Powers": [
        { "question": "2^3 = ?", "answer": 8 },
        { "question": "5^2 = ?", "answer": 25 },
        { "question": "3^4 = ?", "answer": 81 }
    ]
}
"#;

const STOCK_DESCRIPTOR: &str = r#"# Checker bindings for the stock quizzes.
#
# Each entry binds a quiz name from the question bank to one of the
# compiled-in checker families: "arithmetic", "fraction", or "power".
# These bindings mirror the defaults; edit or add entries to bind your
# own quizzes.

[[checkers]]
quiz = "Basic Arithmetic"
kind = "arithmetic"

[[checkers]]
quiz = "Fractions"
kind = "fraction"

[[checkers]]
quiz = "Powers"
kind = "power"
"#;
