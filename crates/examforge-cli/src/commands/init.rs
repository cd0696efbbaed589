//! The `examforge init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create examforge.toml
    if std::path::Path::new("examforge.toml").exists() {
        println!("examforge.toml already exists, skipping.");
    } else {
        std::fs::write("examforge.toml", SAMPLE_CONFIG)?;
        println!("Created examforge.toml");
    }

    // Create example exam
    std::fs::create_dir_all("exams")?;
    let example_path = std::path::Path::new("exams/example.toml");
    if example_path.exists() {
        println!("exams/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_EXAM)?;
        println!("Created exams/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: examforge validate --exam-file exams/example.toml");
    println!("  2. Run: examforge take --exam-file exams/example.toml");
    println!("  3. Run: examforge create --save exams/my-exam.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# examforge configuration

# Score reports of final exams are written here when --output is not given.
# output_dir = "./examforge-results"

[limits]
max_duration_minutes = 300
max_questions = 50
max_mark = 10
"#;

const EXAMPLE_EXAM: &str = r#"[subject]
name = "Rust Basics"

[exam]
kind = "final"
duration_minutes = 30

[[questions]]
type = "true_false"
header = "Ownership"
body = "A value in Rust can have more than one owner at a time."
mark = 5
correct = false

[[questions]]
type = "mcq"
header = "Borrowing"
body = "Which reference type allows mutation?"
mark = 10
choices = ["&T", "&mut T", "*const T"]
correct_choice = 2
"#;
