//! The `examforge validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};

use examforge_core::config::load_config_from;
use examforge_core::exam::Exam;
use examforge_core::parser;
use examforge_core::subject::Subject;

pub fn execute(exam_path: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let (mut subjects, skipped) = if exam_path.is_dir() {
        parser::load_exam_directory(&exam_path, &config.limits)?
    } else {
        (
            vec![parser::parse_exam_file(&exam_path, &config.limits)?],
            Vec::new(),
        )
    };
    subjects.sort_by(|a, b| Exam::cmp_by_duration(a.exam(), b.exam()));
    tracing::debug!("loaded {} exam(s) from {}", subjects.len(), exam_path.display());

    let mut total_warnings = 0;

    for subject in &subjects {
        let exam = subject.exam();
        println!(
            "Exam: {} ({} exam, {} minutes, {} questions, {} marks)",
            subject.name(),
            exam.kind(),
            exam.duration_minutes(),
            exam.question_count(),
            exam.total_marks()?
        );
        println!("{}", question_table(subject));

        let warnings = parser::validate_subject(subject);
        for w in &warnings {
            let prefix = w
                .question
                .as_ref()
                .map(|header| format!("  [{header}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    for file in &skipped {
        println!("ERROR: {}: {:#}", file.path.display(), file.error);
    }

    if !skipped.is_empty() {
        anyhow::bail!("{} exam file(s) failed to load", skipped.len());
    }

    if total_warnings == 0 {
        println!("All exam files valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

fn question_table(subject: &Subject) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Header", "Type", "Mark", "Answer"]);

    for (i, q) in subject.exam().questions().iter().enumerate() {
        let answer = q
            .correct_answer()
            .map(str::to_string)
            .unwrap_or_else(|e| format!("<{e}>"));
        table.add_row(vec![
            (i + 1).to_string(),
            q.header().to_string(),
            q.kind().to_string(),
            q.mark().to_string(),
            answer,
        ]);
    }

    table
}
