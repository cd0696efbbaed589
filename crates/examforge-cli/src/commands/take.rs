//! The `examforge take` command.

use std::path::PathBuf;

use anyhow::Result;

use examforge_core::config::load_config_from;
use examforge_core::driver::offer_exam;
use examforge_core::parser::parse_exam_file;
use examforge_core::traits::{Console, IoConsole};

use super::write_score_report;

pub fn execute(
    exam_file: PathBuf,
    yes: bool,
    config_path: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let subject = parse_exam_file(&exam_file, &config.limits)?;
    let mut console = IoConsole::stdio();

    let exam = subject.exam();
    console.println(&format!(
        "{} ({} exam, {} minutes, {} questions)",
        subject.name(),
        exam.kind(),
        exam.duration_minutes(),
        exam.question_count()
    ))?;

    let outcome = if yes {
        Some(subject.take_exam(&mut console)?)
    } else {
        offer_exam(&mut console, &subject)?
    };
    write_score_report(&subject, outcome.as_ref(), output, &config)
}
