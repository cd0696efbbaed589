//! The `examforge create` command.

use std::path::PathBuf;

use anyhow::Result;

use examforge_core::config::load_config_from;
use examforge_core::driver::{offer_exam, ExamBuilder};
use examforge_core::parser::save_exam_file;
use examforge_core::traits::IoConsole;

use super::write_score_report;

pub fn execute(
    config_path: Option<PathBuf>,
    save: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let mut console = IoConsole::stdio();

    let subject = ExamBuilder::new(&mut console, config.limits).build_subject()?;

    if let Some(path) = &save {
        save_exam_file(path, &subject)?;
        eprintln!("Exam saved to {}", path.display());
    }

    let outcome = offer_exam(&mut console, &subject)?;
    write_score_report(&subject, outcome.as_ref(), output, &config)
}
