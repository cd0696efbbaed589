pub mod create;
pub mod init;
pub mod take;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use examforge_core::config::ExamforgeConfig;
use examforge_core::exam::ExamOutcome;
use examforge_core::report::ScoreReport;
use examforge_core::subject::Subject;

/// Write the score report for a final exam.
///
/// An explicit `--output` path wins over the configured `output_dir`. Nothing
/// is written for a practical exam, a declined exam, or when neither is set.
pub fn write_score_report(
    subject: &Subject,
    outcome: Option<&ExamOutcome>,
    output: Option<PathBuf>,
    config: &ExamforgeConfig,
) -> Result<()> {
    let Some(ExamOutcome::Scored(score)) = outcome else {
        return Ok(());
    };

    let report = ScoreReport::new(subject, score);
    let path = match (output, &config.output_dir) {
        (Some(path), _) => path,
        (None, Some(dir)) => report.path_in(dir),
        (None, None) => return Ok(()),
    };

    report.save_json(&path)?;
    eprintln!(
        "Score report written to {} ({:.0}%)",
        path.display(),
        report.ratio() * 100.0
    );
    Ok(())
}
