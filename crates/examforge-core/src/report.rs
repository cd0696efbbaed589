//! Score reports with JSON persistence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::exam::{ExamKind, ExamScore, QuestionScore};
use crate::subject::Subject;

/// A scored final exam, as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the exam was scored.
    pub created_at: DateTime<Utc>,
    pub subject_id: u32,
    pub subject_name: String,
    pub exam_kind: ExamKind,
    pub duration_minutes: u32,
    /// Per-question results, in exam order.
    pub questions: Vec<QuestionScore>,
    pub earned: u32,
    pub total: u32,
}

impl ScoreReport {
    pub fn new(subject: &Subject, score: &ExamScore) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            subject_id: subject.id(),
            subject_name: subject.name().to_string(),
            exam_kind: subject.exam().kind(),
            duration_minutes: subject.exam().duration_minutes(),
            questions: score.questions.clone(),
            earned: score.earned,
            total: score.total,
        }
    }

    /// Earned score as a fraction of the total, `0.0` for an empty exam.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.earned) / f64::from(self.total)
        }
    }

    /// Default file name inside an output directory.
    pub fn file_name(&self) -> String {
        format!(
            "score-{}-{}.json",
            self.created_at.format("%Y%m%dT%H%M%S"),
            self.id.simple()
        )
    }

    /// Default path inside `dir`.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        tracing::info!("score report written to {}", path.display());
        Ok(())
    }
}
