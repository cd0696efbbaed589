//! The subject that owns an exam.

use anyhow::Result;
use rand::Rng;

use crate::exam::{Exam, ExamOutcome};
use crate::traits::Console;

/// Range subject identifiers are drawn from. Identifiers are not unique.
pub const SUBJECT_ID_RANGE: std::ops::Range<u32> = 1..1000;

/// A named subject holding exactly one exam.
#[derive(Debug, Clone)]
pub struct Subject {
    id: u32,
    name: String,
    exam: Exam,
}

impl Subject {
    /// Create a subject with a random identifier.
    pub fn new(name: impl Into<String>, exam: Exam) -> Self {
        let id = rand::thread_rng().gen_range(SUBJECT_ID_RANGE);
        Self::with_id(id, name, exam)
    }

    pub fn with_id(id: u32, name: impl Into<String>, exam: Exam) -> Self {
        Self {
            id,
            name: name.into(),
            exam,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exam(&self) -> &Exam {
        &self.exam
    }

    pub fn exam_mut(&mut self) -> &mut Exam {
        &mut self.exam
    }

    /// Take this subject's exam.
    pub fn take_exam(&self, console: &mut dyn Console) -> Result<ExamOutcome> {
        tracing::info!(subject = %self.name, kind = %self.exam.kind(), "taking exam");
        self.exam.take_exam(console)
    }
}
