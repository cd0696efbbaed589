//! Exams and the take-exam flow.
//!
//! An [`Exam`] is either practical (reveal the answer key, no scoring) or
//! final (ask every question, report earned/total). The question list is
//! shared: cloning an exam aliases its questions, while
//! [`Exam::deep_clone`] copies them.

use std::cell::{Ref, RefCell};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::Question;
use crate::traits::Console;

/// The two exam variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamKind {
    Practical,
    Final,
}

impl ExamKind {
    /// Map the `1`/`2` menu selector onto a kind.
    pub fn from_selector(selector: u32) -> Option<Self> {
        match selector {
            1 => Some(ExamKind::Practical),
            2 => Some(ExamKind::Final),
            _ => None,
        }
    }
}

impl fmt::Display for ExamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamKind::Practical => write!(f, "practical"),
            ExamKind::Final => write!(f, "final"),
        }
    }
}

/// Score for one question of a final exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionScore {
    pub header: String,
    pub earned: u32,
    pub mark: u32,
}

/// Result of a final exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamScore {
    pub questions: Vec<QuestionScore>,
    pub earned: u32,
    pub total: u32,
}

/// One line of a practical exam's answer key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedAnswer {
    pub header: String,
    pub answer: String,
}

/// What taking an exam produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExamOutcome {
    /// Practical exam: the answer key, nothing scored.
    AnswerKey(Vec<RevealedAnswer>),
    /// Final exam: earned and total score.
    Scored(ExamScore),
}

/// A timed, ordered list of questions.
#[derive(Debug, Clone)]
pub struct Exam {
    kind: ExamKind,
    duration_minutes: u32,
    questions: Rc<RefCell<Vec<Question>>>,
}

impl Exam {
    pub fn new(kind: ExamKind, duration_minutes: u32) -> Self {
        Self {
            kind,
            duration_minutes,
            questions: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn practical(duration_minutes: u32) -> Self {
        Self::new(ExamKind::Practical, duration_minutes)
    }

    pub fn final_exam(duration_minutes: u32) -> Self {
        Self::new(ExamKind::Final, duration_minutes)
    }

    pub fn kind(&self) -> ExamKind {
        self.kind
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn set_duration_minutes(&mut self, minutes: u32) {
        self.duration_minutes = minutes;
    }

    /// Append a question. Visible through every shallow clone.
    pub fn add_question(&self, question: impl Into<Question>) {
        self.questions.borrow_mut().push(question.into());
    }

    /// Borrow the questions in order.
    pub fn questions(&self) -> Ref<'_, Vec<Question>> {
        self.questions.borrow()
    }

    pub fn question_count(&self) -> usize {
        self.questions.borrow().len()
    }

    /// Sum of all marks. Fails if the sum does not fit in a `u32`.
    pub fn total_marks(&self) -> Result<u32> {
        self.questions
            .borrow()
            .iter()
            .try_fold(0u32, |total, q| total.checked_add(q.mark()))
            .context("total marks overflow")
    }

    /// Whether `other` shares this exam's question list.
    pub fn shares_questions_with(&self, other: &Exam) -> bool {
        Rc::ptr_eq(&self.questions, &other.questions)
    }

    /// Clone with an independent copy of the question list.
    pub fn deep_clone(&self) -> Self {
        Self {
            kind: self.kind,
            duration_minutes: self.duration_minutes,
            questions: Rc::new(RefCell::new(self.questions.borrow().clone())),
        }
    }

    /// Order two exams by duration.
    pub fn cmp_by_duration(&self, other: &Exam) -> Ordering {
        self.duration_minutes.cmp(&other.duration_minutes)
    }

    /// Run the exam on `console`.
    pub fn take_exam(&self, console: &mut dyn Console) -> Result<ExamOutcome> {
        match self.kind {
            ExamKind::Practical => self.reveal_answers(console).map(ExamOutcome::AnswerKey),
            ExamKind::Final => self.score_answers(console).map(ExamOutcome::Scored),
        }
    }

    fn reveal_answers(&self, console: &mut dyn Console) -> Result<Vec<RevealedAnswer>> {
        console.println("\nPractical Exam Completed! Here are the correct answers:")?;

        let questions = self.questions.borrow();
        let mut key = Vec::with_capacity(questions.len());
        for question in questions.iter() {
            let answer = question.correct_answer()?;
            console.println(&format!("{}: {}", question.header(), answer))?;
            key.push(RevealedAnswer {
                header: question.header().to_string(),
                answer: answer.to_string(),
            });
        }
        Ok(key)
    }

    fn score_answers(&self, console: &mut dyn Console) -> Result<ExamScore> {
        console.println("\nFinal Exam Results:")?;

        let questions = self.questions.borrow();
        let mut scores = Vec::with_capacity(questions.len());
        let mut earned: u32 = 0;
        let mut total: u32 = 0;
        for question in questions.iter() {
            console.println(&format!("{}: {}", question.header(), question.body()))?;
            let score = question.ask(console)?;
            earned = earned.checked_add(score).context("earned score overflow")?;
            total = total
                .checked_add(question.mark())
                .context("total marks overflow")?;
            scores.push(QuestionScore {
                header: question.header().to_string(),
                earned: score,
                mark: question.mark(),
            });
        }

        console.println(&format!("Your Score: {earned}/{total}"))?;
        tracing::info!(earned, total, "final exam scored");

        Ok(ExamScore {
            questions: scores,
            earned,
            total,
        })
    }
}
