//! Interactive exam authoring.
//!
//! Walks the operator through exam type, duration, question count, subject
//! name and every question, then offers to run the exam. Practical exams
//! never show the question-type menu: every question they hold is an MCQ.

use anyhow::{Context, Result};

use crate::config::InputLimits;
use crate::exam::{Exam, ExamKind, ExamOutcome};
use crate::input::{prompt_int, prompt_line, read_confirmation};
use crate::model::{Answer, McqQuestion, Question, TrueFalseQuestion, MCQ_CHOICE_COUNT};
use crate::subject::Subject;
use crate::traits::Console;

/// Drives the authoring prompts against a console.
pub struct ExamBuilder<'a> {
    console: &'a mut dyn Console,
    limits: InputLimits,
}

impl<'a> ExamBuilder<'a> {
    pub fn new(console: &'a mut dyn Console, limits: InputLimits) -> Self {
        Self { console, limits }
    }

    /// Prompt for everything and return the finished subject.
    pub fn build_subject(&mut self) -> Result<Subject> {
        self.console
            .println("Choose the type of exam:\n1. Practical Exam\n2. Final Exam")?;
        let selector = prompt_int(self.console, "Enter your choice (1 or 2): ", 1..=2)?;
        let kind = ExamKind::from_selector(selector)
            .with_context(|| format!("no exam kind for selector {selector}"))?;

        let duration = prompt_int(
            self.console,
            "Enter the duration of the exam in minutes: ",
            1..=self.limits.max_duration_minutes,
        )?;
        let total_questions = prompt_int(
            self.console,
            "Enter the total number of questions: ",
            1..=self.limits.max_questions,
        )?;

        let name = prompt_line(self.console, "Enter Subject Name: ")?;
        let subject = Subject::new(name, Exam::new(kind, duration));

        for number in 1..=total_questions {
            let question = self.build_question(kind, number)?;
            subject.exam().add_question(question);
        }

        tracing::info!(
            subject = %subject.name(),
            kind = %kind,
            questions = total_questions,
            "exam built"
        );
        Ok(subject)
    }

    fn build_question(&mut self, kind: ExamKind, number: u32) -> Result<Question> {
        self.console
            .println(&format!("\nCreating Question {number}:"))?;
        let header = prompt_line(self.console, "Enter question header: ")?;

        let question = match kind {
            ExamKind::Final => {
                let question_type = prompt_int(
                    self.console,
                    "Choose question type:\n1. True or False\n2. MCQ\nEnter choice: ",
                    1..=2,
                )?;
                if question_type == 1 {
                    self.build_true_false(header)?.into()
                } else {
                    self.build_mcq(header)?.into()
                }
            }
            ExamKind::Practical => self.build_mcq(header)?.into(),
        };
        Ok(question)
    }

    fn build_true_false(&mut self, header: String) -> Result<TrueFalseQuestion> {
        let body = prompt_line(self.console, "Enter the True or False question: ")?;
        let mark = self.prompt_mark()?;
        let correct = prompt_int(
            self.console,
            "Enter the correct answer (1 for True, 2 for False): ",
            1..=2,
        )?;
        Ok(TrueFalseQuestion::new(header, body, mark, correct == 1))
    }

    fn build_mcq(&mut self, header: String) -> Result<McqQuestion> {
        let body = prompt_line(self.console, "Enter the MCQ question body: ")?;
        let mark = self.prompt_mark()?;
        let mut question = McqQuestion::new(header, body, mark);

        let mut choices = Vec::with_capacity(MCQ_CHOICE_COUNT);
        for id in 1..=MCQ_CHOICE_COUNT {
            let text = prompt_line(self.console, &format!("Enter choice {id}: "))?;
            choices.push(Answer::new(u32::try_from(id)?, text));
        }
        question.set_choices(choices)?;

        let correct = prompt_int(
            self.console,
            "Enter the number of the correct choice (1, 2, or 3): ",
            1..=u32::try_from(MCQ_CHOICE_COUNT)?,
        )?;
        question.set_correct_answer(usize::try_from(correct - 1)?)?;
        Ok(question)
    }

    fn prompt_mark(&mut self) -> Result<u32> {
        prompt_int(
            self.console,
            "Enter the mark for this question: ",
            1..=self.limits.max_mark,
        )
    }
}

/// Ask whether to take the exam now, and take it if the answer is `y`.
///
/// Returns `None` when the operator declines.
pub fn offer_exam(console: &mut dyn Console, subject: &Subject) -> Result<Option<ExamOutcome>> {
    console.println("Would you like to take the exam? (y/n)")?;
    if read_confirmation(console)? {
        subject.take_exam(console).map(Some)
    } else {
        console.println("No Exam")?;
        Ok(None)
    }
}
