//! Question and answer types.
//!
//! A [`Question`] is either a true/false question or a multiple-choice
//! question. Both carry a header, a body and a mark, and both can be asked
//! (collect and score one response) or revealed (render the correct answer).

use std::fmt;

use anyhow::Result;

use crate::error::QuestionError;
use crate::input::prompt_int;
use crate::traits::Console;

/// Number of choices every multiple-choice question carries.
pub const MCQ_CHOICE_COUNT: usize = 3;

/// One option of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    id: u32,
    text: String,
}

impl Answer {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Fields shared by every question type.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Stem {
    header: String,
    body: String,
    mark: u32,
}

impl Stem {
    fn new(header: impl Into<String>, body: impl Into<String>, mark: u32) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
            mark,
        }
    }

    fn score(&self, correct: bool) -> u32 {
        if correct {
            self.mark
        } else {
            0
        }
    }
}

// ---------------------------------------------------------------------------
// True/false
// ---------------------------------------------------------------------------

/// A question answered with True (1) or False (2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrueFalseQuestion {
    stem: Stem,
    correct_answer: bool,
}

impl TrueFalseQuestion {
    pub fn new(
        header: impl Into<String>,
        body: impl Into<String>,
        mark: u32,
        correct_answer: bool,
    ) -> Self {
        Self {
            stem: Stem::new(header, body, mark),
            correct_answer,
        }
    }

    pub fn correct_answer(&self) -> bool {
        self.correct_answer
    }

    /// Read a 1/2 selector and score it.
    pub fn ask(&self, console: &mut dyn Console) -> Result<u32> {
        let selector = prompt_int(console, "Your answer (1 for True, 2 for False): ", 1..=2)?;
        Ok(self.stem.score((selector == 1) == self.correct_answer))
    }

    pub fn correct_answer_text(&self) -> &'static str {
        if self.correct_answer {
            "True"
        } else {
            "False"
        }
    }
}

// ---------------------------------------------------------------------------
// Multiple choice
// ---------------------------------------------------------------------------

/// A multiple-choice question.
///
/// Built in two steps: [`set_choices`](Self::set_choices), then
/// [`set_correct_answer`](Self::set_correct_answer). Asking or revealing
/// before both steps have happened is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McqQuestion {
    stem: Stem,
    choices: Vec<Answer>,
    correct_index: Option<usize>,
}

impl McqQuestion {
    pub fn new(header: impl Into<String>, body: impl Into<String>, mark: u32) -> Self {
        Self {
            stem: Stem::new(header, body, mark),
            choices: Vec::new(),
            correct_index: None,
        }
    }

    /// Set the choices. Exactly [`MCQ_CHOICE_COUNT`] are required.
    pub fn set_choices(&mut self, choices: Vec<Answer>) -> Result<(), QuestionError> {
        if choices.len() != MCQ_CHOICE_COUNT {
            return Err(QuestionError::WrongChoiceCount {
                expected: MCQ_CHOICE_COUNT,
                actual: choices.len(),
            });
        }
        self.choices = choices;
        Ok(())
    }

    /// Set the zero-based index of the correct choice.
    pub fn set_correct_answer(&mut self, index: usize) -> Result<(), QuestionError> {
        if self.choices.is_empty() {
            return Err(QuestionError::ChoicesNotSet);
        }
        if index >= self.choices.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index,
                len: self.choices.len(),
            });
        }
        self.correct_index = Some(index);
        Ok(())
    }

    pub fn choices(&self) -> &[Answer] {
        &self.choices
    }

    /// Zero-based index of the correct choice, once set.
    pub fn correct_index(&self) -> Option<usize> {
        self.correct_index
    }

    fn ready_index(&self) -> Result<usize, QuestionError> {
        if self.choices.is_empty() {
            return Err(QuestionError::ChoicesNotSet);
        }
        self.correct_index.ok_or(QuestionError::CorrectAnswerNotSet)
    }

    /// Read a selector in `1..=choices` and score it.
    pub fn ask(&self, console: &mut dyn Console) -> Result<u32> {
        let correct = self.ready_index()?;
        let upper = u32::try_from(self.choices.len())?;
        let selector = prompt_int(console, "Your answer: ", 1..=upper)?;
        let picked = usize::try_from(selector - 1)?;
        Ok(self.stem.score(picked == correct))
    }

    /// Text of the correct choice.
    pub fn correct_answer_text(&self) -> Result<&str, QuestionError> {
        let index = self.ready_index()?;
        Ok(self.choices[index].text())
    }
}

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// Question type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    TrueFalse,
    Mcq,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::TrueFalse => write!(f, "true/false"),
            QuestionKind::Mcq => write!(f, "mcq"),
        }
    }
}

/// Any question an exam can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    TrueFalse(TrueFalseQuestion),
    Mcq(McqQuestion),
}

impl Question {
    fn stem(&self) -> &Stem {
        match self {
            Question::TrueFalse(q) => &q.stem,
            Question::Mcq(q) => &q.stem,
        }
    }

    pub fn header(&self) -> &str {
        &self.stem().header
    }

    pub fn body(&self) -> &str {
        &self.stem().body
    }

    pub fn mark(&self) -> u32 {
        self.stem().mark
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::TrueFalse(_) => QuestionKind::TrueFalse,
            Question::Mcq(_) => QuestionKind::Mcq,
        }
    }

    /// Collect one response and return the earned score: `mark` or `0`.
    pub fn ask(&self, console: &mut dyn Console) -> Result<u32> {
        match self {
            Question::TrueFalse(q) => q.ask(console),
            Question::Mcq(q) => q.ask(console),
        }
    }

    /// Display string of the correct answer.
    pub fn correct_answer(&self) -> Result<&str, QuestionError> {
        match self {
            Question::TrueFalse(q) => Ok(q.correct_answer_text()),
            Question::Mcq(q) => q.correct_answer_text(),
        }
    }
}

impl From<TrueFalseQuestion> for Question {
    fn from(q: TrueFalseQuestion) -> Self {
        Question::TrueFalse(q)
    }
}

impl From<McqQuestion> for Question {
    fn from(q: McqQuestion) -> Self {
        Question::Mcq(q)
    }
}

#[cfg(test)]
pub(crate) fn abc_question(header: &str, correct_index: usize, mark: u32) -> McqQuestion {
    let mut q = McqQuestion::new(header, "Pick one", mark);
    q.set_choices(vec![
        Answer::new(1, "A"),
        Answer::new(2, "B"),
        Answer::new(3, "C"),
    ])
    .unwrap();
    q.set_correct_answer(correct_index).unwrap();
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ScriptedConsole;

    #[test]
    fn answer_accessors() {
        let a = Answer::new(2, "Paris");
        assert_eq!(a.id(), 2);
        assert_eq!(a.text(), "Paris");
    }

    #[test]
    fn true_false_scores_matching_selector() {
        let q = Question::from(TrueFalseQuestion::new("Q1", "Sky is blue", 5, true));

        let mut console = ScriptedConsole::new(["1"]);
        assert_eq!(q.ask(&mut console).unwrap(), 5);

        let mut console = ScriptedConsole::new(["2"]);
        assert_eq!(q.ask(&mut console).unwrap(), 0);

        assert_eq!(q.correct_answer().unwrap(), "True");
    }

    #[test]
    fn true_false_false_answer() {
        let q = TrueFalseQuestion::new("Q", "Fire is cold", 3, false);
        let mut console = ScriptedConsole::new(["2"]);
        assert_eq!(q.ask(&mut console).unwrap(), 3);
        assert_eq!(q.correct_answer_text(), "False");
    }

    #[test]
    fn true_false_reprompts_until_valid() {
        let q = TrueFalseQuestion::new("Q", "?", 4, true);
        let mut console = ScriptedConsole::new(["3", "yes", "1"]);
        assert_eq!(q.ask(&mut console).unwrap(), 4);
        assert_eq!(console.reads(), 3);
    }

    #[test]
    fn mcq_scores_only_correct_selector() {
        let q = Question::from(abc_question("Q2", 1, 10));

        for (selector, expected) in [("1", 0), ("2", 10), ("3", 0)] {
            let mut console = ScriptedConsole::new([selector]);
            assert_eq!(q.ask(&mut console).unwrap(), expected, "selector {selector}");
        }
        assert_eq!(q.correct_answer().unwrap(), "B");
    }

    #[test]
    fn mcq_bounds_selector_to_choice_count() {
        let q = abc_question("Q", 2, 1);
        let mut console = ScriptedConsole::new(["0", "4", "3"]);
        assert_eq!(q.ask(&mut console).unwrap(), 1);
        assert_eq!(console.output(), "Your answer: ".repeat(3));
    }

    #[test]
    fn mcq_requires_choices_before_index() {
        let mut q = McqQuestion::new("Q", "body", 2);
        assert_eq!(q.set_correct_answer(0), Err(QuestionError::ChoicesNotSet));
        assert_eq!(q.correct_answer_text(), Err(QuestionError::ChoicesNotSet));

        let mut console = ScriptedConsole::new(["1"]);
        let err = q.ask(&mut console).unwrap_err();
        assert_eq!(
            err.downcast_ref::<QuestionError>(),
            Some(&QuestionError::ChoicesNotSet)
        );
        assert_eq!(console.reads(), 0);
    }

    #[test]
    fn mcq_requires_correct_answer() {
        let mut q = McqQuestion::new("Q", "body", 2);
        q.set_choices(vec![
            Answer::new(1, "x"),
            Answer::new(2, "y"),
            Answer::new(3, "z"),
        ])
        .unwrap();
        assert_eq!(
            q.correct_answer_text(),
            Err(QuestionError::CorrectAnswerNotSet)
        );
    }

    #[test]
    fn mcq_rejects_bad_setup() {
        let mut q = McqQuestion::new("Q", "body", 2);
        assert_eq!(
            q.set_choices(vec![Answer::new(1, "only")]),
            Err(QuestionError::WrongChoiceCount {
                expected: 3,
                actual: 1
            })
        );
        q.set_choices(vec![
            Answer::new(1, "x"),
            Answer::new(2, "y"),
            Answer::new(3, "z"),
        ])
        .unwrap();
        assert_eq!(
            q.set_correct_answer(3),
            Err(QuestionError::CorrectIndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(q.correct_index(), None);
    }

    #[test]
    fn question_accessors() {
        let q = Question::from(TrueFalseQuestion::new("Header", "Body", 7, true));
        assert_eq!(q.header(), "Header");
        assert_eq!(q.body(), "Body");
        assert_eq!(q.mark(), 7);
        assert_eq!(q.kind(), QuestionKind::TrueFalse);
        assert_eq!(Question::from(abc_question("m", 0, 1)).kind(), QuestionKind::Mcq);
    }
}
