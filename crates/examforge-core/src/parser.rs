//! TOML exam file parser.
//!
//! Loads subjects and their exams from TOML files and directories, validates
//! them, and writes them back out.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::InputLimits;
use crate::exam::{Exam, ExamKind};
use crate::model::{Answer, McqQuestion, Question, TrueFalseQuestion};
use crate::subject::Subject;

/// Intermediate TOML structure for exam files.
#[derive(Debug, Serialize, Deserialize)]
struct TomlExamFile {
    subject: TomlSubject,
    exam: TomlExam,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlSubject {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlExam {
    kind: ExamKind,
    duration_minutes: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TomlQuestion {
    TrueFalse {
        header: String,
        #[serde(default)]
        body: String,
        mark: u32,
        correct: bool,
    },
    Mcq {
        header: String,
        #[serde(default)]
        body: String,
        mark: u32,
        choices: Vec<String>,
        /// 1-based.
        correct_choice: usize,
    },
}

/// Parse a single TOML exam file.
pub fn parse_exam_file(path: &Path, limits: &InputLimits) -> Result<Subject> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read exam file: {}", path.display()))?;

    parse_exam_str(&content, path, limits)
}

/// Parse a TOML string into a `Subject` (useful for testing).
pub fn parse_exam_str(content: &str, source_path: &Path, limits: &InputLimits) -> Result<Subject> {
    let parsed: TomlExamFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    build_subject(parsed, limits)
        .with_context(|| format!("invalid exam file: {}", source_path.display()))
}

fn build_subject(parsed: TomlExamFile, limits: &InputLimits) -> Result<Subject> {
    let kind = parsed.exam.kind;
    let duration = parsed.exam.duration_minutes;
    anyhow::ensure!(
        (1..=limits.max_duration_minutes).contains(&duration),
        "duration_minutes must be between 1 and {}, got {duration}",
        limits.max_duration_minutes
    );

    let count = parsed.questions.len();
    anyhow::ensure!(count > 0, "exam has no questions");
    anyhow::ensure!(
        count <= usize::try_from(limits.max_questions)?,
        "exam has {count} questions, the limit is {}",
        limits.max_questions
    );

    let exam = Exam::new(kind, duration);
    for (index, question) in parsed.questions.into_iter().enumerate() {
        let number = index + 1;
        let question = build_question(question, kind, limits)
            .with_context(|| format!("question {number}"))?;
        exam.add_question(question);
    }
    exam.total_marks()?;

    let subject = match parsed.subject.id {
        Some(id) => Subject::with_id(id, parsed.subject.name, exam),
        None => Subject::new(parsed.subject.name, exam),
    };
    Ok(subject)
}

fn build_question(question: TomlQuestion, kind: ExamKind, limits: &InputLimits) -> Result<Question> {
    match question {
        TomlQuestion::TrueFalse {
            header,
            body,
            mark,
            correct,
        } => {
            anyhow::ensure!(
                kind == ExamKind::Final,
                "true/false questions are only allowed in final exams"
            );
            check_mark(mark, limits)?;
            Ok(TrueFalseQuestion::new(header, body, mark, correct).into())
        }
        TomlQuestion::Mcq {
            header,
            body,
            mark,
            choices,
            correct_choice,
        } => {
            check_mark(mark, limits)?;
            let mut mcq = McqQuestion::new(header, body, mark);
            let mut answers = Vec::with_capacity(choices.len());
            for (id, text) in (1..).zip(choices) {
                answers.push(Answer::new(id, text));
            }
            mcq.set_choices(answers)?;
            anyhow::ensure!(
                correct_choice >= 1,
                "correct_choice is 1-based, got {correct_choice}"
            );
            mcq.set_correct_answer(correct_choice - 1)?;
            Ok(mcq.into())
        }
    }
}

fn check_mark(mark: u32, limits: &InputLimits) -> Result<()> {
    anyhow::ensure!(
        (1..=limits.max_mark).contains(&mark),
        "mark must be between 1 and {}, got {mark}",
        limits.max_mark
    );
    Ok(())
}

/// An exam file that could not be loaded.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

/// Recursively load all `.toml` exam files from a directory.
///
/// Files that fail to parse are returned alongside the loaded subjects.
pub fn load_exam_directory(
    dir: &Path,
    limits: &InputLimits,
) -> Result<(Vec<Subject>, Vec<SkippedFile>)> {
    let mut subjects = Vec::new();
    let mut skipped = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            let (nested, nested_skipped) = load_exam_directory(&path, limits)?;
            subjects.extend(nested);
            skipped.extend(nested_skipped);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_exam_file(&path, limits) {
                Ok(subject) => subjects.push(subject),
                Err(error) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), error);
                    skipped.push(SkippedFile { path, error });
                }
            }
        }
    }

    Ok((subjects, skipped))
}

fn toml_question(q: &Question) -> Result<TomlQuestion> {
    let question = match q {
        Question::TrueFalse(tf) => TomlQuestion::TrueFalse {
            header: q.header().to_string(),
            body: q.body().to_string(),
            mark: q.mark(),
            correct: tf.correct_answer(),
        },
        Question::Mcq(mcq) => {
            let index = mcq
                .correct_index()
                .with_context(|| format!("question {:?} has no correct answer", q.header()))?;
            TomlQuestion::Mcq {
                header: q.header().to_string(),
                body: q.body().to_string(),
                mark: q.mark(),
                choices: mcq.choices().iter().map(|a| a.text().to_string()).collect(),
                correct_choice: index + 1,
            }
        }
    };
    Ok(question)
}

/// Render a subject and its exam as an exam file.
pub fn to_toml_string(subject: &Subject) -> Result<String> {
    let exam = subject.exam();
    let questions = exam
        .questions()
        .iter()
        .map(toml_question)
        .collect::<Result<Vec<_>>>()?;

    let file = TomlExamFile {
        subject: TomlSubject {
            name: subject.name().to_string(),
            id: Some(subject.id()),
        },
        exam: TomlExam {
            kind: exam.kind(),
            duration_minutes: exam.duration_minutes(),
        },
        questions,
    };
    toml::to_string_pretty(&file).context("failed to serialize exam")
}

/// Write a subject to an exam file, creating parent directories.
pub fn save_exam_file(path: &Path, subject: &Subject) -> Result<()> {
    let content = to_toml_string(subject)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write exam file: {}", path.display()))?;
    tracing::info!("saved exam to {}", path.display());
    Ok(())
}

/// A warning from exam validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Header of the question concerned, if any.
    pub question: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a subject for suspicious but legal content.
pub fn validate_subject(subject: &Subject) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if subject.name().trim().is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "subject name is empty".into(),
        });
    }

    let questions = subject.exam().questions();

    // Duplicate headers
    let mut seen_headers = HashSet::new();
    for q in questions.iter() {
        if !seen_headers.insert(q.header()) {
            warnings.push(ValidationWarning {
                question: Some(q.header().to_string()),
                message: format!("duplicate question header: {}", q.header()),
            });
        }
    }

    // Empty bodies
    for q in questions.iter() {
        if q.body().trim().is_empty() {
            warnings.push(ValidationWarning {
                question: Some(q.header().to_string()),
                message: "question body is empty".into(),
            });
        }
    }

    // Indistinguishable choices
    for q in questions.iter() {
        if let Question::Mcq(mcq) = q {
            let mut seen = HashSet::new();
            if mcq.choices().iter().any(|a| !seen.insert(a.text().trim())) {
                warnings.push(ValidationWarning {
                    question: Some(q.header().to_string()),
                    message: "question has duplicate choices".into(),
                });
            }
        }
    }

    warnings
}
