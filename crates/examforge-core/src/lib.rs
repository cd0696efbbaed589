//! examforge-core — exam model, prompting, and scoring.
//!
//! This crate defines the question and exam types, the console seam every
//! prompt goes through, the interactive authoring driver, and exam-file and
//! score-report persistence.

pub mod config;
pub mod driver;
pub mod error;
pub mod exam;
pub mod input;
pub mod mock;
pub mod model;
pub mod parser;
pub mod report;
pub mod subject;
pub mod traits;
