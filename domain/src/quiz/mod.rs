//! Quiz aggregate and result reporting.
//!
//! - [`entities::Quiz`] — intro text, ordered questions and running score
//! - [`report::QuizReport`] — outcome of one pass through a quiz

pub mod entities;
pub mod report;
