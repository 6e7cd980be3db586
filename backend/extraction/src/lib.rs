//! Affix-based answer extraction.
//!
//! A blank-type question is the text of a signboard with one span replaced by
//! a placeholder marker. Splitting the question around the marker yields a
//! prefix/suffix pair; the answer is whatever stands between those affixes in
//! the recognized full string. This module owns that contract: question
//! classification, candidate matching, and infix recovery.

pub mod matcher;
pub mod question;

pub use matcher::{extract_answer, strip_affixes};
pub use question::{classify, DegenerateQuestion, Question, PLACEHOLDER_MARKERS};
