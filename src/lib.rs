//! Vocabulary test sheets from delimited word lists.
//!
//! Pipeline: [`engine::parser`] reads records, [`engine::filter`] narrows them
//! to a number range, [`generator::composer`] draws the questions,
//! [`layout::engine`] paginates them and [`render`] writes the sheet.
//! [`session::Session`] ties the stages together for the binary.

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod layout;
pub mod render;
pub mod session;
pub mod store;

pub use error::{QuizError, Result};
