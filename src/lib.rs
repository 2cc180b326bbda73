//! Survey internationalization.
//!
//! Converts surveys between the legacy single-language shape and the
//! multi-language shape, validates configured language sets, and migrates
//! stored surveys in bulk.

pub mod config;
pub mod error;
pub mod i18n;
pub mod migration;
mod raw;
pub mod reverse;
pub mod survey;
pub mod translate;

pub use error::{Error, Result};
pub use reverse::reverse_translate_survey;
pub use translate::translate_survey;
