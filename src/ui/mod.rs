//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Menu and free-text prompts over a [`prompts::Console`]
//! - [`output`] - Output formatting and debug diagnostics
//!
//! # Design
//!
//! All questionnaire text passes through this module. Formatting functions
//! return strings; only [`prompts::Console`] touches the streams.

pub mod output;
pub mod prompts;
