//! ui::output
//!
//! Output formatting and diagnostics.
//!
//! # Design
//!
//! Everything the user reads on stdout is built here as plain strings, so
//! the session only decides *when* to print. Debug diagnostics go to stderr
//! and never mix with the questionnaire.

use std::fmt::Display;

use super::prompts::Menu;
use crate::core::license::LicenseResult;

/// Width of the `=` rules around the license banner.
const BANNER_RULE_WIDTH: usize = 30;

/// Width of the `-` rule closing the attribution block.
const ATTRIBUTION_RULE_WIDTH: usize = 57;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Normal mode - questionnaire only
    Normal,
    /// Debug mode - diagnostics on stderr as well
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Format a menu: blank line, question, then one `  [k] description` line per option.
pub fn format_menu(menu: &Menu) -> String {
    let mut out = format!("\n{}\n", menu.question);
    for (key, description) in &menu.options {
        out.push_str(&format!("  [{}] {}\n", key, description));
    }
    out
}

/// Format the re-prompt message listing the valid keys.
pub fn format_invalid_choice(valid: &[char]) -> String {
    let keys = valid
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Hatalı seçim. Lütfen şu seçeneklerden birini girin: {}",
        keys
    )
}

/// Format the recommended-license banner.
pub fn format_banner(license: &LicenseResult) -> String {
    let rule = "=".repeat(BANNER_RULE_WIDTH);
    format!(
        "\n{rule}\n\
         --- ÖNERİLEN LİSANS ---\n\
         Seçimlerinize göre önerilen lisans: {}\n\
         Lisans hakkında detaylı bilgi: {}\n\
         {rule}\n",
        license.display_name, license.url
    )
}

/// Frame an attribution line with its header and closing rule.
pub fn format_attribution(text: &str) -> String {
    format!(
        "\n--- ÖNERİLEN ATIF METNİ (Kopyalayıp kullanabilirsiniz) ---\n{}\n{}",
        text,
        "-".repeat(ATTRIBUTION_RULE_WIDTH)
    )
}
