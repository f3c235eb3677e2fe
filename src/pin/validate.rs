//! Per-keystroke character rules.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Pattern used when no custom criteria is configured.
pub const DEFAULT_CRITERIA: &str = r"^[a-zA-Z0-9]+$";

static DEFAULT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(DEFAULT_CRITERIA).unwrap());

/// Custom validator: receives the raw keystroke and returns the accepted
/// value, or an empty string to reject it.
pub type Validator = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Which built-in rule applies when no custom validator is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// ASCII digits only.
    Numeric,
    /// Anything matching the regex criteria, uppercased.
    #[default]
    Free,
}

/// The validation rule shared by every cell of one widget.
#[derive(Clone)]
pub struct CharRule {
    mode: InputMode,
    criteria: Regex,
    validator: Option<Validator>,
}

impl fmt::Debug for CharRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharRule")
            .field("mode", &self.mode)
            .field("criteria", &self.criteria.as_str())
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

impl Default for CharRule {
    fn default() -> Self {
        Self::new(InputMode::Free, default_criteria())
    }
}

impl CharRule {
    pub fn new(mode: InputMode, criteria: Regex) -> Self {
        Self {
            mode,
            criteria,
            validator: None,
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Returns the accepted form of `raw`, or an empty string if rejected.
    pub fn apply(&self, raw: &str) -> String {
        if let Some(validator) = &self.validator {
            return validator(raw);
        }

        match self.mode {
            InputMode::Numeric => {
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ('\u{30}'..='\u{39}').contains(&ch) => raw.to_string(),
                    _ => String::new(),
                }
            }
            InputMode::Free => {
                if !self.criteria.is_match(raw) {
                    return String::new();
                }
                // Some characters uppercase to several (`ß` to `SS`), which
                // would not fit one slot.
                let upper = raw.to_uppercase();
                if upper.chars().count() == 1 {
                    upper
                } else {
                    String::new()
                }
            }
        }
    }
}

pub fn default_criteria() -> Regex {
    DEFAULT_REGEX.clone()
}
