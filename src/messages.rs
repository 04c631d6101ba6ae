//! Message keys for localized display text
//!
//! The core never hard-codes user-facing strings. Validation results and
//! achievement definitions carry a [`MessageKey`] — a dotted lookup key plus
//! named parameters — and the front end resolves it through whatever
//! [`MessageProvider`] matches its locale.

use serde::Serialize;

/// A dotted translation key with optional named parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageKey {
    key: String,
    params: Vec<(&'static str, String)>,
}

impl MessageKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            params: Vec::new(),
        }
    }

    /// Attach a named parameter, e.g. the required letter of the grid
    #[must_use]
    pub fn with_param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }
}

/// Resolves message keys to localized display strings
pub trait MessageProvider {
    fn resolve(&self, message: &MessageKey) -> String;
}

/// Fallback provider that echoes the key and parameters
///
/// Useful in tests and as a last resort when no translation payload loaded.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyEchoProvider;

impl MessageProvider for KeyEchoProvider {
    fn resolve(&self, message: &MessageKey) -> String {
        if message.params().is_empty() {
            return message.key().to_string();
        }
        let params: Vec<String> = message
            .params()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        format!("{}({})", message.key(), params.join(", "))
    }
}
