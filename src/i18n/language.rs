// SPDX-License-Identifier: MPL-2.0
//! Supported display languages.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A supported display language.
///
/// The set is closed: any value of this type is a language every catalog
/// must provide, so an unsupported language cannot reach the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    /// English, the baseline language.
    #[default]
    English,
    /// Hindi.
    Hindi,
    /// Kannada.
    Kannada,
}

impl Language {
    /// All supported languages, baseline first.
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Kannada];

    /// Short code used in storage and catalog file names.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Kannada => "kn",
        }
    }

    /// Parses a stored or user-supplied code. Codes are matched exactly.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// The language's name written in that language, for pickers.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Kannada => "ಕನ್ನಡ",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}
