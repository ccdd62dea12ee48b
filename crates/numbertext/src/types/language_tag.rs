use std::borrow::Borrow;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// A caller-supplied language identifier such as `"hu"`, `"nb-NO"` or `"en_US"`.
///
/// Tags are opaque: they are not validated, and an arbitrary tag is accepted
/// and simply fails resolution when no rule module file matches it. The tag is
/// also the registry key, so `"en-US"` and `"en_US"` are distinct entries even
/// though they probe the same files.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Create a new language tag from any string-like value.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The file name stem for this tag: every `-` replaced with `_`.
    ///
    /// ```
    /// use numbertext::LanguageTag;
    ///
    /// assert_eq!(LanguageTag::new("nb-NO").file_stem(), "nb_NO");
    /// assert_eq!(LanguageTag::new("sr-Latn-RS").file_stem(), "sr_Latn_RS");
    /// ```
    pub fn file_stem(&self) -> String {
        self.0.replace('-', "_")
    }
}

impl Deref for LanguageTag {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for LanguageTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LanguageTag {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LanguageTag {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for LanguageTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
