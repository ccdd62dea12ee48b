use std::convert::Infallible;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;
use std::str::FromStr;

/// A wide-character text buffer: one Unicode scalar value per element.
///
/// This is the representation rule modules read and rewrite. Every `char` is
/// a valid scalar value, so converting back to UTF-8 never fails.
///
/// # Example
///
/// ```
/// use numbertext::WideText;
///
/// let mut text = WideText::from("42");
/// assert_eq!(text.len(), 2);
///
/// text.set("forty-two");
/// assert_eq!(text.to_string(), "forty-two");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WideText(Vec<char>);

impl WideText {
    /// Returns an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The characters of this buffer.
    pub fn as_chars(&self) -> &[char] {
        &self.0
    }

    /// Replaces the whole content with `text`.
    pub fn set(&mut self, text: &str) {
        self.0.clear();
        self.0.extend(text.chars());
    }
}

impl Deref for WideText {
    type Target = [char];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for WideText {
    fn from(s: &str) -> Self {
        Self(s.chars().collect())
    }
}

impl From<String> for WideText {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl FromStr for WideText {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl PartialEq<&str> for WideText {
    fn eq(&self, other: &&str) -> bool {
        self.0.iter().copied().eq(other.chars())
    }
}

impl Display for WideText {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
