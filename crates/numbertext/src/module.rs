//! The rule module seam.

use crate::types::{LanguageTag, WideText};

/// A loaded, language-bound rule set that spells out numbers.
///
/// The rule grammar and its interpreter live outside this crate; implementors
/// receive the raw module text once and are never mutated afterwards. Only
/// the number buffer handed to [`RuleModule::run`] changes.
///
/// # Example
///
/// ```
/// use numbertext::{LanguageTag, RuleModule, WideText};
///
/// /// Replaces the number with the first line of the module.
/// struct FirstLine(String);
///
/// impl RuleModule for FirstLine {
///     fn compile(source: WideText, _language: &LanguageTag) -> Self {
///         let text = source.to_string();
///         FirstLine(text.lines().next().unwrap_or_default().to_string())
///     }
///
///     fn run(&self, number: &mut WideText) {
///         number.set(&self.0);
///     }
/// }
///
/// let module = FirstLine::compile(WideText::from("many\n"), &LanguageTag::new("xx"));
/// let mut number = WideText::from("7");
/// module.run(&mut number);
/// assert_eq!(number, "many");
/// ```
pub trait RuleModule {
    /// Build a module from its source text and the tag it is registered under.
    fn compile(source: WideText, language: &LanguageTag) -> Self
    where
        Self: Sized;

    /// Rewrite `number` in place into its spelled-out form.
    fn run(&self, number: &mut WideText);
}
