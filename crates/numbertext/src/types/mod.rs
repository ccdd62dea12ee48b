mod language_tag;
mod wide_text;

pub use language_tag::LanguageTag;
pub use wide_text::WideText;
