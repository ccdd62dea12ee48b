//! Spell out numbers in natural language.
//!
//! Language-specific rule modules are loaded from files named after the
//! language tag (`hu.sor`, `nb_NO.sor`, ...), cached per instance, and applied
//! to numeric text. The rule interpreter itself is supplied by the caller
//! through the [`RuleModule`] trait.
//!
//! Resolution falls back from the most specific file to the least specific:
//! `nb-NO` probes `nb_NO.sor`, then `nb.sor`, then `no.sor`.

pub mod codec;
pub mod config;
pub mod error;
pub mod module;
pub mod numbertext;
pub mod registry;
pub mod resolver;
pub mod shared;
pub mod types;

pub use config::Config;
pub use error::{ConfigError, EncodingError, LoadError, ReadError};
pub use module::RuleModule;
pub use numbertext::Numbertext;
pub use registry::ModuleRegistry;
pub use resolver::{FallbackTier, FsReader, ModuleReader, Resolver};
pub use shared::SharedNumbertext;
pub use types::{LanguageTag, WideText};
