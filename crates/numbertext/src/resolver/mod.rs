//! Rule module resolution.
//!
//! Given a language tag, the resolver builds an ordered list of candidate
//! files (exact tag, country code stripped, legacy alias) and reads the first
//! one that exists. Nothing is remembered between calls.

mod pattern;
mod reader;
mod resolve;

pub use pattern::{NORWEGIAN_FALLBACK, alias_stem, is_norwegian_variant, strip_country};
pub use reader::{FsReader, ModuleReader, read_file};
pub use resolve::{Candidate, DEFAULT_EXTENSION, FallbackTier, Resolved, Resolver};
