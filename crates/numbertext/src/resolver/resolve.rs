//! The fallback chain from a language tag to rule module text.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf, is_separator};

use bon::Builder;
use tracing::debug;

use crate::error::LoadError;
use crate::resolver::pattern::{alias_stem, is_norwegian_variant, strip_country};
use crate::resolver::reader::ModuleReader;
use crate::types::{LanguageTag, WideText};

/// File suffix of rule modules.
pub const DEFAULT_EXTENSION: &str = ".sor";

/// One ordered attempt in the resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackTier {
    /// A path supplied by the caller. Terminal: no other tier follows it.
    Explicit,
    /// The tag itself, with `-` normalized to `_`.
    Exact,
    /// The tag with its two-character country code removed.
    CountryStripped,
    /// A legacy alias (`nb`/`nn` to `no`).
    Alias,
}

impl Display for FallbackTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            FallbackTier::Explicit => "explicit",
            FallbackTier::Exact => "exact",
            FallbackTier::CountryStripped => "country-stripped",
            FallbackTier::Alias => "alias",
        };
        f.write_str(name)
    }
}

/// A file the resolver will try, and the tier it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub tier: FallbackTier,
}

/// The outcome of a successful resolution.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// The caller's tag, whichever tier produced the file.
    pub language: LanguageTag,
    /// Raw, uninterpreted rule module text.
    pub source: WideText,
    /// The file that was read.
    pub path: PathBuf,
    pub tier: FallbackTier,
}

/// Maps language tags to rule module files.
///
/// Module files are named `<module_dir>/<stem><extension>`, where the stem is
/// the tag with `-` replaced by `_`.
///
/// # Example
///
/// ```
/// use numbertext::resolver::{FallbackTier, Resolver};
/// use numbertext::LanguageTag;
///
/// let resolver = Resolver::builder().module_dir("rules").build();
/// let plan = resolver.candidates(&LanguageTag::new("nb-NO"), None);
///
/// let tiers: Vec<_> = plan.iter().map(|c| c.tier).collect();
/// assert_eq!(
///     tiers,
///     [FallbackTier::Exact, FallbackTier::CountryStripped, FallbackTier::Alias]
/// );
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into), on(PathBuf, into))]
pub struct Resolver {
    /// Directory prepended to every derived file name. Empty means the
    /// working directory.
    #[builder(default)]
    module_dir: PathBuf,

    /// Suffix appended to every derived file name.
    #[builder(default = DEFAULT_EXTENSION.to_string())]
    extension: String,
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::builder().build()
    }
}

impl Resolver {
    pub fn module_dir(&self) -> &Path {
        &self.module_dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Path of the module file with the given stem.
    ///
    /// The stem is appended to the module directory as text, so a stem that
    /// looks like an absolute path still lands under the directory.
    pub fn module_path(&self, stem: &str) -> PathBuf {
        let mut path = self.module_dir.clone().into_os_string();
        let dir = self.module_dir.to_string_lossy();
        if !dir.is_empty() && !dir.ends_with(is_separator) {
            path.push(MAIN_SEPARATOR_STR);
        }
        path.push(stem);
        path.push(&self.extension);
        PathBuf::from(path)
    }

    /// The ordered probe plan for `language`.
    ///
    /// An explicit path yields a single candidate. Otherwise the plan is the
    /// exact stem, then the stem without its country code (only when it has
    /// one), then the `no` alias (only for Norwegian variants). A tier whose
    /// path would repeat an earlier one is left out.
    pub fn candidates(&self, language: &LanguageTag, explicit: Option<&Path>) -> Vec<Candidate> {
        if let Some(path) = explicit {
            return vec![Candidate {
                path: path.to_path_buf(),
                tier: FallbackTier::Explicit,
            }];
        }

        let exact = language.file_stem();
        let mut plan = vec![Candidate {
            path: self.module_path(&exact),
            tier: FallbackTier::Exact,
        }];

        let base = match strip_country(&exact) {
            Some(stripped) => {
                plan.push(Candidate {
                    path: self.module_path(stripped),
                    tier: FallbackTier::CountryStripped,
                });
                stripped
            }
            None => exact.as_str(),
        };

        if is_norwegian_variant(language) {
            if let Some(alias) = alias_stem(base) {
                plan.push(Candidate {
                    path: self.module_path(&alias),
                    tier: FallbackTier::Alias,
                });
            }
        }

        plan
    }

    /// Read the first candidate that exists.
    ///
    /// Candidates are probed one at a time in plan order. Failed probes are
    /// not remembered; a later call probes the same files again.
    pub fn resolve(
        &self,
        language: &LanguageTag,
        explicit: Option<&Path>,
        reader: &dyn ModuleReader,
    ) -> Result<Resolved, LoadError> {
        let mut tried = Vec::new();

        for Candidate { path, tier } in self.candidates(language, explicit) {
            match reader.read(&path) {
                Ok(source) => {
                    debug!(%language, path = %path.display(), %tier, "rule module found");
                    return Ok(Resolved {
                        language: language.clone(),
                        source,
                        path,
                        tier,
                    });
                }
                Err(error) => {
                    debug!(%language, %tier, %error, "rule module probe failed");
                    tried.push(path);
                }
            }
        }

        Err(LoadError::NotFound {
            language: language.clone(),
            tried,
        })
    }
}
