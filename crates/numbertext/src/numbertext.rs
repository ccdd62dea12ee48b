//! The conversion facade.

use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::{debug, warn};

use crate::codec;
use crate::config::Config;
use crate::error::{ConfigError, LoadError};
use crate::module::RuleModule;
use crate::registry::ModuleRegistry;
use crate::resolver::{FsReader, ModuleReader, Resolver};
use crate::types::{LanguageTag, WideText};

/// Spells out numbers using lazily loaded, per-language rule modules.
///
/// Each instance owns its module cache: a language is resolved the first time
/// it is used and kept for the lifetime of the instance. Languages that fail
/// to resolve are not remembered, so a rule file added later is picked up by
/// the next call.
///
/// All operations run synchronously on the calling thread and take
/// `&mut self`. Use [`SharedNumbertext`](crate::SharedNumbertext) to share
/// one cache between threads.
///
/// # Example
///
/// ```
/// use numbertext::{LanguageTag, Numbertext, Resolver, RuleModule, WideText};
///
/// struct Upper;
///
/// impl RuleModule for Upper {
///     fn compile(_source: WideText, _language: &LanguageTag) -> Self {
///         Upper
///     }
///
///     fn run(&self, number: &mut WideText) {
///         let text = number.to_string().to_uppercase();
///         number.set(&text);
///     }
/// }
///
/// let mut numbertext = Numbertext::<Upper>::builder()
///     .resolver(Resolver::builder().module_dir("no/such/dir").build())
///     .build();
///
/// // No module file exists: the integer form falls back to plain digits.
/// assert_eq!(numbertext.numbertext_int(123, "hu"), "123");
/// assert!(!numbertext.is_loaded("hu"));
/// ```
#[derive(Builder)]
pub struct Numbertext<M: RuleModule> {
    /// Maps language tags to module files.
    #[builder(default)]
    resolver: Resolver,

    /// Where module text is read from.
    #[builder(default = default_reader())]
    reader: Box<dyn ModuleReader>,

    /// Loaded modules, keyed by the tag callers used.
    #[builder(skip)]
    modules: ModuleRegistry<M>,
}

fn default_reader() -> Box<dyn ModuleReader> {
    Box::new(FsReader)
}

impl<M: RuleModule> Default for Numbertext<M> {
    fn default() -> Self {
        Numbertext::builder().build()
    }
}

impl<M: RuleModule> Numbertext<M> {
    /// Create an instance reading `.sor` files from the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an instance reading `.sor` files from `module_dir`.
    pub fn with_module_dir(module_dir: impl Into<PathBuf>) -> Self {
        Numbertext::builder()
            .resolver(Resolver::builder().module_dir(module_dir).build())
            .build()
    }

    /// Create an instance from validated configuration.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Numbertext::builder().resolver(config.resolver()?).build())
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    // =========================================================================
    // Module Loading
    // =========================================================================

    /// Resolve and cache the module for `language`.
    ///
    /// With `path`, exactly that file is read and no derived file names are
    /// tried. Without it, the fallback chain runs from the tag. Resolution
    /// always runs, but a tag that already has a module keeps it: the
    /// returned module is the cached one.
    pub fn try_load(&mut self, language: &str, path: Option<&Path>) -> Result<&M, LoadError> {
        let resolved =
            self.resolver
                .resolve(&LanguageTag::from(language), path, self.reader.as_ref())?;
        Ok(self.modules.insert_resolved(resolved))
    }

    /// Like [`Numbertext::try_load`], reporting only whether it succeeded.
    pub fn load(&mut self, language: &str, path: Option<&Path>) -> bool {
        match self.try_load(language, path) {
            Ok(_) => true,
            Err(error) => {
                debug!(%error, "load failed");
                false
            }
        }
    }

    /// Whether a module is cached under exactly `language`.
    pub fn is_loaded(&self, language: &str) -> bool {
        self.modules.contains(language)
    }

    /// Tags with a cached module, in sorted order.
    pub fn loaded_languages(&self) -> impl Iterator<Item = &LanguageTag> {
        self.modules.languages()
    }

    /// The cached module for `language`, without loading it.
    pub fn module(&self, language: &str) -> Option<&M> {
        self.modules.get(language)
    }

    fn module_for(&mut self, language: &str) -> Result<&M, LoadError> {
        self.modules
            .get_or_load(language, None, &self.resolver, self.reader.as_ref())
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Spell out `number` in place.
    ///
    /// Returns `false` and leaves `number` untouched when no module can be
    /// loaded for `language`.
    pub fn numbertext(&mut self, number: &mut WideText, language: &str) -> bool {
        match self.module_for(language) {
            Ok(module) => {
                module.run(number);
                true
            }
            Err(error) => {
                debug!(%error, "number left unconverted");
                false
            }
        }
    }

    /// Spell out a UTF-8 `number` in place.
    pub fn numbertext_str(&mut self, number: &mut String, language: &str) -> bool {
        let mut wide = WideText::from(number.as_str());
        let converted = self.numbertext(&mut wide, language);
        if converted {
            *number = codec::to_bytes(&wide);
        }
        converted
    }

    /// Spell out a byte-string `number` in place.
    ///
    /// Bytes that are not valid UTF-8 are rejected: the result is `false` and
    /// the buffer is left as it was.
    pub fn numbertext_bytes(&mut self, number: &mut Vec<u8>, language: &str) -> bool {
        let mut wide = match codec::to_wide(number) {
            Ok(wide) => wide,
            Err(error) => {
                warn!(%language, %error, "rejecting number text");
                return false;
            }
        };
        let converted = self.numbertext(&mut wide, language);
        if converted {
            *number = codec::to_bytes(&wide).into_bytes();
        }
        converted
    }

    /// Spell out an integer.
    ///
    /// Unlike the buffer forms this does not report failure: when no module
    /// can be loaded for `language` the plain decimal digits are returned.
    pub fn numbertext_int(&mut self, number: i64, language: &str) -> String {
        let mut wide = WideText::from(number.to_string());
        self.numbertext(&mut wide, language);
        codec::to_bytes(&wide)
    }

    /// Spell out `number`, returning the result as a new string.
    ///
    /// Same lookup as [`Numbertext::numbertext`], but failures carry the
    /// paths that were probed.
    pub fn convert(&mut self, number: &str, language: &str) -> Result<String, LoadError> {
        let module = self.module_for(language)?;
        let mut wide = WideText::from(number);
        module.run(&mut wide);
        Ok(codec::to_bytes(&wide))
    }
}
