//! Per-language cache of loaded rule modules.

use std::collections::BTreeMap;
use std::collections::btree_map::{Entry, VacantEntry};
use std::path::Path;

use tracing::{debug, info};

use crate::error::LoadError;
use crate::module::RuleModule;
use crate::resolver::{FallbackTier, ModuleReader, Resolved, Resolver};
use crate::types::{LanguageTag, WideText};

/// A registry mapping language tags to loaded rule modules.
///
/// Keys are the exact tags callers used; no normalization happens here. Each
/// tag holds at most one module for the lifetime of the registry, entries are
/// never evicted, and failed lookups leave no entry behind.
#[derive(Debug)]
pub struct ModuleRegistry<M> {
    modules: BTreeMap<LanguageTag, M>,
}

impl<M> Default for ModuleRegistry<M> {
    fn default() -> Self {
        Self {
            modules: BTreeMap::new(),
        }
    }
}

impl<M: RuleModule> ModuleRegistry<M> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the module registered under exactly `language`.
    pub fn get(&self, language: &str) -> Option<&M> {
        self.modules.get(language)
    }

    pub fn contains(&self, language: &str) -> bool {
        self.modules.contains_key(language)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Registered tags, in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &LanguageTag> {
        self.modules.keys()
    }

    /// Register `module` under `language` unless a module is already there.
    ///
    /// Returns the module now registered for the tag, which is the existing
    /// one if there was one.
    pub fn insert(&mut self, language: LanguageTag, module: M) -> &M {
        self.modules.entry(language).or_insert(module)
    }

    /// Compile and register a resolved module unless its tag is already
    /// registered.
    pub fn insert_resolved(&mut self, resolved: Resolved) -> &M {
        let Resolved {
            language,
            source,
            path,
            tier,
        } = resolved;
        match self.modules.entry(language) {
            Entry::Occupied(entry) => {
                debug!(language = %entry.key(), "rule module already loaded, keeping it");
                let module: &M = entry.into_mut();
                module
            }
            Entry::Vacant(entry) => compile_into(entry, source, &path, tier),
        }
    }

    /// Get the module for `language`, resolving and compiling it on first use.
    ///
    /// A cached module is returned without touching the reader. On a miss the
    /// resolver runs with the caller's tag; if it fails, nothing is stored and
    /// the next call probes the filesystem again.
    pub fn get_or_load(
        &mut self,
        language: &str,
        explicit: Option<&Path>,
        resolver: &Resolver,
        reader: &dyn ModuleReader,
    ) -> Result<&M, LoadError> {
        if !self.modules.contains_key(language) {
            let resolved = resolver.resolve(&LanguageTag::from(language), explicit, reader)?;
            return Ok(self.insert_resolved(resolved));
        }
        Ok(&self.modules[language])
    }
}

fn compile_into<'a, M: RuleModule>(
    entry: VacantEntry<'a, LanguageTag, M>,
    source: WideText,
    path: &Path,
    tier: FallbackTier,
) -> &'a M {
    info!(language = %entry.key(), path = %path.display(), %tier, "loaded rule module");
    let module = M::compile(source, entry.key());
    entry.insert(module)
}
