//! Thread-safe access to a single module cache.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::LoadError;
use crate::module::RuleModule;
use crate::numbertext::Numbertext;
use crate::types::{LanguageTag, WideText};

/// A [`Numbertext`] behind a mutex.
///
/// Every call holds the lock across cache lookup, resolution, insertion and
/// the module run, so threads racing on an unloaded language still produce a
/// single module for it.
pub struct SharedNumbertext<M: RuleModule> {
    inner: Mutex<Numbertext<M>>,
}

impl<M: RuleModule> SharedNumbertext<M> {
    pub fn new(numbertext: Numbertext<M>) -> Self {
        Self {
            inner: Mutex::new(numbertext),
        }
    }

    /// Locks the cache. A poisoned lock is recovered: the registry is only
    /// ever modified by a single insert, so it cannot be left half-updated.
    fn lock(&self) -> MutexGuard<'_, Numbertext<M>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Numbertext::load`].
    pub fn load(&self, language: &str, path: Option<&Path>) -> bool {
        self.lock().load(language, path)
    }

    /// See [`Numbertext::numbertext`].
    pub fn numbertext(&self, number: &mut WideText, language: &str) -> bool {
        self.lock().numbertext(number, language)
    }

    /// See [`Numbertext::numbertext_str`].
    pub fn numbertext_str(&self, number: &mut String, language: &str) -> bool {
        self.lock().numbertext_str(number, language)
    }

    /// See [`Numbertext::numbertext_bytes`].
    pub fn numbertext_bytes(&self, number: &mut Vec<u8>, language: &str) -> bool {
        self.lock().numbertext_bytes(number, language)
    }

    /// See [`Numbertext::numbertext_int`].
    pub fn numbertext_int(&self, number: i64, language: &str) -> String {
        self.lock().numbertext_int(number, language)
    }

    /// See [`Numbertext::convert`].
    pub fn convert(&self, number: &str, language: &str) -> Result<String, LoadError> {
        self.lock().convert(number, language)
    }

    pub fn is_loaded(&self, language: &str) -> bool {
        self.lock().is_loaded(language)
    }

    /// Snapshot of the tags with a cached module.
    pub fn loaded_languages(&self) -> Vec<LanguageTag> {
        self.lock().loaded_languages().cloned().collect()
    }

    pub fn into_inner(self) -> Numbertext<M> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<M: RuleModule> From<Numbertext<M>> for SharedNumbertext<M> {
    fn from(numbertext: Numbertext<M>) -> Self {
        Self::new(numbertext)
    }
}
