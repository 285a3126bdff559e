use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::alphabet::{Alphabet, AlphabetError};

static GLOBAL_CONFIG: Lazy<Mutex<Option<Config>>> = Lazy::new(|| Mutex::new(None));

/// Configuring the idte library.
#[derive(Clone)]
pub struct Config {
    pub(crate) alphabet: Alphabet,
}

impl Config {
    /// Creates a new configuration with default settings.
    /// - `alphabet` defaults to [`Alphabet::standard`], the ordering used by
    ///   the original Identitie implementation. Callers embedding identifiers
    ///   in URLs may prefer [`Alphabet::url_safe`].
    pub fn new() -> Self {
        Config {
            alphabet: Alphabet::standard().clone(),
        }
    }

    /// Sets the alphabet used by codecs built from this configuration.
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Sets the alphabet from a string of 64 distinct printable ASCII
    /// symbols.
    pub fn alphabet_str(mut self, symbols: &str) -> Result<Self, AlphabetError> {
        self.alphabet = Alphabet::new(symbols)?;
        Ok(self)
    }

    /// Sets the global configuration. This should be called before the
    /// `Field` type methods are called; when unset, `Field` uses the
    /// defaults.
    pub fn set_global(config: Config) {
        let mut global_config = GLOBAL_CONFIG.lock().unwrap();
        *global_config = Some(config);
    }

    /// Accesses the global configuration, if set.
    pub fn global() -> Option<Config> {
        GLOBAL_CONFIG.lock().unwrap().clone()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
