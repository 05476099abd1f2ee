//! Named extension bundles and the registry that loads them.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// An optional bundle of auxiliary behavior, loaded by name.
///
/// `install` runs at most once per registry, the first time the extension
/// is loaded.
pub trait Extension: Send + Sync + 'static {
    /// The name the extension is registered and loaded under.
    fn name(&self) -> &'static str;

    /// Performs the extension's one-time setup.
    fn install(&self);
}

/// Errors returned by [`ExtensionRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtensionError {
    /// No extension with this name has been registered.
    #[error("unknown extension: {0}")]
    Unknown(String),
}

/// What a call to [`ExtensionRegistry::load`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadOutcome {
    /// The extension was installed by this call.
    Loaded,
    /// The extension had been installed before; nothing ran.
    AlreadyLoaded,
}

#[derive(Default)]
struct Registry {
    available: BTreeMap<&'static str, Arc<dyn Extension>>,
    loaded: BTreeSet<&'static str>,
}

/// Extensions known to one program, and which of them are loaded.
///
/// The registry is a plain value: create one where it is needed and share
/// it by reference. Loading holds the registry lock while `install` runs,
/// so concurrent loads of the same name install it exactly once.
///
/// # Examples
///
/// ```rust
/// use monadkit::extension::{Extension, ExtensionRegistry, LoadOutcome};
///
/// struct Pretty;
///
/// impl Extension for Pretty {
///     fn name(&self) -> &'static str {
///         "pretty"
///     }
///
///     fn install(&self) {}
/// }
///
/// let registry = ExtensionRegistry::new();
/// registry.register(Pretty);
/// assert_eq!(registry.load("pretty"), Ok(LoadOutcome::Loaded));
/// assert_eq!(registry.load("pretty"), Ok(LoadOutcome::AlreadyLoaded));
/// assert!(registry.load("json").is_err());
/// ```
#[derive(Default)]
pub struct ExtensionRegistry {
    inner: Mutex<Registry>,
}

impl ExtensionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `extension` available for loading.
    ///
    /// Returns `false` without replacing anything when an extension with the
    /// same name is already registered.
    pub fn register<X: Extension>(&self, extension: X) -> bool {
        let name = extension.name();
        let mut inner = self.inner.lock();
        if inner.available.contains_key(name) {
            tracing::debug!(extension = name, "extension already registered");
            return false;
        }
        inner.available.insert(name, Arc::new(extension));
        true
    }

    /// Installs the extension registered under `name`, once.
    ///
    /// # Errors
    ///
    /// Returns [`ExtensionError::Unknown`] when nothing is registered under
    /// `name`.
    pub fn load(&self, name: &str) -> Result<LoadOutcome, ExtensionError> {
        let mut inner = self.inner.lock();
        let Some((&key, extension)) = inner.available.get_key_value(name) else {
            return Err(ExtensionError::Unknown(name.to_string()));
        };
        if inner.loaded.contains(key) {
            return Ok(LoadOutcome::AlreadyLoaded);
        }
        let extension = Arc::clone(extension);
        extension.install();
        inner.loaded.insert(key);
        tracing::debug!(extension = key, "extension loaded");
        Ok(LoadOutcome::Loaded)
    }

    /// Returns `true` once `name` has been loaded.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.inner.lock().loaded.contains(name)
    }

    /// Names of the loaded extensions, sorted.
    pub fn loaded(&self) -> Vec<&'static str> {
        self.inner.lock().loaded.iter().copied().collect()
    }

    /// Names of the registered extensions, sorted.
    pub fn registered(&self) -> Vec<&'static str> {
        self.inner.lock().available.keys().copied().collect()
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        formatter
            .debug_struct("ExtensionRegistry")
            .field("registered", &inner.available.keys().collect::<Vec<_>>())
            .field("loaded", &inner.loaded)
            .finish()
    }
}
