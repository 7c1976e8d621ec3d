//! Model acquisition strategies.

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::{LinearModel, RegressionModel, Result};

/// Supplies a ready-to-use model to the estimator.
pub trait ModelProvider {
    /// The model type produced by this provider.
    type Model: RegressionModel;

    /// Loads (or returns an already loaded) model.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot be loaded.
    fn load(&self) -> Result<Self::Model>;
}

/// Where a linear model's coefficients come from.
///
/// Every call to [`ModelProvider::load`] reads and parses the coefficients
/// again. Wrap in [`CachedProvider`] to load once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModelSource {
    /// The model bundled with the crate.
    #[default]
    Embedded,
    /// A JSON coefficients file on disk.
    File(PathBuf),
}

impl ModelSource {
    /// Creates a source from an optional path, falling back to the embedded model.
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Embedded, Self::File)
    }
}

impl std::fmt::Display for ModelSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl ModelProvider for ModelSource {
    type Model = LinearModel;

    fn load(&self) -> Result<LinearModel> {
        tracing::debug!(source = %self, "loading sleep model");
        match self {
            Self::Embedded => LinearModel::embedded(),
            Self::File(path) => LinearModel::from_path(path),
        }
    }
}

/// Provider wrapper that keeps the first successfully loaded model.
///
/// Failed loads are not remembered, so the next call tries again.
pub struct CachedProvider<P: ModelProvider> {
    inner: P,
    cache: OnceLock<P::Model>,
}

impl<P: ModelProvider> CachedProvider<P> {
    /// Wraps a provider.
    #[must_use]
    pub const fn new(inner: P) -> Self {
        Self {
            inner,
            cache: OnceLock::new(),
        }
    }

    /// Returns the wrapped provider.
    #[must_use]
    pub const fn inner(&self) -> &P {
        &self.inner
    }

    /// Returns true if a model has been loaded and cached.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }
}

impl<P> std::fmt::Debug for CachedProvider<P>
where
    P: ModelProvider + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedProvider")
            .field("inner", &self.inner)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl<P> ModelProvider for CachedProvider<P>
where
    P: ModelProvider,
    P::Model: Clone,
{
    type Model = P::Model;

    fn load(&self) -> Result<P::Model> {
        if let Some(model) = self.cache.get() {
            return Ok(model.clone());
        }
        let model = self.inner.load()?;
        Ok(self.cache.get_or_init(|| model).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelError;
    use std::cell::Cell;

    #[derive(Debug)]
    struct CountingProvider {
        calls: Cell<usize>,
        fail_first: bool,
    }

    impl ModelProvider for CountingProvider {
        type Model = LinearModel;

        fn load(&self) -> Result<LinearModel> {
            let n = self.calls.get() + 1;
            self.calls.set(n);
            if self.fail_first && n == 1 {
                return Err(ModelError::InvalidCoefficients("first load".to_string()));
            }
            LinearModel::embedded()
        }
    }

    #[test]
    fn test_embedded_source_loads() {
        let model = ModelSource::Embedded.load().unwrap();
        assert_eq!(model.name(), "SleepCalculator");
    }

    #[test]
    fn test_missing_file_source_fails() {
        let source = ModelSource::File(PathBuf::from("/nonexistent/betterrest/model.json"));
        let err = source.load().unwrap_err();
        assert!(err.is_load_error());
    }

    #[test]
    fn test_from_path() {
        assert_eq!(ModelSource::from_path(None), ModelSource::Embedded);
        assert_eq!(
            ModelSource::from_path(Some(PathBuf::from("m.json"))),
            ModelSource::File(PathBuf::from("m.json"))
        );
    }

    #[test]
    fn test_cached_provider_loads_once() {
        let cached = CachedProvider::new(CountingProvider {
            calls: Cell::new(0),
            fail_first: false,
        });

        assert!(!cached.is_loaded());
        let a = cached.load().unwrap();
        let b = cached.load().unwrap();

        assert_eq!(a, b);
        assert!(cached.is_loaded());
        assert_eq!(cached.inner().calls.get(), 1);
    }

    #[test]
    fn test_cached_provider_retries_after_failure() {
        let cached = CachedProvider::new(CountingProvider {
            calls: Cell::new(0),
            fail_first: true,
        });

        assert!(cached.load().is_err());
        assert!(!cached.is_loaded());
        assert!(cached.load().is_ok());
        assert!(cached.load().is_ok());
        assert_eq!(cached.inner().calls.get(), 2);
    }
}
