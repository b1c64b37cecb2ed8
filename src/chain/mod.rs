//! Ordered fallback over interchangeable data sources.
//!
//! A [`FallbackChain`] holds a prioritized list of [`Source`]s for one logical resource and
//! tries them in order until one returns a successful result that [`HasData`]. The static
//! fallback at the end of a chain is a plain value handed to
//! [`FallbackChain::resolve_or_else`], not a source, so it can never fail.

use std::future::Future;
use std::pin::Pin;

use crate::core::MdError;
use crate::core::log::fallback_warn;

/// Boxed future returned by [`Source::fetch`].
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, MdError>> + Send + 'a>>;

/// One provider of a resource.
///
/// Implementors are usually thin structs borrowing the [`MdClient`](crate::MdClient) plus
/// whatever request parameters they need.
pub trait Source<T>: Send + Sync {
    /// Short name used in diagnostics (e.g., `"backend"`, `"yahoo"`).
    fn name(&self) -> &str;

    /// Attempt the fetch exactly once.
    fn fetch(&self) -> SourceFuture<'_, T>;
}

/// Whether a successful result is usable, or should be treated like a failure and passed over.
pub trait HasData {
    fn has_data(&self) -> bool;
}

impl<T> HasData for Vec<T> {
    fn has_data(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: HasData> HasData for Option<T> {
    fn has_data(&self) -> bool {
        self.as_ref().is_some_and(HasData::has_data)
    }
}

/// A prioritized list of sources for one resource.
pub struct FallbackChain<'a, T> {
    resource: &'static str,
    sources: Vec<Box<dyn Source<T> + 'a>>,
}

impl<'a, T> FallbackChain<'a, T>
where
    T: HasData + Send,
{
    /// Creates an empty chain; `resource` names it in diagnostics.
    pub fn new(resource: &'static str) -> Self {
        Self {
            resource,
            sources: Vec::new(),
        }
    }

    /// Appends a source with lower priority than every source already added.
    #[must_use]
    pub fn source(mut self, source: impl Source<T> + 'a) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Appends a source only when `source` is `Some`.
    #[must_use]
    pub fn source_if(self, source: Option<impl Source<T> + 'a>) -> Self {
        match source {
            Some(s) => self.source(s),
            None => self,
        }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Names of the sources in the order they will be tried.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Tries every source in order and returns the first successful result with data.
    ///
    /// # Errors
    ///
    /// Returns the last source's error (or an `MdError::Data` describing an empty result)
    /// when no source produced usable data.
    pub async fn resolve(&self) -> Result<T, MdError> {
        let mut last_err = None;

        for source in &self.sources {
            match source.fetch().await {
                Ok(v) if v.has_data() => return Ok(v),
                Ok(_) => {
                    fallback_warn!(
                        "{}: source '{}' returned no data, trying next source",
                        self.resource,
                        source.name()
                    );
                    last_err = Some(MdError::Data(format!(
                        "{}: source '{}' returned no data",
                        self.resource,
                        source.name()
                    )));
                }
                Err(e) => {
                    fallback_warn!(
                        "{}: source '{}' failed ({}), trying next source",
                        self.resource,
                        source.name(),
                        e
                    );
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| {
            MdError::Data(format!("{}: no sources configured", self.resource))
        }))
    }

    /// Like [`resolve`](Self::resolve), but substitutes `fallback()` when every source fails.
    pub async fn resolve_or_else(&self, fallback: impl FnOnce() -> T) -> T {
        match self.resolve().await {
            Ok(v) => v,
            Err(e) => {
                fallback_warn!(
                    "{}: all sources exhausted ({}), using static fallback",
                    self.resource,
                    e
                );
                fallback()
            }
        }
    }
}
