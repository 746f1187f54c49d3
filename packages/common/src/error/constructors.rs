//! Error constructors and accessors

use super::types::{Error, ErrorInner, ErrorKind};
use std::sync::Arc;

impl Error {
    /// Wrap a component error under the given kind
    #[must_use]
    pub fn with_source<E>(kind: ErrorKind, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(ErrorInner {
                kind,
                source: Box::new(source),
                #[cfg(feature = "full-backtrace")]
                backtrace: backtrace::Backtrace::new(),
            }),
        }
    }

    /// Get the error kind
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.inner.kind
    }

    /// Get the backtrace
    #[cfg(feature = "full-backtrace")]
    #[must_use]
    pub fn backtrace(&self) -> &backtrace::Backtrace {
        &self.inner.backtrace
    }

    /// True when this error was caused by bad certificate text
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        self.inner.kind == ErrorKind::InvalidInput
    }

    /// True when this error was caused by bad distinguished name text
    #[must_use]
    pub fn is_malformed_dn(&self) -> bool {
        self.inner.kind == ErrorKind::MalformedDn
    }

    /// Downcast the wrapped component error
    #[must_use]
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.inner.source.downcast_ref::<E>()
    }
}
