#![forbid(unsafe_code)]

//! Error taxonomy for the boundary system.
//!
//! # Design
//!
//! Errors raised during a render pass travel as [`CapturedError`] values: a
//! cheaply cloneable, reference-counted message plus an optional underlying
//! error for downcasting. A boundary that absorbs one keeps a clone in its
//! state and hands clones to its fallback machinery, so "same error" is
//! observable via [`CapturedError::ptr_eq`].
//!
//! [`ConfigurationError`] is raised by a boundary itself when it is failed
//! with no usable fallback strategy. It converts into a `CapturedError` and
//! propagates through the ordinary error channel, so an ancestor boundary
//! captures it exactly like a child component error.

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

struct ErrorInner {
    message: String,
    source: Option<Box<dyn std::error::Error + 'static>>,
}

/// An error captured (or capturable) by an error boundary.
///
/// Clones share the same allocation; identity is observable with
/// [`ptr_eq`](Self::ptr_eq).
#[derive(Clone)]
pub struct CapturedError {
    inner: Rc<ErrorInner>,
}

impl CapturedError {
    /// Create an error from a plain message.
    #[must_use]
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(ErrorInner {
                message: message.into(),
                source: None,
            }),
        }
    }

    /// Wrap an underlying error, keeping it available for downcasting.
    #[must_use]
    pub fn from_error<E>(error: E) -> Self
    where
        E: std::error::Error + 'static,
    {
        Self {
            inner: Rc::new(ErrorInner {
                message: error.to_string(),
                source: Some(Box::new(error)),
            }),
        }
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// Downcast the underlying error, if one was wrapped.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.inner
            .source
            .as_deref()
            .and_then(|source| source.downcast_ref::<E>())
    }

    /// Whether two handles refer to the same captured error.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Display for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.message)
    }
}

impl fmt::Debug for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedError")
            .field("message", &self.inner.message)
            .field("has_source", &self.inner.source.is_some())
            .finish()
    }
}

impl std::error::Error for CapturedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source.as_deref()
    }
}

impl From<&str> for CapturedError {
    fn from(message: &str) -> Self {
        Self::msg(message)
    }
}

impl From<String> for CapturedError {
    fn from(message: String) -> Self {
        Self::msg(message)
    }
}

impl From<ConfigurationError> for CapturedError {
    fn from(error: ConfigurationError) -> Self {
        Self::from_error(error)
    }
}

/// Raised by a failed boundary that has no fallback strategy configured.
///
/// Fatal to the raising boundary: it propagates out through the normal
/// error channel instead of rendering anything, so an ancestor boundary
/// (or the host) decides what happens next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "error boundary entered the failed state with no fallback, fallback_render, \
     or fallback_component configured"
)]
pub struct ConfigurationError;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("disk on fire")]
    struct DiskError;

    #[test]
    fn msg_carries_message() {
        let err = CapturedError::msg("boom");
        assert_eq!(err.message(), "boom");
        assert_eq!(err.to_string(), "boom");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn from_error_keeps_source_for_downcast() {
        let err = CapturedError::from_error(DiskError);
        assert_eq!(err.message(), "disk on fire");
        assert!(err.downcast_ref::<DiskError>().is_some());
        assert!(err.downcast_ref::<std::fmt::Error>().is_none());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn clones_share_identity() {
        let a = CapturedError::msg("boom");
        let b = a.clone();
        let c = CapturedError::msg("boom");
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
    }

    #[test]
    fn from_str_and_string() {
        let a: CapturedError = "boom".into();
        let b: CapturedError = String::from("boom").into();
        assert_eq!(a.message(), b.message());
    }

    #[test]
    fn configuration_error_travels_as_captured() {
        let err: CapturedError = ConfigurationError.into();
        assert!(err.downcast_ref::<ConfigurationError>().is_some());
        assert!(err.message().contains("fallback_component"));
    }

    #[test]
    fn debug_reports_source_presence() {
        let plain = format!("{:?}", CapturedError::msg("x"));
        let wrapped = format!("{:?}", CapturedError::from_error(DiskError));
        assert!(plain.contains("has_source: false"));
        assert!(wrapped.contains("has_source: true"));
    }
}
