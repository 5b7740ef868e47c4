#![forbid(unsafe_code)]

//! Reset keys and the manual reset handle.
//!
//! # Design
//!
//! Reset keys are compared by shallow identity, element-wise, against the
//! snapshot taken on the previous pass: primitives by value (floats by bit
//! pattern, so `NaN == NaN` and `+0.0 != -0.0`), opaque handles by `Rc`
//! pointer identity. A length change always counts as a change. Comparison
//! is never deep: two distinct handles to structurally equal values are
//! different keys.
//!
//! [`ResetHandle`] is the manual reset affordance handed to fallback
//! strategies. All handles for one boundary share the same backing cell, so
//! identity is stable across re-renders and observable via
//! [`ResetHandle::ptr_eq`].

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::boundary::BoundaryCell;

/// A single reset key with identity comparison semantics.
#[derive(Clone)]
pub enum ResetKey {
    /// Integer key, compared by value.
    Int(i64),
    /// Float key, compared by bit pattern.
    Float(f64),
    /// Boolean key, compared by value.
    Bool(bool),
    /// String key, compared by value.
    Str(String),
    /// Opaque handle, compared by pointer identity.
    Handle(Rc<dyn Any>),
}

impl ResetKey {
    /// Key identified by the given shared handle. Two keys are equal only
    /// when they hold the same allocation.
    #[must_use]
    pub fn handle<T: 'static>(value: Rc<T>) -> Self {
        Self::Handle(value)
    }
}

impl PartialEq for ResetKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Handle(a), Self::Handle(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for ResetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Self::Handle(v) => write!(f, "Handle({:p})", Rc::as_ptr(v)),
        }
    }
}

impl From<i64> for ResetKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ResetKey {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ResetKey {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ResetKey {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ResetKey {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ResetKey {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Whether the key sequence changed between two passes.
///
/// True on a length mismatch or any element-wise identity mismatch.
#[must_use]
pub fn keys_changed(prev: &[ResetKey], next: &[ResetKey]) -> bool {
    prev.len() != next.len() || prev.iter().zip(next).any(|(a, b)| a != b)
}

/// Manual reset affordance for one boundary.
///
/// Cheap to clone; all clones share the boundary's backing cell. Handed to
/// fallback strategies through their context, never to wrapped children.
#[derive(Clone)]
pub struct ResetHandle {
    cell: Rc<RefCell<BoundaryCell>>,
}

impl ResetHandle {
    pub(crate) fn new(cell: Rc<RefCell<BoundaryCell>>) -> Self {
        Self { cell }
    }

    /// Reset the boundary: fire `on_reset` (if configured), then clear the
    /// stored error so the next pass renders the children again.
    ///
    /// Calling reset from within `on_reset` itself does not re-fire the
    /// callback; the state still clears exactly once.
    pub fn reset(&self) {
        BoundaryCell::reset(&self.cell);
    }

    /// Whether two handles belong to the same boundary.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl fmt::Debug for ResetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResetHandle({:p})", Rc::as_ptr(&self.cell))
    }
}
