//! Type-aware presence and equality tests for field values.
//!
//! Presence is what decides whether a field-change rule sees a field at all:
//! an empty string, an empty array, or a non-finite number count as "not
//! present", exactly like a missing key. Booleans are always present when
//! set, so `false` is a real, comparable value. Equality is `PartialEq`,
//! which is strict for scalars and structural for arrays and nested objects
//! (reference comparison is meaningless across two independently loaded
//! snapshots).

use crate::models::{GeometryType, PartialRouteLayer};

/// Per-type presence test for a field value.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for bool {
    fn is_present(&self) -> bool {
        true
    }
}

impl Presence for i64 {
    fn is_present(&self) -> bool {
        true
    }
}

impl Presence for f64 {
    fn is_present(&self) -> bool {
        self.is_finite()
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for GeometryType {
    fn is_present(&self) -> bool {
        true
    }
}

/// A nested layer reference is present when it carries at least one present
/// key; in practice that means a usable `id`.
impl Presence for PartialRouteLayer {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

/// Returns `true` if the optional field value is present per its type.
pub fn has<V: Presence>(value: Option<&V>) -> bool {
    value.is_some_and(Presence::is_present)
}

/// Returns `true` if two present values compare equal.
///
/// Strict for scalars, deep/structural for arrays and objects -- both come
/// for free from the derived `PartialEq` on the typed models.
pub fn equal<V: PartialEq + ?Sized>(prev: &V, next: &V) -> bool {
    prev == next
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
