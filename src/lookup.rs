// Lookup helpers - fixed-triple name lookup + first-match slot finder

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// NAME TRIPLE
// ============================================================================

/// A first/middle/last name triple
///
/// Built fresh on every lookup; has no identity beyond its values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTriple {
    pub first: String,
    pub middle: String,
    pub last: String,
}

impl NameTriple {
    pub fn new(
        first: impl Into<String>,
        middle: impl Into<String>,
        last: impl Into<String>,
    ) -> Self {
        NameTriple {
            first: first.into(),
            middle: middle.into(),
            last: last.into(),
        }
    }

    /// Split into (first, middle, last) for positional destructuring
    pub fn into_parts(self) -> (String, String, String) {
        (self.first, self.middle, self.last)
    }
}

impl fmt::Display for NameTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first, self.middle, self.last)
    }
}

/// Look up the name triple for an id
///
/// Illustrative form: the id is accepted but every lookup resolves to the
/// same fixed triple. No side effects, no error conditions.
pub fn lookup_name(_id: u32) -> NameTriple {
    NameTriple::new("John", "Quincy", "Adams")
}

// ============================================================================
// SLOT FINDER
// ============================================================================

/// No element in the scanned sequence matched the target
///
/// Fatal to the caller; never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotNotFound {
    /// Rendered form of the target that was searched for
    pub target: String,
}

impl fmt::Display for SlotNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no slot matching {} was found", self.target)
    }
}

impl std::error::Error for SlotNotFound {}

/// Find the first element equal to `target` and return a mutable borrow of
/// its slot
///
/// Scans from index 0 upward. Writing through the returned borrow mutates
/// the original sequence in place, so no second lookup is needed. The borrow
/// pins the slice for as long as it lives: the container cannot be resized
/// or reallocated while the slot handle is outstanding.
pub fn find_slot<'a, T>(target: &T, items: &'a mut [T]) -> Result<&'a mut T, SlotNotFound>
where
    T: PartialEq + fmt::Display,
{
    items
        .iter_mut()
        .find(|slot| **slot == *target)
        .ok_or_else(|| SlotNotFound {
            target: target.to_string(),
        })
}

// ============================================================================
// TESTS
// ============================================================================
