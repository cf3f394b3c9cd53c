//! Handle type for drawing objects
//!
//! Handles are unique 64-bit identifiers for all objects in a document.
//! They are allocated sequentially, which keeps serialized output stable
//! between runs over identical input.

use std::fmt;

/// A unique identifier for drawing objects
///
/// Handle 0 is reserved and invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

impl Handle {
    /// The null/invalid handle (0)
    pub const NULL: Handle = Handle(0);

    /// Create a new handle from a u64 value
    #[inline]
    pub const fn new(value: u64) -> Self {
        Handle(value)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is a null/invalid handle
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is a valid handle
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 != 0
    }
}

impl Default for Handle {
    fn default() -> Self {
        Handle::NULL
    }
}

impl From<u64> for Handle {
    fn from(value: u64) -> Self {
        Handle(value)
    }
}

impl From<Handle> for u64 {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_null() {
        assert!(Handle::NULL.is_null());
        assert!(!Handle::NULL.is_valid());
        assert!(Handle::new(1).is_valid());
    }

    #[test]
    fn test_handle_conversions() {
        let h = Handle::from(0xFFu64);
        assert_eq!(h.value(), 255);
        assert_eq!(u64::from(h), 255);
        assert_eq!(h.to_string(), "0xFF");
    }
}
