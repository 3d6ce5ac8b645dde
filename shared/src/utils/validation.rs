//! Common validation utilities

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty
    ///
    /// Whitespace counts as content; the value is never altered.
    pub fn not_empty(value: &str) -> bool {
        !value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;

    #[test]
    fn test_not_empty() {
        assert!(not_empty("ada@school.edu"));
        assert!(not_empty("   "));
        assert!(!not_empty(""));
    }
}
