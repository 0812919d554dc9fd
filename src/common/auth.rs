//! Shared authentication helpers

use subtle::ConstantTimeEq;

/// Constant-time string comparison
///
/// Comparing the admin secret with `==` would let an attacker recover it
/// byte by byte from response timing. Uses the security-audited `subtle`
/// crate implementation.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_strings() {
        assert!(constant_time_eq("secret", "secret"));
        assert!(constant_time_eq("", ""));
    }

    #[test]
    fn test_unequal_strings() {
        assert!(!constant_time_eq("secret", "Secret"));
        assert!(!constant_time_eq("secret", "secret "));
        assert!(!constant_time_eq("secret", ""));
    }
}
