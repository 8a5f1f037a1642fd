//! Username validation rule
//!
//! A username is accepted when it contains at least one uppercase letter,
//! one digit, and one character from the fixed special set `@$!%*?&`, is at
//! least five characters long, and uses no characters outside
//! `[A-Za-z0-9@$!%*?&]`.
//!
//! The rule is a pure predicate: it never touches UI state. Callers turn
//! the returned [`ValidationResult`] into banner updates.

use regex::Regex;
use std::sync::LazyLock;

/// The fixed set of permitted special characters
pub const SPECIAL_CHARS: &str = "@$!%*?&";

/// Minimum accepted username length (inclusive)
pub const MIN_LENGTH: usize = 5;

/// Requirements text shown when a candidate is rejected
pub const REQUIREMENTS: &str = "Please ensure your username contains at least \
    1 uppercase letter, 1 number, 1 special character (@$!%*?&), and is at \
    least 5 characters long.";

// Allowed alphabet and minimum length in one pass. The class-presence
// requirements are separate predicates below; the regex crate has no
// lookahead, and a conjunction of independent checks reads better anyway.
static ALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]{5,}$").expect("valid username pattern"));

/// Outcome of validating a username candidate
///
/// Both variants carry the original candidate verbatim so callers can echo
/// it back in feedback messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The candidate satisfies every constraint
    Valid { candidate: String },
    /// The candidate violates at least one constraint
    Invalid { candidate: String },
}

impl ValidationResult {
    /// Whether the candidate was accepted
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// The candidate string that was validated
    pub fn candidate(&self) -> &str {
        match self {
            Self::Valid { candidate } | Self::Invalid { candidate } => candidate,
        }
    }

    /// The fixed feedback message for this outcome
    pub fn message(&self) -> String {
        match self {
            Self::Valid { candidate } => format!(
                "Success! Username \"{}\" is valid and has been accepted.",
                candidate
            ),
            Self::Invalid { .. } => format!("Invalid Username! {}", REQUIREMENTS),
        }
    }
}

/// Validate a username candidate.
///
/// All four constraints are evaluated over the same literal input; the
/// result is their conjunction. The empty string fails the length check
/// and every class check.
pub fn validate(candidate: &str) -> ValidationResult {
    let has_uppercase = candidate.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = candidate.chars().any(|c| c.is_ascii_digit());
    let has_special = candidate.chars().any(|c| SPECIAL_CHARS.contains(c));
    let well_formed = ALLOWED.is_match(candidate);

    if has_uppercase && has_digit && has_special && well_formed {
        ValidationResult::Valid {
            candidate: candidate.to_string(),
        }
    } else {
        ValidationResult::Invalid {
            candidate: candidate.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_conforming_candidates() {
        assert!(validate("Test1@").is_valid());
        assert!(validate("TEST1@abc").is_valid());
        assert!(validate("Test1@$!%*?&").is_valid());
        assert!(validate("Aa1@xyz").is_valid());
    }

    #[test]
    fn test_length_boundary() {
        // Exactly five characters with one of each required class
        assert!(validate("Tes1@").is_valid());
        // Four characters, all classes present, still too short
        assert!(!validate("T1@a").is_valid());
    }

    #[test]
    fn test_empty_string_rejected() {
        assert!(!validate("").is_valid());
    }

    #[test]
    fn test_missing_uppercase() {
        assert!(!validate("test1@ok").is_valid());
    }

    #[test]
    fn test_missing_digit() {
        assert!(!validate("Testing@").is_valid());
    }

    #[test]
    fn test_missing_special() {
        assert!(!validate("Testing1").is_valid());
    }

    #[test]
    fn test_disallowed_characters() {
        // Space, hash, and hyphen are outside the allowed alphabet
        assert!(!validate("Test 1@").is_valid());
        assert!(!validate("Test1#").is_valid());
        assert!(!validate("Test-1@").is_valid());
    }

    #[test]
    fn test_no_maximum_length() {
        let long = format!("T1@{}", "a".repeat(500));
        assert!(validate(&long).is_valid());
    }

    #[test]
    fn test_each_special_char_accepted() {
        for c in SPECIAL_CHARS.chars() {
            let candidate = format!("Tes1{}", c);
            assert!(validate(&candidate).is_valid(), "rejected {}", candidate);
        }
    }

    #[test]
    fn test_messages() {
        let ok = validate("Tes1@");
        assert_eq!(
            ok.message(),
            "Success! Username \"Tes1@\" is valid and has been accepted."
        );
        assert_eq!(ok.candidate(), "Tes1@");

        let bad = validate("nope");
        assert!(bad.message().starts_with("Invalid Username!"));
        assert!(bad.message().contains("(@$!%*?&)"));
        assert_eq!(bad.candidate(), "nope");
    }

    #[test]
    fn test_revalidation_is_fresh() {
        // A rejected candidate, once corrected, is accepted on resubmission
        assert!(!validate("tes1@").is_valid());
        assert!(validate("Tes1@").is_valid());
    }
}
