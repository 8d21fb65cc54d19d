//! Semantic version parsing and increment policies.

use regex::Regex;
use semver::Version;
use std::sync::OnceLock;

use crate::{error::GuardianError, result::Result};

/// Strict `X.Y.Z` triple gate. Pre-release and build metadata are rejected;
/// anything the original pipeline would not have written is a fatal input.
fn triple_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("valid regex"))
}

/// Whether a string is a bare `X.Y.Z` semantic version triple.
pub fn is_triple(value: &str) -> bool {
    triple_re().is_match(value)
}

/// Parse a strict `X.Y.Z` triple into a [`semver::Version`].
pub fn parse_triple(value: &str) -> Result<Version> {
    if !is_triple(value) {
        return Err(GuardianError::invalid_version(value).into());
    }
    let version = Version::parse(value)
        .map_err(|_| GuardianError::invalid_version(value))?;
    Ok(version)
}

/// Version increment policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bump {
    Major,
    Minor,
    Patch,
    /// Use the literal version verbatim, ignoring the current value.
    Custom(Version),
}

impl Bump {
    /// Parse an increment directive: `major`, `minor`, `patch`, or
    /// `custom:X.Y.Z`.
    pub fn parse(directive: &str) -> Result<Self> {
        if let Some(literal) = directive.strip_prefix("custom:") {
            return Ok(Self::Custom(parse_triple(literal)?));
        }

        match directive {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            other => {
                Err(GuardianError::UnknownIncrement(other.to_string()).into())
            }
        }
    }

    /// Parse a quick-release directive: either a bump keyword or a full
    /// version literal like `3.99.0`.
    pub fn parse_quick(directive: &str) -> Result<Self> {
        if is_triple(directive) {
            return Ok(Self::Custom(parse_triple(directive)?));
        }
        Self::parse(directive)
    }

    /// Compute the next version from the current one.
    ///
    /// `Custom` returns its literal without reading the current value, which
    /// is why a manifest holding a malformed version can still be repaired
    /// with an explicit override.
    pub fn apply(&self, current: &str) -> Result<Version> {
        if let Self::Custom(version) = self {
            return Ok(version.clone());
        }

        let current = parse_triple(current)?;

        let next = match self {
            Self::Major => Version::new(current.major + 1, 0, 0),
            Self::Minor => Version::new(current.major, current.minor + 1, 0),
            Self::Patch => {
                Version::new(current.major, current.minor, current.patch + 1)
            }
            Self::Custom(_) => unreachable!(),
        };

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_bump_increments_last_component() {
        let next = Bump::Patch.apply("1.2.3").unwrap();
        assert_eq!(next.to_string(), "1.2.4");
    }

    #[test]
    fn minor_bump_zeroes_patch() {
        let next = Bump::Minor.apply("1.2.3").unwrap();
        assert_eq!(next.to_string(), "1.3.0");
    }

    #[test]
    fn major_bump_zeroes_minor_and_patch() {
        let next = Bump::Major.apply("1.2.3").unwrap();
        assert_eq!(next.to_string(), "2.0.0");

        let next = Bump::Major.apply("0.0.0").unwrap();
        assert_eq!(next.to_string(), "1.0.0");
    }

    #[test]
    fn custom_bump_is_verbatim_regardless_of_current() {
        let bump = Bump::parse("custom:3.99.0").unwrap();
        let next = bump.apply("1.2.3").unwrap();
        assert_eq!(next.to_string(), "3.99.0");

        // Current value is never even parsed for custom overrides.
        let next = bump.apply("not-a-version").unwrap();
        assert_eq!(next.to_string(), "3.99.0");
    }

    #[test]
    fn malformed_current_version_is_rejected() {
        let err = Bump::Patch.apply("1.2").unwrap_err();
        let err = err.downcast::<GuardianError>().unwrap();
        assert!(matches!(err, GuardianError::InvalidVersion(_)));
    }

    #[test]
    fn prerelease_versions_fail_the_triple_gate() {
        assert!(!is_triple("1.2.3-beta.1"));
        assert!(parse_triple("1.2.3-beta.1").is_err());
        assert!(Bump::parse("custom:1.2.3+build").is_err());
    }

    #[test]
    fn unknown_increment_type_is_rejected() {
        let err = Bump::parse("gigantic").unwrap_err();
        let err = err.downcast::<GuardianError>().unwrap();
        assert!(matches!(err, GuardianError::UnknownIncrement(_)));
    }

    #[test]
    fn quick_directive_accepts_full_version_literal() {
        assert_eq!(
            Bump::parse_quick("3.99.0").unwrap(),
            Bump::Custom(Version::new(3, 99, 0))
        );
        assert_eq!(Bump::parse_quick("minor").unwrap(), Bump::Minor);
    }
}
