use crate::error::{Result, VersionBumpError};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation (major.minor.patch, no suffixes)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a raw version string (e.g., "1.2.3" -> Version(1,2,3)).
    ///
    /// Surrounding whitespace is ignored. Exactly three dot-separated segments
    /// are required, each made only of ASCII digits.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionBumpError::malformed(
                raw,
                format!("expected X.Y.Z, found {} segment(s)", parts.len()),
            ));
        }

        let major = parse_component(raw, "major", parts[0])?;
        let minor = parse_component(raw, "minor", parts[1])?;
        let patch = parse_component(raw, "patch", parts[2])?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    pub fn bump_major(&mut self) -> Result<()> {
        self.major = increment(self.major, "major", self)?;
        self.minor = 0;
        self.patch = 0;
        Ok(())
    }

    pub fn bump_minor(&mut self) -> Result<()> {
        self.minor = increment(self.minor, "minor", self)?;
        self.patch = 0;
        Ok(())
    }

    pub fn bump_patch(&mut self) -> Result<()> {
        self.patch = increment(self.patch, "patch", self)?;
        Ok(())
    }

    /// Return a copy of this version bumped according to `bump_type`.
    ///
    /// Lower-significance components are reset to zero:
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let mut next = *self;
        match bump_type {
            VersionBump::Major => next.bump_major()?,
            VersionBump::Minor => next.bump_minor()?,
            VersionBump::Patch => next.bump_patch()?,
        }
        Ok(next)
    }
}

fn parse_component(raw: &str, name: &str, segment: &str) -> Result<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionBumpError::malformed(
            raw,
            format!("{} segment '{}' is not a non-negative integer", name, segment),
        ));
    }
    segment.parse::<u64>().map_err(|_| {
        VersionBumpError::malformed(raw, format!("{} segment '{}' is too large", name, segment))
    })
}

fn increment(value: u64, name: &str, version: &Version) -> Result<u64> {
    value.checked_add(1).ok_or_else(|| {
        VersionBumpError::malformed(version.to_string(), format!("{} overflows", name))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VersionBumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Which component a bump increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        };
        f.write_str(name)
    }
}

impl FromStr for VersionBump {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(VersionBump::Major),
            "minor" => Ok(VersionBump::Minor),
            "patch" => Ok(VersionBump::Patch),
            other => Err(format!(
                "unknown bump kind '{}', expected major, minor or patch",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_trims_whitespace() {
        assert_eq!(Version::parse("  0.1.0\n").unwrap(), Version::new(0, 1, 0));
    }

    #[test]
    fn test_version_parse_leading_zeros_normalised() {
        let v = Version::parse("01.002.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_version_parse_invalid_segment_count() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn test_version_parse_non_numeric() {
        let err = Version::parse("0.1.a").unwrap_err();
        match err {
            VersionBumpError::MalformedVersion { raw, reason } => {
                assert_eq!(raw, "0.1.a");
                assert!(reason.contains("patch"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_version_parse_rejects_signs_and_prefixes() {
        assert!(Version::parse("+1.2.3").is_err());
        assert!(Version::parse("-1.2.3").is_err());
        assert!(Version::parse("v1.2.3").is_err());
        assert!(Version::parse("1..3").is_err());
        assert!(Version::parse("1. 2.3").is_err());
    }

    #[test]
    fn test_version_parse_rejects_suffixes() {
        assert!(Version::parse("1.2.3-rc.1").is_err());
        assert!(Version::parse("1.2.3+build").is_err());
    }

    #[test]
    fn test_version_parse_too_large() {
        assert!(Version::parse("99999999999999999999999.0.0").is_err());
    }

    #[test]
    fn test_round_trip() {
        for v in [
            Version::new(0, 0, 0),
            Version::new(1, 2, 3),
            Version::new(10, 0, 42),
            Version::new(u64::MAX, 7, 0),
        ] {
            assert_eq!(Version::parse(&v.to_string()).unwrap(), v);
        }
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        let bumped = v.bump(VersionBump::Major).unwrap();
        assert_eq!(bumped, Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        let bumped = v.bump(VersionBump::Minor).unwrap();
        assert_eq!(bumped, Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        let bumped = v.bump(VersionBump::Patch).unwrap();
        assert_eq!(bumped, Version::new(1, 2, 4));
    }

    #[test]
    fn test_bump_from_zero_one_zero() {
        let v = Version::parse("0.1.0").unwrap();
        assert_eq!(v.bump(VersionBump::Patch).unwrap().to_string(), "0.1.1");
        assert_eq!(v.bump(VersionBump::Minor).unwrap().to_string(), "0.2.0");
        assert_eq!(v.bump(VersionBump::Major).unwrap().to_string(), "1.0.0");
    }

    #[test]
    fn test_bump_does_not_mutate_original() {
        let v = Version::new(2, 0, 1);
        let _ = v.bump(VersionBump::Major).unwrap();
        assert_eq!(v, Version::new(2, 0, 1));
    }

    #[test]
    fn test_in_place_bumps() {
        let mut v = Version::new(4, 5, 6);
        v.bump_patch().unwrap();
        assert_eq!(v, Version::new(4, 5, 7));
        v.bump_minor().unwrap();
        assert_eq!(v, Version::new(4, 6, 0));
        v.bump_major().unwrap();
        assert_eq!(v, Version::new(5, 0, 0));
    }

    #[test]
    fn test_bump_overflow_is_an_error() {
        let v = Version::new(0, 0, u64::MAX);
        assert!(v.bump(VersionBump::Patch).is_err());
        // Resetting components never overflow.
        assert_eq!(
            v.bump(VersionBump::Minor).unwrap(),
            Version::new(0, 1, 0)
        );
    }

    #[test]
    fn test_version_display() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_version_from_str() {
        let v: Version = "3.0.0".parse().unwrap();
        assert_eq!(v, Version::new(3, 0, 0));
    }

    #[test]
    fn test_version_bump_parse_and_display() {
        assert_eq!("major".parse::<VersionBump>(), Ok(VersionBump::Major));
        assert_eq!("Minor".parse::<VersionBump>(), Ok(VersionBump::Minor));
        assert_eq!("PATCH".parse::<VersionBump>(), Ok(VersionBump::Patch));
        assert!("build".parse::<VersionBump>().is_err());
        assert_eq!(VersionBump::Minor.to_string(), "minor");
    }
}
