use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// True for `NNNNNNN` or `NNN-NNNN` (ASCII digits only).
pub fn validate(value: &str) -> bool {
    let bytes = value.as_bytes();
    match bytes.len() {
        7 => bytes.iter().all(u8::is_ascii_digit),
        8 => {
            bytes[3] == b'-'
                && bytes[..3].iter().all(u8::is_ascii_digit)
                && bytes[4..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

/// Strips every hyphen. Does not check the shape; call [`validate`] first.
pub fn normalize(value: &str) -> String {
    value.replace('-', "")
}

/// A validated postal code held in its canonical 7-digit form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn parse(value: &str) -> Result<PostalCode, Error> {
        if !validate(value) {
            return Err(Error::invalid_code());
        }
        Ok(PostalCode(normalize(value)))
    }

    /// The canonical digits, used as cache key and URL segment.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PostalCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostalCode::parse(s)
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}-{}", &self.0[..3], &self.0[3..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_shapes() {
        assert!(validate("1000001"));
        assert!(validate("100-0001"));
    }

    #[test]
    fn rejects_everything_else() {
        for value in [
            "",
            "1234567890",
            "12-34567",
            "1000-001",
            "100-00010",
            "100--0001",
            "100-000a",
            "１０００００１",
            "100 0001",
            "-1000001",
            "100000",
        ] {
            assert!(!validate(value), "{value:?} should be rejected");
        }
    }

    #[test]
    fn normalize_strips_all_hyphens() {
        assert_eq!(normalize("100-0001"), "1000001");
        assert_eq!(normalize("1000001"), "1000001");
        assert_eq!(normalize("1-2-3"), "123");
    }

    #[test]
    fn parse_and_display() {
        let code: PostalCode = "150-0001".parse().unwrap();
        assert_eq!(code.as_str(), "1500001");
        assert_eq!(code.to_string(), "150-0001");
        assert_eq!(code, PostalCode::parse("1500001").unwrap());
        assert!(PostalCode::parse("12-34567").unwrap_err().is_invalid_code());
    }
}
