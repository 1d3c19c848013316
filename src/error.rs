use std::fmt;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is neither `NNNNNNN` nor `NNN-NNNN`.
    InvalidCode,
    /// The service has no record, or the request failed on the way there or back.
    NotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            ErrorKind::InvalidCode => write!(f, "THE POSTAL CODE IS INVALID"),
            ErrorKind::NotFound => write!(f, "POSTAL CODE NOT FOUND"),
        }
    }
}

/// Lookup failure.
///
/// `Display` prints only the kind's signal text. A transport or parse failure is
/// still reported as [`ErrorKind::NotFound`]; the underlying cause is kept as the
/// error source for logging.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    kind: ErrorKind,
    #[source]
    source: Option<BoxError>,
}

impl Error {
    pub fn new(kind: ErrorKind, source: Option<BoxError>) -> Error {
        Error { kind, source }
    }
    pub fn invalid_code() -> Error {
        Error::new(ErrorKind::InvalidCode, None)
    }
    pub fn not_found() -> Error {
        Error::new(ErrorKind::NotFound, None)
    }
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
    pub fn is_invalid_code(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidCode)
    }
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Error {
        Error::new(ErrorKind::NotFound, Some(Box::from(err)))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::new(ErrorKind::NotFound, Some(Box::from(err)))
    }
}
