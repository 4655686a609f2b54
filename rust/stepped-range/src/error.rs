use thiserror::Error;

/// The error type shared by all fallible operations in this crate.
///
/// Boxes its [`ErrorKind`] so that `Result<T>` stays one word wide on the
/// happy path.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    /// Returns a reference to the underlying error kind.
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    /// Consumes the error, returning the underlying error kind.
    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn exhausted() -> Error {
        Error(ErrorKind::Exhausted.into())
    }

    /// Returns `true` if this error signals a fully consumed range.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind(), ErrorKind::Exhausted)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error(Box::new(kind))
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A range constructor received a (start, stop, step) combination that
    /// cannot produce a well-defined, finite, non-empty sequence.
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    /// A value was requested from a fully consumed range.
    #[error("range is exhausted")]
    Exhausted,
}
