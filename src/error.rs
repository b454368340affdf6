use thiserror::Error;

/// Errors raised by the counting and enumeration functions.
///
/// Every variant is an invalid-argument condition detected before any work
/// is done; the variants only differ in which precondition was violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("factorial of negative number {0} is not defined")]
    NegativeFactorial(i64),

    #[error("{name} must be greater than or equal to 0, received {value}")]
    NegativeArgument { name: &'static str, value: i64 },

    #[error(
        "length {length} exceeds the {available} distinct elements available when elements cannot repeat"
    )]
    LengthExceedsElements { length: i64, available: usize },

    #[error("number of ones {ones} must lie between 0 and the code length {length}")]
    OnesOutOfRange { ones: i64, length: i64 },

    #[error("gray code length must be at least 1, received {length}")]
    EmptyGrayCode { length: i64 },

    #[error("gray code length {length} does not fit in {max} packed bits")]
    GrayCodeTooLong { length: i64, max: i64 },
}

impl Error {
    pub(crate) fn negative(name: &'static str, value: i64) -> Self {
        Error::NegativeArgument { name, value }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Rejects negative counts and converts them to `usize`.
pub(crate) fn non_negative(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::negative(name, value))
}
