use std::error::Error as StdError;
use std::fmt::{self, Display};

/// A `Result` bound to the failure conditions of a sorted vec.
pub type Result<T> = std::result::Result<T, Error>;

///
/// A failed operation on a [`SortedVec`](crate::SortedVec).
///
/// Every failure is reported synchronously to the immediate caller and leaves
/// the container in its last valid state. No failure is retried internally,
/// none is fatal.
///
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    internal: String,
}

/// The kind of failures a sorted vec can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An absent value (`None`) was supplied where a real element is
    /// required. Detected before any mutation is applied.
    NilElement,
    /// A reorder-capable operation was invoked. Such operations exist on the
    /// public surface only to intercept misuse and never execute.
    UnsupportedOperation,
    /// A first/last-index query was asked of an empty sequence.
    EmptyBoundary,
}

impl Error {
    pub(crate) fn nil_element(position: usize) -> Self {
        Self {
            kind: ErrorKind::NilElement,
            internal: format!("absent values are not allowed into a sorted vec (position {position})"),
        }
    }

    pub(crate) fn unsupported(op: &str) -> Self {
        Self {
            kind: ErrorKind::UnsupportedOperation,
            internal: format!("`{op}` would reorder elements independent of the comparator"),
        }
    }

    pub(crate) fn empty_boundary(query: &str) -> Self {
        Self {
            kind: ErrorKind::EmptyBoundary,
            internal: format!("cannot resolve the {query} of an empty sequence"),
        }
    }

    /// Returns the kind of error that occured.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.internal, self.kind)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.internal, self.kind)
    }
}

impl StdError for Error {}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NilElement => write!(f, "NilElement"),
            Self::UnsupportedOperation => write!(f, "UnsupportedOperation"),
            Self::EmptyBoundary => write!(f, "EmptyBoundary"),
        }
    }
}
