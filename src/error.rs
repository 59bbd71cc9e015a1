//! # Error Module
//!
//! Failure taxonomy for servlet dispatch.
//!
//! A servlet reports failures as [`ServiceError`]. Exactly one kind,
//! [`ServiceError::ClientDisconnect`], is recovered by the holder: the peer
//! closed the connection while the response was being written, which is not a
//! server-side fault. Every other kind travels back to the caller untouched.
//!
//! ## Classifying write failures
//!
//! A plain `io::Error` converts into [`ServiceError::Transport`]. Response
//! writers that know they are on the write path should call
//! [`ServiceError::from_write_error`] instead, which maps the socket error
//! kinds a hang-up produces onto `ClientDisconnect`:
//!
//! ```rust
//! use brrtrouter_holder::ServiceError;
//! use std::io;
//!
//! let err = ServiceError::from_write_error(io::Error::from(io::ErrorKind::BrokenPipe));
//! assert!(err.is_client_disconnect());
//!
//! let err: ServiceError = io::Error::from(io::ErrorKind::BrokenPipe).into();
//! assert!(!err.is_client_disconnect());
//! ```

use std::fmt;
use std::io;

/// Coarse failure class, useful for reporting without matching payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Peer went away mid-response
    ClientDisconnect,
    /// Any other I/O failure
    Transport,
    /// Anything that is not I/O
    Unexpected,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::ClientDisconnect => "client_disconnect",
            FailureKind::Transport => "transport",
            FailureKind::Unexpected => "unexpected",
        };
        f.write_str(s)
    }
}

/// Failure raised by [`Servlet::service`](crate::Servlet::service) or
/// [`Servlet::init`](crate::Servlet::init).
#[derive(Debug)]
pub enum ServiceError {
    /// End-of-file or connection abort while writing the response.
    ///
    /// Carries the underlying socket error when one was observed.
    ClientDisconnect(Option<io::Error>),
    /// I/O failure that is not a client hang-up
    Transport(io::Error),
    /// Any other runtime failure
    Unexpected(anyhow::Error),
}

impl ServiceError {
    /// Bare client-disconnect failure with no underlying socket error.
    #[must_use]
    pub fn eof() -> Self {
        ServiceError::ClientDisconnect(None)
    }

    /// Classify an error raised while writing a response.
    ///
    /// `BrokenPipe`, `ConnectionReset`, `ConnectionAborted` and `UnexpectedEof`
    /// mean the client is gone; everything else stays a transport failure.
    #[must_use]
    pub fn from_write_error(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::BrokenPipe
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::UnexpectedEof => ServiceError::ClientDisconnect(Some(err)),
            _ => ServiceError::Transport(err),
        }
    }

    /// `true` only for [`ServiceError::ClientDisconnect`].
    #[inline]
    #[must_use]
    pub fn is_client_disconnect(&self) -> bool {
        matches!(self, ServiceError::ClientDisconnect(_))
    }

    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            ServiceError::ClientDisconnect(_) => FailureKind::ClientDisconnect,
            ServiceError::Transport(_) => FailureKind::Transport,
            ServiceError::Unexpected(_) => FailureKind::Unexpected,
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::ClientDisconnect(Some(err)) => {
                write!(f, "client disconnected during response write: {}", err)
            }
            ServiceError::ClientDisconnect(None) => {
                write!(f, "client disconnected during response write")
            }
            ServiceError::Transport(err) => write!(f, "transport failure: {}", err),
            ServiceError::Unexpected(err) => write!(f, "unexpected failure: {}", err),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::ClientDisconnect(Some(err)) | ServiceError::Transport(err) => Some(err),
            ServiceError::ClientDisconnect(None) => None,
            ServiceError::Unexpected(err) => Some(&**err),
        }
    }
}

impl From<io::Error> for ServiceError {
    fn from(err: io::Error) -> Self {
        ServiceError::Transport(err)
    }
}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        ServiceError::Unexpected(err)
    }
}
