//! Error handling.

mod capacity_error;
mod protocol_error;
#[cfg(feature = "native-tls")]
mod tls_error;
mod url_error;
mod usage_error;

pub use self::{
    capacity_error::CapacityError, protocol_error::ProtocolError, url_error::UrlError,
    usage_error::UsageError,
};
#[cfg(feature = "native-tls")]
pub use self::tls_error::TlsError;

use http::StatusCode;
use std::{fmt, io, result, str, string};

/// Result type of all WebSocket library calls.
pub type Result<T, E = Error> = result::Result<T, E>;

/// Possible WebSocket errors.
#[derive(Debug)]
pub enum Error {
    /// WebSocket connection closed normally. This informs you of the close.
    /// It's not an error as such and nothing wrong happened.
    ConnectionClosed,
    /// Trying to work with already closed connection.
    ///
    /// Trying to read or write after receiving `ConnectionClosed` causes this.
    /// As opposed to `ConnectionClosed`, this indicates your code tries to
    /// operate on a connection that has been closed and thus a bug.
    AlreadyClosed,
    /// Input-output error. Apart from `WouldBlock`, these are generally errors
    /// with the underlying connection and you should probably consider them fatal.
    Io(io::Error),
    /// TLS error.
    #[cfg(feature = "native-tls")]
    Tls(TlsError),
    /// Buffer capacity exhausted.
    Capacity(CapacityError),
    /// Protocol violation.
    Protocol(ProtocolError),
    /// Invalid URL.
    Url(UrlError),
    /// API misuse: the operation is not valid in the current endpoint state.
    Usage(UsageError),
    /// HTTP error: the handshake response carried a non-101 status.
    Http(StatusCode),
    /// HTTP format error.
    HttpFormat(http::Error),
    /// UTF-8 coding error.
    Utf8(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::ConnectionClosed => write!(f, "Connection closed normally"),
            Error::AlreadyClosed => write!(f, "Trying to work with closed connection"),
            Error::Io(ref err) => write!(f, "IO error: {err}"),
            #[cfg(feature = "native-tls")]
            Error::Tls(ref err) => write!(f, "TLS error: {err}"),
            Error::Capacity(ref err) => write!(f, "Space limit exceeded: {err}"),
            Error::Protocol(ref err) => write!(f, "WebSocket protocol error: {err}"),
            Error::Url(ref err) => write!(f, "URL error: {err}"),
            Error::Usage(ref err) => write!(f, "Usage error: {err}"),
            Error::Http(code) => write!(f, "HTTP error: {code}"),
            Error::HttpFormat(ref err) => write!(f, "HTTP format error: {err}"),
            Error::Utf8(ref err) => write!(f, "UTF-8 encoding error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Io(ref err) => Some(err),
            #[cfg(feature = "native-tls")]
            Error::Tls(ref err) => Some(err),
            Error::HttpFormat(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<str::Utf8Error> for Error {
    fn from(err: str::Utf8Error) -> Self {
        Error::Utf8(err.to_string())
    }
}

impl From<string::FromUtf8Error> for Error {
    fn from(err: string::FromUtf8Error) -> Self {
        Error::Utf8(err.to_string())
    }
}

impl From<httparse::Error> for Error {
    fn from(err: httparse::Error) -> Self {
        Error::Protocol(ProtocolError::HttparseError(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Error::HttpFormat(err)
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Error::HttpFormat(err.into())
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Error::HttpFormat(err.into())
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Error::HttpFormat(err.into())
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Error::Utf8(err.to_string())
    }
}

impl From<http::status::InvalidStatusCode> for Error {
    fn from(err: http::status::InvalidStatusCode) -> Self {
        Error::HttpFormat(err.into())
    }
}

impl From<CapacityError> for Error {
    fn from(err: CapacityError) -> Self {
        Error::Capacity(err)
    }
}

impl From<ProtocolError> for Error {
    fn from(err: ProtocolError) -> Self {
        Error::Protocol(err)
    }
}

impl From<UrlError> for Error {
    fn from(err: UrlError) -> Self {
        Error::Url(err)
    }
}

impl From<UsageError> for Error {
    fn from(err: UsageError) -> Self {
        Error::Usage(err)
    }
}

#[cfg(feature = "native-tls")]
impl From<TlsError> for Error {
    fn from(err: TlsError) -> Self {
        Error::Tls(err)
    }
}

#[cfg(feature = "native-tls")]
impl From<native_tls_crate::Error> for Error {
    fn from(err: native_tls_crate::Error) -> Self {
        Error::Tls(TlsError::Native(err))
    }
}
