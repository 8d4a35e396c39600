use std::fmt;

/// TLS errors.
#[non_exhaustive]
#[derive(Debug)]
pub enum TlsError {
    /// Native TLS error.
    Native(native_tls_crate::Error),
}

impl fmt::Display for TlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(err) => write!(f, "native-tls error: {err}"),
        }
    }
}

impl std::error::Error for TlsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Native(err) => Some(err),
        }
    }
}
