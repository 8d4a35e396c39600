use std::fmt;

/// Indicates the specific type/cause of URL error.
#[derive(Debug, PartialEq, Eq)]
pub enum UrlError {
    /// TLS is used despite not being compiled with the TLS feature enabled.
    TlsFeatureNotEnabled,
    /// The URL does not include a host name.
    NoHostName,
    /// Failed to connect with this URL.
    UnableToConnect(String),
    /// Unsupported URL scheme used (only `ws://` or `wss://` may be used).
    UnsupportedUrlScheme,
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TlsFeatureNotEnabled => write!(f, "TLS support not compiled in"),
            Self::NoHostName => write!(f, "No host name in the URL"),
            Self::UnableToConnect(uri) => write!(f, "Unable to connect to {uri}"),
            Self::UnsupportedUrlScheme => write!(f, "URL scheme not supported"),
        }
    }
}

impl std::error::Error for UrlError {}
