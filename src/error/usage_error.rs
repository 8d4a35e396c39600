use std::fmt;

/// An API misuse detected synchronously. These never change the state of the
/// endpoint they are reported from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UsageError {
    /// Sending on a connection that is not in the open state.
    NotConnected,
    /// Starting an endpoint that has already been started.
    AlreadyStarted,
    /// A client instance can drive a single connect attempt; use `reconnect`.
    NotReusable,
    /// The detach-threads flag may only be changed before `start`.
    DetachAfterStart,
    /// `reconnect` was invoked from the reader or writer thread.
    ReconnectFromWebsocketThread,
    /// TLS details were requested from a connection without TLS.
    TlsUnavailable,
    /// A socket has already been supplied for this client.
    SocketAlreadySet,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NotConnected => write!(f, "Connection is not open"),
            Self::AlreadyStarted => write!(f, "Endpoint can only be started once"),
            Self::NotReusable => write!(f, "Client instances are not reusable"),
            Self::DetachAfterStart => {
                write!(f, "Thread detaching must be configured before start")
            }
            Self::ReconnectFromWebsocketThread => {
                write!(f, "Reconnect may not be initiated from a websocket thread")
            }
            Self::TlsUnavailable => write!(f, "Connection does not use TLS"),
            Self::SocketAlreadySet => write!(f, "Socket has already been set"),
        }
    }
}

impl std::error::Error for UsageError {}
