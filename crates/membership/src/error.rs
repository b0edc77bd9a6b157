//! Error types for membership operations

use std::fmt;

use thiserror::Error;

/// Errors produced while splitting a `host:port` address.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum AddressError {
    /// The address has no `:` separating host and port.
    #[error("missing port in address {0:?}")]
    MissingPort(String),

    /// The host contains colons but is not enclosed in brackets.
    #[error("too many colons in address {0:?}")]
    TooManyColons(String),

    /// An opening `[` has no matching `]`.
    #[error("missing ']' in address {0:?}")]
    MissingBracket(String),

    /// A bracket appears where none is allowed.
    #[error("unexpected bracket in address {0:?}")]
    UnexpectedBracket(String),
}

impl AddressError {
    /// The address that failed to parse
    #[must_use]
    pub fn address(&self) -> &str {
        match self {
            Self::MissingPort(address)
            | Self::TooManyColons(address)
            | Self::MissingBracket(address)
            | Self::UnexpectedBracket(address) => address,
        }
    }
}

/// Membership-related errors
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum MembershipError {
    /// A candidate address could not be split into host and port
    #[error("malformed address: {0}")]
    MalformedAddress(#[from] AddressError),

    /// The requested named port is not configured for the host
    #[error("port {port:?} is not set for {host}")]
    PortNotConfigured {
        /// The port name that was looked up.
        port: String,
        /// Rendering of the host the lookup was made against.
        host: String,
    },
}

impl MembershipError {
    /// Returns the kind of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedAddress(_) => ErrorKind::MalformedAddress,
            Self::PortNotConfigured { .. } => ErrorKind::PortNotConfigured,
        }
    }
}

/// The kind of membership error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Address could not be parsed
    MalformedAddress,

    /// Named port missing from the port table
    PortNotConfigured,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classifies_variants() {
        let malformed = MembershipError::from(AddressError::MissingPort("nope".to_string()));
        assert_eq!(malformed.kind(), ErrorKind::MalformedAddress);

        let missing = MembershipError::PortNotConfigured {
            port: "grpc".to_string(),
            host: "addr: h:1".to_string(),
        };
        assert_eq!(missing.kind(), ErrorKind::PortNotConfigured);
        assert_eq!(missing.kind().to_string(), "PortNotConfigured");
    }

    #[test]
    fn test_error_messages() {
        let err = MembershipError::from(AddressError::TooManyColons("a:b:c".to_string()));
        assert_eq!(
            err.to_string(),
            "malformed address: too many colons in address \"a:b:c\""
        );

        let err = MembershipError::PortNotConfigured {
            port: "tchannel".to_string(),
            host: "addr: h:1, identity: , portMap: ".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "port \"tchannel\" is not set for addr: h:1, identity: , portMap: "
        );
    }
}
