//! `host:port` address syntax.
//!
//! Addresses are plain strings of the form `host:port`, or `[host]:port` when
//! the host itself contains colons (IPv6 literals). Splitting only checks the
//! structure; the port part is returned verbatim and interpreted by callers.

use crate::error::AddressError;

/// Splits an address into its host and port parts.
///
/// Brackets around the host are removed. The port may be empty or
/// non-numeric; use [`parse_port`] to interpret it.
///
/// # Examples
///
/// ```
/// use meshring_membership::address::split_host_port;
///
/// assert_eq!(split_host_port("10.0.0.1:7933").unwrap(), ("10.0.0.1", "7933"));
/// assert_eq!(split_host_port("[::1]:7933").unwrap(), ("::1", "7933"));
/// assert!(split_host_port("10.0.0.1").is_err());
/// ```
///
/// # Errors
///
/// Returns an [`AddressError`] if the address has no port separator, an
/// unbracketed host with colons, or misplaced brackets.
pub fn split_host_port(address: &str) -> Result<(&str, &str), AddressError> {
    let Some(colon) = address.rfind(':') else {
        return Err(AddressError::MissingPort(address.to_string()));
    };

    let (host, open_from, close_from) = if address.starts_with('[') {
        let Some(end) = address.find(']') else {
            return Err(AddressError::MissingBracket(address.to_string()));
        };

        let after = end + 1;
        if after == address.len() {
            return Err(AddressError::MissingPort(address.to_string()));
        }
        if after != colon {
            // Either "[host]:a:b" or "[host]junk:port"
            return Err(if address.as_bytes()[after] == b':' {
                AddressError::TooManyColons(address.to_string())
            } else {
                AddressError::MissingPort(address.to_string())
            });
        }

        (&address[1..end], 1, after)
    } else {
        let host = &address[..colon];
        if host.contains(':') {
            return Err(AddressError::TooManyColons(address.to_string()));
        }
        (host, 0, 0)
    };

    if address[open_from..].contains('[') || address[close_from..].contains(']') {
        return Err(AddressError::UnexpectedBracket(address.to_string()));
    }

    Ok((host, &address[colon + 1..]))
}

/// Joins a host and a port into an address, bracketing hosts that contain colons.
///
/// # Examples
///
/// ```
/// use meshring_membership::address::join_host_port;
///
/// assert_eq!(join_host_port("10.0.0.1", 7941), "10.0.0.1:7941");
/// assert_eq!(join_host_port("fe80::1", 7941), "[fe80::1]:7941");
/// ```
#[must_use]
pub fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

/// Interprets the port part of an address as a decimal port number.
///
/// Leading zeros are accepted. Signs, whitespace and out-of-range values are not.
#[must_use]
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse().ok()
}
