//! Four-octet address value type.

use std::fmt;
use std::str::FromStr;

/// Error returned when text is not a dotted-quad address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IpParseError {
    /// The text is not exactly four `.`-separated decimal octets in `0..=255`.
    #[error("invalid IPv4 address: {0:?}")]
    InvalidFormat(String),
}

/// An IPv4 address as four octets, most significant first.
///
/// Ordering compares octets lexicographically, so `1.2.3.4 < 1.10.0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Address {
    octets: [u8; 4],
}

impl Ipv4Address {
    /// Build an address from its four octets.
    #[must_use]
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self {
            octets: [a, b, c, d],
        }
    }

    /// The four octets, most significant first.
    #[must_use]
    pub const fn octets(&self) -> [u8; 4] {
        self.octets
    }

    /// Whether `self` and `network` agree on every bit set in `mask`.
    #[must_use]
    pub fn in_subnet(&self, network: &Self, mask: &Self) -> bool {
        self.octets
            .iter()
            .zip(network.octets.iter())
            .zip(mask.octets.iter())
            .all(|((addr, net), mask)| addr & mask == net & mask)
    }
}

impl From<[u8; 4]> for Ipv4Address {
    fn from(octets: [u8; 4]) -> Self {
        Self { octets }
    }
}

impl FromStr for Ipv4Address {
    type Err = IpParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || IpParseError::InvalidFormat(s.to_string());
        let mut octets = [0u8; 4];
        let mut parts = s.split('.');
        for octet in &mut octets {
            let part = parts.next().ok_or_else(invalid)?;
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            *octet = part.parse().map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self { octets })
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}
