//! Agent endpoint description.

use std::fmt;

/// Community-based SNMP protocol version.
///
/// Only the community versions are offered; v3 credentials belong to the
/// underlying client library and are not exposed by this tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ProtocolVersion {
    /// SNMPv1 (RFC 1157)
    V1,
    /// SNMPv2c (RFC 1901)
    #[default]
    V2c,
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolVersion::V1 => write!(f, "SNMPv1"),
            ProtocolVersion::V2c => write!(f, "SNMPv2c"),
        }
    }
}

/// Remote agent endpoint. Immutable once constructed from configuration.
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Host name or IP address.
    pub host: String,
    /// UDP port, already validated as a 16-bit value by argument parsing.
    pub port: u16,
    /// Community string.
    pub community: String,
    /// Protocol version.
    pub version: ProtocolVersion,
}

impl Endpoint {
    /// `host:port` form accepted by the client builders.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
