//! Command-line and environment configuration.
//!
//! Every option is backed by an environment variable, so the tool can be
//! configured entirely from a container environment with no arguments.

use std::time::Duration;

use async_snmp::Oid;
use clap::Parser;

use crate::endpoint::{Endpoint, ProtocolVersion};
use crate::error::{Error, Result};
use crate::establish::RetryPolicy;

/// Wait for an SNMP agent to respond, then walk a MIB subtree.
#[derive(Debug, Parser)]
#[command(name = "agentwalk", version, about)]
pub struct Args {
    /// Agent host name or address.
    #[arg(long, env = "SNMP_TARGET", default_value = "127.0.0.1")]
    pub target: String,

    /// Agent UDP port.
    #[arg(long, env = "SNMP_PORT", default_value_t = 161)]
    pub port: u16,

    /// Community string.
    #[arg(long, env = "SNMP_COMMUNITY", default_value = "public")]
    pub community: String,

    /// Root of the subtree to walk (dotted notation, leading dot accepted).
    #[arg(long, env = "SNMP_OID", default_value = ".1.3.6.1.2.1.1")]
    pub oid: String,

    /// Protocol version.
    #[arg(long, env = "SNMP_VERSION", value_enum, default_value = "v2c")]
    pub snmp_version: ProtocolVersion,

    /// Maximum connect+probe attempts before giving up.
    #[arg(long, default_value_t = 10)]
    pub max_attempts: u32,

    /// Seconds to wait between attempts.
    #[arg(long, default_value_t = 3)]
    pub delay: u64,

    /// Per-attempt probe timeout in seconds.
    #[arg(long, default_value_t = 2)]
    pub probe_timeout: u64,

    /// GETBULK max-repetitions for the walk (SNMPv2c only).
    #[arg(long, default_value_t = 10)]
    pub max_repetitions: u32,
}

impl Args {
    /// Endpoint described by these arguments.
    pub fn endpoint(&self) -> Endpoint {
        Endpoint {
            host: self.target.clone(),
            port: self.port,
            community: self.community.clone(),
            version: self.snmp_version,
        }
    }

    /// Retry budget described by these arguments.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            delay: Duration::from_secs(self.delay),
            probe_timeout: Duration::from_secs(self.probe_timeout),
        }
    }
}

/// Parse a dotted numeric OID, tolerating a leading dot.
pub fn parse_oid(s: &str) -> Result<Oid> {
    let trimmed = s.trim().trim_start_matches('.');
    Oid::parse(trimmed).map_err(|e| Error::InvalidOid {
        input: s.into(),
        reason: e.to_string(),
    })
}

/// Install the stderr tracing subscriber.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("agentwalk=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_must_be_u16() {
        assert!(Args::try_parse_from(["agentwalk", "--port", "abc123"]).is_err());
        assert!(Args::try_parse_from(["agentwalk", "--port", "999999"]).is_err());
        assert!(Args::try_parse_from(["agentwalk", "--port", "1161"]).is_ok());
    }

    #[test]
    fn version_values() {
        let args = Args::try_parse_from(["agentwalk", "--snmp-version", "v1"]).unwrap();
        assert_eq!(args.snmp_version, ProtocolVersion::V1);
        assert!(Args::try_parse_from(["agentwalk", "--snmp-version", "v4"]).is_err());
    }

    #[test]
    fn retry_policy_from_args() {
        let args = Args::try_parse_from([
            "agentwalk",
            "--max-attempts",
            "5",
            "--delay",
            "1",
            "--probe-timeout",
            "7",
        ])
        .unwrap();
        let policy = args.retry_policy();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.delay, Duration::from_secs(1));
        assert_eq!(policy.probe_timeout, Duration::from_secs(7));
    }

    #[test]
    fn parse_oid_accepts_leading_dot() {
        let oid = parse_oid(".1.3.6.1.2.1.1").unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1, 1]);

        let oid = parse_oid("1.3.6.1.2.1.2.2").unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1, 2, 2]);
    }

    #[test]
    fn parse_oid_rejects_garbage() {
        let err = parse_oid("fruit").unwrap_err();
        assert!(matches!(err, Error::InvalidOid { .. }));
    }
}
