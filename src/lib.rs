//! agentwalk: wait for an SNMP agent, then walk a MIB subtree.
//!
//! A small operational tool with two sequential phases:
//!
//! 1. **Establish** — a bounded fixed-delay retry loop that opens a client
//!    and verifies the agent answers a `sysDescr.0` probe.
//! 2. **Walk** — a bulk traversal of the configured subtree, printing one
//!    typed line per entry as it arrives.
//!
//! The SNMP protocol itself (BER, PDUs, transports, v3 security) is handled
//! by the `async-snmp` client library; this crate only orchestrates it.

pub mod cli;
pub mod endpoint;
pub mod error;
pub mod establish;
pub mod probe;
pub mod render;
pub mod walk;

pub use error::{Error, Result};
