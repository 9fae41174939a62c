//! Production probe: open a client and fetch `sysDescr.0`.

use std::time::Duration;

use async_snmp::transport::UdpTransport;
use async_snmp::{Client, Oid};

use crate::endpoint::{Endpoint, ProtocolVersion};
use crate::error::Result;
use crate::establish::Probe;

/// Well-known probe identifier: SNMPv2-MIB sysDescr.0.
fn sys_descr() -> Oid {
    Oid::from_slice(&[1, 3, 6, 1, 2, 1, 1, 1, 0])
}

/// Connect-and-probe against a real agent.
///
/// Each attempt builds a fresh client, so state from a failed attempt is
/// never reused. Transport-level retries are disabled; the establishment
/// loop owns all retrying.
pub struct AgentProbe {
    endpoint: Endpoint,
    timeout: Duration,
}

impl AgentProbe {
    pub fn new(endpoint: Endpoint, timeout: Duration) -> Self {
        Self { endpoint, timeout }
    }
}

impl Probe for AgentProbe {
    type Handle = Client<UdpTransport>;

    async fn attempt(&mut self) -> Result<Self::Handle> {
        let client = match self.endpoint.version {
            ProtocolVersion::V1 => {
                Client::v1(self.endpoint.address())
                    .community(self.endpoint.community.as_bytes())
                    .timeout(self.timeout)
                    .retries(0)
                    .connect()
                    .await?
            }
            ProtocolVersion::V2c => {
                Client::v2c(self.endpoint.address())
                    .community(self.endpoint.community.as_bytes())
                    .timeout(self.timeout)
                    .retries(0)
                    .connect()
                    .await?
            }
        };

        client.get_many(&[sys_descr()]).await?;
        Ok(client)
    }
}
