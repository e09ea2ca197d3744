// Reachability check against the remote ledger endpoint.

use std::time::Duration;

use async_trait::async_trait;

/// Probe timeout; a slow endpoint is treated the same as an unreachable one.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Answers whether the network path to the ledger is usable right now.
///
/// No caching between calls: a flaky connection may legitimately answer
/// differently a few lines apart.
#[async_trait]
pub trait Connectivity: Send + Sync {
    async fn is_connected(&self) -> bool;
}

/// Plain HTTP GET probe against the RPC base URL.
pub struct HttpProbe {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpProbe {
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(PROBE_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl Connectivity for HttpProbe {
    /// True only on a response with a success status. Timeouts, DNS failures
    /// and refused connections all collapse to false.
    async fn is_connected(&self) -> bool {
        match self.client.get(&self.endpoint).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}
