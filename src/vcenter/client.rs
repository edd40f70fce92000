use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

use super::types::*;

/// Session token header expected by the management server
const SESSION_HEADER: &str = "vmware-api-session-id";

/// Management server API client
pub struct VcClient {
    base_url: String,
    user: String,
    pass: String,
    session: Option<String>,
    client: Client,
}

impl VcClient {
    pub fn new(
        url: String,
        user: String,
        pass: String,
        timeout_secs: u64,
        insecure_tls: bool,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .danger_accept_invalid_certs(insecure_tls)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            base_url: url.trim_end_matches('/').to_string(),
            user,
            pass,
            session: None,
            client,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/rest{}", self.base_url, path)
    }

    fn session_token(&self) -> Result<&str> {
        self.session
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("No active session (login first)"))
    }

    /// Open an API session; the returned token authenticates all later calls
    pub async fn login(&mut self) -> Result<()> {
        let resp = self
            .client
            .post(self.api_url("/com/vmware/cis/session"))
            .basic_auth(&self.user, Some(&self.pass))
            .header("Accept", "application/json")
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Login failed ({}): {}", status, body));
        }

        let envelope: ValueEnvelope<String> = resp.json().await?;
        self.session = Some(envelope.value);
        Ok(())
    }

    /// Close the API session. Best-effort: the report already exists by the
    /// time this runs, so a failure is only logged.
    pub async fn logout(&mut self) {
        let Some(token) = self.session.take() else {
            return;
        };

        match self
            .client
            .delete(self.api_url("/com/vmware/cis/session"))
            .header(SESSION_HEADER, &token)
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => {}
            Ok(resp) => tracing::warn!("Logout returned {}", resp.status()),
            Err(e) => tracing::warn!("Logout failed: {}", e),
        }
    }

    /// Helper to GET an endpoint and unwrap the {"value": ...} envelope
    async fn get_value<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let resp = self
            .client
            .get(self.api_url(endpoint))
            .header(SESSION_HEADER, self.session_token()?)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("API error {} on {}: {}", status, endpoint, body));
        }

        let envelope: ValueEnvelope<T> = resp.json().await?;
        Ok(envelope.value)
    }

    fn host_path(&self, host_id: &str, tail: &str) -> String {
        format!("/vcenter/host/{}/{}", host_id, tail)
    }

    // --- Inventory enumeration ---

    pub async fn list_clusters(&self) -> Result<Vec<ClusterSummary>> {
        self.get_value("/vcenter/cluster").await
    }

    pub async fn list_hosts(&self, cluster: Option<&str>) -> Result<Vec<HostSummary>> {
        match cluster {
            Some(id) => {
                self.get_value(&format!("/vcenter/host?filter.clusters={}", id))
                    .await
            }
            None => self.get_value("/vcenter/host").await,
        }
    }

    /// Cluster-wide distributed switch definitions, including port groups
    pub async fn list_distributed_switches(&self) -> Result<Vec<DistributedSwitch>> {
        self.get_value("/vcenter/network/distributed-switch").await
    }
}

// Per-host fetchers live behind the Inventory seam so collection can run
// against fixtures.
#[async_trait::async_trait]
impl super::Inventory for VcClient {
    async fn list_physical_adapters(&self, host_id: &str) -> Result<Vec<PhysicalAdapter>> {
        self.get_value(&self.host_path(host_id, "network/physical-adapters"))
            .await
    }

    async fn list_virtual_switches(&self, host_id: &str) -> Result<Vec<VirtualSwitch>> {
        self.get_value(&self.host_path(host_id, "network/virtual-switches"))
            .await
    }

    async fn list_proxy_switches(&self, host_id: &str) -> Result<Vec<ProxySwitch>> {
        self.get_value(&self.host_path(host_id, "network/proxy-switches"))
            .await
    }

    async fn list_port_groups(&self, host_id: &str) -> Result<Vec<PortGroup>> {
        self.get_value(&self.host_path(host_id, "network/port-groups"))
            .await
    }

    async fn list_kernel_adapters(&self, host_id: &str) -> Result<Vec<KernelAdapter>> {
        self.get_value(&self.host_path(host_id, "network/kernel-adapters"))
            .await
    }

    async fn get_dns_config(&self, host_id: &str) -> Result<DnsConfig> {
        self.get_value(&self.host_path(host_id, "network/dns")).await
    }

    async fn list_routes(&self, host_id: &str) -> Result<Vec<RouteEntry>> {
        self.get_value(&self.host_path(host_id, "network/routes"))
            .await
    }

    async fn list_firewall_rulesets(&self, host_id: &str) -> Result<Vec<FirewallRuleset>> {
        self.get_value(&self.host_path(host_id, "firewall/rulesets"))
            .await
    }

    async fn get_time_config(&self, host_id: &str) -> Result<TimeConfig> {
        self.get_value(&self.host_path(host_id, "time")).await
    }

    async fn list_neighbors(&self, host_id: &str) -> Result<Vec<NeighborInfo>> {
        self.get_value(&self.host_path(host_id, "network/neighbors"))
            .await
    }
}
