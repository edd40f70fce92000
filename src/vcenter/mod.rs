pub mod client;
pub mod collect;
pub mod types;

pub use client::VcClient;
pub use collect::collect_host;

use anyhow::Result;

use types::{
    DnsConfig, FirewallRuleset, KernelAdapter, NeighborInfo, PhysicalAdapter, PortGroup,
    ProxySwitch, RouteEntry, TimeConfig, VirtualSwitch,
};

/// Read-only view of a host's network inventory. Implemented by [`VcClient`]
/// against the management server and by fixtures in tests.
#[async_trait::async_trait]
pub trait Inventory {
    async fn list_physical_adapters(&self, host_id: &str) -> Result<Vec<PhysicalAdapter>>;
    async fn list_virtual_switches(&self, host_id: &str) -> Result<Vec<VirtualSwitch>>;
    async fn list_proxy_switches(&self, host_id: &str) -> Result<Vec<ProxySwitch>>;
    async fn list_port_groups(&self, host_id: &str) -> Result<Vec<PortGroup>>;
    async fn list_kernel_adapters(&self, host_id: &str) -> Result<Vec<KernelAdapter>>;
    async fn get_dns_config(&self, host_id: &str) -> Result<DnsConfig>;
    async fn list_routes(&self, host_id: &str) -> Result<Vec<RouteEntry>>;
    async fn list_firewall_rulesets(&self, host_id: &str) -> Result<Vec<FirewallRuleset>>;
    async fn get_time_config(&self, host_id: &str) -> Result<TimeConfig>;
    async fn list_neighbors(&self, host_id: &str) -> Result<Vec<NeighborInfo>>;
}
