use anyhow::Result;

use super::types::{DistributedSwitch, HostNetwork, HostSummary};
use super::Inventory;

/// Fetch one host's complete network inventory.
///
/// The switch/adapter/port-group fetches are required: without them there is
/// no topology to report, so their failure fails the host. The service-level
/// fetches (DNS, routes, firewall, time sync, neighbor hints) are optional
/// and degrade to an empty section with a warning.
pub async fn collect_host(
    inventory: &dyn Inventory,
    host: &HostSummary,
    distributed_switches: &[DistributedSwitch],
) -> Result<HostNetwork> {
    let host_id = &host.host;

    let physical_adapters = inventory
        .list_physical_adapters(host_id)
        .await
        .map_err(|e| anyhow::anyhow!("physical adapters: {}", e))?;
    let virtual_switches = inventory
        .list_virtual_switches(host_id)
        .await
        .map_err(|e| anyhow::anyhow!("virtual switches: {}", e))?;
    let proxy_switches = inventory
        .list_proxy_switches(host_id)
        .await
        .map_err(|e| anyhow::anyhow!("proxy switches: {}", e))?;
    let port_groups = inventory
        .list_port_groups(host_id)
        .await
        .map_err(|e| anyhow::anyhow!("port groups: {}", e))?;
    let kernel_adapters = inventory
        .list_kernel_adapters(host_id)
        .await
        .map_err(|e| anyhow::anyhow!("kernel adapters: {}", e))?;

    let dns = match inventory.get_dns_config(host_id).await {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!("{}: DNS config unavailable: {}", host.name, e);
            Default::default()
        }
    };
    let routes = match inventory.list_routes(host_id).await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!("{}: routes unavailable: {}", host.name, e);
            Vec::new()
        }
    };
    let firewall_rulesets = match inventory.list_firewall_rulesets(host_id).await {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!("{}: firewall rulesets unavailable: {}", host.name, e);
            Vec::new()
        }
    };
    let time = match inventory.get_time_config(host_id).await {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!("{}: time config unavailable: {}", host.name, e);
            Default::default()
        }
    };
    let neighbors = match inventory.list_neighbors(host_id).await {
        Ok(n) => n,
        Err(e) => {
            tracing::warn!("{}: neighbor discovery unavailable: {}", host.name, e);
            Vec::new()
        }
    };

    // Keep only the distributed switch definitions proxied on this host
    let distributed_switches: Vec<DistributedSwitch> = distributed_switches
        .iter()
        .filter(|d| proxy_switches.iter().any(|p| p.dvs_uuid == d.uuid))
        .cloned()
        .collect();

    Ok(HostNetwork {
        physical_adapters,
        virtual_switches,
        proxy_switches,
        port_groups,
        kernel_adapters,
        distributed_switches,
        dns,
        routes,
        firewall_rulesets,
        time,
        neighbors,
    })
}
