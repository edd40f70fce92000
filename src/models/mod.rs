use serde::Serialize;

/// Canonical switch kind values
pub mod switch_kind {
    pub const STANDARD: &str = "standard";
    pub const DISTRIBUTED: &str = "distributed";
}

/// Sentinel cell values used when a lookup cannot be resolved
pub mod placeholder {
    /// An empty relationship (adapter with no switch, switch with no uplink)
    pub const NONE: &str = "none";
    /// A reference that exists but cannot be resolved (dangling VLAN, unknown switch)
    pub const UNKNOWN: &str = "unknown";
    /// An optional attribute the server did not report
    pub const EMPTY: &str = "-";
}

/// One physical adapter with the switches that claim it
#[derive(Debug, Clone, Serialize)]
pub struct AdapterRow {
    pub device: String,
    pub mac: String,
    pub speed: String,
    pub duplex: String,
    pub driver: String,
    /// Comma-joined switch names, or "none"
    pub switches: String,
    pub neighbor: String,
    pub neighbor_protocol: String,
}

/// One virtual switch (either kind) with its resolved uplinks
#[derive(Debug, Clone, Serialize)]
pub struct SwitchRow {
    pub name: String,
    pub kind: String,
    /// Comma-joined uplink device names, or "none"
    pub uplinks: String,
    pub active_uplinks: String,
    pub standby_uplinks: String,
    pub mtu: String,
    pub ports: String,
    pub version: String,
}

/// One kernel interface with its resolved switch, port group and VLAN
#[derive(Debug, Clone, Serialize)]
pub struct KernelRow {
    pub device: String,
    pub ip: String,
    pub mask: String,
    pub mac: String,
    pub mtu: String,
    pub addressing: String,
    pub services: String,
    pub switch: String,
    pub port_group: String,
    pub vlan: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortGroupRow {
    pub name: String,
    pub switch: String,
    pub kind: String,
    pub vlan: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteRow {
    pub network: String,
    pub gateway: String,
    pub device: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FirewallRow {
    pub name: String,
    pub state: String,
    pub allowed: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DnsRow {
    pub hostname: String,
    pub domain: String,
    pub servers: String,
    pub search_domains: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TimeRow {
    pub protocol: String,
    pub servers: String,
    pub status: String,
}

/// Fully reconciled network topology for one host, ready to render
#[derive(Debug, Clone, Serialize)]
pub struct HostTopology {
    pub host_name: String,
    pub adapters: Vec<AdapterRow>,
    pub switches: Vec<SwitchRow>,
    pub kernel_interfaces: Vec<KernelRow>,
    pub port_groups: Vec<PortGroupRow>,
    pub dns: DnsRow,
    pub routes: Vec<RouteRow>,
    pub firewall: Vec<FirewallRow>,
    pub time_sync: TimeRow,
}

/// Outcome of one report run
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub generated: i32,
    pub skipped: i32,
    pub failed: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}
