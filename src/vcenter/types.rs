use serde::{Deserialize, Serialize};

// --- Management API types ---

/// Every API response arrives wrapped in a {"value": ...} envelope
#[derive(Debug, Deserialize)]
pub struct ValueEnvelope<T> {
    pub value: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster: String,
    pub name: String,
    #[serde(default)]
    pub ha_enabled: bool,
    #[serde(default)]
    pub drs_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostSummary {
    pub host: String,
    pub name: String,
    #[serde(default)]
    pub connection_state: String,
    #[serde(default)]
    pub power_state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicalAdapter {
    pub device: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub mac_address: String,
    #[serde(default)]
    pub driver: String,
    /// None while the link is down
    #[serde(default)]
    pub speed_mb: Option<i64>,
    #[serde(default)]
    pub full_duplex: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamingPolicy {
    #[serde(default)]
    pub active: Vec<String>,
    #[serde(default)]
    pub standby: Vec<String>,
}

/// Per-host standard switch, owning physical uplinks directly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualSwitch {
    pub name: String,
    #[serde(default)]
    pub key: String,
    /// Physical adapter references, either bare device names or inventory keys
    #[serde(default)]
    pub uplinks: Vec<String>,
    #[serde(default)]
    pub num_ports: i32,
    #[serde(default)]
    pub mtu: i32,
    #[serde(default)]
    pub teaming: TeamingPolicy,
}

/// Per-host footprint of a distributed switch, keyed by switch identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxySwitch {
    pub dvs_uuid: String,
    #[serde(default)]
    pub dvs_name: String,
    #[serde(default)]
    pub uplinks: Vec<String>,
    #[serde(default)]
    pub mtu: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributedSwitch {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub uplink_port_names: Vec<String>,
    #[serde(default)]
    pub port_groups: Vec<DistributedPortGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributedPortGroup {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub vlan: Option<VlanSpec>,
}

/// VLAN configuration of a distributed port group
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VlanSpec {
    Static {
        vlan_id: i32,
    },
    Trunk {
        #[serde(default)]
        ranges: Vec<VlanRange>,
    },
    Private {
        primary_vlan_id: i32,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VlanRange {
    pub start: i32,
    pub end: i32,
}

/// Standard port group, bound to a standard switch by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortGroup {
    pub name: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub vlan_id: Option<i32>,
    #[serde(default)]
    pub vswitch: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributedPortConnection {
    pub switch_uuid: String,
    #[serde(default)]
    pub port_group_key: String,
}

/// Kernel network interface (vmk device)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelAdapter {
    pub device: String,
    /// Standard binding: the port group name
    #[serde(default)]
    pub port_group: Option<String>,
    /// Distributed binding: switch identity plus port group key
    #[serde(default)]
    pub distributed_port: Option<DistributedPortConnection>,
    #[serde(default)]
    pub mac_address: String,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub subnet_mask: String,
    #[serde(default)]
    pub dhcp: bool,
    #[serde(default)]
    pub mtu: i32,
    #[serde(default)]
    pub services: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DnsConfig {
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub domain_name: String,
    #[serde(default)]
    pub servers: Vec<String>,
    #[serde(default)]
    pub search_domains: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    pub network: String,
    #[serde(default)]
    pub prefix_length: i32,
    #[serde(default)]
    pub gateway: String,
    #[serde(default)]
    pub device: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirewallRuleset {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub all_ip: bool,
    #[serde(default)]
    pub allowed_ips: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeConfig {
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub ntp_servers: Vec<String>,
    #[serde(default)]
    pub service_enabled: bool,
    #[serde(default)]
    pub service_running: bool,
}

/// Switch-side identity learned for a physical adapter via CDP or LLDP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborInfo {
    pub device: String,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub peer_device: String,
    #[serde(default)]
    pub peer_port: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub management_address: String,
}

// --- Collected host state ---

/// Everything fetched for one host, before reconciliation.
/// `distributed_switches` holds only the definitions proxied on this host.
#[derive(Debug, Clone, Default)]
pub struct HostNetwork {
    pub physical_adapters: Vec<PhysicalAdapter>,
    pub virtual_switches: Vec<VirtualSwitch>,
    pub proxy_switches: Vec<ProxySwitch>,
    pub port_groups: Vec<PortGroup>,
    pub kernel_adapters: Vec<KernelAdapter>,
    pub distributed_switches: Vec<DistributedSwitch>,
    pub dns: DnsConfig,
    pub routes: Vec<RouteEntry>,
    pub firewall_rulesets: Vec<FirewallRuleset>,
    pub time: TimeConfig,
    pub neighbors: Vec<NeighborInfo>,
}
