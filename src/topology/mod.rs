use std::collections::HashMap;

use crate::models::{
    placeholder, switch_kind, AdapterRow, DnsRow, FirewallRow, HostTopology, KernelRow,
    PortGroupRow, RouteRow, SwitchRow, TimeRow,
};
use crate::utils::{format_speed, natural_cmp, normalize_mac};
use crate::vcenter::types::{
    HostNetwork, KernelAdapter, NeighborInfo, PortGroup, ProxySwitch, VlanSpec,
};

/// Reconcile one host's raw network inventory into the report topology:
/// physical adapters joined to the switches that claim them, kernel
/// interfaces joined to their switch/port group/VLAN, plus the flat
/// service tables. Pure data transformation; unresolvable references
/// degrade to sentinel values instead of failing.
pub fn reconcile(host_name: &str, net: &HostNetwork) -> HostTopology {
    let dvs_names: HashMap<&str, &str> = net
        .distributed_switches
        .iter()
        .map(|d| (d.uuid.as_str(), d.name.as_str()))
        .collect();

    let proxy_display_name = |p: &ProxySwitch| -> String {
        if let Some(name) = dvs_names.get(p.dvs_uuid.as_str()) {
            (*name).to_string()
        } else if !p.dvs_name.is_empty() {
            p.dvs_name.clone()
        } else {
            p.dvs_uuid.clone()
        }
    };

    // Physical device -> names of switches claiming it. Standard switches
    // claim through their direct uplink list, distributed switches through
    // the host's proxy keyed by switch identity.
    let mut claims: HashMap<String, Vec<String>> = HashMap::new();
    for sw in &net.virtual_switches {
        for uplink in &sw.uplinks {
            claims
                .entry(uplink_device(uplink).to_string())
                .or_default()
                .push(sw.name.clone());
        }
    }
    for proxy in &net.proxy_switches {
        let name = proxy_display_name(proxy);
        for uplink in &proxy.uplinks {
            claims
                .entry(uplink_device(uplink).to_string())
                .or_default()
                .push(name.clone());
        }
    }

    let neighbors: HashMap<&str, &NeighborInfo> =
        net.neighbors.iter().map(|n| (n.device.as_str(), n)).collect();

    // --- Physical adapters ---

    let mut adapters: Vec<AdapterRow> = net
        .physical_adapters
        .iter()
        .map(|pnic| {
            let mut switches = claims.get(pnic.device.as_str()).cloned().unwrap_or_default();
            switches.sort();
            switches.dedup();

            let (neighbor, neighbor_protocol) = match neighbors.get(pnic.device.as_str()) {
                Some(n) => (format_neighbor(n), or_empty(&n.protocol)),
                None => (placeholder::EMPTY.to_string(), placeholder::EMPTY.to_string()),
            };

            AdapterRow {
                device: pnic.device.clone(),
                mac: if pnic.mac_address.is_empty() {
                    placeholder::EMPTY.to_string()
                } else {
                    normalize_mac(&pnic.mac_address)
                },
                speed: format_speed(pnic.speed_mb),
                duplex: match pnic.full_duplex {
                    Some(true) => "full".to_string(),
                    Some(false) => "half".to_string(),
                    None => placeholder::EMPTY.to_string(),
                },
                driver: or_empty(&pnic.driver),
                switches: join_or(&switches, placeholder::NONE),
                neighbor,
                neighbor_protocol,
            }
        })
        .collect();
    adapters.sort_by(|a, b| natural_cmp(&a.device, &b.device));

    // --- Virtual switches (both kinds) ---

    let mut switches: Vec<SwitchRow> = Vec::new();
    for sw in &net.virtual_switches {
        let uplinks = resolve_uplinks(&sw.uplinks);
        let active = resolve_uplinks(&sw.teaming.active);
        let standby = resolve_uplinks(&sw.teaming.standby);
        switches.push(SwitchRow {
            name: sw.name.clone(),
            kind: switch_kind::STANDARD.to_string(),
            uplinks: join_or(&uplinks, placeholder::NONE),
            active_uplinks: join_or(&active, placeholder::EMPTY),
            standby_uplinks: join_or(&standby, placeholder::EMPTY),
            mtu: positive_or_empty(sw.mtu),
            ports: positive_or_empty(sw.num_ports),
            version: placeholder::EMPTY.to_string(),
        });
    }
    for proxy in &net.proxy_switches {
        let def = net
            .distributed_switches
            .iter()
            .find(|d| d.uuid == proxy.dvs_uuid);
        let uplinks = resolve_uplinks(&proxy.uplinks);
        switches.push(SwitchRow {
            name: proxy_display_name(proxy),
            kind: switch_kind::DISTRIBUTED.to_string(),
            uplinks: join_or(&uplinks, placeholder::NONE),
            // teaming is configured per distributed port group, not per switch
            active_uplinks: placeholder::EMPTY.to_string(),
            standby_uplinks: placeholder::EMPTY.to_string(),
            mtu: positive_or_empty(proxy.mtu),
            ports: placeholder::EMPTY.to_string(),
            version: def
                .map(|d| or_empty(&d.version))
                .unwrap_or_else(|| placeholder::EMPTY.to_string()),
        });
    }
    switches.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.kind.cmp(&b.kind)));

    // --- Kernel interfaces ---

    let std_port_groups: HashMap<&str, &PortGroup> =
        net.port_groups.iter().map(|p| (p.name.as_str(), p)).collect();

    let mut kernel_interfaces: Vec<KernelRow> = net
        .kernel_adapters
        .iter()
        .map(|vmk| {
            let (switch, port_group, vlan) = resolve_binding(vmk, &std_port_groups, net);
            KernelRow {
                device: vmk.device.clone(),
                ip: or_empty(&vmk.ip_address),
                mask: or_empty(&vmk.subnet_mask),
                mac: if vmk.mac_address.is_empty() {
                    placeholder::EMPTY.to_string()
                } else {
                    normalize_mac(&vmk.mac_address)
                },
                mtu: positive_or_empty(vmk.mtu),
                addressing: if vmk.dhcp { "dhcp" } else { "static" }.to_string(),
                services: join_or(&vmk.services, placeholder::EMPTY),
                switch,
                port_group,
                vlan,
            }
        })
        .collect();
    kernel_interfaces.sort_by(|a, b| natural_cmp(&a.device, &b.device));

    // --- Port groups ---

    let mut port_groups: Vec<PortGroupRow> = net
        .port_groups
        .iter()
        .map(|pg| PortGroupRow {
            name: pg.name.clone(),
            switch: if pg.vswitch.is_empty() {
                placeholder::UNKNOWN.to_string()
            } else {
                pg.vswitch.clone()
            },
            kind: switch_kind::STANDARD.to_string(),
            vlan: vlan_display(pg.vlan_id),
        })
        .collect();
    for dvs in &net.distributed_switches {
        for pg in &dvs.port_groups {
            port_groups.push(PortGroupRow {
                name: pg.name.clone(),
                switch: dvs.name.clone(),
                kind: switch_kind::DISTRIBUTED.to_string(),
                vlan: dv_vlan_display(pg.vlan.as_ref()),
            });
        }
    }
    port_groups.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.switch.cmp(&b.switch)));

    // --- Host services ---

    let dns = DnsRow {
        hostname: or_empty(&net.dns.hostname),
        domain: or_empty(&net.dns.domain_name),
        servers: join_or(&net.dns.servers, placeholder::EMPTY),
        search_domains: join_or(&net.dns.search_domains, placeholder::EMPTY),
    };

    let mut routes: Vec<RouteRow> = net
        .routes
        .iter()
        .map(|r| RouteRow {
            network: if r.network.is_empty() {
                placeholder::EMPTY.to_string()
            } else {
                format!("{}/{}", r.network, r.prefix_length)
            },
            gateway: or_empty(&r.gateway),
            device: or_empty(&r.device),
        })
        .collect();
    routes.sort_by(|a, b| a.network.cmp(&b.network).then_with(|| a.gateway.cmp(&b.gateway)));

    let mut firewall: Vec<FirewallRow> = net
        .firewall_rulesets
        .iter()
        .map(|rs| FirewallRow {
            name: if rs.label.is_empty() {
                rs.key.clone()
            } else {
                rs.label.clone()
            },
            state: if rs.enabled { "enabled" } else { "disabled" }.to_string(),
            allowed: if rs.all_ip {
                "all".to_string()
            } else {
                join_or(&rs.allowed_ips, placeholder::EMPTY)
            },
        })
        .collect();
    firewall.sort_by(|a, b| a.name.cmp(&b.name));

    let time_sync = TimeRow {
        protocol: or_empty(&net.time.protocol),
        servers: join_or(&net.time.ntp_servers, placeholder::EMPTY),
        status: match (net.time.service_enabled, net.time.service_running) {
            (_, true) => "running",
            (true, false) => "stopped",
            (false, false) => "disabled",
        }
        .to_string(),
    };

    HostTopology {
        host_name: host_name.to_string(),
        adapters,
        switches,
        kernel_interfaces,
        port_groups,
        dns,
        routes,
        firewall,
        time_sync,
    }
}

/// Reduce an uplink reference to its device name. The server reports
/// uplinks either as bare device names ("vmnic0") or as inventory keys
/// ("key-vim.host.PhysicalNic-vmnic0"); both spellings must resolve to
/// the same adapter.
fn uplink_device(reference: &str) -> &str {
    if reference.starts_with("key-") {
        reference.rsplit('-').next().unwrap_or(reference)
    } else {
        reference
    }
}

fn resolve_uplinks(references: &[String]) -> Vec<String> {
    references
        .iter()
        .map(|u| uplink_device(u).to_string())
        .collect()
}

/// Resolve a kernel interface to (switch, port group, VLAN). Dangling
/// references render "unknown" instead of failing the row.
fn resolve_binding(
    vmk: &KernelAdapter,
    std_port_groups: &HashMap<&str, &PortGroup>,
    net: &HostNetwork,
) -> (String, String, String) {
    if let Some(pg_name) = &vmk.port_group {
        return match std_port_groups.get(pg_name.as_str()) {
            Some(pg) => {
                let switch = if pg.vswitch.is_empty() {
                    placeholder::UNKNOWN.to_string()
                } else {
                    pg.vswitch.clone()
                };
                (switch, pg.name.clone(), vlan_display(pg.vlan_id))
            }
            None => (
                placeholder::UNKNOWN.to_string(),
                pg_name.clone(),
                placeholder::UNKNOWN.to_string(),
            ),
        };
    }

    if let Some(conn) = &vmk.distributed_port {
        let dvs = net
            .distributed_switches
            .iter()
            .find(|d| d.uuid == conn.switch_uuid);
        return match dvs {
            Some(dvs) => match dvs.port_groups.iter().find(|p| p.key == conn.port_group_key) {
                Some(pg) => (
                    dvs.name.clone(),
                    pg.name.clone(),
                    dv_vlan_display(pg.vlan.as_ref()),
                ),
                None => (
                    dvs.name.clone(),
                    or_empty(&conn.port_group_key),
                    placeholder::UNKNOWN.to_string(),
                ),
            },
            None => (
                placeholder::UNKNOWN.to_string(),
                or_empty(&conn.port_group_key),
                placeholder::UNKNOWN.to_string(),
            ),
        };
    }

    (
        placeholder::UNKNOWN.to_string(),
        placeholder::EMPTY.to_string(),
        placeholder::UNKNOWN.to_string(),
    )
}

/// Standard VLAN tag display: 0 untagged, 4095 trunks all VLANs.
fn vlan_display(vlan_id: Option<i32>) -> String {
    match vlan_id {
        None => placeholder::UNKNOWN.to_string(),
        Some(0) => placeholder::NONE.to_string(),
        Some(4095) => "trunk".to_string(),
        Some(n) if (1..=4094).contains(&n) => n.to_string(),
        Some(_) => placeholder::UNKNOWN.to_string(),
    }
}

fn dv_vlan_display(spec: Option<&VlanSpec>) -> String {
    match spec {
        None => placeholder::UNKNOWN.to_string(),
        Some(VlanSpec::Static { vlan_id }) => vlan_display(Some(*vlan_id)),
        Some(VlanSpec::Trunk { ranges }) => {
            if ranges.is_empty() {
                "trunk".to_string()
            } else {
                let parts: Vec<String> = ranges
                    .iter()
                    .map(|r| {
                        if r.start == r.end {
                            r.start.to_string()
                        } else {
                            format!("{}-{}", r.start, r.end)
                        }
                    })
                    .collect();
                format!("trunk ({})", parts.join(", "))
            }
        }
        Some(VlanSpec::Private { primary_vlan_id }) => format!("private {}", primary_vlan_id),
    }
}

fn format_neighbor(n: &NeighborInfo) -> String {
    match (n.peer_device.is_empty(), n.peer_port.is_empty()) {
        (false, false) => format!("{} ({})", n.peer_device, n.peer_port),
        (false, true) => n.peer_device.clone(),
        (true, false) => n.peer_port.clone(),
        (true, true) => placeholder::EMPTY.to_string(),
    }
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

fn or_empty(s: &str) -> String {
    if s.is_empty() {
        placeholder::EMPTY.to_string()
    } else {
        s.to_string()
    }
}

fn positive_or_empty(n: i32) -> String {
    if n > 0 {
        n.to_string()
    } else {
        placeholder::EMPTY.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcenter::types::{
        DistributedPortConnection, DistributedPortGroup, DistributedSwitch, PhysicalAdapter,
        TeamingPolicy, VirtualSwitch, VlanRange,
    };

    fn pnic(device: &str) -> PhysicalAdapter {
        PhysicalAdapter {
            device: device.to_string(),
            key: format!("key-vim.host.PhysicalNic-{}", device),
            mac_address: "AA:BB:CC:00:11:22".to_string(),
            driver: "ixgben".to_string(),
            speed_mb: Some(10000),
            full_duplex: Some(true),
        }
    }

    fn vswitch(name: &str, uplinks: &[&str]) -> VirtualSwitch {
        VirtualSwitch {
            name: name.to_string(),
            key: format!("key-vim.host.VirtualSwitch-{}", name),
            uplinks: uplinks.iter().map(|s| s.to_string()).collect(),
            num_ports: 128,
            mtu: 1500,
            teaming: TeamingPolicy::default(),
        }
    }

    fn proxy(uuid: &str, uplinks: &[&str]) -> ProxySwitch {
        ProxySwitch {
            dvs_uuid: uuid.to_string(),
            dvs_name: String::new(),
            uplinks: uplinks.iter().map(|s| s.to_string()).collect(),
            mtu: 9000,
        }
    }

    fn dvs(uuid: &str, name: &str, port_groups: Vec<DistributedPortGroup>) -> DistributedSwitch {
        DistributedSwitch {
            uuid: uuid.to_string(),
            name: name.to_string(),
            version: "8.0.0".to_string(),
            uplink_port_names: vec!["Uplink 1".to_string(), "Uplink 2".to_string()],
            port_groups,
        }
    }

    fn dv_pg(key: &str, name: &str, vlan: Option<VlanSpec>) -> DistributedPortGroup {
        DistributedPortGroup {
            key: key.to_string(),
            name: name.to_string(),
            vlan,
        }
    }

    fn std_pg(name: &str, vswitch: &str, vlan_id: Option<i32>) -> PortGroup {
        PortGroup {
            name: name.to_string(),
            key: format!("key-vim.host.PortGroup-{}", name),
            vlan_id,
            vswitch: vswitch.to_string(),
        }
    }

    fn vmk_on_pg(device: &str, pg: &str) -> KernelAdapter {
        KernelAdapter {
            device: device.to_string(),
            port_group: Some(pg.to_string()),
            distributed_port: None,
            mac_address: "00:50:56:00:00:01".to_string(),
            ip_address: "10.0.0.10".to_string(),
            subnet_mask: "255.255.255.0".to_string(),
            dhcp: false,
            mtu: 1500,
            services: vec!["management".to_string()],
        }
    }

    fn vmk_on_dvs(device: &str, switch_uuid: &str, pg_key: &str) -> KernelAdapter {
        KernelAdapter {
            device: device.to_string(),
            port_group: None,
            distributed_port: Some(DistributedPortConnection {
                switch_uuid: switch_uuid.to_string(),
                port_group_key: pg_key.to_string(),
            }),
            mac_address: "00:50:56:00:00:02".to_string(),
            ip_address: "10.0.1.10".to_string(),
            subnet_mask: "255.255.255.0".to_string(),
            dhcp: false,
            mtu: 9000,
            services: vec!["vmotion".to_string()],
        }
    }

    #[test]
    fn test_adapter_claimed_by_both_switch_kinds() {
        let net = HostNetwork {
            physical_adapters: vec![pnic("vmnic0"), pnic("vmnic1")],
            virtual_switches: vec![vswitch("vSwitch0", &["vmnic0"])],
            proxy_switches: vec![proxy("50 11 aa", &["key-vim.host.PhysicalNic-vmnic1"])],
            distributed_switches: vec![dvs("50 11 aa", "dvs-prod", vec![])],
            ..Default::default()
        };

        let topo = reconcile("esx01", &net);
        assert_eq!(topo.adapters[0].device, "vmnic0");
        assert_eq!(topo.adapters[0].switches, "vSwitch0");
        assert_eq!(topo.adapters[1].device, "vmnic1");
        assert_eq!(topo.adapters[1].switches, "dvs-prod");
    }

    #[test]
    fn test_adapter_claimed_by_zero_switches_reports_none() {
        let net = HostNetwork {
            physical_adapters: vec![pnic("vmnic3")],
            virtual_switches: vec![vswitch("vSwitch0", &["vmnic0"])],
            ..Default::default()
        };

        let topo = reconcile("esx01", &net);
        assert_eq!(topo.adapters[0].switches, "none");
    }

    #[test]
    fn test_switch_with_zero_uplinks_reports_none() {
        let net = HostNetwork {
            virtual_switches: vec![vswitch("vSwitch-internal", &[])],
            ..Default::default()
        };

        let topo = reconcile("esx01", &net);
        assert_eq!(topo.switches[0].uplinks, "none");
    }

    #[test]
    fn test_uplink_key_and_bare_name_resolve_alike() {
        let net = HostNetwork {
            physical_adapters: vec![pnic("vmnic0")],
            virtual_switches: vec![
                vswitch("vSwitch0", &["vmnic0"]),
                vswitch("vSwitch1", &["key-vim.host.PhysicalNic-vmnic0"]),
            ],
            ..Default::default()
        };

        let topo = reconcile("esx01", &net);
        assert_eq!(topo.adapters[0].switches, "vSwitch0, vSwitch1");
    }

    #[test]
    fn test_teaming_state_resolved_to_devices() {
        let mut sw = vswitch("vSwitch0", &["vmnic0", "vmnic1"]);
        sw.teaming = TeamingPolicy {
            active: vec!["key-vim.host.PhysicalNic-vmnic0".to_string()],
            standby: vec!["vmnic1".to_string()],
        };
        let net = HostNetwork {
            physical_adapters: vec![pnic("vmnic0"), pnic("vmnic1")],
            virtual_switches: vec![sw],
            ..Default::default()
        };

        let topo = reconcile("esx01", &net);
        assert_eq!(topo.switches[0].active_uplinks, "vmnic0");
        assert_eq!(topo.switches[0].standby_uplinks, "vmnic1");
    }

    #[test]
    fn test_kernel_interface_on_standard_port_group() {
        let net = HostNetwork {
            virtual_switches: vec![vswitch("vSwitch0", &["vmnic0"])],
            port_groups: vec![std_pg("Management Network", "vSwitch0", Some(120))],
            kernel_adapters: vec![vmk_on_pg("vmk0", "Management Network")],
            ..Default::default()
        };

        let topo = reconcile("esx01", &net);
        let row = &topo.kernel_interfaces[0];
        assert_eq!(row.switch, "vSwitch0");
        assert_eq!(row.port_group, "Management Network");
        assert_eq!(row.vlan, "120");
        assert_eq!(row.services, "management");
    }

    #[test]
    fn test_kernel_interface_on_distributed_port_group() {
        let net = HostNetwork {
            proxy_switches: vec![proxy("50 11 aa", &["vmnic2"])],
            distributed_switches: vec![dvs(
                "50 11 aa",
                "dvs-prod",
                vec![dv_pg(
                    "dvportgroup-101",
                    "vMotion",
                    Some(VlanSpec::Static { vlan_id: 77 }),
                )],
            )],
            kernel_adapters: vec![vmk_on_dvs("vmk1", "50 11 aa", "dvportgroup-101")],
            ..Default::default()
        };

        let topo = reconcile("esx01", &net);
        let row = &topo.kernel_interfaces[0];
        assert_eq!(row.switch, "dvs-prod");
        assert_eq!(row.port_group, "vMotion");
        assert_eq!(row.vlan, "77");
    }

    #[test]
    fn test_dangling_port_group_reference_degrades_to_unknown() {
        let net = HostNetwork {
            kernel_adapters: vec![vmk_on_pg("vmk0", "Ghost Network")],
            ..Default::default()
        };

        let topo = reconcile("esx01", &net);
        let row = &topo.kernel_interfaces[0];
        assert_eq!(row.switch, "unknown");
        assert_eq!(row.port_group, "Ghost Network");
        assert_eq!(row.vlan, "unknown");
    }

    #[test]
    fn test_unknown_distributed_switch_uuid_degrades_to_unknown() {
        let net = HostNetwork {
            kernel_adapters: vec![vmk_on_dvs("vmk1", "50 ff ff", "dvportgroup-9")],
            ..Default::default()
        };

        let topo = reconcile("esx01", &net);
        let row = &topo.kernel_interfaces[0];
        assert_eq!(row.switch, "unknown");
        assert_eq!(row.vlan, "unknown");
    }

    #[test]
    fn test_vlan_display_policy() {
        assert_eq!(vlan_display(Some(0)), "none");
        assert_eq!(vlan_display(Some(4095)), "trunk");
        assert_eq!(vlan_display(Some(42)), "42");
        assert_eq!(vlan_display(Some(5000)), "unknown");
        assert_eq!(vlan_display(None), "unknown");
    }

    #[test]
    fn test_dv_vlan_display_policy() {
        assert_eq!(
            dv_vlan_display(Some(&VlanSpec::Trunk {
                ranges: vec![
                    VlanRange { start: 0, end: 100 },
                    VlanRange { start: 200, end: 200 },
                ]
            })),
            "trunk (0-100, 200)"
        );
        assert_eq!(dv_vlan_display(Some(&VlanSpec::Trunk { ranges: vec![] })), "trunk");
        assert_eq!(
            dv_vlan_display(Some(&VlanSpec::Private { primary_vlan_id: 300 })),
            "private 300"
        );
        assert_eq!(dv_vlan_display(None), "unknown");
    }

    #[test]
    fn test_neighbor_hint_joined_by_device() {
        let net = HostNetwork {
            physical_adapters: vec![pnic("vmnic0"), pnic("vmnic1")],
            neighbors: vec![NeighborInfo {
                device: "vmnic0".to_string(),
                protocol: "cdp".to_string(),
                peer_device: "tor-a.example.com".to_string(),
                peer_port: "GigabitEthernet1/0/12".to_string(),
                platform: "C9300".to_string(),
                management_address: "10.0.254.1".to_string(),
            }],
            ..Default::default()
        };

        let topo = reconcile("esx01", &net);
        assert_eq!(
            topo.adapters[0].neighbor,
            "tor-a.example.com (GigabitEthernet1/0/12)"
        );
        assert_eq!(topo.adapters[0].neighbor_protocol, "cdp");
        assert_eq!(topo.adapters[1].neighbor, "-");
        assert_eq!(topo.adapters[1].neighbor_protocol, "-");
    }

    #[test]
    fn test_adapters_sorted_in_natural_device_order() {
        let net = HostNetwork {
            physical_adapters: vec![pnic("vmnic10"), pnic("vmnic2"), pnic("vmnic0")],
            ..Default::default()
        };

        let topo = reconcile("esx01", &net);
        let order: Vec<&str> = topo.adapters.iter().map(|a| a.device.as_str()).collect();
        assert_eq!(order, vec!["vmnic0", "vmnic2", "vmnic10"]);
    }

    #[test]
    fn test_port_group_table_covers_both_kinds() {
        let net = HostNetwork {
            virtual_switches: vec![vswitch("vSwitch0", &["vmnic0"])],
            port_groups: vec![std_pg("VM Network", "vSwitch0", Some(0))],
            proxy_switches: vec![proxy("50 11 aa", &["vmnic1"])],
            distributed_switches: vec![dvs(
                "50 11 aa",
                "dvs-prod",
                vec![dv_pg(
                    "dvportgroup-200",
                    "Backbone",
                    Some(VlanSpec::Trunk { ranges: vec![] }),
                )],
            )],
            ..Default::default()
        };

        let topo = reconcile("esx01", &net);
        assert_eq!(topo.port_groups.len(), 2);
        assert_eq!(topo.port_groups[0].name, "Backbone");
        assert_eq!(topo.port_groups[0].kind, "distributed");
        assert_eq!(topo.port_groups[0].vlan, "trunk");
        assert_eq!(topo.port_groups[1].name, "VM Network");
        assert_eq!(topo.port_groups[1].kind, "standard");
        assert_eq!(topo.port_groups[1].vlan, "none");
    }

    #[test]
    fn test_proxy_without_definition_falls_back_to_uuid() {
        let net = HostNetwork {
            physical_adapters: vec![pnic("vmnic1")],
            proxy_switches: vec![proxy("50 ab cd", &["vmnic1"])],
            ..Default::default()
        };

        let topo = reconcile("esx01", &net);
        assert_eq!(topo.switches[0].name, "50 ab cd");
        assert_eq!(topo.switches[0].version, "-");
        assert_eq!(topo.adapters[0].switches, "50 ab cd");
    }

    #[test]
    fn test_time_sync_status() {
        let mut net = HostNetwork::default();
        net.time.protocol = "ntp".to_string();
        net.time.service_enabled = true;
        net.time.service_running = false;
        assert_eq!(reconcile("esx01", &net).time_sync.status, "stopped");

        net.time.service_running = true;
        assert_eq!(reconcile("esx01", &net).time_sync.status, "running");

        net.time.service_enabled = false;
        net.time.service_running = false;
        assert_eq!(reconcile("esx01", &net).time_sync.status, "disabled");
    }

    #[test]
    fn test_firewall_allowed_sources() {
        let net = HostNetwork {
            firewall_rulesets: vec![
                crate::vcenter::types::FirewallRuleset {
                    key: "sshServer".to_string(),
                    label: "SSH Server".to_string(),
                    enabled: true,
                    all_ip: false,
                    allowed_ips: vec!["10.0.0.0/24".to_string()],
                },
                crate::vcenter::types::FirewallRuleset {
                    key: "ntpClient".to_string(),
                    label: String::new(),
                    enabled: false,
                    all_ip: true,
                    allowed_ips: vec![],
                },
            ],
            ..Default::default()
        };

        let topo = reconcile("esx01", &net);
        assert_eq!(topo.firewall[0].name, "SSH Server");
        assert_eq!(topo.firewall[0].state, "enabled");
        assert_eq!(topo.firewall[0].allowed, "10.0.0.0/24");
        assert_eq!(topo.firewall[1].name, "ntpClient");
        assert_eq!(topo.firewall[1].state, "disabled");
        assert_eq!(topo.firewall[1].allowed, "all");
    }

    #[test]
    fn test_reconcile_is_deterministic() {
        let net = HostNetwork {
            physical_adapters: vec![pnic("vmnic1"), pnic("vmnic0")],
            virtual_switches: vec![vswitch("vSwitch0", &["vmnic0", "vmnic1"])],
            port_groups: vec![
                std_pg("B Network", "vSwitch0", Some(2)),
                std_pg("A Network", "vSwitch0", Some(1)),
            ],
            kernel_adapters: vec![vmk_on_pg("vmk0", "A Network")],
            ..Default::default()
        };

        let first = serde_json::to_string(&reconcile("esx01", &net)).unwrap();
        let second = serde_json::to_string(&reconcile("esx01", &net)).unwrap();
        assert_eq!(first, second);
    }
}
