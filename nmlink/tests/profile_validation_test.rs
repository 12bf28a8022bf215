//! Tests for the public profile-building API.
//!
//! These exercise the documented profile shapes through the crate's public
//! surface, the way an embedding application would use them before handing
//! the result to `NetworkManager::add_connection`.

use nmlink::builders::{
    DEFAULT_BRIDGE_AP_SSID, access_point_profile, bridge_master_profile, bridge_port_profile,
    wifi_client_profile,
};
use nmlink::{BridgeMember, ConnectionError, SettingValue, WirelessNetwork};

fn str_value(profile: &nmlink::ConnectionProfile, group: &str, key: &str) -> String {
    profile
        .get(group, key)
        .and_then(SettingValue::as_str)
        .unwrap_or_else(|| panic!("missing {group}.{key}"))
        .to_string()
}

#[test]
fn wifi_client_profile_round_trips_ssid_bytes() {
    let network = WirelessNetwork::new("wlan0", "Net1", Some("secret123".into()));
    let profile = wifi_client_profile(&network).unwrap();

    let ssid = profile
        .get("802-11-wireless", "ssid")
        .and_then(SettingValue::as_bytes)
        .unwrap();
    assert_eq!(std::str::from_utf8(ssid).unwrap(), "Net1");
    assert_eq!(str_value(&profile, "ipv4", "method"), "auto");
    assert_eq!(str_value(&profile, "802-11-wireless", "mode"), "infrastructure");
}

#[test]
fn access_point_profile_uses_shared_ipv4() {
    let network = WirelessNetwork::new("wlan0", "HotspotX", Some("pw123456".into()));
    let profile = access_point_profile(&network).unwrap();

    assert_eq!(str_value(&profile, "802-11-wireless", "mode"), "ap");
    assert_eq!(str_value(&profile, "ipv4", "method"), "shared");
    assert_eq!(str_value(&profile, "ipv6", "method"), "ignore");
}

#[test]
fn profiles_are_deterministic() {
    let network = WirelessNetwork::new("wlan0", "Net1", Some("secret123".into()));
    assert_eq!(
        wifi_client_profile(&network).unwrap(),
        wifi_client_profile(&network).unwrap()
    );
    assert_eq!(
        bridge_master_profile("br0").unwrap(),
        bridge_master_profile("br0").unwrap()
    );
}

#[test]
fn bridge_master_is_valid_without_members() {
    let profile = bridge_master_profile("br0").unwrap();
    assert_eq!(str_value(&profile, "connection", "type"), "bridge");
    assert_eq!(str_value(&profile, "connection", "interface-name"), "br0");
    assert_eq!(
        profile.get("bridge", "stp").and_then(SettingValue::as_bool),
        Some(false)
    );
}

#[test]
fn bridge_port_references_master_by_name() {
    let member = BridgeMember::ethernet("eth0");
    let profile = bridge_port_profile("br0", &member).unwrap();

    assert_eq!(str_value(&profile, "connection", "master"), "br0");
    assert_eq!(str_value(&profile, "connection", "slave-type"), "bridge");
    assert_eq!(str_value(&profile, "connection", "id"), "br0-eth0");
}

#[test]
fn wireless_bridge_port_defaults_its_ssid() {
    let member = BridgeMember::wireless("wlan0", None, None);
    let profile = bridge_port_profile("br0", &member).unwrap();

    let ssid = profile
        .get("802-11-wireless", "ssid")
        .and_then(SettingValue::as_bytes)
        .unwrap();
    assert_eq!(ssid, DEFAULT_BRIDGE_AP_SSID.as_bytes());
    assert!(profile.group("802-11-wireless-security").is_none());
}

#[test]
fn invalid_inputs_fail_before_any_transport_use() {
    let empty_ssid = WirelessNetwork::new("wlan0", "", None);
    assert!(matches!(
        wifi_client_profile(&empty_ssid),
        Err(ConnectionError::InvalidProfile(_))
    ));
    assert!(matches!(
        bridge_master_profile(""),
        Err(ConnectionError::InvalidProfile(_))
    ));
}
