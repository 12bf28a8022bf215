//! Profile construction for the four provisioning scenarios.
//!
//! Pure functions: no I/O, deterministic given their input. Each builder
//! produces a [`ConnectionProfile`] with exactly the groups NetworkManager
//! requires for that connection type, validated before it is returned.

use crate::models::{BridgeMember, BridgeMemberKind, WirelessNetwork};
use crate::profile::{ConnectionProfile, SettingValue};
use crate::Result;

/// SSID used for wireless bridge ports when the member does not name one.
pub const DEFAULT_BRIDGE_AP_SSID: &str = "BridgeAP";

/// Profile for joining a wireless network as a client.
///
/// The security group is always present, even with an empty passphrase;
/// NetworkManager rejects the profile at registration time if the
/// credentials do not fit the network, which keeps this builder free of
/// password-policy knowledge.
pub fn wifi_client_profile(network: &WirelessNetwork) -> Result<ConnectionProfile> {
    wifi_profile(network, "infrastructure", "auto", "auto")
}

/// Profile for hosting an access point on a wireless device.
///
/// IPv4 is `shared` so NetworkManager runs DHCP/NAT for clients of the
/// hotspot; IPv6 is ignored.
pub fn access_point_profile(network: &WirelessNetwork) -> Result<ConnectionProfile> {
    wifi_profile(network, "ap", "shared", "ignore")
}

fn wifi_profile(
    network: &WirelessNetwork,
    mode: &str,
    ipv4_method: &str,
    ipv6_method: &str,
) -> Result<ConnectionProfile> {
    let psk = network.password.clone().unwrap_or_default();

    let profile = ConnectionProfile::new()
        .with_group(
            "connection",
            [
                ("id", network.ssid.as_str().into()),
                ("type", "802-11-wireless".into()),
            ],
        )
        .with_group(
            "802-11-wireless",
            [
                ("ssid", SettingValue::Bytes(network.ssid.as_bytes().to_vec())),
                ("mode", mode.into()),
            ],
        )
        .with_group(
            "802-11-wireless-security",
            [("key-mgmt", "wpa-psk".into()), ("psk", psk.into())],
        )
        .with_group("ipv4", [("method", ipv4_method.into())])
        .with_group("ipv6", [("method", ipv6_method.into())]);

    profile.ensure_valid()?;
    Ok(profile)
}

/// Profile for the bridge's own (master) virtual interface.
pub fn bridge_master_profile(bridge_name: &str) -> Result<ConnectionProfile> {
    let profile = ConnectionProfile::new()
        .with_group(
            "connection",
            [
                ("id", bridge_name.into()),
                ("type", "bridge".into()),
                ("interface-name", bridge_name.into()),
            ],
        )
        .with_group("bridge", [("stp", false.into())])
        .with_group("ipv4", [("method", "auto".into())])
        .with_group("ipv6", [("method", "ignore".into())]);

    profile.ensure_valid()?;
    Ok(profile)
}

/// Profile enslaving one member interface to a bridge.
///
/// Wireless members host an AP on the member interface; their security
/// group is only emitted when the member carries a passphrase.
pub fn bridge_port_profile(bridge_name: &str, member: &BridgeMember) -> Result<ConnectionProfile> {
    let port_type = match member.kind {
        BridgeMemberKind::Ethernet => "802-3-ethernet",
        BridgeMemberKind::Wireless => "802-11-wireless",
    };

    let mut profile = ConnectionProfile::new().with_group(
        "connection",
        [
            (
                "id",
                format!("{bridge_name}-{}", member.interface).into(),
            ),
            ("type", port_type.into()),
            ("interface-name", member.interface.as_str().into()),
            ("slave-type", "bridge".into()),
            ("master", bridge_name.into()),
        ],
    );

    if member.kind == BridgeMemberKind::Wireless {
        let ssid = member.ssid.as_deref().unwrap_or(DEFAULT_BRIDGE_AP_SSID);
        profile = profile.with_group(
            "802-11-wireless",
            [
                ("mode", "ap".into()),
                ("ssid", SettingValue::Bytes(ssid.as_bytes().to_vec())),
            ],
        );

        if let Some(password) = &member.password {
            profile = profile.with_group(
                "802-11-wireless-security",
                [
                    ("key-mgmt", "wpa-psk".into()),
                    ("psk", password.as_str().into()),
                ],
            );
        }
    }

    profile.ensure_valid()?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConnectionError;
    use crate::profile::SettingValue;

    fn str_of(p: &ConnectionProfile, group: &str, key: &str) -> String {
        p.get(group, key)
            .and_then(SettingValue::as_str)
            .unwrap_or_else(|| panic!("missing {group}.{key}"))
            .to_string()
    }

    #[test]
    fn wifi_client_shape() {
        let net = WirelessNetwork::new("wlan0", "Net1", Some("secret123".into()));
        let p = wifi_client_profile(&net).unwrap();

        assert_eq!(str_of(&p, "connection", "id"), "Net1");
        assert_eq!(str_of(&p, "connection", "type"), "802-11-wireless");
        assert_eq!(str_of(&p, "802-11-wireless", "mode"), "infrastructure");
        assert_eq!(str_of(&p, "ipv4", "method"), "auto");
        assert_eq!(str_of(&p, "ipv6", "method"), "auto");
        assert_eq!(str_of(&p, "802-11-wireless-security", "key-mgmt"), "wpa-psk");
        assert_eq!(str_of(&p, "802-11-wireless-security", "psk"), "secret123");

        // SSID travels as raw bytes and decodes back to the input string.
        let ssid = p.get("802-11-wireless", "ssid").unwrap().as_bytes().unwrap();
        assert_eq!(std::str::from_utf8(ssid).unwrap(), "Net1");
    }

    #[test]
    fn wifi_client_without_password_still_has_security_group() {
        let net = WirelessNetwork::new("wlan0", "OpenNet", None);
        let p = wifi_client_profile(&net).unwrap();
        assert_eq!(str_of(&p, "802-11-wireless-security", "psk"), "");
    }

    #[test]
    fn access_point_shape() {
        let net = WirelessNetwork::new("wlan0", "HotspotX", Some("pw123456".into()));
        let p = access_point_profile(&net).unwrap();

        assert_eq!(str_of(&p, "802-11-wireless", "mode"), "ap");
        assert_eq!(str_of(&p, "ipv4", "method"), "shared");
        assert_ne!(str_of(&p, "ipv4", "method"), "auto");
        assert_eq!(str_of(&p, "ipv6", "method"), "ignore");
    }

    #[test]
    fn empty_ssid_rejected() {
        let net = WirelessNetwork::new("wlan0", "", None);
        assert!(matches!(
            wifi_client_profile(&net),
            Err(ConnectionError::InvalidProfile(_))
        ));
        assert!(matches!(
            access_point_profile(&net),
            Err(ConnectionError::InvalidProfile(_))
        ));
    }

    #[test]
    fn bridge_master_shape() {
        let p = bridge_master_profile("br0").unwrap();

        assert_eq!(str_of(&p, "connection", "id"), "br0");
        assert_eq!(str_of(&p, "connection", "type"), "bridge");
        assert_eq!(str_of(&p, "connection", "interface-name"), "br0");
        assert_eq!(p.get("bridge", "stp").unwrap().as_bool(), Some(false));
        assert_eq!(str_of(&p, "ipv4", "method"), "auto");
        assert_eq!(str_of(&p, "ipv6", "method"), "ignore");
    }

    #[test]
    fn empty_bridge_name_rejected() {
        assert!(matches!(
            bridge_master_profile(""),
            Err(ConnectionError::InvalidProfile(_))
        ));
    }

    #[test]
    fn ethernet_port_shape() {
        let member = BridgeMember::ethernet("eth0");
        let p = bridge_port_profile("br0", &member).unwrap();

        assert_eq!(str_of(&p, "connection", "id"), "br0-eth0");
        assert_eq!(str_of(&p, "connection", "type"), "802-3-ethernet");
        assert_eq!(str_of(&p, "connection", "interface-name"), "eth0");
        assert_eq!(str_of(&p, "connection", "slave-type"), "bridge");
        assert_eq!(str_of(&p, "connection", "master"), "br0");
        assert!(p.group("802-11-wireless").is_none());
        assert!(p.group("802-11-wireless-security").is_none());
    }

    #[test]
    fn wireless_port_without_password_omits_security() {
        let member = BridgeMember::wireless("wlan0", Some("APnet".into()), None);
        let p = bridge_port_profile("br0", &member).unwrap();

        assert_eq!(str_of(&p, "connection", "type"), "802-11-wireless");
        assert_eq!(str_of(&p, "802-11-wireless", "mode"), "ap");
        let ssid = p.get("802-11-wireless", "ssid").unwrap().as_bytes().unwrap();
        assert_eq!(ssid, b"APnet");
        assert!(p.group("802-11-wireless-security").is_none());
    }

    #[test]
    fn wireless_port_with_password_includes_security() {
        let member = BridgeMember::wireless("wlan0", Some("APnet".into()), Some("pass1234".into()));
        let p = bridge_port_profile("br0", &member).unwrap();

        assert_eq!(str_of(&p, "802-11-wireless-security", "key-mgmt"), "wpa-psk");
        assert_eq!(str_of(&p, "802-11-wireless-security", "psk"), "pass1234");
    }

    #[test]
    fn wireless_port_without_ssid_gets_default() {
        let member = BridgeMember::wireless("wlan1", None, None);
        let p = bridge_port_profile("br0", &member).unwrap();

        let ssid = p.get("802-11-wireless", "ssid").unwrap().as_bytes().unwrap();
        assert_eq!(ssid, DEFAULT_BRIDGE_AP_SSID.as_bytes());
    }
}
