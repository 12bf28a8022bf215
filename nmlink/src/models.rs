use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use zvariant::OwnedObjectPath;

use crate::constants::{connectivity, device_type};

/// NetworkManager device types.
///
/// These correspond to the numeric type tags NetworkManager reports for
/// each device over D-Bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    Ethernet,
    Wifi,
    Bridge,
    Loopback,
    /// Unknown type tag not mapped to a specific variant.
    Other(u32),
}

impl DeviceType {
    /// The raw numeric tag NetworkManager uses for this device type.
    pub fn code(&self) -> u32 {
        match self {
            Self::Ethernet => device_type::ETHERNET,
            Self::Wifi => device_type::WIFI,
            Self::Bridge => device_type::BRIDGE,
            Self::Loopback => device_type::LOOPBACK,
            Self::Other(v) => *v,
        }
    }
}

impl From<u32> for DeviceType {
    fn from(value: u32) -> Self {
        match value {
            device_type::ETHERNET => Self::Ethernet,
            device_type::WIFI => Self::Wifi,
            device_type::BRIDGE => Self::Bridge,
            device_type::LOOPBACK => Self::Loopback,
            v => Self::Other(v),
        }
    }
}

impl Display for DeviceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ethernet => write!(f, "Ethernet"),
            Self::Wifi => write!(f, "Wi-Fi"),
            Self::Bridge => write!(f, "Bridge"),
            Self::Loopback => write!(f, "Loopback"),
            Self::Other(v) => write!(f, "Other({v})"),
        }
    }
}

/// NetworkManager connectivity states.
///
/// A device or the service as a whole counts as "connected" only in the
/// `Full` state; `Portal` and `Limited` are reachable-but-not-connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connectivity {
    Unknown,
    None,
    Portal,
    Limited,
    Full,
    /// Unknown state code not mapped to a specific variant.
    Other(u32),
}

impl Connectivity {
    /// Whether this state counts as fully connected.
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }
}

impl From<u32> for Connectivity {
    fn from(value: u32) -> Self {
        match value {
            connectivity::UNKNOWN => Self::Unknown,
            connectivity::NONE => Self::None,
            connectivity::PORTAL => Self::Portal,
            connectivity::LIMITED => Self::Limited,
            connectivity::FULL => Self::Full,
            v => Self::Other(v),
        }
    }
}

impl Display for Connectivity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::None => write!(f, "none"),
            Self::Portal => write!(f, "portal"),
            Self::Limited => write!(f, "limited"),
            Self::Full => write!(f, "full"),
            Self::Other(v) => write!(f, "unknown state ({v})"),
        }
    }
}

bitflags::bitflags! {
    /// Wireless device capability bits reported by NetworkManager.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WirelessCapabilities: u32 {
        const CIPHER_WEP40 = 0x0001;
        const CIPHER_WEP104 = 0x0002;
        const CIPHER_TKIP = 0x0004;
        const CIPHER_CCMP = 0x0008;
        const WPA = 0x0010;
        const RSN = 0x0020;
        /// The device can operate as an access point.
        const AP = 0x0040;
        const ADHOC = 0x0080;
        const FREQ_VALID = 0x0100;
        const FREQ_2GHZ = 0x0200;
        const FREQ_5GHZ = 0x0400;
    }
}

/// A network device managed by NetworkManager.
///
/// Built fresh on every enumeration; the `path` is an opaque D-Bus object
/// reference and is only meaningful to the transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub path: String,
    pub interface: String,
    pub device_type: DeviceType,
    pub driver: String,
    /// True iff the device's IPv4 connectivity is `Full`.
    pub connected: bool,
}

/// A wireless device, with its access-point capability resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WirelessDevice {
    pub device: Device,
    pub ap_capable: bool,
}

/// Caller intent for joining or hosting a wireless network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WirelessNetwork {
    pub interface: String,
    pub ssid: String,
    pub password: Option<String>,
}

impl WirelessNetwork {
    pub fn new(
        interface: impl Into<String>,
        ssid: impl Into<String>,
        password: Option<String>,
    ) -> Self {
        Self {
            interface: interface.into(),
            ssid: ssid.into(),
            password,
        }
    }
}

/// Kind of interface enslaved to a bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeMemberKind {
    Ethernet,
    Wireless,
}

/// A single member interface of a bridge.
///
/// `ssid` and `password` are only meaningful for wireless members; a
/// wireless member without an SSID gets a default one at build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeMember {
    pub interface: String,
    pub kind: BridgeMemberKind,
    pub ssid: Option<String>,
    pub password: Option<String>,
}

impl BridgeMember {
    /// A wired bridge member.
    pub fn ethernet(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            kind: BridgeMemberKind::Ethernet,
            ssid: None,
            password: None,
        }
    }

    /// A wireless bridge member hosting an AP on the given SSID.
    pub fn wireless(
        interface: impl Into<String>,
        ssid: Option<String>,
        password: Option<String>,
    ) -> Self {
        Self {
            interface: interface.into(),
            kind: BridgeMemberKind::Wireless,
            ssid,
            password,
        }
    }
}

/// Object references returned by a successful activation.
///
/// Both paths are opaque identifiers owned by NetworkManager.
#[derive(Debug, Clone)]
pub struct ActivationResult {
    pub connection: OwnedObjectPath,
    pub active_connection: OwnedObjectPath,
}

/// The stage of a bridge setup at which a failure occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeStage {
    MasterCreation,
    PortCreation { index: usize, interface: String },
    Activation,
}

impl Display for BridgeStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MasterCreation => write!(f, "master creation"),
            Self::PortCreation { index, interface } => {
                write!(f, "port creation (member {index}, '{interface}')")
            }
            Self::Activation => write!(f, "activation"),
        }
    }
}

/// Errors that can occur during provisioning operations.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// A D-Bus communication error occurred.
    #[error("D-Bus error: {0}")]
    Dbus(#[from] zbus::Error),

    /// No device exists for the requested interface name.
    #[error("no device for interface '{interface}'")]
    DeviceNotFound { interface: String },

    /// NetworkManager rejected a connection profile.
    #[error("NetworkManager rejected connection profile '{id}': {source}")]
    RegistrationFailed { id: String, source: zbus::Error },

    /// NetworkManager could not activate a registered connection.
    #[error("connection activation failed: {source}")]
    ActivationFailed { source: zbus::Error },

    /// A profile failed structural validation before being sent.
    #[error("invalid connection profile: {0}")]
    InvalidProfile(String),

    /// A bridge setup failed, with the stage it reached.
    #[error("bridge setup failed during {stage}: {source}")]
    Bridge {
        stage: BridgeStage,
        source: Box<ConnectionError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_type_from_u32_all_variants() {
        assert_eq!(DeviceType::from(1), DeviceType::Ethernet);
        assert_eq!(DeviceType::from(2), DeviceType::Wifi);
        assert_eq!(DeviceType::from(13), DeviceType::Bridge);
        assert_eq!(DeviceType::from(32), DeviceType::Loopback);
        assert_eq!(DeviceType::from(999), DeviceType::Other(999));
    }

    #[test]
    fn device_type_code_round_trips() {
        for code in [1u32, 2, 13, 32, 7] {
            assert_eq!(DeviceType::from(code).code(), code);
        }
    }

    #[test]
    fn device_type_display() {
        assert_eq!(format!("{}", DeviceType::Ethernet), "Ethernet");
        assert_eq!(format!("{}", DeviceType::Wifi), "Wi-Fi");
        assert_eq!(format!("{}", DeviceType::Bridge), "Bridge");
        assert_eq!(format!("{}", DeviceType::Other(42)), "Other(42)");
    }

    #[test]
    fn connectivity_from_u32() {
        assert_eq!(Connectivity::from(0), Connectivity::Unknown);
        assert_eq!(Connectivity::from(1), Connectivity::None);
        assert_eq!(Connectivity::from(2), Connectivity::Portal);
        assert_eq!(Connectivity::from(3), Connectivity::Limited);
        assert_eq!(Connectivity::from(4), Connectivity::Full);
        assert_eq!(Connectivity::from(99), Connectivity::Other(99));
    }

    #[test]
    fn only_full_counts_as_connected() {
        assert!(Connectivity::Full.is_full());
        assert!(!Connectivity::None.is_full());
        assert!(!Connectivity::Portal.is_full());
        assert!(!Connectivity::Limited.is_full());
        assert!(!Connectivity::Unknown.is_full());
        assert!(!Connectivity::Other(5).is_full());
    }

    #[test]
    fn ap_capability_bit() {
        let none = WirelessCapabilities::from_bits_retain(0);
        assert!(!none.contains(WirelessCapabilities::AP));

        let exact = WirelessCapabilities::from_bits_retain(0x40);
        assert!(exact.contains(WirelessCapabilities::AP));

        let mixed = WirelessCapabilities::from_bits_retain(0x40 | 0x01 | 0x1000);
        assert!(mixed.contains(WirelessCapabilities::AP));

        let unrelated = WirelessCapabilities::from_bits_retain(0x3f);
        assert!(!unrelated.contains(WirelessCapabilities::AP));
    }

    #[test]
    fn bridge_member_constructors() {
        let eth = BridgeMember::ethernet("eth0");
        assert_eq!(eth.kind, BridgeMemberKind::Ethernet);
        assert!(eth.ssid.is_none());

        let wl = BridgeMember::wireless("wlan0", Some("APnet".into()), None);
        assert_eq!(wl.kind, BridgeMemberKind::Wireless);
        assert_eq!(wl.ssid.as_deref(), Some("APnet"));
    }

    #[test]
    fn bridge_stage_display() {
        assert_eq!(format!("{}", BridgeStage::MasterCreation), "master creation");
        assert_eq!(
            format!(
                "{}",
                BridgeStage::PortCreation {
                    index: 1,
                    interface: "wlan0".into()
                }
            ),
            "port creation (member 1, 'wlan0')"
        );
        assert_eq!(format!("{}", BridgeStage::Activation), "activation");
    }

    #[test]
    fn error_display() {
        let e = ConnectionError::DeviceNotFound {
            interface: "wlan9".into(),
        };
        assert_eq!(format!("{e}"), "no device for interface 'wlan9'");

        let e = ConnectionError::Bridge {
            stage: BridgeStage::Activation,
            source: Box::new(ConnectionError::InvalidProfile("empty id".into())),
        };
        assert_eq!(
            format!("{e}"),
            "bridge setup failed during activation: invalid connection profile: empty id"
        );
    }
}
