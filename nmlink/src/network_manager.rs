use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::Result;
use crate::activation::{NmOps, ProvisionOps};
use crate::bridge::create_bridge;
use crate::connection::{connect_wifi, create_access_point};
use crate::device::{
    check_device_connectivity, check_nm_connectivity, device_path_by_iface, list_devices_by_type,
    list_wifi_devices, list_wired_devices,
};
use crate::models::{
    ActivationResult, BridgeMember, Connectivity, Device, DeviceType, WirelessDevice,
    WirelessNetwork,
};
use crate::profile::ConnectionProfile;

/// High-level interface to NetworkManager over D-Bus.
///
/// Provides device enumeration, Wi-Fi client and access-point
/// provisioning, and bridge composition.
#[derive(Clone)]
pub struct NetworkManager {
    conn: Connection,
}

impl NetworkManager {
    /// Creates a new `NetworkManager` connected to the system D-Bus.
    pub async fn new() -> Result<Self> {
        let conn = Connection::system().await?;
        Ok(Self { conn })
    }

    /// Lists all devices of the given type, in NetworkManager's
    /// enumeration order. An empty list is not an error.
    pub async fn list_devices_by_type(&self, device_type: DeviceType) -> Result<Vec<Device>> {
        list_devices_by_type(&self.conn, device_type.code()).await
    }

    /// Lists wireless devices with their AP capability resolved.
    pub async fn list_wifi_devices(&self) -> Result<Vec<WirelessDevice>> {
        list_wifi_devices(&self.conn).await
    }

    /// Lists wired (Ethernet) devices.
    pub async fn list_wired_devices(&self) -> Result<Vec<Device>> {
        list_wired_devices(&self.conn).await
    }

    /// Resolves an interface name to its D-Bus device path.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError::DeviceNotFound` if NetworkManager knows
    /// no device by that name.
    pub async fn device_path_by_iface(&self, interface: &str) -> Result<OwnedObjectPath> {
        device_path_by_iface(&self.conn, interface).await
    }

    /// Reads the IPv4 connectivity state of a device by interface name.
    pub async fn check_device_connectivity(&self, interface: &str) -> Result<Connectivity> {
        check_device_connectivity(&self.conn, interface).await
    }

    /// Whether NetworkManager reports full service-wide connectivity.
    pub async fn check_connectivity(&self) -> Result<bool> {
        check_nm_connectivity(&self.conn).await
    }

    /// Joins a wireless network as a client.
    pub async fn connect_wifi(&self, network: &WirelessNetwork) -> Result<ActivationResult> {
        let ops = NmOps::new(&self.conn);
        connect_wifi(&ops, network).await
    }

    /// Hosts an access point on a wireless interface.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError::DeviceNotFound`, without registering
    /// anything, if the interface is not a known Wi-Fi device.
    pub async fn create_access_point(&self, network: &WirelessNetwork) -> Result<ActivationResult> {
        let ops = NmOps::new(&self.conn);
        create_access_point(&ops, network).await
    }

    /// Creates and activates a bridge with the given members as ports.
    ///
    /// The master profile is registered first, then one port profile per
    /// member in order; only the master is activated, and NetworkManager
    /// brings the ports up as they are enslaved. Registered profiles are
    /// not rolled back if a later step fails.
    pub async fn create_bridge(
        &self,
        bridge_name: &str,
        members: &[BridgeMember],
    ) -> Result<ActivationResult> {
        let ops = NmOps::new(&self.conn);
        create_bridge(&ops, bridge_name, members).await
    }

    /// Registers an arbitrary pre-built connection profile.
    pub async fn add_connection(&self, profile: &ConnectionProfile) -> Result<OwnedObjectPath> {
        NmOps::new(&self.conn).add_connection(profile).await
    }

    /// Activates a registered connection on a device.
    pub async fn activate_connection(
        &self,
        connection: &OwnedObjectPath,
        device: &OwnedObjectPath,
    ) -> Result<OwnedObjectPath> {
        NmOps::new(&self.conn)
            .activate_connection(connection, device)
            .await
    }
}
