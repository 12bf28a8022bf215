//! Main NetworkManager proxy.

use zbus::proxy;
use zvariant::OwnedObjectPath;

/// Proxy for the main NetworkManager interface.
///
/// Provides device enumeration, interface-name lookup, connectivity
/// checking, and connection activation.
#[proxy(
    interface = "org.freedesktop.NetworkManager",
    default_service = "org.freedesktop.NetworkManager",
    default_path = "/org/freedesktop/NetworkManager"
)]
pub trait NM {
    /// Returns paths to all network devices.
    fn get_devices(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// Resolves an IP interface name (e.g. "eth0") to a device path.
    ///
    /// NetworkManager raises `UnknownDevice` if no device has that name.
    fn get_device_by_ip_iface(&self, iface: &str) -> zbus::Result<OwnedObjectPath>;

    /// Re-checks and returns the service-wide connectivity state.
    fn check_connectivity(&self) -> zbus::Result<u32>;

    /// Activates a registered connection on a device.
    ///
    /// `specific_object` is "/" when no particular object (e.g. access
    /// point) is targeted.
    fn activate_connection(
        &self,
        connection: OwnedObjectPath,
        device: OwnedObjectPath,
        specific_object: OwnedObjectPath,
    ) -> zbus::Result<OwnedObjectPath>;
}
