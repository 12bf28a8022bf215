//! NetworkManager Device proxy.

use zbus::{Result, proxy};

/// Proxy for the generic NetworkManager device interface.
#[proxy(
    interface = "org.freedesktop.NetworkManager.Device",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMDevice {
    /// The network interface name (e.g., "wlan0").
    #[zbus(property)]
    fn interface(&self) -> Result<String>;

    /// Device type as a numeric code (1 = Ethernet, 2 = Wi-Fi).
    #[zbus(property)]
    fn device_type(&self) -> Result<u32>;

    /// The kernel driver in use.
    #[zbus(property)]
    fn driver(&self) -> Result<String>;

    /// IPv4 connectivity state of the device (4 = full).
    #[zbus(property)]
    fn ip4_connectivity(&self) -> Result<u32>;
}
