//! NetworkManager Wireless Device proxy.

use zbus::{Result, proxy};

/// Proxy for the wireless device interface.
///
/// Only the capability bitmask is read here; the generic device
/// properties come from [`super::NMDeviceProxy`] at the same path.
#[proxy(
    interface = "org.freedesktop.NetworkManager.Device.Wireless",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMWireless {
    /// The capabilities of the wireless device (bit 0x40 = AP mode).
    #[zbus(property)]
    fn wireless_capabilities(&self) -> Result<u32>;
}
