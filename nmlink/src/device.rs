//! Network device enumeration and classification.
//!
//! NetworkManager offers no server-side type filter, so classification is
//! two-pass: enumerate every device path, then read each one's type and
//! keep the matches. Per-device property reads have no cross-device
//! dependency, so they run concurrently; `try_join_all` keeps the result
//! in the service's enumeration order regardless of reply arrival.

use futures::future;
use log::debug;
use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::Result;
use crate::constants::device_type;
use crate::models::{ConnectionError, Connectivity, Device, WirelessCapabilities, WirelessDevice};
use crate::proxies::{NMDeviceProxy, NMProxy, NMWirelessProxy};

/// Lists all devices whose NetworkManager type tag matches `type_tag`.
///
/// An empty result is not an error.
pub(crate) async fn list_devices_by_type(conn: &Connection, type_tag: u32) -> Result<Vec<Device>> {
    let nm = NMProxy::new(conn).await?;
    let paths = nm.get_devices().await?;
    debug!("Enumerated {} device path(s)", paths.len());

    let reads = paths.iter().map(|p| read_device(conn, p, type_tag));
    let devices = future::try_join_all(reads).await?;
    Ok(devices.into_iter().flatten().collect())
}

async fn read_device(
    conn: &Connection,
    path: &OwnedObjectPath,
    type_tag: u32,
) -> Result<Option<Device>> {
    let d_proxy = NMDeviceProxy::builder(conn)
        .path(path.clone())?
        .build()
        .await?;

    if d_proxy.device_type().await? != type_tag {
        return Ok(None);
    }

    let interface = d_proxy.interface().await?;
    let connectivity = Connectivity::from(d_proxy.ip4_connectivity().await?);
    let driver = d_proxy.driver().await?;

    Ok(Some(Device {
        path: path.to_string(),
        interface,
        device_type: type_tag.into(),
        driver,
        connected: connectivity.is_full(),
    }))
}

/// Lists wireless devices, resolving each one's AP capability.
pub(crate) async fn list_wifi_devices(conn: &Connection) -> Result<Vec<WirelessDevice>> {
    let devices = list_devices_by_type(conn, device_type::WIFI).await?;

    let reads = devices.iter().map(|d| wireless_capabilities(conn, d));
    let caps = future::try_join_all(reads).await?;

    Ok(devices
        .into_iter()
        .zip(caps)
        .map(|(device, caps)| WirelessDevice {
            ap_capable: ap_capable(caps),
            device,
        })
        .collect())
}

async fn wireless_capabilities(conn: &Connection, device: &Device) -> Result<u32> {
    let w_proxy = NMWirelessProxy::builder(conn)
        .path(device.path.as_str())?
        .build()
        .await?;
    Ok(w_proxy.wireless_capabilities().await?)
}

fn ap_capable(raw_caps: u32) -> bool {
    WirelessCapabilities::from_bits_retain(raw_caps).contains(WirelessCapabilities::AP)
}

/// Lists wired (Ethernet) devices.
pub(crate) async fn list_wired_devices(conn: &Connection) -> Result<Vec<Device>> {
    list_devices_by_type(conn, device_type::ETHERNET).await
}

/// Resolves an interface name to its device path via NetworkManager's own
/// lookup, mapping the service's `UnknownDevice` reply to `DeviceNotFound`.
pub(crate) async fn device_path_by_iface(
    conn: &Connection,
    interface: &str,
) -> Result<OwnedObjectPath> {
    let nm = NMProxy::new(conn).await?;
    match nm.get_device_by_ip_iface(interface).await {
        Ok(path) => Ok(path),
        Err(zbus::Error::MethodError(ref name, _, _))
            if name.as_str().ends_with("UnknownDevice") =>
        {
            Err(ConnectionError::DeviceNotFound {
                interface: interface.to_string(),
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Reads the IPv4 connectivity state of the device behind `interface`.
pub(crate) async fn check_device_connectivity(
    conn: &Connection,
    interface: &str,
) -> Result<Connectivity> {
    let path = device_path_by_iface(conn, interface).await?;
    let d_proxy = NMDeviceProxy::builder(conn).path(path)?.build().await?;
    Ok(Connectivity::from(d_proxy.ip4_connectivity().await?))
}

/// Whether NetworkManager reports full service-wide connectivity.
pub(crate) async fn check_nm_connectivity(conn: &Connection) -> Result<bool> {
    let nm = NMProxy::new(conn).await?;
    Ok(Connectivity::from(nm.check_connectivity().await?).is_full())
}
