//! High-level Wi-Fi provisioning flows.
//!
//! Each flow is register-then-activate: resolve the target device, build
//! the profile, hand it to NetworkManager, and activate it. The returned
//! references identify the registered profile and the active connection;
//! any follow-up connectivity verification is the caller's concern.
//!
//! Flows are generic over [`ProvisionOps`] so tests can assert what does
//! (and does not) reach the bus.

use log::{debug, info, warn};

use crate::Result;
use crate::activation::ProvisionOps;
use crate::builders::{access_point_profile, wifi_client_profile};
use crate::models::{ActivationResult, ConnectionError, WirelessDevice, WirelessNetwork};

/// Joins a wireless network as a client on the given interface.
pub(crate) async fn connect_wifi<O: ProvisionOps + Sync>(
    ops: &O,
    network: &WirelessNetwork,
) -> Result<ActivationResult> {
    debug!(
        "Connecting to '{}' on interface {}",
        network.ssid, network.interface
    );

    let device = ops.device_path_by_iface(&network.interface).await?;
    let profile = wifi_client_profile(network)?;
    let connection = ops.add_connection(&profile).await?;
    let active_connection = ops.activate_connection(&connection, &device).await?;

    info!("Activated Wi-Fi connection '{}'", network.ssid);
    Ok(ActivationResult {
        connection,
        active_connection,
    })
}

/// Hosts an access point on the given interface.
///
/// Aborts with `DeviceNotFound` before any registration call if the
/// interface is not among the wireless devices NetworkManager reports.
pub(crate) async fn create_access_point<O: ProvisionOps + Sync>(
    ops: &O,
    network: &WirelessNetwork,
) -> Result<ActivationResult> {
    debug!(
        "Creating access point '{}' on interface {}",
        network.ssid, network.interface
    );

    let wifi_devices = ops.list_wifi_devices().await?;
    ensure_wifi_iface(&wifi_devices, &network.interface)?;

    let device = ops.device_path_by_iface(&network.interface).await?;
    let profile = access_point_profile(network)?;
    let connection = ops.add_connection(&profile).await?;
    let active_connection = ops.activate_connection(&connection, &device).await?;

    info!("Access point '{}' is up", network.ssid);
    Ok(ActivationResult {
        connection,
        active_connection,
    })
}

/// Rejects interfaces that are not wireless devices, so AP creation never
/// leaves partial state behind for a bad interface name.
fn ensure_wifi_iface(devices: &[WirelessDevice], interface: &str) -> Result<()> {
    if devices.iter().any(|d| d.device.interface == interface) {
        return Ok(());
    }
    warn!("Interface '{interface}' is not a Wi-Fi device; aborting access point creation");
    Err(ConnectionError::DeviceNotFound {
        interface: interface.to_string(),
    })
}
