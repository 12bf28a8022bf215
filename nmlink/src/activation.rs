//! Profile registration and connection activation.
//!
//! The [`ProvisionOps`] trait is the seam between orchestration logic and
//! the bus: the real implementation forwards to NetworkManager over D-Bus,
//! while tests substitute a recording double to assert call sequencing.

use async_trait::async_trait;
use log::debug;
use zbus::Connection;
use zvariant::{ObjectPath, OwnedObjectPath};

use crate::Result;
use crate::device;
use crate::models::{ConnectionError, WirelessDevice};
use crate::profile::ConnectionProfile;
use crate::proxies::{NMProxy, NMSettingsProxy};

/// The network-mutating calls an orchestrated operation is built from.
#[async_trait]
pub(crate) trait ProvisionOps {
    /// Registers a profile with the settings service, returning its path.
    async fn add_connection(&self, profile: &ConnectionProfile) -> Result<OwnedObjectPath>;

    /// Activates a registered connection on a device, returning the
    /// active-connection path.
    async fn activate_connection(
        &self,
        connection: &OwnedObjectPath,
        device: &OwnedObjectPath,
    ) -> Result<OwnedObjectPath>;

    /// Resolves an interface name to its device path.
    async fn device_path_by_iface(&self, interface: &str) -> Result<OwnedObjectPath>;

    /// Lists wireless devices with their AP capability resolved.
    async fn list_wifi_devices(&self) -> Result<Vec<WirelessDevice>>;
}

/// `ProvisionOps` backed by a live NetworkManager bus connection.
pub(crate) struct NmOps<'a> {
    conn: &'a Connection,
}

impl<'a> NmOps<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ProvisionOps for NmOps<'_> {
    async fn add_connection(&self, profile: &ConnectionProfile) -> Result<OwnedObjectPath> {
        profile.ensure_valid()?;
        // ensure_valid guarantees the id is present
        let id = profile.id().unwrap_or_default().to_string();

        let settings = NMSettingsProxy::new(self.conn).await?;
        debug!("Registering connection profile '{id}'");
        settings
            .add_connection(profile.to_dbus())
            .await
            .map_err(|source| ConnectionError::RegistrationFailed { id, source })
    }

    async fn activate_connection(
        &self,
        connection: &OwnedObjectPath,
        device: &OwnedObjectPath,
    ) -> Result<OwnedObjectPath> {
        let nm = NMProxy::new(self.conn).await?;
        debug!(
            "Activating connection {} on device {}",
            connection.as_str(),
            device.as_str()
        );
        nm.activate_connection(connection.clone(), device.clone(), no_specific_object())
            .await
            .map_err(|source| ConnectionError::ActivationFailed { source })
    }

    async fn device_path_by_iface(&self, interface: &str) -> Result<OwnedObjectPath> {
        device::device_path_by_iface(self.conn, interface).await
    }

    async fn list_wifi_devices(&self) -> Result<Vec<WirelessDevice>> {
        device::list_wifi_devices(self.conn).await
    }
}

/// The "/" placeholder NetworkManager expects when activation does not
/// target a specific object such as an access point.
fn no_specific_object() -> OwnedObjectPath {
    ObjectPath::from_static_str_unchecked("/").into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_the_root_path() {
        assert_eq!(no_specific_object().as_str(), "/");
    }
}
