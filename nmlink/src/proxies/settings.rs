//! NetworkManager Settings proxy.

use std::collections::HashMap;
use zbus::proxy;
use zvariant::{OwnedObjectPath, Value};

/// Proxy for the connection-settings registry.
///
/// Registering a profile persists it and, for virtual connection types
/// like bridges, causes NetworkManager to create the backing kernel
/// device as a side effect.
#[proxy(
    interface = "org.freedesktop.NetworkManager.Settings",
    default_service = "org.freedesktop.NetworkManager",
    default_path = "/org/freedesktop/NetworkManager/Settings"
)]
pub trait NMSettings {
    /// Registers a new connection profile, returning its settings path.
    fn add_connection(
        &self,
        connection: HashMap<&str, HashMap<&str, Value<'_>>>,
    ) -> zbus::Result<OwnedObjectPath>;
}
