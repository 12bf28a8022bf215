//! A Rust library for provisioning host networking via NetworkManager.
//!
//! This crate drives NetworkManager over D-Bus to:
//!
//! - Enumerate and classify network devices (wired, wireless, bridges)
//! - Join wireless networks and host access points
//! - Compose software bridges from wired and wireless member interfaces
//!
//! # Example
//!
//! ```no_run
//! use nmlink::{BridgeMember, NetworkManager, WirelessNetwork};
//!
//! # async fn example() -> nmlink::Result<()> {
//! let nm = NetworkManager::new().await?;
//!
//! // Enumerate Wi-Fi devices and their AP capability
//! for dev in nm.list_wifi_devices().await? {
//!     println!("{} ap_capable={}", dev.device.interface, dev.ap_capable);
//! }
//!
//! // Bridge eth0 and a wireless AP on wlan0 into br0
//! nm.create_bridge(
//!     "br0",
//!     &[
//!         BridgeMember::ethernet("eth0"),
//!         BridgeMember::wireless("wlan0", Some("APnet".into()), Some("pass1234".into())),
//!     ],
//! )
//! .await?;
//!
//! // Or host a standalone hotspot
//! nm.create_access_point(&WirelessNetwork::new("wlan0", "HotspotX", Some("pw123456".into())))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, ConnectionError>`. Failures are
//! distinguishable: missing devices, profiles rejected at registration,
//! activation failures, and raw transport errors each have a variant.
//! Multi-step bridge setup tags its errors with the stage reached; it
//! performs no rollback of profiles registered before the failure.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade. Add a logging
//! implementation such as `env_logger` to see output.

// Internal implementation modules
mod activation;
mod bridge;
mod connection;
mod constants;
mod device;
mod proxies;

// Public API modules
pub mod builders;
pub mod models;
pub mod network_manager;
pub mod profile;

// Re-exported public API
pub use models::{
    ActivationResult, BridgeMember, BridgeMemberKind, BridgeStage, Connectivity, ConnectionError,
    Device, DeviceType, WirelessCapabilities, WirelessDevice, WirelessNetwork,
};
pub use network_manager::NetworkManager;
pub use profile::{ConnectionProfile, SettingValue};

/// A specialized `Result` type for provisioning operations.
pub type Result<T> = std::result::Result<T, ConnectionError>;
