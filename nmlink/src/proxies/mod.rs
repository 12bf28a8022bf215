//! D-Bus proxy interfaces for NetworkManager.
//!
//! Low-level zbus proxy definitions for the NetworkManager interfaces this
//! crate talks to over the system bus.

mod device;
mod main_nm;
mod settings;
mod wireless;

pub(crate) use device::NMDeviceProxy;
pub(crate) use main_nm::NMProxy;
pub(crate) use settings::NMSettingsProxy;
pub(crate) use wireless::NMWirelessProxy;
