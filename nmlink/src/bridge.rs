//! Bridge topology orchestration.
//!
//! Realizing a bridge is a strict sequence: register the master profile,
//! register one port profile per member in input order, then activate the
//! master. Ports are never activated explicitly; NetworkManager brings
//! slaves up as a side effect of activating their master. Registering the
//! master also makes NetworkManager create the kernel bridge device, which
//! is why the bridge interface can be resolved by name before activation.
//!
//! Calls are awaited one at a time; port profiles reference the master by
//! name, so member registration depends on the master having been accepted.
//! A failure partway through does not roll back profiles registered so far.

use log::{debug, info};
use std::fmt::{Display, Formatter};

use crate::Result;
use crate::activation::ProvisionOps;
use crate::builders::{bridge_master_profile, bridge_port_profile};
use crate::models::{ActivationResult, BridgeMember, BridgeStage, ConnectionError};

/// Phases of a bridge setup, in the order they are entered.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BridgePhase {
    Idle,
    MasterCreating,
    MasterCreated,
    PortsCreating(usize),
    PortsCreated,
    Activating,
    Activated,
}

impl Display for BridgePhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::MasterCreating => write!(f, "creating master"),
            Self::MasterCreated => write!(f, "master created"),
            Self::PortsCreating(i) => write!(f, "creating port {i}"),
            Self::PortsCreated => write!(f, "ports created"),
            Self::Activating => write!(f, "activating"),
            Self::Activated => write!(f, "activated"),
        }
    }
}

/// Creates a bridge named `bridge_name` with the given member interfaces
/// enslaved to it, and activates it.
///
/// An empty member list is valid: the bridge comes up with zero ports.
/// Failures carry the stage reached; earlier registrations are left in
/// place.
pub(crate) async fn create_bridge<O: ProvisionOps + Sync>(
    ops: &O,
    bridge_name: &str,
    members: &[BridgeMember],
) -> Result<ActivationResult> {
    let mut phase = BridgePhase::Idle;

    advance(bridge_name, &mut phase, BridgePhase::MasterCreating);
    let master_profile =
        bridge_master_profile(bridge_name).map_err(|e| failed(BridgeStage::MasterCreation, e))?;
    let master = ops
        .add_connection(&master_profile)
        .await
        .map_err(|e| failed(BridgeStage::MasterCreation, e))?;
    advance(bridge_name, &mut phase, BridgePhase::MasterCreated);

    for (index, member) in members.iter().enumerate() {
        advance(bridge_name, &mut phase, BridgePhase::PortsCreating(index));
        let stage = || BridgeStage::PortCreation {
            index,
            interface: member.interface.clone(),
        };
        let port_profile =
            bridge_port_profile(bridge_name, member).map_err(|e| failed(stage(), e))?;
        ops.add_connection(&port_profile)
            .await
            .map_err(|e| failed(stage(), e))?;
    }
    advance(bridge_name, &mut phase, BridgePhase::PortsCreated);

    advance(bridge_name, &mut phase, BridgePhase::Activating);
    let device = ops
        .device_path_by_iface(bridge_name)
        .await
        .map_err(|e| failed(BridgeStage::Activation, e))?;
    let active_connection = ops
        .activate_connection(&master, &device)
        .await
        .map_err(|e| failed(BridgeStage::Activation, e))?;
    advance(bridge_name, &mut phase, BridgePhase::Activated);

    info!(
        "Bridge '{bridge_name}' activated with {} port(s)",
        members.len()
    );
    Ok(ActivationResult {
        connection: master,
        active_connection,
    })
}

fn advance(bridge_name: &str, phase: &mut BridgePhase, next: BridgePhase) {
    debug!("bridge '{bridge_name}': {phase} -> {next}");
    *phase = next;
}

fn failed(stage: BridgeStage, source: ConnectionError) -> ConnectionError {
    ConnectionError::Bridge {
        stage,
        source: Box::new(source),
    }
}
