//! Creates a bridge `br0` over eth0 plus a wireless AP on wlan0.
//!
//! Run with: `cargo run --example bridge_setup`

use nmlink::{BridgeMember, NetworkManager};

#[tokio::main]
async fn main() -> nmlink::Result<()> {
    let nm = NetworkManager::new().await?;

    for dev in nm.list_wifi_devices().await? {
        println!(
            "{}: driver={} connected={} ap_capable={}",
            dev.device.interface, dev.device.driver, dev.device.connected, dev.ap_capable
        );
    }

    let result = nm
        .create_bridge(
            "br0",
            &[
                BridgeMember::ethernet("eth0"),
                BridgeMember::wireless("wlan0", Some("APnet".into()), Some("pass1234".into())),
            ],
        )
        .await?;

    println!("bridge active: {}", result.active_connection.as_str());
    Ok(())
}
