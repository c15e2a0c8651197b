// Einstiegspunkt der Sensor-Brücke
//
// Startet Logging, bindet den HTTP-Port und bedient Verbindungen bis
// zum Ctrl-C. Aller Zustand lebt im Prozess: ein Neustart setzt das
// LED-Kommando auf "off" zurück und leert die Historie - das Gerät
// pollt und postet danach einfach weiter.

use std::net::Ipv4Addr;

use anyhow::Context;
use log::info;
use tokio::net::TcpListener;

use esp_sensor_bruecke::config::HTTP_PORT;
use esp_sensor_bruecke::server::serve_connections;
use esp_sensor_bruecke::state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Lauscht auf allen Interfaces - Gerät und Browser erreichen die
    // Brücke über die LAN-Adresse des Hosts
    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, HTTP_PORT))
        .await
        .with_context(|| format!("failed to bind port {HTTP_PORT}"))?;

    info!("HTTP: Bridge listening on http://0.0.0.0:{HTTP_PORT}/");

    let state = AppState::new();

    // Der Router ist nicht Send; alle Verbindungs-Tasks laufen als
    // lokale Tasks auf dem current-thread Runtime
    tokio::task::LocalSet::new()
        .run_until(async {
            tokio::select! {
                result = serve_connections(listener, state) => result,
                _ = tokio::signal::ctrl_c() => {
                    info!("HTTP: Ctrl-C received, shutting down");
                    Ok(())
                }
            }
        })
        .await
}
