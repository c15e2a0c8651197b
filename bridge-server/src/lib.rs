// Library-Root: Wiederverwendbare Logik und Module
//
// Das Binary in src/bin/main.rs bindet nur Port und Runtime; alles
// andere lebt hier, damit Integrationstests denselben Server-Code
// über localhost fahren können.

// Module
pub mod config;
pub mod server;
pub mod state;
pub mod web;

// Re-exports von bridge-core
pub use bridge_core::{DeviceState, HISTORY_CAPACITY, LedState, SampleHistory};

// Re-exports für einfachen Zugriff
pub use server::serve_connections;
pub use state::{AppState, SharedDeviceState};
