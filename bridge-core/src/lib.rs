//! Bridge Core - Plattform-agnostische Zustands-Logik
//!
//! Diese Crate enthält KEINE Netzwerk- oder Laufzeit-Dependencies.
//! Sie definiert nur die Zustands-Typen der Brücke und Pure Functions.

#![no_std]

extern crate alloc;

pub mod device;
pub mod history;
pub mod types;

// Re-exports für einfachen Zugriff
pub use device::DeviceState;
pub use history::{HISTORY_CAPACITY, SampleHistory};
pub use types::LedState;
