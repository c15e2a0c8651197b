// Geteilter Zustand für alle Request-Handler

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bridge_core::DeviceState;

/// Geteilter Geräte-Zustand hinter einem Mutex
///
/// Jeder Handler nimmt den Lock genau einmal, führt eine
/// O(1)-Operation aus und gibt ihn vor dem Schreiben der Response
/// wieder frei. Kein Handler hält den Lock über einen Await-Punkt,
/// kein Handler nimmt mehr als einen Lock.
#[derive(Clone, Default)]
pub struct SharedDeviceState(Arc<Mutex<DeviceState>>);

impl SharedDeviceState {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(DeviceState::new())))
    }

    /// Nimmt den Lock; ein vergifteter Mutex wird übernommen statt zu
    /// panicken - der Zustand bleibt auch nach einem Handler-Panic
    /// konsistent, weil jede Mutation eine einzelne Operation ist
    pub fn lock(&self) -> MutexGuard<'_, DeviceState> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Applikations-Zustand für den picoserve Router
#[derive(Clone, Default)]
pub struct AppState {
    pub device: SharedDeviceState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            device: SharedDeviceState::new(),
        }
    }
}

impl picoserve::extract::FromRef<AppState> for SharedDeviceState {
    fn from_ref(state: &AppState) -> Self {
        state.device.clone()
    }
}
