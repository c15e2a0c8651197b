//! Zustands-Halter der Brücke
//!
//! Bündelt beide Zustands-Entitäten in einem expliziten Objekt statt
//! prozessweiter Globals. Die Entitäten sind unabhängig; es gibt keine
//! entitätsübergreifende Transaktion.

use crate::history::SampleHistory;
use crate::types::LedState;

/// Prozessweiter Zustand: LED-Kommando + Messwert-Historie
///
/// Genau eine Instanz pro Prozess, von allen Requests geteilt. Ein
/// Neustart erzeugt einen frischen Zustand - das ist Teil des
/// Vertrags, das Gerät pollt und postet danach einfach weiter.
pub struct DeviceState {
    led: LedState,
    history: SampleHistory,
}

impl DeviceState {
    /// Frischer Zustand beim Prozess-Start: LED aus, Historie leer
    pub fn new() -> Self {
        Self {
            led: LedState::default(),
            history: SampleHistory::new(),
        }
    }

    /// Aktuelles LED-Kommando (vom Gerät gepollt)
    pub fn led(&self) -> &LedState {
        &self.led
    }

    /// Überschreibt das LED-Kommando bedingungslos (Last-Writer-Wins)
    pub fn set_led(&mut self, state: LedState) {
        self.led = state;
    }

    /// Zeichnet einen Messwert auf; verdrängt ggf. den ältesten
    pub fn record_sample(&mut self, value: f64) {
        self.history.record(value);
    }

    /// Aktuelle Historie (älteste zuerst)
    pub fn history(&self) -> &SampleHistory {
        &self.history
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}
