//! Messwert-Historie als Ring-Puffer fester Kapazität
//!
//! Ein dauerhaft sampelndes Gerät darf die Historie nie unbegrenzt
//! wachsen lassen: der Puffer hält maximal [`HISTORY_CAPACITY`] Werte
//! und verdrängt beim Anhängen den jeweils ältesten Eintrag (FIFO).

use heapless::Deque;

/// Kapazität des Gleitfensters (Anzahl Messwerte)
pub const HISTORY_CAPACITY: usize = 50;

/// Geordnete Historie der letzten Messwerte, älteste zuerst
///
/// Append-und-Verdrängen ist eine einzige O(1)-Operation auf einem
/// echten Ring-Puffer - kein nachträgliches Abschneiden einer Liste.
pub struct SampleHistory {
    samples: Deque<f64, HISTORY_CAPACITY>,
}

impl SampleHistory {
    /// Erstellt eine leere Historie
    pub fn new() -> Self {
        Self {
            samples: Deque::new(),
        }
    }

    /// Hängt einen Messwert an; verdrängt bei voller Kapazität den ältesten
    pub fn record(&mut self, value: f64) {
        if self.samples.is_full() {
            self.samples.pop_front();
        }
        // Nach dem Pop ist garantiert ein Platz frei
        let _ = self.samples.push_back(value);
    }

    /// Anzahl der gespeicherten Messwerte (nie größer als die Kapazität)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iteriert die Werte in Einfüge-Reihenfolge (älteste → neueste)
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}

impl Default for SampleHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_record_keeps_insertion_order() {
        let mut history = SampleHistory::new();
        history.record(42.0);
        history.record(99.0);

        let values: Vec<f64> = history.iter().collect();
        assert_eq!(values, [42.0, 99.0]);
    }

    #[test]
    fn test_record_evicts_oldest_at_capacity() {
        let mut history = SampleHistory::new();
        for value in 1..=55 {
            history.record(value as f64);
        }

        let values: Vec<f64> = history.iter().collect();
        let expected: Vec<f64> = (6..=55).map(|value| value as f64).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_len_never_exceeds_capacity() {
        let mut history = SampleHistory::new();
        for value in 0..200 {
            history.record(value as f64);
            assert!(history.len() <= HISTORY_CAPACITY);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
    }
}
