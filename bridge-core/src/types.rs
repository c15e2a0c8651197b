//! Core Types für die Geräte-Steuerung
//!
//! Datenstrukturen ohne Plattform-Dependencies

use alloc::string::String;

/// Befohlenes LED-Kommando für das Gerät
///
/// Das Gerät pollt diesen Wert und schaltet seine LED entsprechend.
/// `on` und `off` sind das bekannte Vokabular; jeder andere String wird
/// unverändert gespeichert und zurückgegeben - der Dienst validiert
/// Schreibzugriffe nicht, der letzte Schreiber gewinnt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedState {
    On,
    Off,
    /// Roh-String außerhalb von {on, off}, verbatim übernommen
    Other(String),
}

impl LedState {
    /// Parst einen Wire-String in das Kommando
    ///
    /// Unbekannte Werte werden nicht abgelehnt, sondern als `Other`
    /// getragen.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "on" => Self::On,
            "off" => Self::Off,
            _ => Self::Other(String::from(raw)),
        }
    }

    /// Wire-Repräsentation des Kommandos
    pub fn as_str(&self) -> &str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Gehört der Wert zum bekannten Vokabular {on, off}?
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for LedState {
    /// Zustand beim Prozess-Start: aus
    fn default() -> Self {
        Self::Off
    }
}

// ============================================================================
// Serde Implementations (optional feature)
// ============================================================================
//
// Das Kommando serialisiert als nackter String, damit die Wire-Form
// exakt dem gespeicherten Roh-Wert entspricht.

#[cfg(feature = "serde")]
impl serde::Serialize for LedState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LedState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
