// HTTP-Protokoll-Definitionen
// Definiert die JSON-Nachrichten für Gerät ↔ Server ↔ Browser

use bridge_core::LedState;
use serde::Serialize;
use serde_json::Value;

/// Antwort mit dem aktuellen LED-Kommando: `{"led": "<state>"}`
///
/// Dieselbe Form für GET /led-state (Geräte-Polling) und als Echo
/// nach POST /set-led.
#[derive(Debug, Serialize)]
pub struct LedResponse<'a> {
    pub led: &'a LedState,
}

/// Bestätigung eines aufgezeichneten Messwerts:
/// `{"status":"ok","received":<adc>}`
#[derive(Debug, Serialize)]
pub struct AdcAckResponse {
    pub status: &'static str,
    pub received: f64,
}

impl AdcAckResponse {
    pub fn ok(received: f64) -> Self {
        Self {
            status: "ok",
            received,
        }
    }
}

/// Historien-Snapshot, älteste zuerst: `{"history": [...]}`
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<f64>,
}

/// Fehler-Antwort: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse<'a> {
    pub error: &'a str,
}

/// Abgelehnter Request-Body eines Schreib-Endpunkts
///
/// Fehlender Body, Nicht-JSON und fehlender oder falsch getypter
/// Pflicht-Key bekommen dieselbe 400-Antwort; die Nachricht benennt
/// den erwarteten Key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadPayload {
    key: &'static str,
}

impl BadPayload {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    /// Wire-Nachricht des Fehlers, z.B. `Expected JSON with "adc"`
    pub fn message(&self) -> String {
        format!("Expected JSON with \"{}\"", self.key)
    }
}

/// Liest das LED-Kommando aus einem rohen Request-Body
///
/// Akzeptiert jedes JSON-Objekt, dessen `state`-Key ein String ist.
/// Der Wert selbst wird bewusst nicht validiert; auch Strings
/// außerhalb von {on, off} werden gespeichert.
pub fn parse_led_command(raw: &[u8]) -> Result<LedState, BadPayload> {
    let rejected = BadPayload::new("state");
    let body: Value = serde_json::from_slice(raw).map_err(|_| rejected)?;
    match body.get("state").and_then(Value::as_str) {
        Some(state) => Ok(LedState::parse(state)),
        None => Err(rejected),
    }
}

/// Liest einen Messwert aus einem rohen Request-Body
///
/// Akzeptiert jedes JSON-Objekt, dessen `adc`-Key eine Zahl ist.
pub fn parse_adc_sample(raw: &[u8]) -> Result<f64, BadPayload> {
    let rejected = BadPayload::new("adc");
    let body: Value = serde_json::from_slice(raw).map_err(|_| rejected)?;
    match body.get("adc").and_then(Value::as_f64) {
        Some(value) => Ok(value),
        None => Err(rejected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Tests: parse_led_command
    // ========================================================================

    #[test]
    fn test_parse_led_command_on() {
        let state = parse_led_command(br#"{"state":"on"}"#).unwrap();
        assert_eq!(state, LedState::On);
    }

    #[test]
    fn test_parse_led_command_keeps_unknown_values() {
        let state = parse_led_command(br#"{"state":"blau"}"#).unwrap();
        assert_eq!(state.as_str(), "blau");
        assert!(!state.is_known());
    }

    #[test]
    fn test_parse_led_command_rejects_missing_key() {
        let rejected = parse_led_command(br#"{"led":"on"}"#).unwrap_err();
        assert_eq!(rejected.message(), "Expected JSON with \"state\"");
    }

    #[test]
    fn test_parse_led_command_rejects_non_string_state() {
        assert!(parse_led_command(br#"{"state":1}"#).is_err());
    }

    #[test]
    fn test_parse_led_command_rejects_non_json_body() {
        assert!(parse_led_command(b"state=on").is_err());
        assert!(parse_led_command(b"").is_err());
    }

    // ========================================================================
    // Tests: parse_adc_sample
    // ========================================================================

    #[test]
    fn test_parse_adc_sample_integer_and_float() {
        assert_eq!(parse_adc_sample(br#"{"adc":42}"#).unwrap(), 42.0);
        assert_eq!(parse_adc_sample(br#"{"adc":3.5}"#).unwrap(), 3.5);
    }

    #[test]
    fn test_parse_adc_sample_rejects_missing_key() {
        let rejected = parse_adc_sample(br#"{"value":42}"#).unwrap_err();
        assert_eq!(rejected.message(), "Expected JSON with \"adc\"");
    }

    #[test]
    fn test_parse_adc_sample_rejects_non_numeric_value() {
        assert!(parse_adc_sample(br#"{"adc":"42"}"#).is_err());
        assert!(parse_adc_sample(br#"{"adc":null}"#).is_err());
    }

    #[test]
    fn test_parse_adc_sample_rejects_non_json_body() {
        assert!(parse_adc_sample(b"not json").is_err());
    }

    // ========================================================================
    // Tests: Response-Formen
    // ========================================================================

    #[test]
    fn test_led_response_wire_form() {
        let state = LedState::On;
        let json = serde_json::to_string(&LedResponse { led: &state }).unwrap();
        assert_eq!(json, r#"{"led":"on"}"#);
    }

    #[test]
    fn test_adc_ack_wire_form() {
        let json = serde_json::to_string(&AdcAckResponse::ok(42.0)).unwrap();
        assert_eq!(json, r#"{"status":"ok","received":42.0}"#);
    }

    #[test]
    fn test_history_wire_form() {
        let json = serde_json::to_string(&HistoryResponse {
            history: vec![42.0, 99.0],
        })
        .unwrap();
        assert_eq!(json, r#"{"history":[42.0,99.0]}"#);
    }

    #[test]
    fn test_error_wire_form() {
        let json = serde_json::to_string(&ErrorResponse {
            error: "Expected JSON with \"adc\"",
        })
        .unwrap();
        assert_eq!(json, r#"{"error":"Expected JSON with \"adc\""}"#);
    }
}
