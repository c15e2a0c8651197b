// Projekt-Konfiguration: Konstanten für Server und Dashboard

// ============================================================================
// HTTP Server Konfiguration
// ============================================================================

/// HTTP Server Port
/// Fester Vertrag mit Geräte-Firmware und Dashboard - keine
/// Konfigurations-Oberfläche, das Gerät kennt die Adresse hart codiert.
pub const HTTP_PORT: u16 = 5000;

/// HTTP Buffer-Größe in Bytes (pro Verbindung)
/// Für Request/Response Headers und Body; die JSON-Nachrichten der
/// Brücke bleiben weit unter 1 KB, die Historie unter 2 KB
pub const HTTP_BUFFER_SIZE: usize = 2048;

/// Timeout bis zum ersten Request-Byte einer neuen Verbindung (Sekunden)
pub const START_READ_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Timeout bis zum Folge-Request auf einer Keep-Alive-Verbindung (Sekunden)
pub const PERSISTENT_START_READ_TIMEOUT_SECS: u64 = 1;

/// Timeout für das Lesen eines angefangenen Requests (Sekunden)
pub const READ_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Timeout für das Schreiben der Response (Sekunden)
pub const WRITE_TIMEOUT_SECS: u64 = 1;

// ============================================================================
// Dashboard Konfiguration
// ============================================================================

/// Poll-Intervall des Dashboards in Millisekunden
/// Das Dashboard fragt LED-Zustand und Historie zyklisch ab; es gibt
/// bewusst keinen Push-Kanal
pub const DASHBOARD_POLL_INTERVAL_MS: u32 = 1000;
