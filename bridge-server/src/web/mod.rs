// Web-Modul für Dashboard und HTTP-Protokoll

pub mod protocol;

use bridge_core::{LedState, SampleHistory};

use crate::config::DASHBOARD_POLL_INTERVAL_MS;

// HTML-Datei zur Compile-Zeit einbinden
// Die Datei wird direkt ins Binary eingebettet
pub const INDEX_HTML: &str = include_str!("index.html");

/// Rendert das Dashboard mit dem Snapshot zum Request-Zeitpunkt
///
/// Ersetzt die Platzhalter der eingebetteten Seite durch den aktuellen
/// LED-Zustand und die Historie; danach übernimmt das Polling der
/// Seite. Der LED-String kann beliebige Client-Eingaben enthalten und
/// wird deshalb HTML-escaped.
pub fn render_dashboard(led: &LedState, history: &SampleHistory) -> String {
    let samples: Vec<f64> = history.iter().collect();
    // Nur endliche Zahlen im Puffer, die Serialisierung kann nicht scheitern
    let history_json = serde_json::to_string(&samples).unwrap_or_else(|_| String::from("[]"));

    INDEX_HTML
        .replace("{{LED_STATE}}", &html_escape(led.as_str()))
        .replace("{{HISTORY_JSON}}", &history_json)
        .replace(
            "{{POLL_INTERVAL_MS}}",
            &DASHBOARD_POLL_INTERVAL_MS.to_string(),
        )
}

/// Minimales HTML-Escaping für nicht vertrauenswürdige Strings
fn html_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dashboard_embeds_snapshot() {
        let mut history = SampleHistory::new();
        history.record(42.0);
        history.record(99.0);

        let page = render_dashboard(&LedState::On, &history);
        assert!(page.contains(">on<"));
        assert!(page.contains("[42.0,99.0]"));
        assert!(!page.contains("{{LED_STATE}}"));
        assert!(!page.contains("{{HISTORY_JSON}}"));
        assert!(!page.contains("{{POLL_INTERVAL_MS}}"));
    }

    #[test]
    fn test_render_dashboard_escapes_raw_state() {
        let state = LedState::parse("<script>alert(1)</script>");
        let page = render_dashboard(&state, &SampleHistory::new());
        assert!(!page.contains("<script>alert"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_html_escape_passes_plain_text() {
        assert_eq!(html_escape("off"), "off");
        assert_eq!(html_escape("a&b<c>\"d'"), "a&amp;b&lt;c&gt;&quot;d&#39;");
    }
}
