// HTTP Server - Router, Handler und Accept-Loop
use std::rc::Rc;
use std::time::Duration;

use log::{debug, info, warn};
use picoserve::extract::State;
use picoserve::io::embedded_io_async;
use picoserve::response::{IntoResponse, Response, StatusCode};
use picoserve::routing::{get, post};
use serde::Serialize;
use tokio::net::TcpListener;

use crate::config::{
    HTTP_BUFFER_SIZE, PERSISTENT_START_READ_TIMEOUT_SECS, READ_REQUEST_TIMEOUT_SECS,
    START_READ_REQUEST_TIMEOUT_SECS, WRITE_TIMEOUT_SECS,
};
use crate::state::{AppState, SharedDeviceState};
use crate::web::protocol::{
    AdcAckResponse, BadPayload, ErrorResponse, HistoryResponse, LedResponse, parse_adc_sample,
    parse_led_command,
};
use crate::web::render_dashboard;

/// HTTP-Antwort mit vorgerendertem Body
///
/// picoserve schreibt Bodies als &str; dieses Wrapper-Struct hält den
/// allokierten String und setzt Status + Content-Type beim Schreiben.
pub struct BridgeResponse {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

impl BridgeResponse {
    /// 200 OK mit JSON-Body
    fn json<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self {
                status: StatusCode::OK,
                content_type: "application/json",
                body,
            },
            Err(_) => Self::json_error(StatusCode::new(500), "internal serialization error"),
        }
    }

    /// Fehler-Antwort mit `{"error": ...}`-Body
    fn json_error(status: StatusCode, message: &str) -> Self {
        let body = serde_json::to_string(&ErrorResponse { error: message })
            .unwrap_or_else(|_| String::from(r#"{"error":"internal serialization error"}"#));
        Self {
            status,
            content_type: "application/json",
            body,
        }
    }

    /// 200 OK mit HTML-Body
    fn html(body: String) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "text/html; charset=utf-8",
            body,
        }
    }
}

impl IntoResponse for BridgeResponse {
    async fn write_to<
        R: embedded_io_async::Read,
        W: picoserve::response::ResponseWriter<Error = R::Error>,
    >(
        self,
        connection: picoserve::response::Connection<'_, R>,
        response_writer: W,
    ) -> Result<picoserve::ResponseSent, W::Error> {
        Response::new(self.status, self.body.as_str())
            .with_header("Content-Type", self.content_type)
            .write_to(connection, response_writer)
            .await
    }
}

// Abgelehnte Bodies antworten mit der beobachteten 400-Form,
// z.B. {"error":"Expected JSON with \"adc\""}
impl IntoResponse for BadPayload {
    async fn write_to<
        R: embedded_io_async::Read,
        W: picoserve::response::ResponseWriter<Error = R::Error>,
    >(
        self,
        connection: picoserve::response::Connection<'_, R>,
        response_writer: W,
    ) -> Result<picoserve::ResponseSent, W::Error> {
        warn!("HTTP: Rejected request body: {}", self.message());
        BridgeResponse::json_error(StatusCode::new(400), &self.message())
            .write_to(connection, response_writer)
            .await
    }
}

/// Extrahiertes LED-Kommando aus dem Body von POST /set-led
///
/// Liest den kompletten Body und wendet die Protokoll-Prüfung an;
/// schlägt sie fehl, beantwortet die Rejection den Request, ohne den
/// Handler zu erreichen - der Zustand bleibt unberührt.
pub struct LedPayload(pub bridge_core::LedState);

impl<'r, S> picoserve::extract::FromRequest<'r, S> for LedPayload {
    type Rejection = BadPayload;

    async fn from_request<R: embedded_io_async::Read>(
        _state: &'r S,
        _request_parts: picoserve::request::RequestParts<'r>,
        request_body: picoserve::request::RequestBody<'r, R>,
    ) -> Result<Self, Self::Rejection> {
        let raw = request_body
            .read_all()
            .await
            .map_err(|_| BadPayload::new("state"))?;
        parse_led_command(raw).map(LedPayload)
    }
}

/// Extrahierter Messwert aus dem Body von POST /adc-data
pub struct AdcPayload(pub f64);

impl<'r, S> picoserve::extract::FromRequest<'r, S> for AdcPayload {
    type Rejection = BadPayload;

    async fn from_request<R: embedded_io_async::Read>(
        _state: &'r S,
        _request_parts: picoserve::request::RequestParts<'r>,
        request_body: picoserve::request::RequestBody<'r, R>,
    ) -> Result<Self, Self::Rejection> {
        let raw = request_body
            .read_all()
            .await
            .map_err(|_| BadPayload::new("adc"))?;
        parse_adc_sample(raw).map(AdcPayload)
    }
}

// ============================================================================
// Handler
// ============================================================================

/// GET / - Dashboard mit konsistentem Snapshot zum Request-Zeitpunkt
async fn get_index(State(device): State<SharedDeviceState>) -> BridgeResponse {
    let page = {
        let state = device.lock();
        render_dashboard(state.led(), state.history())
    };
    BridgeResponse::html(page)
}

/// POST /set-led - überschreibt das LED-Kommando bedingungslos
///
/// Kein Compare-and-Swap: der letzte Schreiber gewinnt. Die Antwort
/// echot den neuen Wert als `{"led": ...}`.
async fn post_set_led(
    State(device): State<SharedDeviceState>,
    LedPayload(new_state): LedPayload,
) -> BridgeResponse {
    info!("HTTP: LED command set to '{}'", new_state.as_str());
    let mut state = device.lock();
    state.set_led(new_state);
    BridgeResponse::json(&LedResponse { led: state.led() })
}

/// GET /led-state - vom Gerät gepollt; idempotent und billig
async fn get_led_state(State(device): State<SharedDeviceState>) -> BridgeResponse {
    let state = device.lock();
    BridgeResponse::json(&LedResponse { led: state.led() })
}

/// POST /adc-data - zeichnet einen Messwert auf
///
/// Append und Verdrängen sind unter dem Lock eine Einheit; zwei
/// gleichzeitige Ingests können sich nicht verschränken.
async fn post_adc_sample(
    State(device): State<SharedDeviceState>,
    AdcPayload(value): AdcPayload,
) -> BridgeResponse {
    debug!("HTTP: ADC sample received: {value}");
    device.lock().record_sample(value);
    BridgeResponse::json(&AdcAckResponse::ok(value))
}

/// GET /adc-data - Historien-Snapshot, älteste zuerst
async fn get_adc_history(State(device): State<SharedDeviceState>) -> BridgeResponse {
    let history: Vec<f64> = device.lock().history().iter().collect();
    BridgeResponse::json(&HistoryResponse { history })
}

// ============================================================================
// Router und Accept-Loop
// ============================================================================

/// Accept-Loop: eine lokale Task pro Verbindung
///
/// Muss innerhalb eines tokio `LocalSet` laufen - der Router ist nicht
/// Send, jede Verbindung wird als lokale Task bedient. Jeder Request
/// ist eine unabhängige Arbeitseinheit über dem geteilten Zustand.
pub async fn serve_connections(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    // Router-Konfiguration
    // /adc-data multiplext Ingest (POST) und Lesen (GET) auf einer
    // Adresse: das Gerät nutzt eine einzige wohlbekannte Adresse für
    // beide Richtungen des Telemetrie-Kanals
    let app = Rc::new(
        picoserve::Router::new()
            .route("/", get(get_index))
            .route("/set-led", post(post_set_led))
            .route("/led-state", get(get_led_state))
            .route("/adc-data", get(get_adc_history).post(post_adc_sample))
            .with_state(state),
    );

    // Server-Konfiguration
    let config = picoserve::Config::new(picoserve::Timeouts {
        start_read_request: Some(Duration::from_secs(START_READ_REQUEST_TIMEOUT_SECS)),
        persistent_start_read_request: Some(Duration::from_secs(
            PERSISTENT_START_READ_TIMEOUT_SECS,
        )),
        read_request: Some(Duration::from_secs(READ_REQUEST_TIMEOUT_SECS)),
        write: Some(Duration::from_secs(WRITE_TIMEOUT_SECS)),
    })
    .keep_connection_alive();

    loop {
        let (stream, remote_address) = listener.accept().await?;
        debug!("HTTP: Connection from {remote_address}");

        let app = app.clone();
        let config = config.clone();

        tokio::task::spawn_local(async move {
            let mut http_buffer = [0u8; HTTP_BUFFER_SIZE];
            match picoserve::Server::new(&app, &config, &mut http_buffer)
                .serve(stream)
                .await
            {
                Ok(picoserve::DisconnectionInfo {
                    handled_requests_count,
                    ..
                }) => {
                    debug!("HTTP: {handled_requests_count} requests handled from {remote_address}");
                }
                Err(err) => {
                    warn!("HTTP: Connection error from {remote_address}: {err:?}");
                }
            }
        });
    }
}
