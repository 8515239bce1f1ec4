// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions, clippy::unused_async)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use cinema::{RoomInventory, TokenPolicy};
use cinema_api::{
    ApiError, ListSeatsResponse, PurchaseTicketRequest, PurchaseTicketResponse,
    ReturnTicketRequest, ReturnTicketResponse, StatisticsQuery, StatisticsResponse,
    StatsAuthenticator, get_statistics, list_seats, purchase_ticket, return_ticket,
};
use cinema_domain::RoomDimensions;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Cinema Server - HTTP server for the Cinema Room Ticketing System
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of seat rows in the room
    #[arg(long, env = "ROOM_TOTAL_ROWS", default_value_t = 9)]
    total_rows: u32,

    /// Number of seats in each row
    #[arg(long, env = "ROOM_TOTAL_COLUMNS", default_value_t = 9)]
    total_columns: u32,

    /// Password required to read sales statistics
    #[arg(
        long,
        env = "CINEMA_STATS_PASSWORD",
        default_value = "super_secret",
        hide_env_values = true
    )]
    stats_password: String,

    /// Whether a returned ticket keeps its token or gets a new one
    #[arg(long, env = "CINEMA_TOKEN_POLICY", value_enum, default_value_t = TokenPolicyArg::Reuse)]
    token_policy: TokenPolicyArg,

    /// Address to bind the server to
    #[arg(long, env = "CINEMA_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, env = "CINEMA_PORT", default_value_t = 28852)]
    port: u16,
}

/// Command-line spelling of [`TokenPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TokenPolicyArg {
    /// Keep the token of a returned ticket
    Reuse,
    /// Mint a new token whenever a ticket is returned
    Fresh,
}

impl From<TokenPolicyArg> for TokenPolicy {
    fn from(arg: TokenPolicyArg) -> Self {
        match arg {
            TokenPolicyArg::Reuse => Self::Reuse,
            TokenPolicyArg::Fresh => Self::FreshPerSale,
        }
    }
}

/// Application state shared across handlers.
///
/// The inventory does its own locking, so handlers share it through an `Arc`.
#[derive(Clone)]
struct AppState {
    /// The seat inventory of the room.
    inventory: Arc<RoomInventory>,
    /// The statistics password check.
    authenticator: Arc<StatsAuthenticator>,
}

impl AppState {
    /// Builds the application state from validated configuration.
    fn from_args(args: &Args) -> Result<Self, Box<dyn std::error::Error>> {
        let dimensions: RoomDimensions = RoomDimensions::new(args.total_rows, args.total_columns)?;
        let authenticator: StatsAuthenticator = StatsAuthenticator::new(args.stats_password.as_str())?;

        Ok(Self {
            inventory: Arc::new(RoomInventory::with_token_policy(
                dimensions,
                args.token_policy.into(),
            )),
            authenticator: Arc::new(authenticator),
        })
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error message.
    error: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::DomainRuleViolation { .. } | ApiError::InvalidInput { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.client_message().to_string(),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

/// Handler for GET `/seats` endpoint.
///
/// Lists the room dimensions and the seats still on sale.
async fn handle_list_seats(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListSeatsResponse>, HttpError> {
    let response: ListSeatsResponse = list_seats(&app_state.inventory)?;

    info!(
        available_seats = response.available_seats.len(),
        "Handling list_seats request"
    );

    Ok(Json(response))
}

/// Handler for POST `/purchase` endpoint.
///
/// Buys the ticket for one seat.
async fn handle_purchase(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<PurchaseTicketRequest>, JsonRejection>,
) -> Result<Json<PurchaseTicketResponse>, HttpError> {
    let Json(req) = payload?;
    info!(
        row = req.row,
        column = req.column,
        "Handling purchase request"
    );

    let response: PurchaseTicketResponse = purchase_ticket(&app_state.inventory, &req)?;

    Ok(Json(response))
}

/// Handler for POST `/return` endpoint.
///
/// Returns a ticket by token and frees its seat.
async fn handle_return(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<ReturnTicketRequest>, JsonRejection>,
) -> Result<Json<ReturnTicketResponse>, HttpError> {
    let Json(req) = payload?;
    info!("Handling return request");

    let response: ReturnTicketResponse = return_ticket(&app_state.inventory, &req)?;

    info!(
        row = response.returned_ticket.row,
        column = response.returned_ticket.column,
        "Ticket returned"
    );

    Ok(Json(response))
}

/// Handler for POST `/stats` endpoint.
///
/// Reports sales statistics to callers holding the password.
async fn handle_stats(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<StatisticsQuery>,
) -> Result<Json<StatisticsResponse>, HttpError> {
    info!("Handling stats request");

    let response: StatisticsResponse = get_statistics(
        &app_state.inventory,
        &app_state.authenticator,
        query.password.as_deref(),
    )?;

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/seats", get(handle_list_seats))
        .route("/purchase", post(handle_purchase))
        .route("/return", post(handle_return))
        .route("/stats", post(handle_stats))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Cinema Server");

    let app_state: AppState = AppState::from_args(&args)?;
    let dimensions: RoomDimensions = app_state.inventory.dimensions();
    info!(
        total_rows = dimensions.total_rows(),
        total_columns = dimensions.total_columns(),
        token_policy = ?app_state.inventory.token_policy(),
        "Room inventory ready"
    );

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    const TEST_PASSWORD: &str = "super_secret";

    /// Helper to create test app state for a room of the given size.
    fn create_test_app_state(rows: u32, columns: u32) -> AppState {
        let rows: String = rows.to_string();
        let columns: String = columns.to_string();
        let args: Args = Args::parse_from([
            "cinema-server",
            "--total-rows",
            rows.as_str(),
            "--total-columns",
            columns.as_str(),
            "--stats-password",
            TEST_PASSWORD,
        ]);
        AppState::from_args(&args).expect("Failed to create app state")
    }

    async fn send(app: &Router, request: Request<Body>) -> (HttpStatusCode, serde_json::Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status: HttpStatusCode = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap()
    }

    fn post_empty(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn get_seats() -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri("/seats")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_seats() {
        let app: Router = build_router(create_test_app_state(9, 9));

        let (status, body) = send(&app, get_seats()).await;

        assert_eq!(status, HttpStatusCode::OK);
        let response: ListSeatsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.total_rows, 9);
        assert_eq!(response.total_columns, 9);
        assert_eq!(response.available_seats.len(), 81);
    }

    #[tokio::test]
    async fn test_purchase_and_return_round_trip() {
        let app: Router = build_router(create_test_app_state(9, 9));

        let (status, body) = send(
            &app,
            post_json("/purchase", &serde_json::json!({ "row": 3, "column": 4 })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        let purchase: PurchaseTicketResponse = serde_json::from_value(body).unwrap();
        assert_eq!(
            serde_json::to_value(purchase.ticket).unwrap(),
            serde_json::json!({ "row": 3, "column": 4, "price": 10 })
        );

        let (status, body) = send(
            &app,
            post_json("/return", &serde_json::json!({ "token": purchase.token })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({ "returned_ticket": { "row": 3, "column": 4, "price": 10 } })
        );

        let (_, body) = send(&app, get_seats()).await;
        assert_eq!(body["available_seats"].as_array().unwrap().len(), 81);
    }

    #[tokio::test]
    async fn test_purchase_out_of_bounds_is_bad_request() {
        let app: Router = build_router(create_test_app_state(9, 9));

        let (status, body) = send(
            &app,
            post_json("/purchase", &serde_json::json!({ "row": 10, "column": 1 })),
        )
        .await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({ "error": "The number of a row or a column is out of bounds!" })
        );
    }

    #[tokio::test]
    async fn test_purchase_missing_coordinate_is_bad_request() {
        let app: Router = build_router(create_test_app_state(9, 9));

        let (status, body) = send(
            &app,
            post_json("/purchase", &serde_json::json!({ "row": 1 })),
        )
        .await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({ "error": "The number of a row or a column is out of bounds!" })
        );
    }

    #[tokio::test]
    async fn test_malformed_bodies_are_bad_request() {
        let app: Router = build_router(create_test_app_state(9, 9));

        let (status, body) = send(
            &app,
            post_json(
                "/purchase",
                &serde_json::json!({ "row": 1, "column": 4_294_967_296_u64 }),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, body) = send(&app, post_empty("/return")).await;
        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_purchase_sold_seat_is_bad_request() {
        let app: Router = build_router(create_test_app_state(9, 9));
        let seat = serde_json::json!({ "row": 1, "column": 1 });

        let (status, _) = send(&app, post_json("/purchase", &seat)).await;
        assert_eq!(status, HttpStatusCode::OK);

        let (status, body) = send(&app, post_json("/purchase", &seat)).await;
        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({ "error": "The ticket has been already purchased!" })
        );
    }

    #[tokio::test]
    async fn test_return_wrong_token_is_bad_request() {
        let app: Router = build_router(create_test_app_state(9, 9));

        for payload in [
            serde_json::json!({ "token": "00000000-0000-4000-8000-000000000000" }),
            serde_json::json!({}),
        ] {
            let (status, body) = send(&app, post_json("/return", &payload)).await;
            assert_eq!(status, HttpStatusCode::BAD_REQUEST);
            assert_eq!(body, serde_json::json!({ "error": "Wrong token!" }));
        }
    }

    #[tokio::test]
    async fn test_stats_require_password() {
        let app: Router = build_router(create_test_app_state(9, 9));

        for uri in ["/stats", "/stats?password=wrong"] {
            let (status, body) = send(&app, post_empty(uri)).await;
            assert_eq!(status, HttpStatusCode::UNAUTHORIZED);
            assert_eq!(body, serde_json::json!({ "error": "The password is wrong!" }));
        }
    }

    #[tokio::test]
    async fn test_stats_scenario() {
        let app: Router = build_router(create_test_app_state(9, 9));
        let stats_uri: String = format!("/stats?password={TEST_PASSWORD}");

        let (status, body) = send(&app, post_empty(&stats_uri)).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({
                "current_income": 0,
                "number_of_available_seats": 81,
                "number_of_purchased_tickets": 0,
            })
        );

        let (_, front) = send(
            &app,
            post_json("/purchase", &serde_json::json!({ "row": 1, "column": 1 })),
        )
        .await;
        send(
            &app,
            post_json("/purchase", &serde_json::json!({ "row": 5, "column": 1 })),
        )
        .await;
        let (_, body) = send(&app, post_empty(&stats_uri)).await;
        assert_eq!(body["current_income"], 18);

        send(
            &app,
            post_json("/return", &serde_json::json!({ "token": front["token"] })),
        )
        .await;
        let (_, body) = send(&app, post_empty(&stats_uri)).await;
        assert_eq!(
            body,
            serde_json::json!({
                "current_income": 8,
                "number_of_available_seats": 80,
                "number_of_purchased_tickets": 1,
            })
        );
    }

    #[tokio::test]
    async fn test_concurrent_purchase_requests_sell_once() {
        let app: Router = build_router(create_test_app_state(2, 2));
        let seat = serde_json::json!({ "row": 2, "column": 2 });

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let app: Router = app.clone();
                let seat = seat.clone();
                tokio::spawn(async move { send(&app, post_json("/purchase", &seat)).await.0 })
            })
            .collect();

        let mut ok: usize = 0;
        for task in tasks {
            let status: HttpStatusCode = task.await.unwrap();
            if status == HttpStatusCode::OK {
                ok += 1;
            } else {
                assert_eq!(status, HttpStatusCode::BAD_REQUEST);
            }
        }
        assert_eq!(ok, 1);
    }

    #[test]
    fn test_invalid_dimensions_rejected_at_startup() {
        let args: Args = Args::parse_from(["cinema-server", "--total-rows", "0"]);
        assert!(AppState::from_args(&args).is_err());
    }

    #[test]
    fn test_empty_password_rejected_at_startup() {
        let args: Args = Args::parse_from(["cinema-server", "--stats-password", ""]);
        assert!(AppState::from_args(&args).is_err());
    }

    #[test]
    fn test_token_policy_flag() {
        let args: Args = Args::parse_from(["cinema-server", "--token-policy", "fresh"]);
        let app_state: AppState = AppState::from_args(&args).unwrap();
        assert_eq!(
            app_state.inventory.token_policy(),
            TokenPolicy::FreshPerSale
        );
    }
}
