//! HTTP round trips: the real gateway client against an in-process
//! axum stub of the donation service.

#![cfg(test)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use parking_lot::Mutex;

use crate::support::donation_json;
use foodlink_gateway::{AvailableFilter, GatewayClient, GatewayConfig, GatewayError};
use foodlink_types::{DonationId, QrToken};

/// Serve `router` on an ephemeral port and return its address.
async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> GatewayClient {
    GatewayClient::new(GatewayConfig::new(format!("http://{addr}"))).unwrap()
}

#[tokio::test]
async fn available_list_passes_filters_and_parses_donations() {
    let seen_query: Arc<Mutex<Option<HashMap<String, String>>>> = Arc::new(Mutex::new(None));
    let captured = Arc::clone(&seen_query);

    let router = Router::new().route(
        "/donations/available",
        get(move |Query(params): Query<HashMap<String, String>>| async move {
            *captured.lock() = Some(params);
            Json(serde_json::json!([donation_json("don-1", "available")]))
        }),
    );
    let addr = spawn_server(router).await;

    let filter = AvailableFilter {
        pin: Some("560001".to_string()),
        food_type: Some("cooked".to_string()),
    };
    let donations = client_for(addr).list_available(&filter).await.unwrap();

    assert_eq!(donations.len(), 1);
    assert_eq!(donations[0].id, DonationId::new("don-1"));

    let query = seen_query.lock().clone().unwrap();
    assert_eq!(query.get("pin").map(String::as_str), Some("560001"));
    assert_eq!(query.get("food_type").map(String::as_str), Some("cooked"));
}

#[tokio::test]
async fn non_array_list_response_coerces_to_empty() {
    let router = Router::new().route(
        "/donations/mine",
        get(|| async { Json(serde_json::json!({"unexpected": "shape"})) }),
    );
    let addr = spawn_server(router).await;

    let donations = client_for(addr).list_mine().await.unwrap();
    assert!(donations.is_empty());
}

#[tokio::test]
async fn remote_failure_carries_server_message() {
    let router = Router::new().route(
        "/donations/:id/accept",
        post(|| async {
            (
                StatusCode::CONFLICT,
                Json(serde_json::json!({"message": "Donation already accepted"})),
            )
        }),
    );
    let addr = spawn_server(router).await;

    let err = client_for(addr)
        .accept(&DonationId::new("don-1"), Some("vol-1"))
        .await
        .unwrap_err();

    match err {
        GatewayError::Remote { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message.as_deref(), Some("Donation already accepted"));
        }
        other => panic!("expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn remote_failure_without_body_has_no_message() {
    let router = Router::new().route(
        "/donations/:id",
        delete(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let addr = spawn_server(router).await;

    let err = client_for(addr)
        .delete(&DonationId::new("don-2"))
        .await
        .unwrap_err();

    match err {
        GatewayError::Remote { status, message } => {
            assert_eq!(status, 500);
            assert!(message.is_none());
        }
        other => panic!("expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn confirm_pickup_posts_token_to_the_donation_path() {
    let seen: Arc<Mutex<Option<(String, serde_json::Value)>>> = Arc::new(Mutex::new(None));
    let captured = Arc::clone(&seen);

    let router = Router::new().route(
        "/donations/:id/confirm-pickup",
        post(
            move |Path(id): Path<String>, Json(body): Json<serde_json::Value>| async move {
                *captured.lock() = Some((id, body));
                StatusCode::OK
            },
        ),
    );
    let addr = spawn_server(router).await;

    client_for(addr)
        .confirm_pickup(&DonationId::new("id1"), &QrToken::new("tok:extra"))
        .await
        .unwrap();

    let (id, body) = seen.lock().clone().unwrap();
    assert_eq!(id, "id1");
    assert_eq!(body, serde_json::json!({"qr_token": "tok:extra"}));
}

#[tokio::test]
async fn unreachable_server_maps_to_connection_error() {
    // Bind and immediately drop a listener so the port is closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr).list_mine().await.unwrap_err();
    assert!(matches!(err, GatewayError::Connection(_)));
}
