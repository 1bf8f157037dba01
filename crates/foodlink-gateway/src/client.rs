//! HTTP client for the donation service.

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::types::{AcceptBody, ApiFailure, AvailableFilter, ConfirmBody};
use foodlink_types::{Donation, DonationId, QrToken};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

/// Client for the remote donation service.
///
/// Each method issues exactly one HTTP request; retrying is the
/// caller's decision.
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a new gateway client after validating the configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(GatewayError::Http)?;

        Ok(Self {
            client,
            base_url: config.trimmed_base_url().to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        request.send().await.map_err(|e| {
            if e.is_connect() {
                GatewayError::Connection(format!("Cannot connect to {}", self.base_url))
            } else {
                GatewayError::Http(e)
            }
        })
    }

    /// Turn a non-2xx response into a [`GatewayError::Remote`], keeping
    /// the server's `message` field when the body carries one.
    async fn remote_error(status: StatusCode, response: Response) -> GatewayError {
        let message = match response.json::<ApiFailure>().await {
            Ok(failure) => failure.message,
            Err(_) => None,
        };
        GatewayError::Remote {
            status: status.as_u16(),
            message,
        }
    }

    /// GET a list endpoint.
    ///
    /// Non-array payloads coerce to the empty vector so the caller's
    /// cache is never replaced with garbage.
    async fn fetch_list(
        &self,
        path: &str,
        query: &[(&'static str, &str)],
    ) -> Result<Vec<Donation>, GatewayError> {
        debug!(path, "fetching donation list");
        let mut request = self.client.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = self.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::remote_error(status, response).await);
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        if value.is_array() {
            serde_json::from_value(value).map_err(|e| GatewayError::Parse(e.to_string()))
        } else {
            warn!(path, "list response was not an array, coercing to empty");
            Ok(Vec::new())
        }
    }

    /// Issue a mutation and discard the success body.
    async fn mutate<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), GatewayError> {
        debug!(%method, path, "sending donation mutation");
        let mut request = self.client.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::remote_error(status, response).await);
        }
        Ok(())
    }

    // === List operations ===

    /// Donations currently available for NGOs to claim.
    pub async fn list_available(
        &self,
        filter: &AvailableFilter,
    ) -> Result<Vec<Donation>, GatewayError> {
        self.fetch_list("/donations/available", &filter.query_pairs())
            .await
    }

    /// Donations created by the calling restaurant.
    pub async fn list_mine(&self) -> Result<Vec<Donation>, GatewayError> {
        self.fetch_list("/donations/mine", &[]).await
    }

    /// Pickup tasks assigned to the calling volunteer.
    pub async fn list_assigned(&self) -> Result<Vec<Donation>, GatewayError> {
        self.fetch_list("/donations/assigned", &[]).await
    }

    /// Expired donations awaiting recycling.
    pub async fn list_expired(&self) -> Result<Vec<Donation>, GatewayError> {
        self.fetch_list("/donations/expired", &[]).await
    }

    // === Mutations ===

    /// NGO accepts a donation, optionally assigning a volunteer.
    pub async fn accept(
        &self,
        id: &DonationId,
        volunteer_id: Option<&str>,
    ) -> Result<(), GatewayError> {
        self.mutate(
            Method::POST,
            &format!("/donations/{id}/accept"),
            Some(&AcceptBody { volunteer_id }),
        )
        .await
    }

    /// Volunteer claims a pickup task.
    pub async fn volunteer_accept(&self, id: &DonationId) -> Result<(), GatewayError> {
        self.mutate::<()>(Method::POST, &format!("/donations/{id}/volunteer-accept"), None)
            .await
    }

    /// Confirm a pickup with the scanned token.
    ///
    /// The server re-validates the token; a mismatch comes back as
    /// [`GatewayError::Remote`].
    pub async fn confirm_pickup(
        &self,
        id: &DonationId,
        token: &QrToken,
    ) -> Result<(), GatewayError> {
        self.mutate(
            Method::POST,
            &format!("/donations/{id}/confirm-pickup"),
            Some(&ConfirmBody {
                qr_token: token.expose(),
            }),
        )
        .await
    }

    /// Waste partner claims an expired donation for recycling.
    pub async fn accept_for_recycling(&self, id: &DonationId) -> Result<(), GatewayError> {
        self.mutate::<()>(
            Method::POST,
            &format!("/donations/{id}/accept-recycling"),
            None,
        )
        .await
    }

    /// Confirm a recycling pickup with the scanned token.
    pub async fn confirm_recycle(
        &self,
        id: &DonationId,
        token: &QrToken,
    ) -> Result<(), GatewayError> {
        self.mutate(
            Method::POST,
            &format!("/donations/{id}/confirm-recycle"),
            Some(&ConfirmBody {
                qr_token: token.expose(),
            }),
        )
        .await
    }

    /// Restaurant deletes one of its own donations.
    pub async fn delete(&self, id: &DonationId) -> Result<(), GatewayError> {
        self.mutate::<()>(Method::DELETE, &format!("/donations/{id}"), None)
            .await
    }
}
