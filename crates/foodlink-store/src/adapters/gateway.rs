//! [`DonationApi`] implementation backed by the HTTP gateway client.

use crate::ports::DonationApi;
use async_trait::async_trait;
use foodlink_gateway::{AvailableFilter, GatewayClient, GatewayError};
use foodlink_types::{Donation, DonationId, QrToken};

#[async_trait]
impl DonationApi for GatewayClient {
    async fn list_available(
        &self,
        filter: &AvailableFilter,
    ) -> Result<Vec<Donation>, GatewayError> {
        GatewayClient::list_available(self, filter).await
    }

    async fn list_mine(&self) -> Result<Vec<Donation>, GatewayError> {
        GatewayClient::list_mine(self).await
    }

    async fn list_assigned(&self) -> Result<Vec<Donation>, GatewayError> {
        GatewayClient::list_assigned(self).await
    }

    async fn list_expired(&self) -> Result<Vec<Donation>, GatewayError> {
        GatewayClient::list_expired(self).await
    }

    async fn accept(
        &self,
        id: &DonationId,
        volunteer_id: Option<&str>,
    ) -> Result<(), GatewayError> {
        GatewayClient::accept(self, id, volunteer_id).await
    }

    async fn volunteer_accept(&self, id: &DonationId) -> Result<(), GatewayError> {
        GatewayClient::volunteer_accept(self, id).await
    }

    async fn confirm_pickup(
        &self,
        id: &DonationId,
        token: &QrToken,
    ) -> Result<(), GatewayError> {
        GatewayClient::confirm_pickup(self, id, token).await
    }

    async fn accept_for_recycling(&self, id: &DonationId) -> Result<(), GatewayError> {
        GatewayClient::accept_for_recycling(self, id).await
    }

    async fn confirm_recycle(
        &self,
        id: &DonationId,
        token: &QrToken,
    ) -> Result<(), GatewayError> {
        GatewayClient::confirm_recycle(self, id, token).await
    }

    async fn delete(&self, id: &DonationId) -> Result<(), GatewayError> {
        GatewayClient::delete(self, id).await
    }
}
