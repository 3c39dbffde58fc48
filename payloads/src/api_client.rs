use crate::{BookingId, CabinDetails, CabinId, Settings, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the remote back-office API.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the remote API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    pub async fn list_cabins(
        &self,
    ) -> Result<Vec<responses::Cabin>, ClientError> {
        let response = self.empty_get("cabins").await?;
        ok_body(response).await
    }

    pub async fn create_cabin(
        &self,
        details: &CabinDetails,
    ) -> Result<responses::Cabin, ClientError> {
        let response = self.post("create_cabin", details).await?;
        ok_body(response).await
    }

    pub async fn update_cabin(
        &self,
        details: &requests::UpdateCabin,
    ) -> Result<responses::Cabin, ClientError> {
        let response = self.post("cabin", details).await?;
        ok_body(response).await
    }

    pub async fn delete_cabin(
        &self,
        cabin_id: &CabinId,
    ) -> Result<(), ClientError> {
        let response = self.post("delete_cabin", cabin_id).await?;
        ok_empty(response).await
    }

    pub async fn list_bookings(
        &self,
    ) -> Result<Vec<responses::Booking>, ClientError> {
        let response = self.empty_get("bookings").await?;
        ok_body(response).await
    }

    pub async fn get_booking(
        &self,
        booking_id: &BookingId,
    ) -> Result<responses::Booking, ClientError> {
        let response = self.post("booking", booking_id).await?;
        ok_body(response).await
    }

    pub async fn delete_booking(
        &self,
        booking_id: &BookingId,
    ) -> Result<(), ClientError> {
        let response = self.post("delete_booking", booking_id).await?;
        ok_empty(response).await
    }

    /// Mark a booking as checked in, optionally adding breakfast. Returns the
    /// updated booking.
    pub async fn check_in(
        &self,
        details: &requests::CheckIn,
    ) -> Result<responses::Booking, ClientError> {
        let response = self.post("check_in", details).await?;
        ok_body(response).await
    }

    pub async fn check_out(
        &self,
        booking_id: &BookingId,
    ) -> Result<responses::Booking, ClientError> {
        let response = self.post("check_out", booking_id).await?;
        ok_body(response).await
    }

    pub async fn get_settings(&self) -> Result<Settings, ClientError> {
        let response = self.empty_get("settings").await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The requested resource does not exist on the remote side.
    #[error("{0}")]
    NotFound(String),
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

async fn error_from(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => return e.into(),
    };
    if status == StatusCode::NOT_FOUND {
        ClientError::NotFound(text)
    } else {
        ClientError::APIError(status, text)
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(error_from(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(error_from(response).await);
    }
    Ok(())
}
