//! Client for the payment gateway's orders API.

use crate::server::{
    error::{payment::PaymentError, AppError},
    model::payment::{GatewayOrder, GatewayOrderRequest},
    service::payment::signature::verify_signature,
};

/// Gateway credentials and endpoint, shared through `AppState`.
#[derive(Clone)]
pub struct PaymentGateway {
    key_id: String,
    key_secret: String,
    api_url: String,
}

impl PaymentGateway {
    pub fn new(key_id: String, key_secret: String, api_url: String) -> Self {
        Self {
            key_id,
            key_secret,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Public key id handed to the client checkout widget.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        verify_signature(order_id, payment_id, signature, &self.key_secret)
    }

    /// Opens an order with `POST {api_url}/v1/orders` using HTTP basic auth.
    ///
    /// # Returns
    /// - `Ok(GatewayOrder)` - Order created
    /// - `Err(PaymentError::Gateway)` - Request failed, was rejected, or the reply was unreadable
    pub async fn create_order(
        &self,
        http_client: &reqwest::Client,
        request: &GatewayOrderRequest,
    ) -> Result<GatewayOrder, AppError> {
        let response = http_client
            .post(format!("{}/v1/orders", self.api_url))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(request)
            .send()
            .await
            .map_err(|e| PaymentError::Gateway(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentError::Gateway(format!("{}: {}", status, body)).into());
        }

        let order = response
            .json::<GatewayOrder>()
            .await
            .map_err(|e| PaymentError::Gateway(e.to_string()))?;

        Ok(order)
    }
}
