use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::gateway_trait::PrimeGateway;
use crate::core::{AppError, Result};
use crate::modules::payments::models::{PaymentRequest, PaymentResult};

/// Bound on the full outbound call. A gateway that stops responding fails
/// the request at this boundary instead of hanging it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// TapPay payment gateway client
///
/// Implements PrimeGateway for the TapPay pay-by-prime API.
/// API Documentation: https://docs.tappaysdk.com/tutorial/zh/back.html
pub struct TapPayClient {
    client: Client,
    partner_key: String,
    base_url: String,
}

impl TapPayClient {
    /// Create a new TapPay client
    ///
    /// # Arguments
    /// * `partner_key` - TapPay partner key, sent as the `x-api-key` header
    /// * `base_url` - TapPay API base URL (defaults to sandbox)
    /// * `timeout` - bound on the full outbound call (defaults to 10s)
    pub fn new(
        partner_key: String,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(REQUEST_TIMEOUT))
            .build()
            .map_err(|e| AppError::configuration(format!("cannot build http client: {}", e)))?;

        Ok(Self {
            client,
            partner_key,
            base_url: base_url.unwrap_or_else(|| "https://sandbox.tappaysdk.com".to_string()),
        })
    }
}

#[async_trait]
impl PrimeGateway for TapPayClient {
    async fn pay_by_prime(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        let url = format!("{}/tpc/payment/pay-by-prime", self.base_url);

        // Encode before sending so an encoding failure surfaces as a local
        // defect rather than a transport error. One attempt only.
        let body = serde_json::to_vec(request)?;

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.partner_key)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status_code = response.status();
        if status_code != StatusCode::OK {
            return Err(AppError::gateway(format!(
                "unexpected response code: {}",
                status_code.as_u16()
            )));
        }

        let response_body = response.text().await?;

        serde_json::from_str(&response_body).map_err(|e| {
            AppError::UpstreamDecode(format!("cannot parse gateway response: {}", e))
        })
    }

    fn name(&self) -> &str {
        "tappay"
    }
}
