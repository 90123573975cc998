use async_trait::async_trait;

use crate::core::Result;
use crate::modules::payments::models::{PaymentRequest, PaymentResult};

/// Capability interface for the upstream card-payment gateway
///
/// The relay handler only needs "send one request, get one result"; hiding
/// the network behind this trait lets tests substitute a fake gateway.
/// Implementations must make exactly one attempt per call. A failed call is
/// a failed charge attempt, and retrying it could double-charge the card.
#[async_trait]
pub trait PrimeGateway: Send + Sync {
    /// Submit a pay-by-prime request and return the parsed gateway result
    async fn pay_by_prime(&self, request: &PaymentRequest) -> Result<PaymentResult>;

    /// Get gateway name
    fn name(&self) -> &str;
}
