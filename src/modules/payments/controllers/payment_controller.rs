use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpResponse};

use crate::config::Config;
use crate::core::{relay_response, AppError};
use crate::modules::payments::models::{PartialPaymentRequest, PaymentRequest};
use crate::modules::payments::services::PrimeGateway;

/// Forward a payment request to the gateway
/// POST /api/pay (and every other non-OPTIONS method)
///
/// The body is a partial payment request; it is overlaid onto defaults
/// prefilled from configuration (partner key, merchant id, amount = 1) and
/// forwarded upstream in a single attempt. The gateway's result document is
/// relayed back verbatim with status 200; any local or upstream failure
/// produces a bare status code with an empty body.
pub async fn pay(
    config: web::Data<Config>,
    gateway: web::Data<dyn PrimeGateway>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let partial: PartialPaymentRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::client_input(e.to_string()))?;

    let request =
        PaymentRequest::prefilled(&config.partner_key, &config.merchant_id).overlay(partial);

    tracing::debug!(
        merchant_id = %request.merchant_id,
        amount = request.amount,
        gateway = gateway.name(),
        "forwarding payment request"
    );

    let result = gateway.pay_by_prime(&request).await?;

    Ok(relay_response(StatusCode::OK).json(result))
}

/// CORS preflight for the pay endpoint
/// OPTIONS /api/pay
pub async fn preflight() -> HttpResponse {
    relay_response(StatusCode::OK).finish()
}

/// Configure payment routes
///
/// OPTIONS answers the preflight; every other method falls through to the
/// relay handler, which rejects bodyless requests with a 400.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api").service(
            web::resource("/pay")
                .route(web::route().method(Method::OPTIONS).to(preflight))
                .to(pay),
        ),
    );
}
