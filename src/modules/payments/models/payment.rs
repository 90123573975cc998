use serde::{Deserialize, Serialize};

/// Payment request forwarded to the gateway
///
/// Field names follow the TapPay pay-by-prime wire format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub partner_key: String,
    /// Single-use tokenized card representation from the client-side SDK,
    /// forwarded opaquely.
    pub prime: String,
    /// Amount in minor currency units
    pub amount: i64,
    pub merchant_id: String,
    pub details: String,
    pub cardholder: Cardholder,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cardholder {
    pub phone_number: String,
    pub name: String,
    pub email: String,
    pub zip_code: String,
    pub address: String,
    pub national_id: String,
}

/// Client-supplied partial payment request
///
/// Every field is optional; the incoming body deserializes into this shape
/// and is overlaid onto a prefilled [`PaymentRequest`]. A field the client
/// sends (including an explicit override of `partner_key`) wins; an absent
/// or `null` field keeps the prefill. The prefill is a convenience, not an
/// enforced floor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartialPaymentRequest {
    pub partner_key: Option<String>,
    pub prime: Option<String>,
    pub amount: Option<i64>,
    pub merchant_id: Option<String>,
    pub details: Option<String>,
    pub cardholder: Option<Cardholder>,
}

impl PaymentRequest {
    /// Default request carrying the configured credentials and a 1-unit
    /// amount, ready for the client overlay.
    pub fn prefilled(partner_key: &str, merchant_id: &str) -> Self {
        Self {
            partner_key: partner_key.to_string(),
            amount: 1,
            merchant_id: merchant_id.to_string(),
            ..Default::default()
        }
    }

    /// Overlay merge: client-present fields win, absent fields keep defaults.
    pub fn overlay(mut self, partial: PartialPaymentRequest) -> Self {
        if let Some(partner_key) = partial.partner_key {
            self.partner_key = partner_key;
        }
        if let Some(prime) = partial.prime {
            self.prime = prime;
        }
        if let Some(amount) = partial.amount {
            self.amount = amount;
        }
        if let Some(merchant_id) = partial.merchant_id {
            self.merchant_id = merchant_id;
        }
        if let Some(details) = partial.details {
            self.details = details;
        }
        if let Some(cardholder) = partial.cardholder {
            self.cardholder = cardholder;
        }
        self
    }
}

/// Payment result relayed back to the client verbatim
///
/// Mirrors the gateway's response shape; no field is interpreted here.
/// Fields absent from the gateway response fall back to zero values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentResult {
    pub status: i32,
    pub msg: String,
    pub amount: i64,
    pub acquirer: String,
    pub currency: String,
    pub rec_trade_id: String,
    pub bank_transaction_id: String,
    pub order_number: String,
    pub auth_code: String,
    pub card_info: CardInfo,
    pub transaction_time_millis: i64,
    pub bank_transaction_time: BankTransactionTime,
    pub bank_result_code: String,
    pub bank_result_msg: String,
    pub card_identifier: String,
    pub merchant_id: String,
    pub is_rba_verified: bool,
    pub transaction_method_details: TransactionMethodDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardInfo {
    pub issuer: String,
    pub funding: i32,
    #[serde(rename = "type")]
    pub card_type: i32,
    pub level: String,
    pub country: String,
    pub last_four: String,
    pub bin_code: String,
    pub issuer_zh_tw: String,
    pub bank_id: String,
    pub country_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankTransactionTime {
    pub start_time_millis: String,
    pub end_time_millis: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionMethodDetails {
    pub transaction_method_reference: String,
    pub transaction_method: String,
}
