pub mod payment;

pub use payment::{Cardholder, PartialPaymentRequest, PaymentRequest, PaymentResult};
