pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{Cardholder, PartialPaymentRequest, PaymentRequest, PaymentResult};
pub use services::{PrimeGateway, TapPayClient};
