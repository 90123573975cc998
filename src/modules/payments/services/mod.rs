pub mod gateway_trait;
pub mod tappay;

pub use gateway_trait::PrimeGateway;
pub use tappay::TapPayClient;
