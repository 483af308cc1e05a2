use super::payment::{FraudStatus, PaymentRecord, PaymentStatus};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use url::Url;

/// The capabilities a provider needs from a payment.
///
/// Providers read and update statuses and look up the three callback URLs.
/// They never create or destroy payments.
pub trait Payment {
    fn status(&self) -> PaymentStatus;
    fn fraud_status(&self) -> FraudStatus;
    fn currency(&self) -> &str;
    fn total(&self) -> Decimal;
    fn change_status(&mut self, status: PaymentStatus);
    fn change_fraud_status(&mut self, fraud_status: FraudStatus);
    /// Where the customer returns after the 3-D Secure challenge.
    fn process_url(&self) -> Url;
    fn success_url(&self) -> Url;
    fn failure_url(&self) -> Url;
}

#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn store(&self, payment: PaymentRecord) -> Result<()>;
    async fn get(&self, payment_id: u32) -> Result<Option<PaymentRecord>>;
}

pub type PaymentStoreBox = Box<dyn PaymentStore>;
