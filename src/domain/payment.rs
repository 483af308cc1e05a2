use crate::domain::ports::Payment;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Lifecycle status of a payment.
///
/// The set is closed: a status string outside of it is rejected at parse time,
/// so a payment can never end up holding an invalid status.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PaymentStatus {
    #[default]
    Waiting,
    Input,
    Preauth,
    Confirmed,
    Rejected,
    Refunded,
    Error,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Input => "input",
            Self::Preauth => "preauth",
            Self::Confirmed => "confirmed",
            Self::Rejected => "rejected",
            Self::Refunded => "refunded",
            Self::Error => "error",
        }
    }

    /// Statuses that send the customer to the failure URL.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Rejected | Self::Error)
    }
}

impl FromStr for PaymentStatus {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "waiting" => Ok(Self::Waiting),
            "input" => Ok(Self::Input),
            "preauth" => Ok(Self::Preauth),
            "confirmed" => Ok(Self::Confirmed),
            "rejected" | "reject" => Ok(Self::Rejected),
            "refunded" => Ok(Self::Refunded),
            "error" => Ok(Self::Error),
            other => Err(PaymentError::UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for PaymentStatus {
    type Error = PaymentError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the (simulated) fraud screening.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum FraudStatus {
    #[default]
    Unknown,
    Accept,
    Reject,
    Review,
}

impl FromStr for FraudStatus {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "unknown" => Ok(Self::Unknown),
            "accept" => Ok(Self::Accept),
            "reject" => Ok(Self::Reject),
            "review" => Ok(Self::Review),
            other => Err(PaymentError::UnknownFraudStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for FraudStatus {
    type Error = PaymentError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// A payment kept by the checkout engine.
///
/// Callback URLs are derived once from the shop's base URL when the payment is
/// created.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    pub id: u32,
    pub status: PaymentStatus,
    pub fraud_status: FraudStatus,
    pub currency: String,
    pub total: Decimal,
    process_url: Url,
    success_url: Url,
    failure_url: Url,
}

impl PaymentRecord {
    pub fn new(id: u32, base_url: &Url, currency: &str, total: Decimal) -> Result<Self> {
        if total < Decimal::ZERO {
            return Err(PaymentError::ValidationError(
                "Total must not be negative".to_string(),
            ));
        }

        // `Url::join` replaces the last path segment unless the base ends in '/'
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            id,
            status: PaymentStatus::Waiting,
            fraud_status: FraudStatus::Unknown,
            currency: currency.to_string(),
            total,
            process_url: base.join(&format!("payments/process/{id}/"))?,
            success_url: base.join(&format!("payments/{id}/success/"))?,
            failure_url: base.join(&format!("payments/{id}/failure/"))?,
        })
    }
}

impl Payment for PaymentRecord {
    fn status(&self) -> PaymentStatus {
        self.status
    }

    fn fraud_status(&self) -> FraudStatus {
        self.fraud_status
    }

    fn currency(&self) -> &str {
        &self.currency
    }

    fn total(&self) -> Decimal {
        self.total
    }

    fn change_status(&mut self, status: PaymentStatus) {
        self.status = status;
    }

    fn change_fraud_status(&mut self, fraud_status: FraudStatus) {
        self.fraud_status = fraud_status;
    }

    fn process_url(&self) -> Url {
        self.process_url.clone()
    }

    fn success_url(&self) -> Url {
        self.success_url.clone()
    }

    fn failure_url(&self) -> Url {
        self.failure_url.clone()
    }
}
