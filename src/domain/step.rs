use super::form::GatewayResponse;
use super::payment::{FraudStatus, PaymentStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Customer submits (or opens) the checkout form.
    Form,
    /// Customer returns from the 3-D Secure challenge.
    Callback,
    Capture,
    Release,
    Refund,
}

/// One action taken against a payment during checkout.
///
/// Fields that do not apply to the step kind are left empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CheckoutStep {
    pub r#type: StepKind,
    pub payment: u32,
    #[serde(default)]
    pub status: Option<PaymentStatus>,
    #[serde(default)]
    pub fraud_status: Option<FraudStatus>,
    #[serde(default)]
    pub gateway_response: Option<GatewayResponse>,
    #[serde(default)]
    pub verification_result: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
}

impl CheckoutStep {
    pub fn new(r#type: StepKind, payment: u32) -> Self {
        Self {
            r#type,
            payment,
            status: None,
            fraud_status: None,
            gateway_response: None,
            verification_result: None,
            amount: None,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum StepOutcome {
    Continue,
    Redirect,
    Captured,
    Released,
    Refunded,
}

/// What happened to a payment after a step.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct StepReport {
    pub payment: u32,
    pub step: StepKind,
    pub outcome: StepOutcome,
    pub location: Option<String>,
    pub status: PaymentStatus,
    pub fraud_status: FraudStatus,
    pub amount: Option<Decimal>,
}
