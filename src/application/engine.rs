use crate::domain::form::{CallbackParams, FormData};
use crate::domain::payment::PaymentRecord;
use crate::domain::ports::PaymentStoreBox;
use crate::domain::provider::{Dummy3dsProvider, Outcome};
use crate::domain::step::{CheckoutStep, StepKind, StepOutcome, StepReport};
use crate::error::Result;
use rust_decimal::Decimal;
use tracing::debug;
use url::Url;

/// Settings used when a step refers to a payment the store does not know yet.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Shop URL the payment callback URLs are built from.
    pub base_url: Url,
    pub currency: String,
    pub total: Decimal,
}

impl EngineConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            currency: "USD".to_string(),
            total: Decimal::ONE_HUNDRED,
        }
    }
}

/// The main entry point for running checkout steps.
///
/// `CheckoutEngine` stands in for the web framework around the provider: it
/// loads the payment, hands it to the provider together with the step's data
/// and persists whatever the provider changed.
pub struct CheckoutEngine {
    payment_store: PaymentStoreBox,
    provider: Dummy3dsProvider,
    config: EngineConfig,
}

impl CheckoutEngine {
    /// Creates a new `CheckoutEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `payment_store` - The store holding payments between steps.
    /// * `config` - Defaults for payments created on first use.
    pub fn new(payment_store: PaymentStoreBox, config: EngineConfig) -> Self {
        Self {
            payment_store,
            provider: Dummy3dsProvider::new(),
            config,
        }
    }

    /// Runs a single step against its payment.
    ///
    /// The payment is stored even when the provider fails, since a form
    /// submission applies the submitted statuses before the gateway answers.
    pub async fn process_step(&self, step: CheckoutStep) -> Result<StepReport> {
        let mut payment = match self.payment_store.get(step.payment).await? {
            Some(payment) => payment,
            None => PaymentRecord::new(
                step.payment,
                &self.config.base_url,
                &self.config.currency,
                self.config.total,
            )?,
        };

        let applied = self.apply(&mut payment, &step);
        let (status, fraud_status) = (payment.status, payment.fraud_status);
        self.payment_store.store(payment).await?;
        let (outcome, location, amount) = applied?;

        debug!(payment = step.payment, step = ?step.r#type, ?outcome, %status, "Step processed");

        Ok(StepReport {
            payment: step.payment,
            step: step.r#type,
            outcome,
            location: location.map(|url| url.to_string()),
            status,
            fraud_status,
            amount,
        })
    }

    /// Returns the current state of a payment, if any step touched it.
    pub async fn payment(&self, payment_id: u32) -> Result<Option<PaymentRecord>> {
        self.payment_store.get(payment_id).await
    }

    fn apply(
        &self,
        payment: &mut PaymentRecord,
        step: &CheckoutStep,
    ) -> Result<(StepOutcome, Option<Url>, Option<Decimal>)> {
        match step.r#type {
            StepKind::Form => {
                // A form step without a status is the customer opening the form
                let data = step.status.map(|status| FormData {
                    status,
                    fraud_status: step.fraud_status.unwrap_or_default(),
                    gateway_response: step.gateway_response,
                    verification_result: step.verification_result.clone().unwrap_or_default(),
                });
                match self.provider.get_form(payment, data.as_ref())? {
                    Outcome::Continue => Ok((StepOutcome::Continue, None, None)),
                    Outcome::Redirect(redirect) => {
                        Ok((StepOutcome::Redirect, Some(redirect.into_location()), None))
                    }
                }
            }
            StepKind::Callback => {
                let params = CallbackParams {
                    verification_result: step.verification_result.clone(),
                };
                let redirect = self.provider.process_data(payment, &params)?;
                Ok((StepOutcome::Redirect, Some(redirect.into_location()), None))
            }
            StepKind::Capture => {
                let amount = self.provider.capture(payment, step.amount);
                Ok((StepOutcome::Captured, None, amount))
            }
            StepKind::Release => {
                let amount = self.provider.release(payment);
                Ok((StepOutcome::Released, None, amount))
            }
            StepKind::Refund => {
                let amount = self.provider.refund(payment, step.amount);
                Ok((StepOutcome::Refunded, None, Some(amount)))
            }
        }
    }
}
