use super::form::{CallbackParams, FormData, GatewayResponse, VERIFICATION_RESULT};
use super::payment::PaymentStatus;
use super::ports::Payment;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use url::Url;

/// Instruction to send the customer to another URL instead of continuing.
///
/// Callers translate it into an HTTP 302 response whose `Location` header is
/// [`Redirect::location`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    location: Url,
}

impl Redirect {
    pub fn new(location: Url) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    pub fn status_code(&self) -> u16 {
        302
    }

    pub fn into_location(self) -> Url {
        self.location
    }
}

/// Result of a checkout form step that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No decision yet; the form should be rendered.
    Continue,
    Redirect(Redirect),
}

/// A provider that simulates a card gateway with optional 3-D Secure.
///
/// Everything is decided from the submitted form: the status to apply, the
/// fraud verdict and how the "gateway" answers. Nothing leaves the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dummy3dsProvider;

impl Dummy3dsProvider {
    pub fn new() -> Self {
        Self
    }

    /// Handles the checkout form.
    ///
    /// Without data the form is (re)displayed. With data, the submitted
    /// statuses are applied and the simulated gateway response decides what
    /// happens next:
    ///
    /// * `3ds-disabled` (or none) resolves the destination right away.
    /// * `3ds-redirect` sends the customer to the process URL carrying the
    ///   verification result, as a real challenge page would.
    /// * `failure` fails with [`PaymentError::GatewayFailure`].
    /// * `payment-error` fails with [`PaymentError::Unsupported`].
    pub fn get_form<P: Payment + ?Sized>(
        &self,
        payment: &mut P,
        data: Option<&FormData>,
    ) -> Result<Outcome> {
        if payment.status() == PaymentStatus::Waiting {
            payment.change_status(PaymentStatus::Input);
        }

        let Some(data) = data else {
            return Ok(Outcome::Continue);
        };

        payment.change_status(data.status);
        payment.change_fraud_status(data.fraud_status);

        let gateway_response = data.gateway_response.unwrap_or_default();
        debug!(
            ?gateway_response,
            status = %data.status,
            currency = payment.currency(),
            total = %payment.total(),
            "Checkout form submitted"
        );

        match gateway_response {
            GatewayResponse::ThreeDsDisabled => {
                Ok(Outcome::Redirect(self.resolve_destination(&*payment)))
            }
            GatewayResponse::ThreeDsRedirect => {
                let mut location = payment.process_url();
                location
                    .query_pairs_mut()
                    .append_pair(VERIFICATION_RESULT, &data.verification_result);
                info!(%location, "Redirecting to 3-D Secure verification");
                Ok(Outcome::Redirect(Redirect::new(location)))
            }
            GatewayResponse::Failure => {
                warn!("Simulated gateway failure");
                Err(PaymentError::GatewayFailure)
            }
            GatewayResponse::PaymentError => Err(PaymentError::Unsupported(
                "Unsupported operation".to_string(),
            )),
        }
    }

    /// Handles the customer's return from the 3-D Secure challenge.
    ///
    /// A non-empty `verification_result` becomes the new payment status. An
    /// unknown value fails and leaves the payment untouched.
    pub fn process_data<P: Payment + ?Sized>(
        &self,
        payment: &mut P,
        params: &CallbackParams,
    ) -> Result<Redirect> {
        if let Some(result) = params.verification_result() {
            let status: PaymentStatus = result.parse()?;
            debug!(%status, "Applying verification result");
            payment.change_status(status);
        }
        Ok(self.resolve_destination(&*payment))
    }

    /// Picks the success or failure URL from the current status.
    ///
    /// Only `rejected` and `error` count as failures.
    pub fn resolve_destination<P: Payment + ?Sized>(&self, payment: &P) -> Redirect {
        let status = payment.status();
        let location = if status.is_failure() {
            payment.failure_url()
        } else {
            payment.success_url()
        };
        info!(%status, %location, "Payment resolved");
        Redirect::new(location)
    }

    /// Captures a pre-authorized payment. Returns the amount as requested.
    pub fn capture<P: Payment + ?Sized>(
        &self,
        payment: &mut P,
        amount: Option<Decimal>,
    ) -> Option<Decimal> {
        payment.change_status(PaymentStatus::Confirmed);
        amount
    }

    /// Releases a pre-authorization. The dummy gateway has nothing to release.
    pub fn release<P: Payment + ?Sized>(&self, _payment: &mut P) -> Option<Decimal> {
        None
    }

    pub fn refund<P: Payment + ?Sized>(
        &self,
        _payment: &mut P,
        amount: Option<Decimal>,
    ) -> Decimal {
        amount.unwrap_or(Decimal::ZERO)
    }
}
