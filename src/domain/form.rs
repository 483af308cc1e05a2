use super::payment::{FraudStatus, PaymentStatus};
use serde::{Deserialize, Serialize};
use url::Url;
use url::form_urlencoded;

/// Query parameter carrying the simulated 3-D Secure verdict.
pub const VERIFICATION_RESULT: &str = "verification_result";

/// What the simulated upstream gateway answers to a form submission.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GatewayResponse {
    /// Plain card payment, no challenge.
    #[default]
    #[serde(rename = "3ds-disabled")]
    ThreeDsDisabled,
    /// The card requires a 3-D Secure challenge.
    #[serde(rename = "3ds-redirect")]
    ThreeDsRedirect,
    /// The gateway could not be reached.
    Failure,
    /// The gateway refused the operation.
    PaymentError,
}

/// Data posted from the dummy checkout form.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct FormData {
    pub status: PaymentStatus,
    #[serde(default)]
    pub fraud_status: FraudStatus,
    #[serde(default)]
    pub gateway_response: Option<GatewayResponse>,
    #[serde(default)]
    pub verification_result: String,
}

/// Query parameters sent back by the browser after the 3-D Secure challenge.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct CallbackParams {
    #[serde(default)]
    pub verification_result: Option<String>,
}

impl CallbackParams {
    pub fn new(verification_result: impl Into<String>) -> Self {
        Self {
            verification_result: Some(verification_result.into()),
        }
    }

    /// Parses a raw query string such as `verification_result=confirmed`.
    ///
    /// Unrelated keys are ignored; when the key repeats, the last value wins.
    pub fn from_query(query: &str) -> Self {
        let verification_result = form_urlencoded::parse(query.as_bytes())
            .filter(|(key, _)| key == VERIFICATION_RESULT)
            .map(|(_, value)| value.into_owned())
            .last();
        Self {
            verification_result,
        }
    }

    pub fn from_url(url: &Url) -> Self {
        Self::from_query(url.query().unwrap_or_default())
    }

    /// The verification result, treating an empty value as absent.
    pub fn verification_result(&self) -> Option<&str> {
        self.verification_result
            .as_deref()
            .filter(|value| !value.is_empty())
    }
}
