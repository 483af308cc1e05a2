use crate::domain::step::CheckoutStep;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads checkout steps from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<CheckoutStep>`.
/// Whitespace is trimmed and rows may omit trailing columns.
pub struct StepReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> StepReader<R> {
    /// Creates a new `StepReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes steps.
    pub fn steps(self) -> impl Iterator<Item = Result<CheckoutStep>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::GatewayResponse;
    use crate::domain::payment::PaymentStatus;
    use crate::domain::step::StepKind;
    use rust_decimal_macros::dec;

    const HEADER: &str = "type, payment, status, fraud_status, gateway_response, verification_result, amount";

    #[test]
    fn test_reader_valid_stream() {
        let data = format!(
            "{HEADER}\nform, 1, waiting, unknown, 3ds-redirect, confirmed,\ncallback, 1, , , , confirmed,\ncapture, 1, , , , , 10.50"
        );
        let reader = StepReader::new(data.as_bytes());
        let results: Vec<Result<CheckoutStep>> = reader.steps().collect();

        assert_eq!(results.len(), 3);
        let form = results[0].as_ref().unwrap();
        assert_eq!(form.r#type, StepKind::Form);
        assert_eq!(form.status, Some(PaymentStatus::Waiting));
        assert_eq!(form.gateway_response, Some(GatewayResponse::ThreeDsRedirect));
        assert_eq!(form.verification_result.as_deref(), Some("confirmed"));

        let capture = results[2].as_ref().unwrap();
        assert_eq!(capture.r#type, StepKind::Capture);
        assert_eq!(capture.amount, Some(dec!(10.50)));
    }

    #[test]
    fn test_reader_short_rows() {
        let data = format!("{HEADER}\nform, 4\nrelease, 4");
        let reader = StepReader::new(data.as_bytes());
        let results: Vec<Result<CheckoutStep>> = reader.steps().collect();

        assert_eq!(results.len(), 2);
        let form = results[0].as_ref().unwrap();
        assert_eq!(form.payment, 4);
        assert_eq!(form.status, None);
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = format!("{HEADER}\nteleport, 1, , , , ,\nform, 1, approved, , , ,");
        let reader = StepReader::new(data.as_bytes());
        let results: Vec<Result<CheckoutStep>> = reader.steps().collect();

        assert!(results[0].is_err());
        assert!(results[1].is_err());
    }
}
