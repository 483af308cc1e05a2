use dummy3ds::domain::form::{CallbackParams, FormData, GatewayResponse};
use dummy3ds::domain::payment::{FraudStatus, PaymentRecord, PaymentStatus};
use dummy3ds::domain::ports::Payment;
use dummy3ds::domain::provider::{Dummy3dsProvider, Outcome};
use dummy3ds::error::PaymentError;
use rand::distributions::{Alphanumeric, DistString};
use rand::Rng;
use rust_decimal_macros::dec;
use url::Url;

fn payment() -> PaymentRecord {
    let base = Url::parse("http://example.com/").unwrap();
    PaymentRecord::new(1, &base, "USD", dec!(100)).unwrap()
}

fn submit(status: PaymentStatus, gateway_response: GatewayResponse, verification_result: &str) -> FormData {
    FormData {
        status,
        fraud_status: FraudStatus::Unknown,
        gateway_response: Some(gateway_response),
        verification_result: verification_result.to_string(),
    }
}

#[test]
fn test_every_status_routes_to_exactly_one_destination() {
    let provider = Dummy3dsProvider::new();
    let statuses = [
        PaymentStatus::Waiting,
        PaymentStatus::Input,
        PaymentStatus::Preauth,
        PaymentStatus::Confirmed,
        PaymentStatus::Rejected,
        PaymentStatus::Refunded,
        PaymentStatus::Error,
    ];

    for status in statuses {
        let mut payment = payment();
        payment.change_status(status);
        let redirect = provider.resolve_destination(&payment);

        let expected = if matches!(status, PaymentStatus::Rejected | PaymentStatus::Error) {
            payment.failure_url()
        } else {
            payment.success_url()
        };
        assert_eq!(redirect.location(), &expected, "status {status}");
    }
}

#[test]
fn test_3ds_disabled_never_visits_process_url() {
    let provider = Dummy3dsProvider::new();
    for status in [PaymentStatus::Preauth, PaymentStatus::Rejected] {
        let mut payment = payment();
        let data = submit(status, GatewayResponse::ThreeDsDisabled, "confirmed");

        let Outcome::Redirect(redirect) = provider.get_form(&mut payment, Some(&data)).unwrap() else {
            panic!("expected a redirect");
        };
        assert_ne!(redirect.location().path(), payment.process_url().path());
        // The verification result only matters on the 3-D Secure path
        assert_eq!(payment.status(), status);
    }
}

#[test]
fn test_gateway_failure_produces_no_redirect() {
    let mut payment = payment();
    let data = submit(PaymentStatus::Waiting, GatewayResponse::Failure, "");

    let result = Dummy3dsProvider::new().get_form(&mut payment, Some(&data));
    assert!(matches!(result, Err(PaymentError::GatewayFailure)));
}

#[test]
fn test_rejected_verification_routes_to_failure() {
    let mut payment = payment();
    let data = submit(PaymentStatus::Waiting, GatewayResponse::ThreeDsRedirect, "reject");

    let Outcome::Redirect(redirect) = Dummy3dsProvider::new().get_form(&mut payment, Some(&data)).unwrap() else {
        panic!("expected a redirect");
    };
    let params = CallbackParams::from_url(redirect.location());
    assert_eq!(params.verification_result(), Some("reject"));

    let redirect = Dummy3dsProvider::new().process_data(&mut payment, &params).unwrap();
    assert_eq!(payment.status(), PaymentStatus::Rejected);
    assert_eq!(redirect.location(), &payment.failure_url());
}

#[test]
fn test_verification_result_survives_the_redirect() {
    let provider = Dummy3dsProvider::new();
    let mut rng = rand::thread_rng();
    let specials = ["&", "=", "+", " ", "%", "?", "#", "é", "/"];

    for _ in 0..200 {
        let len = rng.gen_range(0..12);
        let mut value = Alphanumeric.sample_string(&mut rng, len);
        value.push_str(specials[rng.gen_range(0..specials.len())]);

        let mut payment = payment();
        let data = submit(PaymentStatus::Waiting, GatewayResponse::ThreeDsRedirect, &value);
        let Outcome::Redirect(redirect) = provider.get_form(&mut payment, Some(&data)).unwrap() else {
            panic!("expected a redirect");
        };

        let params = CallbackParams::from_url(redirect.location());
        assert_eq!(params.verification_result.as_deref(), Some(value.as_str()));
    }
}
