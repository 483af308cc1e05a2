//! Domain layer: payment statuses, the payment capability trait and the
//! dummy 3-D Secure provider that resolves where a customer goes next.

pub mod form;
pub mod payment;
pub mod ports;
pub mod provider;
pub mod step;
