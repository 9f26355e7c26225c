//! Delivery ports

pub mod email_delivery;

pub use email_delivery::EmailDelivery;

#[cfg(test)]
pub use email_delivery::MockEmailDelivery;
