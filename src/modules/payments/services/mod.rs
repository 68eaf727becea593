pub mod khipu;
pub mod payload_builder;
pub mod payment_service;
pub mod provider_trait;

pub use khipu::KhipuClient;
pub use payload_builder::PayloadBuilder;
pub use payment_service::{CreatedPayment, PaymentService};
pub use provider_trait::PaymentProvider;
