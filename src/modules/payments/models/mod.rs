pub mod create_payment_input;
pub mod payment_request;

pub use create_payment_input::CreatePaymentInput;
pub use payment_request::PaymentRequest;
