pub mod payment_controller;

pub use payment_controller::PaymentController;
