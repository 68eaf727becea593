pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::PaymentController;
pub use models::{CreatePaymentInput, PaymentRequest};
pub use services::{
    CreatedPayment, KhipuClient, PayloadBuilder, PaymentProvider, PaymentService,
};
