pub mod body;
pub mod currency;
pub mod error;

pub use body::CapturedBody;
pub use currency::Currency;
pub use error::{AppError, Result};
