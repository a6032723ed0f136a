//! External API integrations

pub mod forecast;
pub mod inference;

pub use forecast::ForecastClient;
pub use inference::InferenceClient;
