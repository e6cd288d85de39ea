//! API request/response types

pub mod error;
pub mod evaluate;
pub mod json;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use evaluate::{EvaluateRequest, EvaluateResponse};
pub use json::Json;
