pub mod json_body;
pub mod response;

pub use json_body::{JsonBody, JsonBodyRejection};
pub use response::{api_error, ApiError, MessageResponse};
