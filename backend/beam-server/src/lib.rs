pub mod api_error;
pub mod beam_setup;
pub mod error;
pub mod health;
pub mod logger;
pub mod publish;
pub mod publish_response;
pub mod routes;

#[cfg(test)]
mod tests;

pub use crate::api_error::{ApiError, ApiErrorBody, ApiErrorResponse};
pub use crate::beam_setup::build_beam_config;
pub use crate::error::{Result as ServerErrorResult, ServerError};
pub use crate::publish_response::PublishResponse;
pub use crate::routes::build_router;
