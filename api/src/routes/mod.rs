pub mod health;

use crate::errors::ApiError;

/// Any path without a registered route.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
