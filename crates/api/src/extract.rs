//! Request-body extraction with rule validation.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequest, Request};
use axum::Json;
use murmur_core::validation::{Validatable, Validator};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

/// JSON body extractor that validates before the handler runs.
///
/// Deserializes the request body into `T`, runs the shared [`Validator`]
/// over it, and rejects with a `VALIDATION_ERROR` response when any rule
/// fails — handlers only ever see instances that passed every registered
/// rule, unchanged by validation.
///
/// The validator is pulled from router state via [`FromRef`], so any state
/// type holding an `Arc<Validator>` works.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Serialize + Validatable,
    S: Send + Sync,
    Arc<Validator>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let validator = Arc::<Validator>::from_ref(state);

        let Json(instance) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| AppError::BadRequest(err.to_string()))?;

        let result = validator.validate(&instance)?;
        if !result.is_valid {
            return Err(AppError::ValidationFailed(result));
        }
        Ok(ValidatedJson(instance))
    }
}
