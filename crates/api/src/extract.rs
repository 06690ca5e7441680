//! Request extractors.

use axum::extract::{FromRequest, FromRequestParts, Multipart, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use petshop_core::types::DbId;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that must deserialize and pass its `validator` rules.
///
/// Malformed JSON, wrong field types, missing fields, and rule failures all
/// reject with wrong data before the handler runs, so structural checks
/// always precede lookups.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::wrong_data(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::wrong_data(errors.to_string()))?;

        Ok(Self(value))
    }
}

/// Record id taken from the `{id}` path segment.
///
/// A segment that is not an integer matches no record, so it answers 404
/// like any other missing id.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::UnmatchedPath(rejection.body_text()))?;
        Ok(Self(id))
    }
}

/// Multipart body whose rejection is wrong data instead of axum's plain text.
pub struct MultipartForm(pub Multipart);

impl<S> FromRequest<S> for MultipartForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| AppError::wrong_data(rejection.body_text()))?;
        Ok(Self(multipart))
    }
}
