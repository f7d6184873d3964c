use axum::extract::{rejection::JsonRejection, FromRequest, Request};

use crate::server::error::AppError;

/// JSON body extractor whose rejections use the application error mapping.
///
/// Axum's stock `Json` rejects malformed or incomplete bodies with its own
/// status codes (422 for deserialization failures). Body problems are a
/// validation concern here and must answer 400 like every other validation
/// failure, so controllers extract request bodies through this wrapper.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(value))
    }
}
