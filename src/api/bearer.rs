use crate::api::api_error::APIError;
use crate::api::server::AppState;
use crate::auth::Claims;
use crate::error::Error;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

/// Extractor for the verified claims of an `Authorization: Bearer <token>` header. Handlers
/// that take it reject unauthenticated requests before the body is read.
pub(super) struct Authenticated(pub Claims);

#[axum::async_trait]
impl FromRequestParts<AppState> for Authenticated {
    type Rejection = APIError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, APIError> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .and_then(|value| value.split(' ').next())
            .ok_or(Error::Unauthorized)?;
        Ok(Self(state.tokens.verify(token)?))
    }
}
