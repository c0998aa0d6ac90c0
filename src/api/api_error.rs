use crate::error::Error;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

pub(crate) struct APIError(anyhow::Error);

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        let any_err = self.0;
        if let Some(err) = any_err.downcast_ref::<Error>() {
            return error_response(err).into_response();
        }

        let status = match any_err.downcast_ref::<JsonRejection>() {
            Some(JsonRejection::JsonDataError(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Some(JsonRejection::JsonSyntaxError(_)) => StatusCode::BAD_REQUEST,
            Some(JsonRejection::MissingJsonContentType(_)) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({
            "error": format!("{any_err}"),
        }));
        (status, body).into_response()
    }
}

fn error_response(err: &Error) -> (StatusCode, Json<Value>) {
    let message = err.to_string();
    match err {
        Error::Unauthorized | Error::InvalidToken | Error::InvalidCredentials => {
            (StatusCode::UNAUTHORIZED, Json(json!({ "error": message })))
        }
        Error::MissingField(_) => (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))),
        Error::InvalidIp(ip) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": message, "ip": ip })),
        ),
        Error::InvalidHost(host) | Error::HostExists(host) | Error::HostNotFound(host) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": message, "host": host })),
        ),
        // Store and reload failures have always been reported as 401. Clients match on it.
        Error::Failed { cause, .. } => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": message, "cause": cause.to_string() })),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": message })),
        ),
    }
}

impl<E> From<E> for APIError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
