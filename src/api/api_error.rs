use crate::error::Error;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub(crate) struct APIError(anyhow::Error);

fn rejection_status(rejection: &JsonRejection) -> StatusCode {
    match rejection {
        JsonRejection::JsonDataError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        JsonRejection::JsonSyntaxError(_) => StatusCode::BAD_REQUEST,
        JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        let any_err = self.0;
        let (status, field) = match (
            any_err.downcast_ref::<Error>(),
            any_err.downcast_ref::<JsonRejection>(),
        ) {
            (Some(Error::Validation(err)), _) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Some(err.field.clone()))
            }
            (_, Some(rejection)) => (rejection_status(rejection), None),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, None),
        };
        let body = match field {
            Some(field) => json!({
                "error": format!("{any_err}"),
                "field": field,
            }),
            None => json!({
                "error": format!("{any_err}"),
            }),
        };
        (status, Json(body)).into_response()
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
