//! Uniform response builders

use crate::error::Error;
use http::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use http::{Response, StatusCode};
use miniserde::{Serialize, json};

/// JSON body of an error response
#[derive(Debug, Serialize)]
struct ErrorBody {
    #[serde(rename = "errorCode")]
    error_code: String,
    #[serde(rename = "errorMessage")]
    error_message: String,
}

/// Create a JSON response, or an empty one when `body` is `None`
///
/// A JSON body sets `content-type: application/json`. `additional_headers` are
/// applied last and replace headers of the same name.
pub fn create_response(
    body: Option<&dyn Serialize>,
    status: StatusCode,
    additional_headers: HeaderMap,
) -> Response<String> {
    let mut response = Response::new(body.map(json::to_string).unwrap_or_default());
    *response.status_mut() = status;

    let headers = response.headers_mut();
    if body.is_some() {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    for name in additional_headers.keys() {
        headers.remove(name);
    }
    headers.extend(additional_headers);

    response
}

/// Create a JSON response describing an error
///
/// The body is `{"errorCode": <kind>, "errorMessage": <message>}`.
pub fn create_response_from_error(
    error: &Error,
    status: StatusCode,
    additional_headers: HeaderMap,
) -> Response<String> {
    let body = ErrorBody {
        error_code: error.kind().name().to_string(),
        error_message: error.to_string(),
    };

    create_response(Some(&body), status, additional_headers)
}
