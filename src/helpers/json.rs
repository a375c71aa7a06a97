use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::json;

/// Success envelope: `{"message": ..., "data": ...}`. `data` is omitted when empty.
#[derive(Serialize, Debug)]
pub struct JsonResponse<T>
where
    T: Serialize,
{
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Payload<T>>,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum Payload<T>
where
    T: Serialize,
{
    Item(T),
    List(Vec<T>),
}

/// Failure body: `{"errorMessage": ...}` with the status carried alongside.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ErrorResponse {
    status: StatusCode,
    message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl ResponseError for ErrorResponse {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(json!({ "errorMessage": self.message }))
    }
}

pub struct JsonResponseBuilder<T>
where
    T: Serialize,
{
    data: Option<Payload<T>>,
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder { data: None }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: Serialize,
{
    pub fn set_item(mut self, item: T) -> Self {
        self.data = Some(Payload::Item(item));
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.data = Some(Payload::List(list));
        self
    }

    fn to_json_response(self, message: impl Into<String>) -> JsonResponse<T> {
        JsonResponse {
            message: message.into(),
            data: self.data,
        }
    }

    pub fn ok(self, message: impl Into<String>) -> HttpResponse {
        HttpResponse::Ok().json(self.to_json_response(message))
    }

    pub fn created(self, message: impl Into<String>) -> HttpResponse {
        HttpResponse::Created().json(self.to_json_response(message))
    }

    pub fn bad_request(self, message: impl Into<String>) -> actix_web::Error {
        ErrorResponse::new(StatusCode::BAD_REQUEST, message).into()
    }

    pub fn form_error(self, message: impl Into<String>) -> actix_web::Error {
        let message = message.into();
        tracing::debug!("Invalid data received {:?}", message);
        ErrorResponse::new(StatusCode::BAD_REQUEST, message).into()
    }

    pub fn not_found(self, message: impl Into<String>) -> actix_web::Error {
        ErrorResponse::new(StatusCode::NOT_FOUND, message).into()
    }

    pub fn internal_server_error(self, message: impl Into<String>) -> actix_web::Error {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "Internal error".to_string()
        } else {
            message
        };
        ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, message).into()
    }
}
