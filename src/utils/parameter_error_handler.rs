use actix_web::{
    Error, HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析失败时返回 400 和统一的响应结构
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("Invalid JSON body for {}: {}", req.path(), err);

    let code = match &err {
        JsonPayloadError::ContentType => ErrorCode::BadRequest,
        _ => ErrorCode::ValidationFailed,
    };
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        code,
        format!("Invalid request body: {err}"),
    ));
    InternalError::from_response(err, response).into()
}

/// 查询参数解析失败时返回 400
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Invalid query string for {}: {}", req.path(), err);

    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid query parameters: {err}"),
    ));
    InternalError::from_response(err, response).into()
}
