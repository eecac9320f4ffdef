//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 每个错误变体映射到一个 HTTP 状态码，路由层直接使用 `?` 传播。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::models::{ApiResponse, ErrorCode};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - status() 方法 - 返回对应的 HTTP 状态码
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_eduadmin_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EduAdminError {
            $($variant(String),)*
        }

        impl EduAdminError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EduAdminError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EduAdminError::$variant(_) => $type_name,)*
                }
            }

            /// 获取 HTTP 状态码
            pub fn status(&self) -> StatusCode {
                match self {
                    $(EduAdminError::$variant(_) => StatusCode::$status,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EduAdminError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EduAdminError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EduAdminError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_eduadmin_errors! {
    CacheConnection("E001", "Cache Connection Error", INTERNAL_SERVER_ERROR),
    CachePluginNotFound("E002", "Cache Plugin Not Found", INTERNAL_SERVER_ERROR),
    DatabaseConfig("E003", "Database Configuration Error", INTERNAL_SERVER_ERROR),
    DatabaseConnection("E004", "Database Connection Error", INTERNAL_SERVER_ERROR),
    DatabaseOperation("E005", "Database Operation Error", INTERNAL_SERVER_ERROR),
    FileOperation("E006", "File Operation Error", INTERNAL_SERVER_ERROR),
    Validation("E007", "Validation Error", BAD_REQUEST),
    NotFound("E008", "Resource Not Found", NOT_FOUND),
    Serialization("E009", "Serialization Error", INTERNAL_SERVER_ERROR),
    DateParse("E011", "Date Parse Error", BAD_REQUEST),
    Authentication("E012", "Authentication Error", UNAUTHORIZED),
    Authorization("E013", "Authorization Error", FORBIDDEN),
    Conflict("E014", "Resource Conflict", CONFLICT),
    DataMismatch("E015", "Data Mismatch Error", UNPROCESSABLE_ENTITY),
}

impl EduAdminError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 对应的业务错误码（写入响应体）
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EduAdminError::Validation(_) | EduAdminError::DateParse(_) => {
                ErrorCode::ValidationFailed
            }
            EduAdminError::NotFound(_) => ErrorCode::NotFound,
            EduAdminError::Authentication(_) => ErrorCode::Unauthorized,
            EduAdminError::Authorization(_) => ErrorCode::Forbidden,
            EduAdminError::Conflict(_) => ErrorCode::Conflict,
            EduAdminError::DataMismatch(_) => ErrorCode::DataMismatch,
            EduAdminError::DatabaseConfig(_)
            | EduAdminError::DatabaseConnection(_)
            | EduAdminError::DatabaseOperation(_) => ErrorCode::DatabaseError,
            EduAdminError::CacheConnection(_) | EduAdminError::CachePluginNotFound(_) => {
                ErrorCode::CacheError
            }
            EduAdminError::FileOperation(_) | EduAdminError::Serialization(_) => {
                ErrorCode::InternalServerError
            }
        }
    }
}

impl fmt::Display for EduAdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EduAdminError {}

impl ResponseError for EduAdminError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self.format_simple());
        }
        HttpResponse::build(status).json(ApiResponse::error_empty(
            self.error_code(),
            self.message().to_string(),
        ))
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for EduAdminError {
    fn from(err: sea_orm::DbErr) -> Self {
        EduAdminError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for EduAdminError {
    fn from(err: std::io::Error) -> Self {
        EduAdminError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EduAdminError {
    fn from(err: serde_json::Error) -> Self {
        EduAdminError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for EduAdminError {
    fn from(err: chrono::ParseError) -> Self {
        EduAdminError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EduAdminError>;
