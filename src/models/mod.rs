//! 数据模型定义
//!
//! 业务实体、请求与响应结构。通过 ts-rs 导出 TypeScript 类型供管理后台使用。

pub mod announcements;
pub mod classes;
pub mod common;
pub mod sessions;
pub mod students;
pub mod system;
pub mod timetables;

pub use common::{ApiResponse, PaginatedResponse, PaginationInfo, PaginationQuery};

use serde::{Serialize, Serializer};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 响应体中的业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 请求错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    DataMismatch = 1002,

    // 认证授权
    Unauthorized = 2000,
    Forbidden = 2003,

    // 资源
    NotFound = 4000,
    Conflict = 4090,
    RateLimitExceeded = 4290,

    // 服务端错误
    InternalServerError = 5000,
    DatabaseError = 5001,
    CacheError = 5002,
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(*self as i32)
    }
}
