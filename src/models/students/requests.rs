use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 创建学生请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub student_code: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub class_name: Option<String>,
}

// 更新学生请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub class_name: Option<String>,
}

// 学生查询参数（来自HTTP请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub class_name: Option<String>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct StudentListQuery {
    pub page: u64,
    pub size: u64,
    pub search: Option<String>,
    pub class_name: Option<String>,
}
