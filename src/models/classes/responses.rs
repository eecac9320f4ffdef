use super::entities::Class;
use serde::Serialize;
use ts_rs::TS;

// 批量创建班级响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct BulkCreateClassesResponse {
    // 实际插入的数量
    pub count: usize,
    pub classes: Vec<Class>,
}
