use super::entities::TimetableEntry;
use serde::Serialize;
use ts_rs::TS;

// 课表导入响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableImportResponse {
    // 插入的条目数
    pub count: usize,
    // 本次导入涉及（被整体替换）的班级
    pub classes: Vec<String>,
    // 日期无法解析、回退为当前时间的行数
    pub date_fallbacks: usize,
    pub entries: Vec<TimetableEntry>,
}
