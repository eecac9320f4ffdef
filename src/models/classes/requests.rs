use serde::Deserialize;
use ts_rs::TS;

// 批量创建班级请求
//
// 名称会先去除首尾空白，空名称被丢弃，请求内重复名称只保留一个；
// 已存在的班级（按名称精确匹配）会被跳过。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct BulkCreateClassesRequest {
    pub classes: Vec<String>,
}
