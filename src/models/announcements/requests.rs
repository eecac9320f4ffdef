use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use ts_rs::TS;

use super::entities::AnnouncementLocation;
use crate::models::common::deserialize_optional_string_to_i64;

/// 创建公告请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub content: String,
    pub location: AnnouncementLocation,
    pub course_id: Option<i64>,
    pub is_active: Option<bool>,
    pub priority: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>, // ISO 8601 格式，如 "2026-01-24T12:00:00Z"
}

/// 更新公告请求（PATCH，所有字段可选）
///
/// `expires_at` 区分三种情况：字段缺省不修改，`null` 清除过期时间，具体时间则覆盖。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct UpdateAnnouncementRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub location: Option<AnnouncementLocation>,
    pub course_id: Option<i64>,
    pub is_active: Option<bool>,
    pub priority: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub expires_at: Option<Option<DateTime<Utc>>>,
}

// 字段出现即为 Some（包括 null），缺省由 #[serde(default)] 处理为 None
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// 公告列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct AnnouncementListParams {
    #[serde(default, deserialize_with = "deserialize_optional_string_to_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_string_to_i64")]
    pub limit: Option<i64>,
    pub location: Option<AnnouncementLocation>,
}

/// 活跃/过期公告查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct AnnouncementFilterParams {
    pub location: Option<AnnouncementLocation>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct AnnouncementListQuery {
    pub page: u64,
    pub size: u64,
    pub location: Option<AnnouncementLocation>,
    pub active_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_expiry_tri_state() {
        let absent: UpdateAnnouncementRequest = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert!(absent.expires_at.is_none());

        let cleared: UpdateAnnouncementRequest =
            serde_json::from_str(r#"{"expires_at":null}"#).unwrap();
        assert_eq!(cleared.expires_at, Some(None));

        let set: UpdateAnnouncementRequest =
            serde_json::from_str(r#"{"expires_at":"2030-01-01T00:00:00Z"}"#).unwrap();
        assert!(matches!(set.expires_at, Some(Some(_))));
    }
}
