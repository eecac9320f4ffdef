use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 公告展示位置
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub enum AnnouncementLocation {
    Homepage, // 首页
    Course,   // 课程页（需指定 course_id）
}

impl AnnouncementLocation {
    pub const HOMEPAGE: &'static str = "homepage";
    pub const COURSE: &'static str = "course";
}

impl<'de> Deserialize<'de> for AnnouncementLocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的公告位置: '{s}'. 支持的位置: homepage, course"
            ))
        })
    }
}

impl std::fmt::Display for AnnouncementLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnouncementLocation::Homepage => write!(f, "{}", AnnouncementLocation::HOMEPAGE),
            AnnouncementLocation::Course => write!(f, "{}", AnnouncementLocation::COURSE),
        }
    }
}

impl std::str::FromStr for AnnouncementLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "homepage" => Ok(AnnouncementLocation::Homepage),
            "course" => Ok(AnnouncementLocation::Course),
            _ => Err(format!("Invalid announcement location: {s}")),
        }
    }
}

// 公告
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub location: AnnouncementLocation,
    pub course_id: Option<i64>,
    pub is_active: bool,
    // 过期时间，为空表示永不过期
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
    // 优先级，越大越靠前
    pub priority: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_round_trip_names() {
        assert_eq!(
            "homepage".parse::<AnnouncementLocation>().unwrap(),
            AnnouncementLocation::Homepage
        );
        assert_eq!(AnnouncementLocation::Course.to_string(), "course");
        assert!("sidebar".parse::<AnnouncementLocation>().is_err());
    }

    #[test]
    fn test_location_deserialize_error_message() {
        let err = serde_json::from_str::<AnnouncementLocation>(r#""banner""#).unwrap_err();
        assert!(err.to_string().contains("banner"));
    }
}
