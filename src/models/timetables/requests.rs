use serde::{Deserialize, Deserializer};
use ts_rs::TS;

/// 课表导入的单行数据
///
/// 表格转换出来的 JSON 经常把电话、节次等写成数字，这里统一宽松地读成文本。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableRow {
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub buoi: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub ngay_hoc: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub giang_duong: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub dia_diem: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub doi_tuong: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub ten_lop: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub mon_hoc: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub loai_gio: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_i32")]
    pub so_tiet: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub giang_vien: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub sdt_gv: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub noi_dung: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub gio_thi: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub ghi_chu: Option<String>,
}

/// 写入存储层的课表条目（日期已解析，班级名已规范化）
#[derive(Debug, Clone)]
pub struct NewTimetableEntry {
    pub ten_lop: String,
    pub buoi: Option<String>,
    pub ngay_hoc: i64,
    pub giang_duong: Option<String>,
    pub dia_diem: Option<String>,
    pub doi_tuong: Option<String>,
    pub mon_hoc: Option<String>,
    pub loai_gio: Option<String>,
    pub so_tiet: Option<i32>,
    pub giang_vien: Option<String>,
    pub sdt_gv: Option<String>,
    pub noi_dung: Option<String>,
    pub gio_thi: Option<String>,
    pub ghi_chu: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

// 字符串、数字、布尔都转成文本；null 与空白字符串视为缺省
fn deserialize_loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(match value {
        None => None,
        Some(LooseValue::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Some(LooseValue::Int(n)) => Some(n.to_string()),
        Some(LooseValue::Float(f)) => Some(f.to_string()),
        Some(LooseValue::Bool(b)) => Some(b.to_string()),
    })
}

// 课时数：接受数字或数字字符串
fn deserialize_loose_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseValue>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(LooseValue::Int(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("so_tiet out of range: {n}"))),
        Some(LooseValue::Float(f)) if f.fract() == 0.0 && f.abs() <= i32::MAX as f64 => {
            Ok(Some(f as i32))
        }
        Some(LooseValue::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(LooseValue::Text(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("so_tiet is not a number: '{s}'"))),
        Some(LooseValue::Float(f)) => Err(serde::de::Error::custom(format!(
            "so_tiet is not an integer: {f}"
        ))),
        Some(LooseValue::Bool(b)) => Err(serde::de::Error::custom(format!(
            "so_tiet is not a number: {b}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_accepts_numbers_as_text() {
        let row: TimetableRow = serde_json::from_str(
            r#"{"ten_lop":" K15A ","sdt_gv":912345678,"so_tiet":"3","ngay_hoc":"23/1/2026"}"#,
        )
        .unwrap();
        assert_eq!(row.ten_lop.as_deref(), Some("K15A"));
        assert_eq!(row.sdt_gv.as_deref(), Some("912345678"));
        assert_eq!(row.so_tiet, Some(3));
        assert_eq!(row.ngay_hoc.as_deref(), Some("23/1/2026"));
    }

    #[test]
    fn test_row_blank_fields_are_none() {
        let row: TimetableRow =
            serde_json::from_str(r#"{"ten_lop":"  ","so_tiet":"","ghi_chu":null}"#).unwrap();
        assert!(row.ten_lop.is_none());
        assert!(row.so_tiet.is_none());
        assert!(row.ghi_chu.is_none());
        assert!(row.buoi.is_none());
    }

    #[test]
    fn test_row_rejects_non_numeric_period_count() {
        let result: Result<TimetableRow, _> = serde_json::from_str(r#"{"so_tiet":"ba"}"#);
        assert!(result.is_err());
    }
}
