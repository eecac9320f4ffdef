use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 课表条目
///
/// 字段名沿用教务导出表格中的越南语列名，保证导入/导出的数据可以原样对照。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableEntry {
    pub id: i64,
    // 班级名称（与班级表按字符串关联）
    pub ten_lop: String,
    // 节次/时段标签
    pub buoi: Option<String>,
    // 上课日期
    pub ngay_hoc: chrono::DateTime<chrono::Utc>,
    // 教室
    pub giang_duong: Option<String>,
    // 地点
    pub dia_diem: Option<String>,
    // 授课对象
    pub doi_tuong: Option<String>,
    // 科目
    pub mon_hoc: Option<String>,
    // 课时类型（理论/实践/考试）
    pub loai_gio: Option<String>,
    // 课时数
    pub so_tiet: Option<i32>,
    // 教师
    pub giang_vien: Option<String>,
    // 教师电话
    pub sdt_gv: Option<String>,
    // 内容
    pub noi_dung: Option<String>,
    // 考试时间
    pub gio_thi: Option<String>,
    // 备注
    pub ghi_chu: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
