//! 课表条目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "timetable_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
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
    #[sea_orm(column_type = "Text", nullable)]
    pub noi_dung: Option<String>,
    pub gio_thi: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub ghi_chu: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_timetable_entry(self) -> crate::models::timetables::entities::TimetableEntry {
        use crate::models::timetables::entities::TimetableEntry;
        use chrono::{DateTime, Utc};

        TimetableEntry {
            id: self.id,
            ten_lop: self.ten_lop,
            buoi: self.buoi,
            ngay_hoc: DateTime::<Utc>::from_timestamp(self.ngay_hoc, 0).unwrap_or_default(),
            giang_duong: self.giang_duong,
            dia_diem: self.dia_diem,
            doi_tuong: self.doi_tuong,
            mon_hoc: self.mon_hoc,
            loai_gio: self.loai_gio,
            so_tiet: self.so_tiet,
            giang_vien: self.giang_vien,
            sdt_gv: self.sdt_gv,
            noi_dung: self.noi_dung,
            gio_thi: self.gio_thi,
            ghi_chu: self.ghi_chu,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
