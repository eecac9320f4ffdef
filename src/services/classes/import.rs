//! 课表导入
//!
//! 先在内存中完成全部校验与日期解析（`plan_import`），通过后再交给存储层在一个事务里
//! 登记新班级并替换课表。

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::ClassService;
use crate::errors::{EduAdminError, Result};
use crate::models::timetables::{
    requests::{NewTimetableEntry, TimetableRow},
    responses::TimetableImportResponse,
};
use crate::utils::parse_study_date;

/// 校验通过后的导入计划
#[derive(Debug)]
pub(crate) struct ImportPlan {
    // 涉及的班级（升序、去重）
    pub classes: Vec<String>,
    pub entries: Vec<NewTimetableEntry>,
    pub date_fallbacks: usize,
}

pub async fn import_timetable(
    service: &ClassService,
    rows: Vec<TimetableRow>,
    target: Option<&str>,
) -> Result<TimetableImportResponse> {
    if rows.len() > service.import.max_rows {
        return Err(EduAdminError::validation(format!(
            "Too many rows: {} (max {})",
            rows.len(),
            service.import.max_rows
        )));
    }

    let plan = plan_import(rows, target, Utc::now())?;

    // 尚未登记的班级在同一事务中一并登记
    let entries = service
        .storage()
        .replace_timetable_entries(&plan.classes, plan.entries)
        .await?;

    info!(
        "Imported {} timetable entries for {:?} ({} date fallback(s))",
        entries.len(),
        plan.classes,
        plan.date_fallbacks
    );

    Ok(TimetableImportResponse {
        count: entries.len(),
        classes: plan.classes,
        date_fallbacks: plan.date_fallbacks,
        entries,
    })
}

/// 校验并转换导入数据
///
/// - 空数据、所有行缺少班级名：校验错误
/// - 部分行缺少班级名：校验错误，列出行号（从 1 开始）
/// - 指定目标班级时，任一行班级名不一致：数据不匹配错误，列出所有不一致的班级名
pub(crate) fn plan_import(
    rows: Vec<TimetableRow>,
    target: Option<&str>,
    now: DateTime<Utc>,
) -> Result<ImportPlan> {
    if rows.is_empty() {
        return Err(EduAdminError::validation("Timetable payload is empty"));
    }

    let missing: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.ten_lop.is_none())
        .map(|(i, _)| i + 1)
        .collect();

    if missing.len() == rows.len() {
        return Err(EduAdminError::validation(
            "Missing class name (ten_lop) in timetable rows",
        ));
    }
    if !missing.is_empty() {
        let rows = missing
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(EduAdminError::validation(format!(
            "Missing class name (ten_lop) in row(s): {rows}"
        )));
    }

    let classes: BTreeSet<String> = rows.iter().filter_map(|r| r.ten_lop.clone()).collect();

    if let Some(target) = target.map(str::trim) {
        let mismatched: Vec<&str> = classes
            .iter()
            .map(String::as_str)
            .filter(|name| *name != target)
            .collect();
        if !mismatched.is_empty() {
            return Err(EduAdminError::data_mismatch(format!(
                "Class name mismatch: expected '{}', found {}",
                target,
                mismatched
                    .iter()
                    .map(|n| format!("'{n}'"))
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }
    }

    let mut date_fallbacks = 0;
    let mut entries = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let parsed = parse_study_date(row.ngay_hoc.as_deref(), now);
        if parsed.fell_back {
            date_fallbacks += 1;
            warn!(
                "Row {}: unparseable ngay_hoc {:?}, using current time",
                index + 1,
                row.ngay_hoc
            );
        }

        entries.push(NewTimetableEntry {
            // 上面已确认每行都有班级名
            ten_lop: row.ten_lop.unwrap_or_default(),
            buoi: row.buoi,
            ngay_hoc: parsed.timestamp,
            giang_duong: row.giang_duong,
            dia_diem: row.dia_diem,
            doi_tuong: row.doi_tuong,
            mon_hoc: row.mon_hoc,
            loai_gio: row.loai_gio,
            so_tiet: row.so_tiet,
            giang_vien: row.giang_vien,
            sdt_gv: row.sdt_gv,
            noi_dung: row.noi_dung,
            gio_thi: row.gio_thi,
            ghi_chu: row.ghi_chu,
        });
    }

    Ok(ImportPlan {
        classes: classes.into_iter().collect(),
        entries,
        date_fallbacks,
    })
}
