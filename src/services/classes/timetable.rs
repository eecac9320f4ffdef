use super::ClassService;
use crate::errors::{EduAdminError, Result};
use crate::models::timetables::entities::TimetableEntry;

pub async fn get_timetable(service: &ClassService, class_name: &str) -> Result<Vec<TimetableEntry>> {
    let storage = service.storage();
    let entries = storage.list_timetable_entries(class_name).await?;

    // 已登记但尚未导入课表的班级返回空列表
    if entries.is_empty() && storage.get_class_by_name(class_name).await?.is_none() {
        return Err(EduAdminError::not_found(format!(
            "Class not found: {class_name}"
        )));
    }

    Ok(entries)
}
