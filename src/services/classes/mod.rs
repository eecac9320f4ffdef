pub mod create;
pub mod import;
pub mod list;
pub mod timetable;

use std::sync::Arc;

use crate::config::ImportConfig;
use crate::errors::Result;
use crate::models::{
    classes::{
        entities::Class, requests::BulkCreateClassesRequest, responses::BulkCreateClassesResponse,
    },
    timetables::{
        entities::TimetableEntry, requests::TimetableRow, responses::TimetableImportResponse,
    },
};
use crate::storage::Storage;

/// 班级与课表服务
pub struct ClassService {
    storage: Arc<dyn Storage>,
    import: ImportConfig,
}

impl ClassService {
    pub fn new(storage: Arc<dyn Storage>, import: ImportConfig) -> Self {
        Self { storage, import }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 获取班级列表
    pub async fn list_classes(&self) -> Result<Vec<Class>> {
        list::list_classes(self).await
    }

    // 批量创建班级
    pub async fn bulk_create_classes(
        &self,
        req: BulkCreateClassesRequest,
    ) -> Result<BulkCreateClassesResponse> {
        create::bulk_create_classes(self, req).await
    }

    // 获取班级课表
    pub async fn get_timetable(&self, class_name: &str) -> Result<Vec<TimetableEntry>> {
        timetable::get_timetable(self, class_name).await
    }

    // 导入课表，`target` 为空时按行内班级名分组替换
    pub async fn import_timetable(
        &self,
        rows: Vec<TimetableRow>,
        target: Option<&str>,
    ) -> Result<TimetableImportResponse> {
        import::import_timetable(self, rows, target).await
    }
}
