//! 课表存储操作

use super::SeaOrmStorage;
use super::classes::insert_missing_classes;
use crate::entity::timetable_entries::{ActiveModel, Column, Entity as TimetableEntries};
use crate::errors::{EduAdminError, Result};
use crate::models::timetables::{entities::TimetableEntry, requests::NewTimetableEntry};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait};
use tracing::info;

// 每条 INSERT 的行数，绑定参数总数保持在 SQLite 旧版上限 999 以内
const INSERT_BATCH_ROWS: usize = 50;

fn to_active_model(entry: NewTimetableEntry, now: i64) -> ActiveModel {
    ActiveModel {
        ten_lop: Set(entry.ten_lop),
        buoi: Set(entry.buoi),
        ngay_hoc: Set(entry.ngay_hoc),
        giang_duong: Set(entry.giang_duong),
        dia_diem: Set(entry.dia_diem),
        doi_tuong: Set(entry.doi_tuong),
        mon_hoc: Set(entry.mon_hoc),
        loai_gio: Set(entry.loai_gio),
        so_tiet: Set(entry.so_tiet),
        giang_vien: Set(entry.giang_vien),
        sdt_gv: Set(entry.sdt_gv),
        noi_dung: Set(entry.noi_dung),
        gio_thi: Set(entry.gio_thi),
        ghi_chu: Set(entry.ghi_chu),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

impl SeaOrmStorage {
    /// 获取班级课表，按上课日期、节次排序
    pub async fn list_timetable_entries_impl(&self, class_name: &str) -> Result<Vec<TimetableEntry>> {
        let entries = TimetableEntries::find()
            .filter(Column::TenLop.eq(class_name))
            .order_by_asc(Column::NgayHoc)
            .order_by_asc(Column::Buoi)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询课表失败: {e}")))?;

        Ok(entries
            .into_iter()
            .map(|m| m.into_timetable_entry())
            .collect())
    }

    /// 替换若干班级的课表
    ///
    /// 在一个事务中登记尚不存在的班级，删除 `class_names` 中每个班级的全部条目后
    /// 分批插入新条目。任一步失败时事务回滚，班级与原有课表都保持不变。
    /// 返回的条目按插入顺序排列。
    pub async fn replace_timetable_entries_impl(
        &self,
        class_names: &[String],
        entries: Vec<NewTimetableEntry>,
    ) -> Result<Vec<TimetableEntry>> {
        let now = chrono::Utc::now().timestamp();
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduAdminError::database_operation(format!("开启事务失败: {e}")))?;

        let registered = insert_missing_classes(&txn, class_names, now).await?;

        let deleted = TimetableEntries::delete_many()
            .filter(Column::TenLop.is_in(class_names.iter().cloned()))
            .exec(&txn)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("删除旧课表失败: {e}")))?;

        let models: Vec<ActiveModel> = entries
            .into_iter()
            .map(|entry| to_active_model(entry, now))
            .collect();
        for batch in models.chunks(INSERT_BATCH_ROWS) {
            TimetableEntries::insert_many(batch.to_vec())
                .exec_without_returning(&txn)
                .await
                .map_err(|e| {
                    EduAdminError::database_operation(format!("插入课表条目失败: {e}"))
                })?;
        }

        // 旧条目已删除，这些班级下的记录就是本次插入的全部条目
        let inserted: Vec<TimetableEntry> = TimetableEntries::find()
            .filter(Column::TenLop.is_in(class_names.iter().cloned()))
            .order_by_asc(Column::Id)
            .all(&txn)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询新课表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_timetable_entry())
            .collect();

        txn.commit()
            .await
            .map_err(|e| EduAdminError::database_operation(format!("提交事务失败: {e}")))?;

        info!(
            "Replaced timetable for {:?}: {} class(es) registered, {} removed, {} inserted",
            class_names,
            registered.len(),
            deleted.rows_affected,
            inserted.len()
        );

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use sea_orm::ConnectionTrait;

    async fn open_storage(dir: &tempfile::TempDir) -> SeaOrmStorage {
        SeaOrmStorage::connect(&DatabaseConfig {
            url: dir
                .path()
                .join("timetables.db")
                .to_string_lossy()
                .into_owned(),
            pool_size: 1,
            timeout: 10,
        })
        .await
        .unwrap()
    }

    fn entry(class_name: &str, day: i64, subject: &str) -> NewTimetableEntry {
        NewTimetableEntry {
            ten_lop: class_name.to_string(),
            buoi: Some("Sáng".to_string()),
            ngay_hoc: day,
            giang_duong: None,
            dia_diem: None,
            doi_tuong: None,
            mon_hoc: Some(subject.to_string()),
            loai_gio: None,
            so_tiet: Some(3),
            giang_vien: None,
            sdt_gv: None,
            noi_dung: None,
            gio_thi: None,
            ghi_chu: None,
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_failed_insert_rolls_back_whole_replace() {
        let dir = tempfile::tempdir().unwrap();
        let storage = open_storage(&dir).await;

        storage
            .replace_timetable_entries_impl(
                &names(&["K1"]),
                vec![
                    entry("K1", 1_767_225_600, "Giải phẫu"),
                    entry("K1", 1_767_312_000, "Sinh lý"),
                ],
            )
            .await
            .unwrap();

        // 让带特定科目的行在插入时失败，此时旧课表已在同一事务中被删除
        storage
            .db
            .execute_unprepared(
                "CREATE TRIGGER reject_marked_rows BEFORE INSERT ON timetable_entries \
                 WHEN NEW.mon_hoc = 'REJECT' BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
            )
            .await
            .unwrap();

        let result = storage
            .replace_timetable_entries_impl(
                &names(&["K1", "K2"]),
                vec![
                    entry("K1", 1_767_398_400, "Dược lý"),
                    entry("K2", 1_767_398_400, "REJECT"),
                ],
            )
            .await;
        assert!(matches!(result, Err(EduAdminError::DatabaseOperation(_))));

        let kept = storage.list_timetable_entries_impl("K1").await.unwrap();
        let subjects: Vec<_> = kept.iter().map(|e| e.mon_hoc.as_deref()).collect();
        assert_eq!(subjects, vec![Some("Giải phẫu"), Some("Sinh lý")]);

        assert!(storage.get_class_by_name_impl("K1").await.unwrap().is_some());
        assert!(storage.get_class_by_name_impl("K2").await.unwrap().is_none());
        assert!(
            storage
                .list_timetable_entries_impl("K2")
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_replace_inserts_every_batch_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let storage = open_storage(&dir).await;

        let total = INSERT_BATCH_ROWS * 3 + 7;
        let entries: Vec<_> = (0..total)
            .map(|i| entry("K9", 1_767_225_600 + i as i64 * 86_400, &format!("Môn {i}")))
            .collect();

        let inserted = storage
            .replace_timetable_entries_impl(&names(&["K9"]), entries)
            .await
            .unwrap();
        assert_eq!(inserted.len(), total);
        assert_eq!(inserted[0].mon_hoc.as_deref(), Some("Môn 0"));
        let last = format!("Môn {}", total - 1);
        assert_eq!(inserted[total - 1].mon_hoc.as_deref(), Some(last.as_str()));

        // 再次替换时旧条目全部被清除
        let inserted = storage
            .replace_timetable_entries_impl(&names(&["K9"]), vec![entry("K9", 1_767_225_600, "Mới")])
            .await
            .unwrap();
        assert_eq!(inserted.len(), 1);
        assert_eq!(
            storage.list_timetable_entries_impl("K9").await.unwrap().len(),
            1
        );
        assert_eq!(storage.list_classes_impl().await.unwrap().len(), 1);
    }
}
