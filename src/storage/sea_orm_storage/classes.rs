//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::errors::{EduAdminError, Result};
use crate::models::classes::entities::Class;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::collections::HashSet;

impl SeaOrmStorage {
    /// 按名称升序列出班级
    pub async fn list_classes_impl(&self) -> Result<Vec<Class>> {
        let classes = Classes::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(classes.into_iter().map(|m| m.into_class()).collect())
    }

    /// 通过名称获取班级
    pub async fn get_class_by_name_impl(&self, name: &str) -> Result<Option<Class>> {
        let result = Classes::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 批量创建班级
    ///
    /// 在同一事务中查出已存在的名称并跳过，只插入新名称。
    pub async fn create_classes_impl(&self, names: Vec<String>) -> Result<Vec<Class>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduAdminError::database_operation(format!("开启事务失败: {e}")))?;

        let inserted = insert_missing_classes(&txn, &names, chrono::Utc::now().timestamp()).await?;

        txn.commit()
            .await
            .map_err(|e| EduAdminError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(inserted)
    }
}

/// 登记尚不存在的班级，返回新插入的记录
///
/// 由调用方提供连接或事务，课表替换时与课表写入共用同一事务。
pub(super) async fn insert_missing_classes<C: ConnectionTrait>(
    conn: &C,
    names: &[String],
    now: i64,
) -> Result<Vec<Class>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let existing: HashSet<String> = Classes::find()
        .filter(Column::Name.is_in(names.iter().cloned()))
        .all(conn)
        .await
        .map_err(|e| EduAdminError::database_operation(format!("查询已有班级失败: {e}")))?
        .into_iter()
        .map(|m| m.name)
        .collect();

    let mut inserted = Vec::new();
    for name in names.iter().filter(|n| !existing.contains(*n)) {
        let model = ActiveModel {
            name: Set(name.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(conn)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("创建班级失败: {e}")))?;
        inserted.push(result.into_class());
    }

    Ok(inserted)
}
