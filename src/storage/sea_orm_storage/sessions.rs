//! 设备会话存储操作

use super::SeaOrmStorage;
use crate::entity::sessions::{ActiveModel, Column, Entity as Sessions};
use crate::errors::{EduAdminError, Result};
use crate::models::sessions::{entities::Session, requests::NewSession};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};

impl SeaOrmStorage {
    /// 创建会话
    pub async fn create_session_impl(&self, session: NewSession) -> Result<Session> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(session.user_id),
            token: Set(session.token),
            client_id: Set(session.client_id),
            device_name: Set(session.device_name),
            user_agent: Set(session.user_agent),
            ip_address: Set(session.ip_address),
            is_active: Set(true),
            last_active_at: Set(now),
            expires_at: Set(session.expires_at),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("创建会话失败: {e}")))?;

        Ok(result.into_session())
    }

    /// 通过令牌获取会话（不检查是否有效）
    pub async fn get_session_by_token_impl(&self, token: &str) -> Result<Option<Session>> {
        let result = Sessions::find()
            .filter(Column::Token.eq(token))
            .one(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询会话失败: {e}")))?;

        Ok(result.map(|m| m.into_session()))
    }

    /// 查找用户在指定设备上的有效会话（走 user_id + client_id 索引）
    pub async fn find_active_session_for_client_impl(
        &self,
        user_id: i64,
        client_id: &str,
        now: i64,
    ) -> Result<Option<Session>> {
        let result = Sessions::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ClientId.eq(client_id))
            .filter(Column::IsActive.eq(true))
            .filter(Column::ExpiresAt.gt(now))
            .order_by_desc(Column::LastActiveAt)
            .one(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询设备会话失败: {e}")))?;

        Ok(result.map(|m| m.into_session()))
    }

    /// 续期会话
    pub async fn refresh_session_impl(
        &self,
        id: i64,
        expires_at: i64,
        user_agent: Option<String>,
        ip_address: Option<String>,
        now: i64,
    ) -> Result<Option<Session>> {
        let existing = Sessions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询会话失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.expires_at = Set(expires_at);
        model.last_active_at = Set(now);
        model.updated_at = Set(now);
        if user_agent.is_some() {
            model.user_agent = Set(user_agent);
        }
        if ip_address.is_some() {
            model.ip_address = Set(ip_address);
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("续期会话失败: {e}")))?;

        Ok(Some(updated.into_session()))
    }

    /// 列出用户的会话，按最后活跃时间倒序（走 user_id + is_active 索引）
    pub async fn list_sessions_for_user_impl(
        &self,
        user_id: i64,
        active_only: bool,
        now: i64,
    ) -> Result<Vec<Session>> {
        let mut select = Sessions::find().filter(Column::UserId.eq(user_id));

        if active_only {
            select = select
                .filter(Column::IsActive.eq(true))
                .filter(Column::ExpiresAt.gt(now));
        }

        let sessions = select
            .order_by_desc(Column::LastActiveAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询会话列表失败: {e}")))?;

        Ok(sessions.into_iter().map(|m| m.into_session()).collect())
    }

    /// 更新最后活跃时间
    pub async fn touch_session_impl(&self, id: i64, now: i64) -> Result<bool> {
        let result = Sessions::update_many()
            .col_expr(Column::LastActiveAt, Expr::value(now))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("更新会话活跃时间失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 停用会话
    pub async fn deactivate_session_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Sessions::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(Column::IsActive.eq(true))
            .exec(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("停用会话失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 停用所有已过期的活跃会话
    pub async fn deactivate_expired_sessions_impl(&self, now: i64) -> Result<u64> {
        let result = Sessions::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::IsActive.eq(true))
            .filter(Column::ExpiresAt.lte(now))
            .exec(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("清理过期会话失败: {e}")))?;

        Ok(result.rows_affected)
    }
}
