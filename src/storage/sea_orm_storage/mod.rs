//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod announcements;
mod classes;
mod sessions;
mod students;
mod timetables;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{EduAdminError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 按指定的数据库配置连接并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EduAdminError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| EduAdminError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EduAdminError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") || url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EduAdminError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 检查数据库连通性
    pub async fn ping_impl(&self) -> Result<()> {
        self.db
            .execute_unprepared("SELECT 1")
            .await
            .map(|_| ())
            .map_err(|e| EduAdminError::database_connection(format!("数据库不可用: {e}")))
    }
}

// Storage trait 实现
use crate::models::{
    announcements::{
        entities::{Announcement, AnnouncementLocation},
        requests::{AnnouncementListQuery, CreateAnnouncementRequest, UpdateAnnouncementRequest},
        responses::AnnouncementListResponse,
    },
    classes::entities::Class,
    sessions::{entities::Session, requests::NewSession},
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    timetables::{entities::TimetableEntry, requests::NewTimetableEntry},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn ping(&self) -> Result<()> {
        self.ping_impl().await
    }

    // 班级模块
    async fn list_classes(&self) -> Result<Vec<Class>> {
        self.list_classes_impl().await
    }

    async fn get_class_by_name(&self, name: &str) -> Result<Option<Class>> {
        self.get_class_by_name_impl(name).await
    }

    async fn create_classes(&self, names: Vec<String>) -> Result<Vec<Class>> {
        self.create_classes_impl(names).await
    }

    // 课表模块
    async fn list_timetable_entries(&self, class_name: &str) -> Result<Vec<TimetableEntry>> {
        self.list_timetable_entries_impl(class_name).await
    }

    async fn replace_timetable_entries(
        &self,
        class_names: &[String],
        entries: Vec<NewTimetableEntry>,
    ) -> Result<Vec<TimetableEntry>> {
        self.replace_timetable_entries_impl(class_names, entries)
            .await
    }

    // 公告模块
    async fn create_announcement(&self, req: CreateAnnouncementRequest) -> Result<Announcement> {
        self.create_announcement_impl(req).await
    }

    async fn get_announcement_by_id(&self, id: i64, now: i64) -> Result<Option<Announcement>> {
        self.get_announcement_by_id_impl(id, now).await
    }

    async fn update_announcement(
        &self,
        id: i64,
        update: UpdateAnnouncementRequest,
        now: i64,
    ) -> Result<Option<Announcement>> {
        self.update_announcement_impl(id, update, now).await
    }

    async fn delete_announcement(&self, id: i64, now: i64) -> Result<bool> {
        self.delete_announcement_impl(id, now).await
    }

    async fn list_announcements_with_pagination(
        &self,
        query: AnnouncementListQuery,
        now: i64,
    ) -> Result<AnnouncementListResponse> {
        self.list_announcements_with_pagination_impl(query, now)
            .await
    }

    async fn list_active_announcements(
        &self,
        location: Option<AnnouncementLocation>,
        now: i64,
    ) -> Result<Vec<Announcement>> {
        self.list_active_announcements_impl(location, now).await
    }

    async fn list_expired_announcements(
        &self,
        location: Option<AnnouncementLocation>,
        now: i64,
    ) -> Result<Vec<Announcement>> {
        self.list_expired_announcements_impl(location, now).await
    }

    // 会话模块
    async fn create_session(&self, session: NewSession) -> Result<Session> {
        self.create_session_impl(session).await
    }

    async fn get_session_by_token(&self, token: &str) -> Result<Option<Session>> {
        self.get_session_by_token_impl(token).await
    }

    async fn find_active_session_for_client(
        &self,
        user_id: i64,
        client_id: &str,
        now: i64,
    ) -> Result<Option<Session>> {
        self.find_active_session_for_client_impl(user_id, client_id, now)
            .await
    }

    async fn refresh_session(
        &self,
        id: i64,
        expires_at: i64,
        user_agent: Option<String>,
        ip_address: Option<String>,
        now: i64,
    ) -> Result<Option<Session>> {
        self.refresh_session_impl(id, expires_at, user_agent, ip_address, now)
            .await
    }

    async fn list_sessions_for_user(
        &self,
        user_id: i64,
        active_only: bool,
        now: i64,
    ) -> Result<Vec<Session>> {
        self.list_sessions_for_user_impl(user_id, active_only, now)
            .await
    }

    async fn touch_session(&self, id: i64, now: i64) -> Result<bool> {
        self.touch_session_impl(id, now).await
    }

    async fn deactivate_session(&self, id: i64) -> Result<bool> {
        self.deactivate_session_impl(id).await
    }

    async fn deactivate_expired_sessions(&self, now: i64) -> Result<u64> {
        self.deactivate_expired_sessions_impl(now).await
    }

    // 学生模块
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(req).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_code(&self, code: &str) -> Result<Option<Student>> {
        self.get_student_by_code_impl(code).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }
}
