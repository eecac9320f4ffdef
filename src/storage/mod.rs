use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

/// 存储层接口
///
/// 涉及公告的读取、更新、删除方法都接收 `now`（Unix 秒），实现方必须据此排除已过期的公告，
/// 只有 `list_expired_announcements` 例外。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    // 数据库连通性检查
    async fn ping(&self) -> Result<()>;

    /// 班级管理方法
    // 按名称升序列出所有班级
    async fn list_classes(&self) -> Result<Vec<Class>>;
    // 通过名称获取班级
    async fn get_class_by_name(&self, name: &str) -> Result<Option<Class>>;
    // 批量创建班级，已存在的名称被跳过，返回实际插入的记录
    async fn create_classes(&self, names: Vec<String>) -> Result<Vec<Class>>;

    /// 课表方法
    // 获取班级课表，按日期、节次排序
    async fn list_timetable_entries(&self, class_name: &str) -> Result<Vec<TimetableEntry>>;
    // 在同一事务中登记缺少的班级并替换这些班级的课表，返回的条目按插入顺序排列
    async fn replace_timetable_entries(
        &self,
        class_names: &[String],
        entries: Vec<NewTimetableEntry>,
    ) -> Result<Vec<TimetableEntry>>;

    /// 公告管理方法
    async fn create_announcement(&self, req: CreateAnnouncementRequest) -> Result<Announcement>;
    async fn get_announcement_by_id(&self, id: i64, now: i64) -> Result<Option<Announcement>>;
    async fn update_announcement(
        &self,
        id: i64,
        update: UpdateAnnouncementRequest,
        now: i64,
    ) -> Result<Option<Announcement>>;
    async fn delete_announcement(&self, id: i64, now: i64) -> Result<bool>;
    async fn list_announcements_with_pagination(
        &self,
        query: AnnouncementListQuery,
        now: i64,
    ) -> Result<AnnouncementListResponse>;
    // 已启用且未过期
    async fn list_active_announcements(
        &self,
        location: Option<AnnouncementLocation>,
        now: i64,
    ) -> Result<Vec<Announcement>>;
    // 已过期（绕过未过期条件）
    async fn list_expired_announcements(
        &self,
        location: Option<AnnouncementLocation>,
        now: i64,
    ) -> Result<Vec<Announcement>>;

    /// 设备会话方法
    async fn create_session(&self, session: NewSession) -> Result<Session>;
    async fn get_session_by_token(&self, token: &str) -> Result<Option<Session>>;
    // 查找该用户在该设备上仍然有效的会话
    async fn find_active_session_for_client(
        &self,
        user_id: i64,
        client_id: &str,
        now: i64,
    ) -> Result<Option<Session>>;
    // 续期：更新过期时间、最后活跃时间以及设备信息
    async fn refresh_session(
        &self,
        id: i64,
        expires_at: i64,
        user_agent: Option<String>,
        ip_address: Option<String>,
        now: i64,
    ) -> Result<Option<Session>>;
    async fn list_sessions_for_user(
        &self,
        user_id: i64,
        active_only: bool,
        now: i64,
    ) -> Result<Vec<Session>>;
    async fn touch_session(&self, id: i64, now: i64) -> Result<bool>;
    async fn deactivate_session(&self, id: i64) -> Result<bool>;
    // 停用所有已过期但仍标记为活跃的会话，返回受影响行数
    async fn deactivate_expired_sessions(&self, now: i64) -> Result<u64>;

    /// 学生管理方法
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn get_student_by_code(&self, code: &str) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
