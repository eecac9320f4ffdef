use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{EduAdminError, Result};
use crate::models::{
    PaginationInfo,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::{escape_like_pattern, validate::validate_page_offset};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};

// 唯一约束冲突单独映射为 409
fn map_write_error(e: DbErr, action: &str) -> EduAdminError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            EduAdminError::conflict(format!("Student code already exists: {detail}"))
        }
        _ => EduAdminError::database_operation(format!("{action}: {e}")),
    }
}

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_code: Set(req.student_code),
            full_name: Set(req.full_name),
            email: Set(req.email),
            phone: Set(req.phone),
            class_name: Set(req.class_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, "创建学生失败"))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过学号获取学生
    pub async fn get_student_by_code_impl(&self, code: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::StudentCode.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);
        validate_page_offset(page, size).map_err(EduAdminError::validation)?;

        let mut select = Students::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FullName.contains(&escaped))
                    .add(Column::StudentCode.contains(&escaped)),
            );
        }

        // 班级筛选
        if let Some(ref class_name) = query.class_name
            && !class_name.trim().is_empty()
        {
            select = select.filter(Column::ClassName.eq(class_name.trim()));
        }

        select = select.order_by_asc(Column::StudentCode);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询学生总数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo::new(page, size, total),
        })
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询学生失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.updated_at = Set(chrono::Utc::now().timestamp());

        if let Some(full_name) = update.full_name {
            model.full_name = Set(full_name);
        }
        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }
        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(class_name) = update.class_name {
            model.class_name = Set(Some(class_name));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| map_write_error(e, "更新学生失败"))?;

        Ok(Some(updated.into_student()))
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
