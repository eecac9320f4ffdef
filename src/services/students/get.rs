use super::StudentService;
use crate::errors::{EduAdminError, Result};
use crate::models::students::entities::Student;

pub async fn get_student(service: &StudentService, id: i64) -> Result<Student> {
    service
        .storage()
        .get_student_by_id(id)
        .await?
        .ok_or_else(|| EduAdminError::not_found(format!("Student not found: {id}")))
}
