use tracing::info;

use super::StudentService;
use crate::errors::{EduAdminError, Result};
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use crate::utils::validate::{validate_email, validate_phone, validate_student_code};

pub async fn create_student(
    service: &StudentService,
    mut req: CreateStudentRequest,
) -> Result<Student> {
    req.student_code = req.student_code.trim().to_string();
    req.full_name = req.full_name.trim().to_string();
    req.email = normalize_optional(req.email);
    req.phone = normalize_optional(req.phone);
    req.class_name = normalize_optional(req.class_name);

    validate_student_code(&req.student_code).map_err(EduAdminError::validation)?;
    if req.full_name.is_empty() {
        return Err(EduAdminError::validation("Full name must not be empty"));
    }
    if let Some(email) = req.email.as_deref() {
        validate_email(email).map_err(EduAdminError::validation)?;
    }
    if let Some(phone) = req.phone.as_deref() {
        validate_phone(phone).map_err(EduAdminError::validation)?;
    }

    let storage = service.storage();
    if storage.get_student_by_code(&req.student_code).await?.is_some() {
        return Err(EduAdminError::conflict(format!(
            "Student code already exists: {}",
            req.student_code
        )));
    }

    let student = storage.create_student(req).await?;
    info!("Student {} ({}) created", student.id, student.student_code);
    Ok(student)
}

/// 去除首尾空白，空字符串视为未填写
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
