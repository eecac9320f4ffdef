use tracing::info;

use super::StudentService;
use super::create::normalize_optional;
use crate::errors::{EduAdminError, Result};
use crate::models::students::{entities::Student, requests::UpdateStudentRequest};
use crate::utils::validate::{validate_email, validate_phone};

pub async fn update_student(
    service: &StudentService,
    id: i64,
    mut req: UpdateStudentRequest,
) -> Result<Student> {
    if let Some(full_name) = req.full_name.as_mut() {
        *full_name = full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(EduAdminError::validation("Full name must not be empty"));
        }
    }
    req.email = normalize_optional(req.email);
    req.phone = normalize_optional(req.phone);
    req.class_name = normalize_optional(req.class_name);

    if let Some(email) = req.email.as_deref() {
        validate_email(email).map_err(EduAdminError::validation)?;
    }
    if let Some(phone) = req.phone.as_deref() {
        validate_phone(phone).map_err(EduAdminError::validation)?;
    }

    let student = service
        .storage()
        .update_student(id, req)
        .await?
        .ok_or_else(|| EduAdminError::not_found(format!("Student not found: {id}")))?;

    info!("Student {} updated", id);
    Ok(student)
}
