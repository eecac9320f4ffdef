use tracing::info;

use super::StudentService;
use crate::errors::{EduAdminError, Result};

pub async fn delete_student(service: &StudentService, id: i64) -> Result<()> {
    if !service.storage().delete_student(id).await? {
        return Err(EduAdminError::not_found(format!("Student not found: {id}")));
    }

    info!("Student {} deleted", id);
    Ok(())
}
