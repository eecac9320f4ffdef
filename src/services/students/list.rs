use super::StudentService;
use crate::errors::{EduAdminError, Result};
use crate::models::students::{
    requests::{StudentListQuery, StudentQueryParams},
    responses::StudentListResponse,
};
use crate::utils::validate::validate_page_offset;

pub async fn list_students(
    service: &StudentService,
    params: StudentQueryParams,
) -> Result<StudentListResponse> {
    let page = params.pagination.page.max(1) as u64;
    let size = params.pagination.size.clamp(1, 100) as u64;
    validate_page_offset(page, size).map_err(EduAdminError::validation)?;

    let query = StudentListQuery {
        page,
        size,
        search: params.search,
        class_name: params.class_name,
    };

    service.storage().list_students_with_pagination(query).await
}
