pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, StudentQueryParams, UpdateStudentRequest},
    responses::StudentListResponse,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn create(&self, req: CreateStudentRequest) -> Result<Student> {
        create::create_student(self, req).await
    }

    pub async fn get(&self, id: i64) -> Result<Student> {
        get::get_student(self, id).await
    }

    pub async fn list(&self, params: StudentQueryParams) -> Result<StudentListResponse> {
        list::list_students(self, params).await
    }

    pub async fn update(&self, id: i64, req: UpdateStudentRequest) -> Result<Student> {
        update::update_student(self, id, req).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        delete::delete_student(self, id).await
    }
}
