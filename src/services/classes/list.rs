use super::ClassService;
use crate::errors::Result;
use crate::models::classes::entities::Class;

pub async fn list_classes(service: &ClassService) -> Result<Vec<Class>> {
    service.storage().list_classes().await
}
