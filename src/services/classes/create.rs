use std::collections::HashSet;

use tracing::info;

use super::ClassService;
use crate::errors::{EduAdminError, Result};
use crate::models::classes::{
    requests::BulkCreateClassesRequest, responses::BulkCreateClassesResponse,
};
use crate::utils::validate::validate_class_name;

pub async fn bulk_create_classes(
    service: &ClassService,
    req: BulkCreateClassesRequest,
) -> Result<BulkCreateClassesResponse> {
    let names = normalize_class_names(req.classes)?;

    let inserted = service.storage().create_classes(names).await?;
    if !inserted.is_empty() {
        info!(
            "Created {} class(es): {:?}",
            inserted.len(),
            inserted.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
        );
    }

    Ok(BulkCreateClassesResponse {
        count: inserted.len(),
        classes: inserted,
    })
}

/// 去除首尾空白、丢弃空名称、合并重复名称（保持首次出现的顺序）
pub(crate) fn normalize_class_names(raw: Vec<String>) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for name in raw {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        validate_class_name(name).map_err(EduAdminError::validation)?;
        if seen.insert(name.to_string()) {
            names.push(name.to_string());
        }
    }

    if names.is_empty() {
        return Err(EduAdminError::validation(
            "At least one non-empty class name is required",
        ));
    }
    Ok(names)
}
