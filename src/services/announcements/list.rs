use super::{AnnouncementService, now_ts};
use crate::errors::{EduAdminError, Result};
use crate::utils::validate::validate_page_offset;
use crate::models::announcements::{
    entities::Announcement,
    requests::{AnnouncementFilterParams, AnnouncementListParams, AnnouncementListQuery},
    responses::AnnouncementListResponse,
};

const MAX_PAGE_SIZE: u64 = 100;

pub async fn list_announcements(
    service: &AnnouncementService,
    params: AnnouncementListParams,
) -> Result<AnnouncementListResponse> {
    let query = build_list_query(&params, service.settings.default_page_size)?;
    service
        .storage()
        .list_announcements_with_pagination(query, now_ts())
        .await
}

pub async fn list_active_announcements(
    service: &AnnouncementService,
    params: AnnouncementFilterParams,
) -> Result<Vec<Announcement>> {
    service
        .storage()
        .list_active_announcements(params.location, now_ts())
        .await
}

pub async fn list_expired_announcements(
    service: &AnnouncementService,
    params: AnnouncementFilterParams,
) -> Result<Vec<Announcement>> {
    service
        .storage()
        .list_expired_announcements(params.location, now_ts())
        .await
}

fn build_list_query(
    params: &AnnouncementListParams,
    default_page_size: u64,
) -> Result<AnnouncementListQuery> {
    let page = match params.page {
        None => 1,
        Some(p) if p >= 1 => p as u64,
        Some(p) => return Err(EduAdminError::validation(format!("Invalid page: {p}"))),
    };
    let size = match params.limit {
        None => default_page_size.clamp(1, MAX_PAGE_SIZE),
        Some(l) if l >= 1 => (l as u64).min(MAX_PAGE_SIZE),
        Some(l) => return Err(EduAdminError::validation(format!("Invalid limit: {l}"))),
    };
    validate_page_offset(page, size).map_err(EduAdminError::validation)?;

    Ok(AnnouncementListQuery {
        page,
        size,
        location: params.location,
        active_only: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_config() {
        let query = build_list_query(&AnnouncementListParams::default(), 10).unwrap();
        assert_eq!((query.page, query.size), (1, 10));
    }

    #[test]
    fn test_limit_is_capped() {
        let params = AnnouncementListParams {
            page: Some(2),
            limit: Some(500),
            location: None,
        };
        let query = build_list_query(&params, 10).unwrap();
        assert_eq!((query.page, query.size), (2, 100));
    }

    #[test]
    fn test_non_positive_values_rejected() {
        let params = AnnouncementListParams {
            page: Some(0),
            ..Default::default()
        };
        assert!(build_list_query(&params, 10).is_err());

        let params = AnnouncementListParams {
            limit: Some(-5),
            ..Default::default()
        };
        assert!(build_list_query(&params, 10).is_err());
    }

    #[test]
    fn test_huge_page_rejected() {
        let params = AnnouncementListParams {
            page: Some(i64::MAX),
            limit: Some(100),
            location: None,
        };
        let err = build_list_query(&params, 10).unwrap_err();
        assert!(matches!(err, EduAdminError::Validation(_)));
    }
}
