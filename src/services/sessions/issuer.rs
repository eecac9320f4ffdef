use tracing::warn;

use crate::errors::{EduAdminError, Result};

/// 校验签发方密钥
///
/// 未配置密钥时签发功能关闭，任何请求都被拒绝。
pub fn check_issuer_key(configured: &str, presented: Option<&str>) -> Result<()> {
    if configured.is_empty() {
        warn!("Session issuing is disabled: session.issuer_key is not configured");
        return Err(EduAdminError::authorization("Session issuing is disabled"));
    }

    match presented {
        Some(key) if constant_time_eq(configured.as_bytes(), key.as_bytes()) => Ok(()),
        Some(_) => Err(EduAdminError::authentication("Invalid issuer key")),
        None => Err(EduAdminError::authentication("Missing issuer key")),
    }
}

// 比较耗时与首个不同字节的位置无关
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_key_is_accepted() {
        assert!(check_issuer_key("s3cret", Some("s3cret")).is_ok());
    }

    #[test]
    fn test_missing_or_wrong_key_is_unauthenticated() {
        assert!(matches!(
            check_issuer_key("s3cret", None),
            Err(EduAdminError::Authentication(_))
        ));
        assert!(matches!(
            check_issuer_key("s3cret", Some("s3cre")),
            Err(EduAdminError::Authentication(_))
        ));
        assert!(matches!(
            check_issuer_key("s3cret", Some("s3creT")),
            Err(EduAdminError::Authentication(_))
        ));
    }

    #[test]
    fn test_unconfigured_key_rejects_everything() {
        assert!(matches!(
            check_issuer_key("", Some("")),
            Err(EduAdminError::Authorization(_))
        ));
        assert!(matches!(
            check_issuer_key("", None),
            Err(EduAdminError::Authorization(_))
        ));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
        assert!(constant_time_eq(b"", b""));
    }
}
