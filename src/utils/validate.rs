use once_cell::sync::Lazy;
use regex::Regex;

static STUDENT_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid student code regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 .-]{6,18}[0-9]$").expect("Invalid phone regex"));

static CLIENT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._:-]+$").expect("Invalid client id regex"));

pub const MAX_CLASS_NAME_LEN: usize = 100;
pub const MAX_TITLE_LEN: usize = 200;

pub fn validate_class_name(name: &str) -> Result<(), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Class name must not be empty");
    }
    if name.chars().count() > MAX_CLASS_NAME_LEN {
        return Err("Class name must be at most 100 characters");
    }
    // 班级名会出现在 URL 路径中
    if name.contains('/') {
        return Err("Class name must not contain '/'");
    }
    Ok(())
}

pub fn validate_student_code(code: &str) -> Result<(), &'static str> {
    // 学号长度校验：3 <= x <= 32
    if code.len() < 3 || code.len() > 32 {
        return Err("Student code length must be between 3 and 32 characters");
    }
    if !STUDENT_CODE_RE.is_match(code) {
        return Err("Student code must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if !PHONE_RE.is_match(phone.trim()) {
        return Err("Phone number format is invalid");
    }
    Ok(())
}

pub fn validate_client_id(client_id: &str) -> Result<(), &'static str> {
    if client_id.is_empty() || client_id.len() > 128 {
        return Err("Client id length must be between 1 and 128 characters");
    }
    if !CLIENT_ID_RE.is_match(client_id) {
        return Err("Client id contains invalid characters");
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Title must not be empty");
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err("Title must be at most 200 characters");
    }
    Ok(())
}

/// 分页偏移量 `(page - 1) * size` 必须能表示为 SQL 的 OFFSET（i64）
pub fn validate_page_offset(page: u64, size: u64) -> Result<(), &'static str> {
    if page == 0 {
        return Err("Page must be at least 1");
    }
    if page > i64::MAX as u64 {
        return Err("Page is too large");
    }
    match (page - 1).checked_mul(size) {
        Some(offset) if offset <= i64::MAX as u64 => Ok(()),
        _ => Err("Page is too large"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name() {
        assert!(validate_class_name("K15 - Điều dưỡng A").is_ok());
        assert!(validate_class_name("   ").is_err());
        assert!(validate_class_name("A/B").is_err());
        assert!(validate_class_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_student_code() {
        assert!(validate_student_code("SV2026_001").is_ok());
        assert!(validate_student_code("ab").is_err());
        assert!(validate_student_code("SV 001").is_err());
    }

    #[test]
    fn test_email_and_phone() {
        assert!(validate_email("student@school.edu.vn").is_ok());
        assert!(validate_email("student@school").is_err());
        assert!(validate_phone("+84 912 345 678").is_ok());
        assert!(validate_phone("0912345678").is_ok());
        assert!(validate_phone("call me").is_err());
    }

    #[test]
    fn test_client_id() {
        assert!(validate_client_id("web:5f1c-22aa").is_ok());
        assert!(validate_client_id("").is_err());
        assert!(validate_client_id("has space").is_err());
    }

    #[test]
    fn test_page_offset() {
        assert!(validate_page_offset(1, 100).is_ok());
        assert!(validate_page_offset(1_000, 100).is_ok());
        assert!(validate_page_offset(0, 10).is_err());
        assert!(validate_page_offset(i64::MAX as u64, 100).is_err());
        assert!(validate_page_offset(u64::MAX, 2).is_err());
        assert!(validate_page_offset(i64::MAX as u64, 1).is_ok());
        assert!(validate_page_offset(i64::MAX as u64 + 1, 1).is_err());
    }
}
