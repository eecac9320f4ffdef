//! 路径参数提取器
//!
//! 在进入处理函数之前完成路径参数的解析与校验，失败时直接返回 400。

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload};

use crate::errors::EduAdminError;
use crate::utils::validate::validate_class_name;

/// 路径中的 `{id}`，必须是正整数
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(parse_positive_id(req, "id").map(SafeIDI64))
    }
}

/// 路径中的 `{name}`（班级名称），去除首尾空白后校验
#[derive(Debug, Clone)]
pub struct SafeClassName(pub String);

impl FromRequest for SafeClassName {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().query("name").trim().to_string();
        let result = validate_class_name(&raw)
            .map(|_| SafeClassName(raw))
            .map_err(|msg| EduAdminError::validation(msg).into());
        ready(result)
    }
}

fn parse_positive_id(req: &HttpRequest, key: &str) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().query(key);
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(EduAdminError::validation(format!("Invalid {key}: '{raw}'")).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_safe_id_accepts_positive() {
        let req = TestRequest::default().param("id", "42").to_http_request();
        let id = SafeIDI64::extract(&req).await.unwrap();
        assert_eq!(id.0, 42);
    }

    #[actix_web::test]
    async fn test_safe_id_rejects_garbage() {
        for raw in ["0", "-3", "abc", ""] {
            let req = TestRequest::default().param("id", raw).to_http_request();
            assert!(SafeIDI64::extract(&req).await.is_err(), "{raw} accepted");
        }
    }

    #[actix_web::test]
    async fn test_safe_class_name_trims() {
        let req = TestRequest::default()
            .param("name", "  K15A ")
            .to_http_request();
        let name = SafeClassName::extract(&req).await.unwrap();
        assert_eq!(name.0, "K15A");
    }
}
