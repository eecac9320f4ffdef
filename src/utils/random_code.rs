use rand::{Rng, distr::Alphanumeric};

/// 生成指定长度的随机字母数字串
pub fn generate_random_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// 会话令牌长度
pub const SESSION_TOKEN_LEN: usize = 64;

pub fn generate_session_token() -> String {
    generate_random_code(SESSION_TOKEN_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_shape() {
        let a = generate_session_token();
        let b = generate_session_token();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }
}
