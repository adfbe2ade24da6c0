//! 认证中间件

use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::Response,
};
use http::Uri;
use serde::Deserialize;

use crate::AppError;
use crate::core::ServerState;
use crate::security_log;

#[derive(Debug, Deserialize)]
struct TokenParam {
    token: Option<String>,
}

/// `token` query parameter, if present
fn query_token(uri: &Uri) -> Option<String> {
    Query::<TokenParam>::try_from_uri(uri)
        .ok()
        .and_then(|Query(p)| p.token)
}

/// Compare without short-circuiting on the first differing byte
pub fn token_matches(given: &str, expected: &str) -> bool {
    let (a, b) = (given.as_bytes(), expected.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// 管理令牌中间件
///
/// 令牌缺失或错误返回 `401 { "success": false, "error": "Unauthorized" }`。
/// CORS 预检 (`OPTIONS`) 直接放行。
pub async fn require_admin_token(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let bearer = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string);

    let token = bearer.or_else(|| query_token(req.uri()));

    match token {
        Some(t) if token_matches(&t, &state.config.admin_token) => Ok(next.run(req).await),
        Some(_) => {
            security_log!("WARN", "admin_token_invalid", uri = req.uri().path().to_string());
            Err(AppError::Unauthorized)
        }
        None => {
            security_log!("WARN", "admin_token_missing", uri = req.uri().path().to_string());
            Err(AppError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_token() {
        let uri: Uri = "/api/admin/reservations?page=2&token=abc".parse().unwrap();
        assert_eq!(query_token(&uri), Some("abc".to_string()));

        let uri: Uri = "/api/admin/reservations?token=a%20b+c".parse().unwrap();
        assert_eq!(query_token(&uri), Some("a b c".to_string()));

        let uri: Uri = "/api/admin/reservations?page=2".parse().unwrap();
        assert_eq!(query_token(&uri), None);

        let uri: Uri = "/api/admin/reservations".parse().unwrap();
        assert_eq!(query_token(&uri), None);
    }

    #[test]
    fn test_token_matches() {
        assert!(token_matches("secret123", "secret123"));
        assert!(!token_matches("secret124", "secret123"));
        assert!(!token_matches("secret", "secret123"));
        assert!(!token_matches("", "secret123"));
    }
}
