//! 管理端认证
//!
//! 管理接口使用共享令牌 (`ADMIN_TOKEN`)，通过 query 参数 `token`
//! 或 `Authorization: Bearer <token>` 头传递。

pub mod middleware;

pub use middleware::{require_admin_token, token_matches};
