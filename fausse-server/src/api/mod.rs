//! API 路由模块
//!
//! # 结构
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /health | GET | 健康检查 | 无 |
//! | /api/menu | GET | 菜单 | 无 |
//! | /api/reservations | POST | 提交预订 | 无 |
//! | /api/newsletter | POST | 订阅通讯 | 无 |
//! | /api/admin/reservations | GET | 预订列表 (过滤/排序/分页) | 管理令牌 |
//! | /api/admin/newsletter | GET | 订阅者列表 | 管理令牌 |
//! | /api/admin/waitlist | GET | 候补列表 | 管理令牌 |

pub mod admin;
pub mod health;
pub mod menu;
pub mod newsletter;
pub mod reservations;

use axum::Router;

use crate::core::ServerState;

/// All routes with state applied
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(menu::router())
        .merge(reservations::router())
        .merge(newsletter::router())
        .merge(admin::router(state.clone()))
        .with_state(state)
}
