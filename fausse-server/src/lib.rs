//! Cafe Fausse API server
//!
//! 餐厅网站后端：公共预订 / 通讯订阅接口，以及令牌保护的管理接口。
//!
//! # 模块结构
//!
//! - [`api`] - HTTP 路由和处理器
//! - [`auth`] - 管理令牌中间件
//! - [`core`] - 配置、状态、服务器
//! - [`db`] - SQLite 连接池、迁移、仓储
//! - [`services`] - 预订、列表查询、确认通知
//! - [`utils`] - 错误类型、日志

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

pub use core::{Config, Server, ServerError, ServerState};
pub use utils::{AppError, AppResult};

/// Security log macro
///
/// 写入 `security` target，方便单独过滤审计日志。
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        )
    };
}

/// 加载 `.env` 并初始化日志
pub fn setup_environment() {
    let _ = dotenvy::dotenv();
    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner(config: &Config) {
    tracing::info!("Cafe Fausse API v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        port = config.http_port,
        database = %config.database_url,
        environment = %config.environment,
        tables_per_hour = config.max_tables_per_hour,
        "Configuration loaded"
    );
}
