use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::services::{ConfirmationNotifier, LogNotifier};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc / 连接池句柄实现浅拷贝，每个请求 clone 一次。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
/// | notifier | Arc<dyn ConfirmationNotifier> | 预订确认通知 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub notifier: Arc<dyn ConfirmationNotifier>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool, notifier: Arc<dyn ConfirmationNotifier>) -> Self {
        Self {
            config,
            pool,
            notifier,
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 打开数据库并执行迁移
    /// 2. 默认通知器 (写日志)
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_url)
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        if config.uses_default_token() {
            if config.is_production() {
                tracing::warn!("ADMIN_TOKEN is the built-in default; set a private token before exposing the admin API");
            } else {
                tracing::info!("Using default admin token");
            }
        }

        Ok(Self::new(config.clone(), db.pool, Arc::new(LogNotifier)))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
