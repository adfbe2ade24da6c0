/// 默认管理令牌 (与前端约定的共享密钥)
pub const DEFAULT_ADMIN_TOKEN: &str = "secret123";

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | DATABASE_URL | sqlite:cafe.db | SQLite 数据库 |
/// | ADMIN_TOKEN | secret123 | 管理接口共享密钥 |
/// | MAX_TABLES_PER_HOUR | 10 | 每小时可预订桌数 |
/// | MAX_PARTY_SIZE | 12 | 单次预订最大人数 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录 (存在时写入滚动日志) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 ADMIN_TOKEN=change-me cargo run -p fausse-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SQLite 连接串
    pub database_url: String,
    /// 管理接口令牌 (query 参数 `token`)
    pub admin_token: String,
    /// 每个小时时段的桌数 (桌号 1..=N)
    pub max_tables_per_hour: u32,
    /// 单次预订最大人数
    pub max_party_size: i64,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: env_or("HTTP_PORT", 5000),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:cafe.db".into()),
            admin_token: std::env::var("ADMIN_TOKEN")
                .unwrap_or_else(|_| DEFAULT_ADMIN_TOKEN.into()),
            max_tables_per_hour: env_or("MAX_TABLES_PER_HOUR", 10),
            max_party_size: env_or("MAX_PARTY_SIZE", shared::validation::MAX_PARTY_SIZE),
            request_timeout_ms: env_or("REQUEST_TIMEOUT_MS", 30000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// 测试用配置: 内存数据库，固定令牌
    pub fn for_tests() -> Self {
        Self {
            http_port: 0,
            database_url: "sqlite::memory:".into(),
            admin_token: "test-token".into(),
            max_tables_per_hour: 10,
            max_party_size: shared::validation::MAX_PARTY_SIZE,
            request_timeout_ms: 30000,
            environment: "test".into(),
            log_level: "debug".into(),
            log_dir: None,
        }
    }

    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    pub fn with_admin_token(mut self, token: impl Into<String>) -> Self {
        self.admin_token = token.into();
        self
    }

    pub fn with_max_tables_per_hour(mut self, tables: u32) -> Self {
        self.max_tables_per_hour = tables;
        self
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 仍在使用默认令牌
    pub fn uses_default_token(&self) -> bool {
        self.admin_token == DEFAULT_ADMIN_TOKEN
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
