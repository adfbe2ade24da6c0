//! fausse-admin - export the reservation listing as CSV
//!
//! | 环境变量 | 说明 |
//! |----------|------|
//! | FAUSSE_API_URL | API 地址 (默认 http://localhost:5000) |
//! | FAUSSE_ADMIN_TOKEN | 管理令牌 (必填) |
//! | FAUSSE_FILTER_DATE / FAUSSE_FILTER_CUSTOMER / FAUSSE_FILTER_TABLE | 过滤条件 |
//! | FAUSSE_SORT_BY / FAUSSE_SORT_ORDER | 排序 |
//! | FAUSSE_EXPORT_DIR | 输出目录 (默认当前目录) |

use std::sync::Arc;

use anyhow::Context;
use fausse_client::{
    ClientConfig, FilterField, RefreshOutcome, ReservationConsole, SortBy, SortOrder,
};
use tracing_subscriber::EnvFilter;

fn env_filter(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fausse_client=info,fausse_admin=info")),
        )
        .with_target(false)
        .init();

    let config = ClientConfig::from_env();
    let token = config
        .admin_token
        .clone()
        .context("FAUSSE_ADMIN_TOKEN must be set")?;
    let client = config.build_http_client()?;
    let console = ReservationConsole::new(Arc::new(client), token);

    for (var, field) in [
        ("FAUSSE_FILTER_DATE", FilterField::Date),
        ("FAUSSE_FILTER_CUSTOMER", FilterField::Customer),
        ("FAUSSE_FILTER_TABLE", FilterField::Table),
    ] {
        if let Some(value) = env_filter(var) {
            console.set_filter(field, value);
        }
    }

    let sort_by = SortBy::parse_lenient(env_filter("FAUSSE_SORT_BY").as_deref());
    if sort_by != console.query().sort_by {
        console.toggle_sort(sort_by);
    }
    if SortOrder::parse_lenient(env_filter("FAUSSE_SORT_ORDER").as_deref()).is_descending() {
        console.toggle_sort(sort_by);
    }

    tracing::info!(url = %config.base_url, "Loading reservations");
    if console.refresh().await == RefreshOutcome::Failed {
        let message = console.view().error.unwrap_or_default();
        anyhow::bail!("Failed to load reservations: {message}");
    }

    let view = console.view();
    tracing::info!(
        total = view.total,
        pages = console.total_pages(),
        "Reservations loaded"
    );

    let export = console.export_csv().await?;
    let dir = env_filter("FAUSSE_EXPORT_DIR").unwrap_or_else(|| ".".to_string());
    let path = export
        .write_to(&dir)
        .with_context(|| format!("Failed to write {} into {dir}", export.filename))?;

    tracing::info!(rows = export.rows, path = %path.display(), "Export written");
    Ok(())
}
