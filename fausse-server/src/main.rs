use fausse_server::db::{DbService, seed};
use fausse_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_environment();

    let config = Config::from_env();
    print_banner(&config);

    // `fausse-server seed` 写入演示数据后退出
    if std::env::args().nth(1).as_deref() == Some("seed") {
        let db = DbService::new(&config.database_url).await?;
        let today = chrono::Local::now().date_naive();
        let report = seed::seed(&db.pool, today, config.max_tables_per_hour).await?;
        tracing::info!(
            customers = report.customers,
            reservations = report.reservations,
            "Seeding finished"
        );
        return Ok(());
    }

    let state = ServerState::initialize(&config).await?;
    Server::with_state(config, state).run().await?;

    Ok(())
}
