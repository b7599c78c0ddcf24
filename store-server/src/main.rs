use store_server::{Config, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment first: .env, config, work dir, logging
    dotenv::dotenv().ok();
    let config = Config::from_env();

    let log_dir = format!("{}/logs", config.work_dir);
    std::fs::create_dir_all(&log_dir)?;
    store_server::init_logger_with_file(None, config.is_production().then_some(log_dir.as_str()));

    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "Store server starting"
    );

    Server::new(config).run().await
}
