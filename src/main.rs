use anyhow::Context;
use clap::Parser;
use meter_graphql::config::cli::Command;
use meter_graphql::core::{query, server};
use meter_graphql::utils::logger;
use meter_graphql::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration validation failed: {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(
        cli.common.verbose,
        config.json_logs,
        config.log_level.as_deref(),
    );
    if cli.common.verbose {
        tracing::debug!("Effective config: {:?}", config);
    }

    match &cli.command {
        Some(Command::Query(args)) => {
            let output = query::run_query(&config, &args.operation, args.id.as_deref())
                .await
                .with_context(|| format!("query {} failed", args.operation))?;
            println!("{}", output);
            Ok(())
        }
        Some(Command::Serve) | None => {
            tracing::info!("Starting meter-graphql");
            server::run(config).await.context("server failed")
        }
    }
}
