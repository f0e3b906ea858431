use wellness_core::config::Config;
use wellness_mcp::{WellnessMcpHandler, telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_level = telemetry::log_level();
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(telemetry::env_filter(&log_level))
        .init();
    tracing::info!("wellness_mcp: log filter: {}", log_level);

    let metrics = telemetry::install_metrics()?;

    let config = Config::from_env()?;
    tracing::info!(
        "wellness_mcp: coach delay {:?} (+ up to {:?}), water goal {} glasses",
        config.coach_delay,
        config.coach_jitter,
        config.water_goal
    );

    let handler = WellnessMcpHandler::new(&config);
    tracing::info!(
        "wellness_mcp: registered {} tools and {} prompts",
        handler.tool_count(),
        handler.prompt_count()
    );

    tracing::info!("wellness_mcp: starting stdio MCP server...");

    use rmcp::serve_server;
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let server = serve_server(handler, transport).await?;

    tracing::info!("wellness_mcp: service initialized as server");

    server.waiting().await?;

    tracing::info!("wellness_mcp: tool metrics at shutdown\n{}", metrics.render());

    Ok(())
}
