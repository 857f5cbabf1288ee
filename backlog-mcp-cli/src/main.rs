use std::process;

use anyhow::{bail, Context};
use backlog_mcp::mcp::{default_registry, responses::response_text};
use backlog_mcp::{BacklogConfig, BacklogError, McpServer};
use backlog_mcp_cli::cli::{Cli, Commands};
use backlog_mcp_cli::exit_codes::{EXIT_CONFIG_ERROR, EXIT_FAILURE, EXIT_SUCCESS};
use backlog_mcp_cli::logging::init_logging;
use serde_json::{Map, Value};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    init_logging(cli.log_level());

    let exit_code = match cli.command() {
        Commands::Serve => {
            tracing::info!("Starting MCP server");
            run_server().await
        }
        Commands::Tools => run_tools(),
        Commands::Call { name, args } => run_call(name, args).await,
    };

    process::exit(exit_code);
}

fn load_config() -> Result<BacklogConfig, i32> {
    BacklogConfig::from_env().map_err(|e| {
        eprintln!("Error: {e}");
        tracing::error!("Configuration error: {}", e);
        config_exit_code(&e)
    })
}

fn config_exit_code(error: &BacklogError) -> i32 {
    if error.is_fatal() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_FAILURE
    }
}

async fn run_server() -> i32 {
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use tokio_util::sync::CancellationToken;

    let config = match load_config() {
        Ok(config) => config,
        Err(code) => return code,
    };
    let server = McpServer::new(&config);
    tracing::info!(
        tools = server.registry().len(),
        base_url = %config.base_url(),
        "MCP server initialized"
    );

    let ct = CancellationToken::new();
    let ct_clone = ct.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Shutdown signal received"),
            Err(e) => tracing::warn!("Failed to listen for ctrl+c: {}", e),
        }
        ct_clone.cancel();
    });

    let running = match serve_server(server, stdio()).await {
        Ok(running) => running,
        Err(e) => {
            tracing::error!("MCP server error: {}", e);
            return EXIT_FAILURE;
        }
    };
    tracing::info!("MCP server started successfully");

    tokio::select! {
        quit = running.waiting() => match quit {
            Ok(reason) => {
                tracing::info!("MCP server exited: {:?}", reason);
                EXIT_SUCCESS
            }
            Err(e) => {
                tracing::error!("MCP server task failed: {}", e);
                EXIT_FAILURE
            }
        },
        _ = ct.cancelled() => {
            tracing::info!("MCP server exited successfully");
            EXIT_SUCCESS
        }
    }
}

fn run_tools() -> i32 {
    let registry = default_registry();
    match serde_json::to_string_pretty(registry.list()) {
        Ok(json) => {
            println!("{json}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to serialize tool catalog: {e}");
            EXIT_FAILURE
        }
    }
}

fn parse_arguments(raw: &str) -> anyhow::Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(raw).context("--args is not valid JSON")?;
    match value {
        Value::Object(map) => Ok(map),
        other => bail!("--args must be a JSON object, got {other}"),
    }
}

async fn run_call(name: &str, raw_args: &str) -> i32 {
    let arguments = match parse_arguments(raw_args) {
        Ok(arguments) => arguments,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return EXIT_CONFIG_ERROR;
        }
    };

    let config = match load_config() {
        Ok(config) => config,
        Err(code) => return code,
    };
    let server = McpServer::new(&config);

    match server.dispatch(name, Some(arguments)).await {
        Ok(result) => {
            println!("{}", response_text(&result));
            if result.is_error == Some(true) {
                EXIT_FAILURE
            } else {
                EXIT_SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e.message);
            EXIT_FAILURE
        }
    }
}
