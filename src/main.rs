use anyhow::Context;
use clap::Parser;
use mesh_optimizer::core::report::write_json_line;
use mesh_optimizer::utils::logger;
use mesh_optimizer::{
    CliConfig, ErrorReport, MockOptimizer, OptimizationReport, OptimizeEngine, Result,
};

async fn run(config: &CliConfig) -> Result<OptimizationReport> {
    let input = config.mesh_input()?;
    if !config.extra.is_empty() {
        tracing::debug!("Ignoring extra arguments: {:?}", config.extra);
    }

    let simulation = config.simulation()?;
    let engine = OptimizeEngine::new(MockOptimizer::new(simulation)?);
    engine.run(&input).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_format);
    tracing::debug!("CLI config: {:?}", config);

    // stdout 只輸出一行 JSON 給呼叫端
    let stdout = std::io::stdout();
    match run(&config).await {
        Ok(report) => {
            write_json_line(stdout.lock(), &report).context("failed to write result")?;
        }
        Err(e) => {
            tracing::error!(
                "❌ Optimization failed: {} (Category: {:?})",
                e,
                e.category()
            );
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());

            write_json_line(stdout.lock(), &ErrorReport::from(&e))
                .context("failed to write error report")?;
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
