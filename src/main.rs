use calculator::utils::error::CalcError;
use calculator::utils::logger;
use calculator::{app, CliConfig};
use clap::Parser;

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.json_logs);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = app::run(&cli, std::io::stdout().lock()) {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);
        if let Some(calc_error) = e.downcast_ref::<CalcError>() {
            eprintln!("💡 Suggestion: {}", calc_error.recovery_suggestion());
        }
        std::process::exit(app::exit_code(&e));
    }
}
