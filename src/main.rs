use apkpipe::cli::{normalize_legacy_flags, CliArgs};
use apkpipe::config::resolve_project_dir;
use apkpipe::util::{init_logging, resolve_level, LoggingConfig};
use apkpipe::{ApkpipeConfig, LoggingHandler, PipelineController, ProcessRunner, NAME, VERSION};

use clap::Parser;
use std::env;
use std::process;
use std::sync::Arc;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    let args = match CliArgs::try_parse_from(normalize_legacy_flags(env::args_os())) {
        Ok(args) => args,
        Err(e) => {
            // --help and --version come through here too and are not failures
            let exit_code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(exit_code);
        }
    };

    let config = ApkpipeConfig::default();
    let level = resolve_level(
        args.log_level.as_deref(),
        args.verbose,
        args.quiet,
        &config.log_level,
    );
    init_logging(if config.log_json {
        LoggingConfig {
            level,
            ..LoggingConfig::ci()
        }
    } else {
        LoggingConfig::with_level(level)
    });

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_run(&args, config).await;
    process::exit(exit_code);
}

async fn handle_run(args: &CliArgs, config: ApkpipeConfig) -> i32 {
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return 1;
    }
    debug!("{}", config);

    let project_dir = match resolve_project_dir(args.project_dir.as_deref()) {
        Ok(path) => path,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };
    debug!("Project directory: {}", project_dir.display());

    let controller = PipelineController::new(&project_dir, config, Arc::new(ProcessRunner))
        .with_progress(Arc::new(LoggingHandler));

    let report = controller.execute(args.run_config()).await;

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to format report: {}", e);
                return 1;
            }
        }
    }

    // Failures were already reported by the progress handler
    if report.result.success {
        info!("{}", report.result.message);
    }

    report.exit_code()
}
