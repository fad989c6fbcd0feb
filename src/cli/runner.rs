use std::io::IsTerminal;

use clap::CommandFactory;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use roman::{ConversionParams, OutputTarget, convert, convert_range, emit};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default = if verbose { "roman=debug" } else { "roman=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries conversion output, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();
}

fn run_range(
    start: i64,
    end: i64,
    params: &ConversionParams,
    target: &OutputTarget,
) -> Result<(), AppError> {
    let lines = convert_range(start, end, params)?;
    if let OutputTarget::File { path, .. } = target {
        info!("Writing Arabic range {} to {} to file {:?}", start, end, path);
    }
    emit(lines, target)?;
    Ok(())
}

fn run_single(
    value: &str,
    params: &ConversionParams,
    target: &OutputTarget,
) -> Result<(), AppError> {
    let conversion = convert(value, params)?;
    debug!("Converted {:?}: {:?}", value, conversion);
    emit([conversion.render(params)], target)?;
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.log);

    let params = args.conversion_params();
    let target = args.output_target();

    if args.range {
        return run_range(args.start, args.end, &params, &target);
    }

    match args.value.as_deref() {
        Some(value) if !value.is_empty() => run_single(value, &params, &target),
        _ => {
            CliArgs::command().print_long_help()?;
            Ok(())
        }
    }
}
