mod plan;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use alyvix_sensor::args::SensorArgs;
use alyvix_sensor::error::AppResult;
use plan::{build_plan, execute_plan};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;
    apply_config(&mut args, &matches)?;

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

fn parse_args() -> AppResult<(SensorArgs, ArgMatches)> {
    let matches = SensorArgs::command().get_matches_from(std::env::args_os());
    let args = SensorArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn apply_config(args: &mut SensorArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = alyvix_sensor::config::load_config(args.config.as_deref())? {
        alyvix_sensor::config::apply_config(args, matches, &config)?;
    }
    Ok(())
}

async fn run_async(args: SensorArgs) -> AppResult<()> {
    let plan = build_plan(args).await?;
    execute_plan(plan).await
}
