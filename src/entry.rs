use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use stresstest::args::TesterArgs;
use stresstest::config::{apply_config, load_config};
use stresstest::domain::LoadTestConfig;
use stresstest::error::AppResult;
use stresstest::http::run_load_test;
use stresstest::report::{print_report, print_start_banner};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args(std::env::args_os())?;
    resolve_config(&mut args, &matches)?;

    crate::logger::init_logging(args.verbose, args.no_color);

    let config = match LoadTestConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{}", err);
            return Err(err);
        }
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    print_start_banner(config.target_url(), args.no_color);
    let report = runtime.block_on(run_load_test(&config))?;
    print_report(&report, args.output_format, args.no_color)
}

fn parse_args<I>(raw_args: I) -> AppResult<(TesterArgs, ArgMatches)>
where
    I: IntoIterator<Item = OsString>,
{
    let matches = TesterArgs::command().get_matches_from(raw_args);
    let args = TesterArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn resolve_config(args: &mut TesterArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(args, matches, &config)?;
    }
    Ok(())
}
