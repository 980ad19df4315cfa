#[cfg(test)]
#[path = "../../tests/unit/commands/sort_test.rs"]
mod sort_test;

use super::*;

use pareto_cli::config::{Config, read_config};
use pareto_cli::{build_archive, write_archive};
use pareto_sort::prelude::InfoLogger;
use std::io::BufReader;
use std::sync::Arc;

const INPUT_ARG_NAME: &str = "input";
const OUTPUT_ARG_NAME: &str = "output";
const OBJECTIVES_ARG_NAME: &str = "objectives";
const EPSILONS_ARG_NAME: &str = "epsilons";
const DELIMITER_ARG_NAME: &str = "delimiter";
const PRINT_ONLY_OBJECTIVES_ARG_NAME: &str = "print-only-objectives";
const PRECISION_ARG_NAME: &str = "precision";
const CONFIG_ARG_NAME: &str = "config";
const PARALLEL_THRESHOLD_ARG_NAME: &str = "parallel-threshold";
const LOG_ARG_NAME: &str = "log";

pub fn get_sort_app() -> Command {
    Command::new("pareto-sort")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Merges multiple solution sets into one epsilon-box non-dominated archive")
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets input files with delimited numeric records")
                .short('i')
                .long(INPUT_ARG_NAME)
                .required(true)
                .num_args(1..),
        )
        .arg(
            Arg::new(OUTPUT_ARG_NAME)
                .help("Specifies path to file for the resulting archive, stdout is used if omitted")
                .short('o')
                .long(OUTPUT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OBJECTIVES_ARG_NAME)
                .help("Specifies objective columns (zero-indexed), all columns are used if omitted")
                .long(OBJECTIVES_ARG_NAME)
                .required(false)
                .num_args(1..)
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new(EPSILONS_ARG_NAME)
                .help("Specifies epsilons, one per objective")
                .long(EPSILONS_ARG_NAME)
                .required(false)
                .num_args(1..)
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new(DELIMITER_ARG_NAME)
                .help("Specifies a single character column delimiter, default is space")
                .long(DELIMITER_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PRINT_ONLY_OBJECTIVES_ARG_NAME)
                .help("Writes only objective columns to output")
                .long(PRINT_ONLY_OBJECTIVES_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(PRECISION_ARG_NAME)
                .help("Specifies amount of digits after the decimal point in output values, default is 8")
                .long(PRECISION_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to json config file, command line arguments take precedence")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PARALLEL_THRESHOLD_ARG_NAME)
                .help("Specifies archive size starting from which comparisons run in parallel")
                .long(PARALLEL_THRESHOLD_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether progress should be logged to stderr")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_sort(matches: &ArgMatches) -> ArchiveResult<()> {
    let config = get_config(matches)?;

    let logger: InfoLogger =
        if matches.get_flag(LOG_ARG_NAME) { Arc::new(|msg: &str| eprintln!("{msg}")) } else { Arc::new(|_: &str| {}) };
    let environment = Arc::new(config.create_environment(logger));

    let inputs = matches
        .get_many::<String>(INPUT_ARG_NAME)
        .into_iter()
        .flatten()
        .map(|path| open_file(path, "input").map(|file| (path.clone(), BufReader::new(file))))
        .collect::<ArchiveResult<Vec<_>>>()?;

    let archive = build_archive(&config, inputs, environment)?;

    let out_file = matches.get_one::<String>(OUTPUT_ARG_NAME).map(|path| create_file(path, "output")).transpose()?;
    write_archive(&config, archive.as_ref(), create_write_buffer(out_file))
}

fn get_config(matches: &ArgMatches) -> ArchiveResult<Config> {
    let file_config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    let args_config = Config {
        objectives: parse_many_values(matches, OBJECTIVES_ARG_NAME, "objective columns")?,
        epsilons: parse_many_values(matches, EPSILONS_ARG_NAME, "epsilons")?,
        delimiter: matches.get_one::<String>(DELIMITER_ARG_NAME).cloned(),
        print_only_objectives: matches.get_flag(PRINT_ONLY_OBJECTIVES_ARG_NAME).then_some(true),
        precision: parse_int_value(matches, PRECISION_ARG_NAME, "output precision")?,
        parallel_threshold: parse_int_value(matches, PARALLEL_THRESHOLD_ARG_NAME, "parallel threshold")?,
    };

    Ok(file_config.override_with(args_config))
}
