use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod sort;

use pareto_sort::prelude::{ArchiveError, ArchiveResult};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::str::FromStr;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> ArchiveResult<File> {
    File::open(path).map_err(|err| {
        std::io::Error::new(err.kind(), format!("cannot open {description} file '{path}': '{err}'")).into()
    })
}

fn create_file(path: &str, description: &str) -> ArchiveResult<File> {
    File::create(path).map_err(|err| {
        std::io::Error::new(err.kind(), format!("cannot create {description} file '{path}': '{err}'")).into()
    })
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> ArchiveResult<Option<T>> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| {
                    ArchiveError::configuration(format!("cannot get integer value, error: '{err}': '{arg_desc}'"))
                })
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_many_values<T>(matches: &ArgMatches, arg_name: &str, arg_desc: &str) -> ArchiveResult<Option<Vec<T>>>
where
    T: FromStr,
    T::Err: Display,
{
    matches
        .get_many::<String>(arg_name)
        .map(|args| {
            args.map(|arg| {
                arg.parse::<T>().map_err(|err| {
                    ArchiveError::configuration(format!("cannot parse value '{arg}', error: '{err}': '{arg_desc}'"))
                })
            })
            .collect::<ArchiveResult<Vec<_>>>()
            .map(Some)
        })
        .unwrap_or(Ok(None))
}
