use std::io::{self, Read, Write};
use std::path::Path;
use std::{fs, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use txsched_cli::report::{
    analysis_json, describe_parse_error, describe_schedule, parse_error_json, render_analysis,
    schedule_lines,
};
use txsched_cli::{AnalyzeArgs, App, Command, Error, GenerateArgs, ParseArgs};
use txsched_parser::parse_schedule;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let app = App::parse();
    let outcome = match &app.command {
        Command::Parse(args) => parse(args),
        Command::Analyze(args) => analyze(args),
        Command::Generate(args) => generate(args),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String, Error> {
    let mut input = String::new();
    match path {
        Some(path) => input = fs::read_to_string(path)?,
        None => {
            io::stdin().read_to_string(&mut input)?;
        }
    }
    Ok(input)
}

/// Returns `Ok(false)` if some line failed to parse.
fn parse(args: &ParseArgs) -> Result<bool, Error> {
    let input = read_input(args.input.as_deref())?;
    let mut out = io::stdout().lock();
    let mut all_parsed = true;

    for (_, text) in schedule_lines(&input) {
        match parse_schedule(text) {
            Ok(schedule) => writeln!(out, "{}", describe_schedule(&schedule))?,
            Err(e) => {
                all_parsed = false;
                writeln!(out, "{}", describe_parse_error(text, &e))?;
            }
        }
    }
    Ok(all_parsed)
}

/// Returns `Ok(false)` if some line failed to parse. Failed properties are
/// results, not failures.
fn analyze(args: &AnalyzeArgs) -> Result<bool, Error> {
    let input = read_input(args.input.as_deref())?;
    let properties = args.properties();
    let mut out = io::stdout().lock();
    let mut all_parsed = true;

    for (line, text) in schedule_lines(&input) {
        match parse_schedule(text) {
            Ok(schedule) => {
                if args.json {
                    let report = analysis_json(line, &schedule, &properties, args.verbose);
                    writeln!(out, "{}", serde_json::to_string(&report)?)?;
                } else {
                    writeln!(
                        out,
                        "{}",
                        render_analysis(&schedule, &properties, args.verbose)
                    )?;
                }
            }
            Err(e) => {
                all_parsed = false;
                if args.json {
                    writeln!(out, "{}", serde_json::to_string(&parse_error_json(line, &e))?)?;
                } else {
                    writeln!(out, "{}", describe_parse_error(text, &e))?;
                }
            }
        }
    }
    Ok(all_parsed)
}

fn generate(args: &GenerateArgs) -> Result<bool, Error> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let schedules = txsched_testgen::generator::generate_mult_schedules(
        args.count,
        args.n_transaction,
        args.n_resource,
        seed,
    );

    let mut out = io::stdout().lock();
    for generated in &schedules {
        if args.json {
            writeln!(out, "{}", serde_json::to_string(generated)?)?;
        } else {
            writeln!(out, "{}", generated.get_data())?;
        }
    }
    Ok(true)
}
