//! # Swim Convert CLI
//!
//! Command line front end for swim_core. Collects organization, gender,
//! stroke, distance, courses and time, runs the conversion, and prints the
//! converted event (or why it could not be converted).
//!
//! Every argument can also come from the environment (`SWIM_ORG`,
//! `SWIM_GENDER`, ...). Logging goes to stderr and follows `RUST_LOG`.
//!
//! ```bash
//! swim_cli convert --org usas --gender W --stroke back --distance 100 --from SCM --to LCM --time 1:00.00
//! swim_cli demo
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use swim_core::{convert_race, ConversionOutcome, ConvertError, Course, Gender, Organization, Race, Stroke};

/// Convert swim times between pool courses
#[derive(Parser, Debug)]
#[clap(name = "swim_cli")]
#[clap(about = "Convert swim times between SCY, SCM and LCM")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[clap(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[clap(long, global = true)]
    json: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert one race
    Convert(ConvertArgs),
    /// Walk a 1650 free through every organization and course
    Demo,
}

#[derive(clap::Args, Debug)]
struct ConvertArgs {
    /// Organization: USAS, NFHS or NCAA
    #[clap(long, env = "SWIM_ORG")]
    org: Organization,

    /// Gender: M or W
    #[clap(long, env = "SWIM_GENDER")]
    gender: Gender,

    /// Stroke: free, back, breast, fly or IM
    #[clap(long, env = "SWIM_STROKE")]
    stroke: Stroke,

    /// Race distance
    #[clap(long, env = "SWIM_DISTANCE")]
    distance: u32,

    /// Course the time was swum in: SCY, SCM or LCM
    #[clap(long, env = "SWIM_FROM")]
    from: Course,

    /// Course to convert to
    #[clap(long, env = "SWIM_TO")]
    to: Course,

    /// Race time, e.g. 18:14.40 or 59.99
    #[clap(long, env = "SWIM_TIME")]
    time: String,
}

/// One step of the demo chain
#[derive(Debug, Serialize)]
struct DemoStep {
    organization: Organization,
    target: Course,
    outcome: Result<Race, ConvertError>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Convert(args) => run_convert(args, cli.json),
        Command::Demo => run_demo(cli.json),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_convert(args: ConvertArgs, json: bool) -> ExitCode {
    let race = Race::new(args.gender, args.from, args.stroke, args.distance).with_time(args.time);
    debug!(race = %race, organization = %args.org, target = %args.to, "converting");

    match convert_race(args.org, &race, args.to) {
        Ok(outcome) => {
            if json {
                print_json(&outcome);
            } else {
                print_outcome(&outcome);
            }
            if outcome.result_is_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            report_error(&race, &e, json);
            ExitCode::FAILURE
        }
    }
}

fn print_outcome(outcome: &ConversionOutcome) {
    println!("═══════════════════════════════════════");
    println!("  {} CONVERSION", outcome.organization);
    println!("═══════════════════════════════════════");
    println!();
    println!("  From:     {}", outcome.source.result_value());
    println!("  To:       {}", outcome.result.result_value());
    println!();
    println!("  Stroke:   {}", outcome.result.stroke);
    println!("  Distance: {}", outcome.result.distance);
    println!("  Time:     {}", outcome.result.time);
    if !outcome.result_is_valid {
        println!();
        println!("  [WARN] {} is not a valid event", outcome.result.event_description());
    }
}

fn report_error(race: &Race, e: &ConvertError, json: bool) {
    error!(race = %race, code = e.error_code(), "conversion failed");
    eprintln!("Error: {}", e);
    if json {
        if let Ok(text) = serde_json::to_string_pretty(e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", text);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Error: could not serialize output: {}", e),
    }
}

/// SCY mile → NFHS SCM → back, then USAS SCM → LCM → SCY.
///
/// A failed step leaves the chain on the last good race, so the NFHS
/// steps (which have no mile factor) fall through to the USAS ones.
fn run_demo(json: bool) -> ExitCode {
    let plan = [
        (Organization::Nfhs, Course::Scm),
        (Organization::Nfhs, Course::Scy),
        (Organization::Usas, Course::Scm),
        (Organization::Usas, Course::Lcm),
        (Organization::Usas, Course::Scy),
    ];

    let start = Race::new(Gender::Mens, Course::Scy, Stroke::Freestyle, 1650).with_time("18:14.40");
    let mut current = start.clone();
    let mut steps = Vec::with_capacity(plan.len());
    for (organization, target) in plan {
        let outcome = current.convert(organization, target);
        if let Ok(next) = &outcome {
            current = next.clone();
        }
        steps.push(DemoStep {
            organization,
            target,
            outcome,
        });
    }

    if json {
        print_json(&steps);
        return ExitCode::SUCCESS;
    }

    println!("Start: {}", start.result_value());
    for step in &steps {
        match &step.outcome {
            Ok(race) => println!("  [OK]   {} → {}: {}", step.organization, step.target, race.result_value()),
            Err(e) => println!("  [FAIL] {} → {}: {}", step.organization, step.target, e),
        }
    }
    ExitCode::SUCCESS
}
