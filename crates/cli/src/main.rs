//! Truck loading planner CLI

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use truckload_cli::{parse_request, pattern_table, render_report, summary_line, CountOverrides};
use truckload_core::solver::{Config, Solver};
use truckload_core::{LoadRequest, DEFAULT_TOLERANCE};
use truckload_loader::TruckLoader;

#[derive(Parser)]
#[command(name = "truckload")]
#[command(about = "Plans how boxes are loaded onto a 2.4 x 13.2 truck bed")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a load and print the report as JSON
    Pack(PackArgs),

    /// List the standard row patterns
    Patterns,
}

#[derive(Args)]
struct PackArgs {
    /// JSON request file, or "-" for stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Stackable American boxes
    #[arg(long, allow_negative_numbers = true)]
    american_stackable: Option<i64>,

    /// Non-stackable American boxes
    #[arg(long, allow_negative_numbers = true)]
    american_non_stackable: Option<i64>,

    /// Stackable European boxes
    #[arg(long, allow_negative_numbers = true)]
    european_stackable: Option<i64>,

    /// Non-stackable European boxes
    #[arg(long, allow_negative_numbers = true)]
    european_non_stackable: Option<i64>,

    /// Output file for the report (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the report
    #[arg(long)]
    pretty: bool,

    /// Slack used for every fit test
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,
}

impl PackArgs {
    fn overrides(&self) -> CountOverrides {
        CountOverrides {
            american_stackable: self.american_stackable,
            american_non_stackable: self.american_non_stackable,
            european_stackable: self.european_stackable,
            european_non_stackable: self.european_non_stackable,
        }
    }

    fn load_request(&self) -> anyhow::Result<LoadRequest> {
        let mut request = match &self.input {
            Some(path) => {
                let json = if path.as_os_str() == "-" {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read request from stdin")?;
                    buf
                } else {
                    std::fs::read_to_string(path)
                        .with_context(|| format!("failed to read {}", path.display()))?
                };
                parse_request(&json).context("invalid request")?
            }
            None => LoadRequest::new(),
        };

        self.overrides().apply(&mut request);
        Ok(request)
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn pack(args: PackArgs) -> anyhow::Result<()> {
    let request = args.load_request()?;
    log::debug!(
        "request: {} American, {} European, {} custom types",
        request.american.total(),
        request.european.total(),
        request.custom.len()
    );

    let loader = TruckLoader::new(Config::new().with_tolerance(args.tolerance));
    let report = loader.solve(&request).context("failed to plan load")?;

    let json = render_report(&report, args.pretty)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Report saved to: {}", path.display());
        }
        None => println!("{}", json),
    }

    eprintln!("{}", summary_line(&report));
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Pack(args) => pack(args)?,
        Commands::Patterns => print!("{}", pattern_table()),
    }

    Ok(())
}
