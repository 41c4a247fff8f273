use anyhow::{Context, Result};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use twofy::config::{Config, RunConfig};
use twofy::convert;
use twofy::output::OutputFormat;

/// twofy - convert all the things!
#[derive(Parser)]
#[command(name = "twofy")]
#[command(version)]
#[command(about = "Convert YAML to text or JSON", long_about = None)]
struct Cli {
    /// Run in debug mode
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct IoArgs {
    /// The input file (or stdin otherwise)
    #[arg(long, visible_alias = "in", value_name = "PATH")]
    input: Option<PathBuf>,

    /// The output file (or stdout otherwise)
    #[arg(long, visible_alias = "out", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Path query selecting part of the document, e.g. '{.spec.containers[*].name}'
    #[arg(long, visible_alias = "jp", value_name = "EXPR")]
    jsonpath: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert YAML to a text representation
    #[command(name = "yaml2txt", visible_alias = "y2t")]
    Yaml2Txt {
        #[command(flatten)]
        io: IoArgs,
    },

    /// Convert YAML to JSON
    #[command(name = "yaml2json", visible_alias = "y2j")]
    Yaml2Json {
        #[command(flatten)]
        io: IoArgs,

        /// Indent the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Yaml2Txt { .. } => "yaml2txt",
            Commands::Yaml2Json { .. } => "yaml2json",
        }
    }

    /// Builds the immutable settings for this run.
    fn into_run_config(self, config: &Config) -> RunConfig {
        let (io, format, pretty) = match self {
            Commands::Yaml2Txt { io } => (io, OutputFormat::Text, false),
            Commands::Yaml2Json { io, pretty } => (io, OutputFormat::Json, pretty || config.pretty),
        };

        let mut run = RunConfig::new(format)
            .with_query(io.jsonpath.unwrap_or_default())
            .with_pretty(pretty);
        if let Some(input) = io.input {
            run = run.with_input(input);
        }
        if let Some(output) = io.output {
            run = run.with_output(output);
        }
        run
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "twofy=debug" } else { "twofy=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Reports a command-line parsing failure the way users expect from twofy.
fn report_usage_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
        ErrorKind::InvalidSubcommand => {
            if let Some(ContextValue::String(name)) = err.get(ContextKind::InvalidSubcommand) {
                eprintln!("There is no {:?} command.", name);
            } else {
                eprint!("{}", err.render());
            }
            ExitCode::from(1)
        }
        _ => {
            eprint!("WRONG: {}", err.render());
            ExitCode::from(2)
        }
    }
}

fn execute(command: Commands, config: &Config) -> Result<()> {
    let name = command.name();
    let run = command.into_run_config(config);
    tracing::debug!(command = name, ?run, "starting conversion");

    convert::run(&run).with_context(|| format!("{} failed", name))
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_usage_error(err),
    };

    // The config decides the log level, so its own warnings go through a
    // temporary stderr subscriber.
    let bootstrap = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, Config::load);
    init_logging(cli.debug || config.debug);

    match execute(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            tracing::debug!("exiting with 1");
            ExitCode::from(1)
        }
    }
}
