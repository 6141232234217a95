mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use massbalance_cli::output::OutputFormat;
use massbalance_cli::terminal::ColorPalette;

use commands::compute::ComputeRequest;

#[derive(Parser, Debug)]
#[command(author, version, about = "Light aircraft mass and balance calculator")]
struct Cli {
    /// JSON aircraft catalog (falls back to MASSBALANCE_CATALOG, then the built-in fleet).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable ANSI colors in text output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the aircraft available in the catalog.
    Aircraft,
    /// Compute weight, CG and envelope status for a load.
    Compute(ComputeArgs),
    /// Print the certified envelope of an aircraft.
    Envelope {
        /// Aircraft registration, e.g. F-HDLV.
        #[arg(long)]
        aircraft: String,
    },
}

#[derive(Args, Debug)]
struct ComputeArgs {
    /// Aircraft registration, e.g. F-HDLV.
    #[arg(long)]
    aircraft: String,
    /// Pilot and passenger weight in kilograms.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pilot_passenger: String,
    /// Baggage weight in kilograms.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    baggage: String,
    /// Fuel volume in liters.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    fuel: String,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let catalog = commands::load_catalog(cli.catalog.as_deref())?;
    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };

    match &cli.command {
        Command::Aircraft => commands::aircraft::handle_list_aircraft(&catalog, cli.format),
        Command::Compute(args) => {
            let request = ComputeRequest {
                registration: &args.aircraft,
                pilot_passenger: &args.pilot_passenger,
                baggage: &args.baggage,
                fuel: &args.fuel,
            };
            commands::compute::handle_compute(&catalog, &request, cli.format, &palette)
        }
        Command::Envelope { aircraft } => {
            commands::envelope::handle_envelope(&catalog, aircraft, cli.format)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
