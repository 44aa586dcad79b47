use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use uuid::Uuid;

use skyfare_lib::{
    find_cheapest_route, Flight, FlightId, FlightLedger, RouteSummary, SqliteLedger,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "skyfare flight ledger and route utilities")]
struct Cli {
    /// Path to the ledger database file.
    #[arg(long, default_value = "flights.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a new flight in the ledger.
    Add {
        /// Flight name, e.g. SF100.
        #[arg(long)]
        name: String,
        /// Origin airport code.
        #[arg(long)]
        origin: String,
        /// Destination airport code.
        #[arg(long)]
        destination: String,
        /// Flight cost (non-negative).
        #[arg(long)]
        cost: f64,
        /// Supply a flight id instead of generating one.
        #[arg(long)]
        id: Option<Uuid>,
    },
    /// List flights in the ledger.
    List {
        /// Include soft-deleted flights.
        #[arg(long)]
        all: bool,
    },
    /// Soft-delete a flight; the record is kept but leaves the route graph.
    Delete { id: Uuid },
    /// Restore a previously soft-deleted flight.
    Restore { id: Uuid },
    /// Find the cheapest route between two airports.
    Route {
        /// Origin airport code.
        #[arg(long = "from")]
        from: String,
        /// Destination airport code.
        #[arg(long = "to")]
        to: String,
        /// Output format.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Add {
            name,
            origin,
            destination,
            cost,
            id,
        } => handle_add(&cli.db, id, &name, &origin, &destination, cost),
        Command::List { all } => handle_list(&cli.db, all),
        Command::Delete { id } => handle_delete(&cli.db, id),
        Command::Restore { id } => handle_restore(&cli.db, id),
        Command::Route { from, to, format } => handle_route(&cli.db, &from, &to, format),
    }
}

fn handle_add(
    db: &Path,
    id: Option<FlightId>,
    name: &str,
    origin: &str,
    destination: &str,
    cost: f64,
) -> Result<()> {
    let ledger = open_ledger(db)?;
    let flight = Flight::new(id, name, origin, destination, cost)?;
    ledger
        .create(&flight)
        .with_context(|| format!("failed to record flight {name}"))?;
    println!("Added flight {} ({})", flight.flight_name, flight.id);
    Ok(())
}

fn handle_list(db: &Path, all: bool) -> Result<()> {
    let ledger = open_ledger(db)?;
    let flights = if all {
        ledger.all_flights()
    } else {
        ledger.active_flights()
    }
    .context("failed to list flights")?;

    if flights.is_empty() {
        println!("No flights recorded.");
        return Ok(());
    }

    for flight in flights {
        let marker = if flight.is_active() { "" } else { " [deleted]" };
        println!(
            "{} {} {} -> {} ({:.2}){}",
            flight.id, flight.flight_name, flight.origin, flight.destination, flight.cost, marker
        );
    }
    Ok(())
}

fn handle_delete(db: &Path, id: FlightId) -> Result<()> {
    let ledger = open_ledger(db)?;
    ledger.soft_delete(id)?;
    println!("Soft-deleted flight {id}");
    Ok(())
}

fn handle_restore(db: &Path, id: FlightId) -> Result<()> {
    let ledger = open_ledger(db)?;
    ledger.restore(id)?;
    println!("Restored flight {id}");
    Ok(())
}

fn handle_route(db: &Path, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let ledger = open_ledger(db)?;
    let plan = find_cheapest_route(&ledger, from, to)?;
    let summary = RouteSummary::from_plan(&plan);

    match format {
        OutputFormat::Text => print!("{}", summary.render_plain_text()),
        OutputFormat::Json => println!("{}", summary.render_json()?),
    }
    Ok(())
}

fn open_ledger(db: &Path) -> Result<SqliteLedger> {
    SqliteLedger::open(db).with_context(|| format!("failed to open ledger at {}", db.display()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
