use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "hotelforge",
    about = "HotelForge - hotel room allocation solver",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an allocation request and print the JSON response.
    ///
    /// Exits with 0 on a feasible allocation, 1 on an infeasible one and 2
    /// when the request fails.
    Solve {
        /// JSON request file (`-` for stdin)
        #[arg(short, long)]
        request: PathBuf,
        /// Solver configuration (TOML or YAML). Defaults to ./solver.toml
        /// when present.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Constraint catalog (TOML or YAML). Defaults to the built-in
        /// templates.
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Override the request's tenant id
        #[arg(short, long)]
        tenant: Option<String>,
        /// Pretty-print the response
        #[arg(long)]
        pretty: bool,
    },
    /// Print the constraints a tenant resolves to.
    Constraints {
        #[arg(short, long)]
        tenant: String,
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hotelforge=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            request,
            config,
            catalog,
            tenant,
            pretty,
        } => commands::solve::solve(&commands::solve::SolveArgs {
            request,
            config,
            catalog,
            tenant,
            pretty,
        }),
        Commands::Constraints { tenant, catalog } => {
            commands::constraints::list(&tenant, catalog.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
