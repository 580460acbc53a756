use crate::demo::{run_catalog_list, run_demo, CatalogListArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use scholarbot::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ScholarBot Pro",
    about = "Match students to scholarships and draft application letters from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the scholarship catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Run an offline end-to-end demo: sample profile, ranking, reasons
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List the catalog with deadline status, optionally filtered
    List(CatalogListArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog {
            command: CatalogCommand::List(args),
        } => run_catalog_list(args),
        Command::Demo(args) => run_demo(args),
    }
}
