use anyhow::Result;
use clap::{Parser, Subcommand};

use money_tracker::cli::{
    handle_category_command, handle_config_command, handle_export_command, handle_report_command,
    handle_transaction_command, CategoryCommands, ConfigCommands, ExportArgs, ReportCommands,
    TransactionCommands,
};
use money_tracker::config::{Settings, TrackerPaths};
use money_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "money",
    version,
    about = "Command-line personal finance tracker",
    long_about = "Money Tracker keeps a plain-JSON record of income and expenses, \
                  with monthly and annual summaries, per-category expense analysis, \
                  and CSV report export."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Reports over a monthly or annual period
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export a period's transactions to a CSV report
    Export(ExportArgs),

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut storage, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, args)?;
        }
        Some(Commands::Config { command }) => {
            // A bare `money config` shows the current configuration
            let command = command.unwrap_or(ConfigCommands::Show);
            handle_config_command(&paths, &mut settings, command)?;
        }
        None => {
            println!("Money Tracker - command-line personal finance");
            println!();
            println!("Run 'money --help' for usage information.");
            println!("Run 'money transaction add' to record your first transaction.");
        }
    }

    Ok(())
}
