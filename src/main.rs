use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use expense_tracker::cli::{handle_budget_command, handle_transaction_command};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::display::format_category_list;
use expense_tracker::logging;
use expense_tracker::reports::DashboardSummary;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    author = "Kaylee Beyene",
    version,
    about = "Track income, expenses and monthly budgets from the terminal",
    long_about = "Expense Tracker records income and expense transactions, \
                  sets monthly budgets per category, and shows a dashboard \
                  summary of where the money went."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard summary
    #[command(alias = "dashboard")]
    Summary {
        /// Summarize as of this date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(expense_tracker::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(expense_tracker::cli::BudgetCommands),

    /// List the built-in categories
    Categories,

    /// Show current configuration and paths
    Config {
        /// Set the currency symbol
        #[arg(long)]
        currency: Option<String>,
    },
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Summary { date }) => {
            let storage = Storage::open(&paths)?;
            let today = date.unwrap_or_else(|| Local::now().date_naive());
            let summary = DashboardSummary::generate(&storage.transactions.load(), today);
            print!("{}", summary.format_terminal(&settings.currency_symbol));
        }
        Some(Commands::Transaction(cmd)) => {
            let storage = Storage::open(&paths)?;
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            let storage = Storage::open(&paths)?;
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Categories) => {
            print!("{}", format_category_list());
        }
        Some(Commands::Config { currency }) => {
            if let Some(symbol) = currency {
                settings.currency_symbol = symbol;
                settings.save(&paths)?;
                println!("Saved settings to {}", paths.settings_file().display());
                println!();
            }

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("Expense Tracker - income, expense and budget tracking");
            println!();
            println!("Run 'expense-tracker --help' for usage information.");
            println!("Run 'expense-tracker summary' to see your dashboard.");
        }
    }

    Ok(())
}
