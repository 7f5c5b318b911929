use anyhow::Result;
use clap::{Parser, Subcommand};

use cravox::cli::{handle_summary_command, handle_theme_command, ThemeCommands};
use cravox::config::{paths::CravoxPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "cravox",
    version,
    about = "Terminal personal-finance dashboard",
    long_about = "Cravox shows your balance against your income with an animated \
                  dashboard, lets you add income and expenses as you go, and \
                  remembers whether you prefer a light, dark or system theme."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// Show or change the theme
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Print the balance, progress and spending list
    Summary {
        /// Total income (defaults to the seed value in settings)
        #[arg(short, long)]
        income: Option<String>,
        /// Total expenses (defaults to the seed value in settings)
        #[arg(short, long)]
        expenses: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CravoxPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if let Err(e) = cravox::logging::init(&paths, &settings) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match cli.command {
        None | Some(Commands::Tui) => {
            cravox::tui::run_tui(&paths, &settings)?;
        }
        Some(Commands::Theme(cmd)) => {
            handle_theme_command(&paths, cmd)?;
        }
        Some(Commands::Summary { income, expenses }) => {
            handle_summary_command(&settings, income, expenses)?;
        }
        Some(Commands::Config) => {
            println!("Cravox Configuration");
            println!("====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Preferences file: {}", paths.preferences_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Seed income:       {}", settings.seed_income.format_currency(&settings.currency_symbol));
            println!("  Seed expenses:     {}", settings.seed_expenses.format_currency(&settings.currency_symbol));
            println!("  Tick rate:         {}ms", settings.tick_rate_ms);
            println!("  System theme poll: {}s", settings.system_theme_poll_secs);
            println!("  Log filter:        {}", settings.log_filter);
        }
    }

    Ok(())
}
