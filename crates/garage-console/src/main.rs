use anyhow::Result;
use clap::{Parser, Subcommand};
use garage_infrastructure::{ConfigService, GaragePaths, ServiceType};
use std::path::PathBuf;

mod bootstrap;
mod commands;
mod logging;

use bootstrap::ConsoleApp;
use commands::demo::DemoAction;
use commands::host::ConfirmPolicy;
use commands::prefs::{SidebarAction, ThemeAction};

#[derive(Parser)]
#[command(name = "garage-console")]
#[command(about = "Garage Console - role-based navigation and UI orchestration", long_about = None)]
struct Cli {
    /// Directory for config.toml, local storage and logs
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sidebar for a role (defaults to the signed-in user)
    Nav {
        #[arg(long)]
        role: Option<String>,
    },
    /// Check whether a role's menu offers a path
    CanAccess {
        path: String,
        #[arg(long)]
        role: Option<String>,
    },
    /// Guard a navigation and print the redirect or frame
    Guard { path: String },
    /// Store a session
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        token: String,
    },
    /// Sign out after confirmation
    Logout {
        /// Answer the confirmation with yes
        #[arg(long)]
        yes: bool,
    },
    /// Sidebar collapsed state
    Sidebar {
        #[command(subcommand)]
        action: SidebarAction,
    },
    /// Theme colors
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Exercise the toast, modal and confirm channels
    Demo {
        #[command(subcommand)]
        action: DemoAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = GaragePaths::new(cli.base_dir);
    let config = ConfigService::new(paths.clone()).load()?;
    let _log_guard = logging::init(
        &config.logging,
        &paths.get_path(ServiceType::Logs)?,
        cli.verbose,
    )?;

    let app = ConsoleApp::bootstrap(&paths, config)?;

    match cli.command {
        Commands::Nav { role } => commands::nav::show(&app.ctx, role.as_deref())?,
        Commands::CanAccess { path, role } => {
            commands::nav::can_access(&app.ctx, role.as_deref(), &path)?
        }
        Commands::Guard { path } => commands::session::guard(&app, &path).await?,
        Commands::Login { name, role, token } => {
            commands::session::login(&app, &name, role.as_deref(), &token)?
        }
        Commands::Logout { yes } => {
            commands::session::logout(&app, ConfirmPolicy::from_flag(yes)).await?
        }
        Commands::Sidebar { action } => commands::prefs::sidebar(&app.ctx, action).await?,
        Commands::Theme { action } => commands::prefs::theme(&app.ctx, action).await?,
        Commands::Demo { action } => commands::demo::run(&app.ctx, action).await?,
    }

    Ok(())
}
