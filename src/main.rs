use clap::{Parser, Subcommand};
use owo_colors::{OwoColorize, Stream};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use resolv::AppContext;
use resolv::commands::{
    cmd_config_set, cmd_config_show, cmd_dashboard, cmd_landing, cmd_login, cmd_logout, cmd_open,
    cmd_signup, cmd_tickets, cmd_tickets_ls,
};
use resolv::error::Result;

#[derive(Parser)]
#[command(name = "resolv")]
#[command(about = "Get it done. Resolve issues, fast.")]
#[command(version)]
struct Cli {
    /// Without a subcommand the landing screen is shown
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with the test credential
    Login {
        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        password: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a signup form (no account is created)
    Signup {
        /// Full name
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[arg(long = "confirm-password")]
        confirm_password: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// End the current session
    Logout {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show summary statistics
    #[command(visible_alias = "dash")]
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage tickets in an interactive terminal UI
    #[command(visible_alias = "t")]
    Tickets {
        #[command(subcommand)]
        action: Option<TicketsAction>,
    },

    /// Open a route path (e.g. /dashboard, /tickets/manage)
    Open {
        path: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum TicketsAction {
    /// Print the tickets the manager starts with
    Ls {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value (id_prefix, load_seed, color)
    Set {
        key: String,
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("RESOLV_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

async fn run(command: Option<Commands>) -> Result<()> {
    // Config commands must work even when the rest of the context is unreadable
    if let Some(Commands::Config { action }) = command {
        return match action {
            ConfigAction::Show { json } => cmd_config_show(json),
            ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
        };
    }

    let mut ctx = AppContext::load()?;
    if !ctx.config.color {
        owo_colors::set_override(false);
    }

    match command {
        None => cmd_landing(&ctx, false),
        Some(Commands::Login {
            email,
            password,
            json,
        }) => cmd_login(&mut ctx, email, password, json),
        Some(Commands::Signup {
            name,
            email,
            password,
            confirm_password,
            json,
        }) => cmd_signup(name, email, password, confirm_password, json),
        Some(Commands::Logout { json }) => cmd_logout(&mut ctx, json),
        Some(Commands::Dashboard { json }) => cmd_dashboard(&ctx, json),
        Some(Commands::Tickets { action }) => match action {
            None => cmd_tickets(&ctx).await,
            Some(TicketsAction::Ls { json }) => cmd_tickets_ls(&ctx, json),
        },
        Some(Commands::Open { path, json }) => cmd_open(&mut ctx, &path, json).await,
        // Handled before the context is loaded
        Some(Commands::Config { .. }) => Ok(()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format!("error: {e}");
            eprintln!(
                "{}",
                message.if_supports_color(Stream::Stderr, |t| t.red())
            );
            ExitCode::FAILURE
        }
    }
}
