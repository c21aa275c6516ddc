use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use schoolhub::cli::{
    menu_items, parse_counts, parse_permissions, parse_role, render_catalog, render_menu,
    render_session, replay_session, resolve_pos_demo,
};
use schoolhub::modules::navigation::{NavCatalog, default_view, is_allowed};
use schoolhub_config::NavigationConfig;
use schoolhub_models::Identity;
use schoolhub_observability::{LogSettings, init_tracing};
use tracing::info;

#[derive(Parser)]
#[command(name = "schoolhub-cli")]
#[command(about = "SchoolHub CLI - Inspect role-based dashboard navigation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct IdentityArgs {
    /// Role tag (global_admin, school_admin, teacher, parent, provider_admin, student)
    #[arg(short = 'r', long)]
    role: String,

    /// Permission tag held by the user (repeatable), e.g. pos:use
    #[arg(short = 'p', long = "permission")]
    permissions: Vec<String>,

    /// Email of the identity, checked against NAV_POS_DEMO_IDENTITIES
    #[arg(short = 'e', long)]
    email: Option<String>,

    /// Flag the identity as a point-of-sale demo user
    #[arg(long)]
    kiosk: bool,
}

impl IdentityArgs {
    fn into_identity(self, config: &NavigationConfig) -> Result<Identity> {
        let role = parse_role(&self.role)?;
        let permissions = parse_permissions(&self.permissions)?;
        let pos_demo = resolve_pos_demo(config, self.email.as_deref(), self.kiosk);
        Ok(Identity::new(role, permissions).with_pos_demo(pos_demo))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved menu for an identity
    Menu {
        #[command(flatten)]
        identity: IdentityArgs,

        /// Badge count as view=N (repeatable)
        #[arg(short = 'c', long = "count")]
        counts: Vec<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the default landing view for an identity
    DefaultView {
        #[command(flatten)]
        identity: IdentityArgs,
    },
    /// Check whether a view is reachable (exit code 1 when denied)
    Check {
        #[command(flatten)]
        identity: IdentityArgs,

        /// View identifier to check
        #[arg(short = 'v', long)]
        view: String,
    },
    /// Replay navigation intents and print every transition
    Navigate {
        #[command(flatten)]
        identity: IdentityArgs,

        /// Viewport width in pixels
        #[arg(short = 'w', long)]
        width: Option<u32>,

        /// Views to navigate to, in order (repeatable)
        #[arg(short = 'v', long = "view")]
        views: Vec<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the built-in catalog and validate it
    Catalog {
        /// Limit output to one role
        #[arg(short = 'r', long)]
        role: Option<String>,
    },
}

fn main() -> ExitCode {
    dotenv().ok();
    init_tracing(&LogSettings::from_env());

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = NavigationConfig::try_from_env().context("invalid navigation configuration")?;

    match cli.command {
        Commands::Menu {
            identity,
            counts,
            json,
        } => {
            let identity = identity.into_identity(&config)?;
            let counts = parse_counts(&counts)?;
            let items = menu_items(&config, identity, &counts);
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                print!("{}", render_menu(&items));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::DefaultView { identity } => {
            let identity = identity.into_identity(&config)?;
            println!(
                "{}",
                default_view(identity.role, &identity.permissions, identity.pos_demo)
            );
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { identity, view } => {
            let identity = identity.into_identity(&config)?;
            if is_allowed(identity.role, &identity.permissions, &view) {
                println!("allowed");
                Ok(ExitCode::SUCCESS)
            } else {
                info!(role = %identity.role, view = %view, "View denied");
                println!("denied");
                Ok(ExitCode::from(1))
            }
        }
        Commands::Navigate {
            identity,
            width,
            views,
            json,
        } => {
            let identity = identity.into_identity(&config)?;
            let (landing, steps) = replay_session(&config, identity, width, &views);
            if json {
                let report = serde_json::json!({ "landing": landing, "steps": steps });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_session(landing, &steps));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Catalog { role } => {
            let role = role.as_deref().map(parse_role).transpose()?;
            print!("{}", render_catalog(NavCatalog::builtin(), role));
            Ok(ExitCode::SUCCESS)
        }
    }
}
