use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vida_core::constants::{DEFAULT_AUTH_DELAY_MS, DEFAULT_SESSION_DIR};
use vida_core::{
    derive, logout, mount, Authenticator, CoreConfig, CredentialDirectory, FileStore, Mount,
    VidaError,
};

#[derive(Parser)]
#[command(name = "vida")]
#[command(about = "VidaPlus session and navigation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with a directory login key and the shared test secret
    Login {
        /// Email or national ID
        login_key: String,
        /// Password (at least 6 characters)
        secret: String,
    },
    /// Show the signed-in identity
    Whoami,
    /// Show the navigation menu for the signed-in identity
    Nav,
    /// Clear the session record
    Logout,
    /// List the mock credential directory
    Directory,
}

/// Command-line surface for the VidaPlus session core.
///
/// Stands in for the web front end: the session record it writes is the
/// same `currentUser` JSON the browser side stores, kept under a local
/// directory instead of localStorage.
///
/// # Environment Variables
/// - `VIDA_SESSION_DIR`: Directory for the session record (default: "session_data")
/// - `VIDA_AUTH_DELAY_MS`: Simulated login round trip in milliseconds (default: 2000)
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vida=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config_from_env()?;
    let store = FileStore::new(config.session_dir());
    tracing::debug!(
        session_dir = %config.session_dir().display(),
        "session store ready"
    );

    let cli = Cli::parse();
    match cli.command {
        Commands::Login { login_key, secret } => {
            let auth = Authenticator::new(
                &store,
                CredentialDirectory::default(),
                config.auth_delay(),
            );
            match auth.authenticate(&login_key, &secret).await {
                Ok(identity) => {
                    let navigation = derive(&identity)?;
                    println!("Signed in as {} ({})", identity.display_name, identity.role);
                    println!("Home: {}", navigation.home_path);
                }
                Err(VidaError::InvalidCredentials) => {
                    eprintln!("Invalid credentials. Check the login and password and try again.");
                    std::process::exit(1);
                }
                Err(VidaError::InvalidInput(message)) => {
                    eprintln!("{message}");
                    std::process::exit(1);
                }
                Err(err) => return Err(err.into()),
            }
        }
        Commands::Whoami => match mount(&store)? {
            Mount::Authenticated { identity, .. } => {
                println!("{} ({})", identity.display_name, identity.role);
                println!("Avatar: {}", identity.avatar_url);
            }
            _ => println!("Not signed in."),
        },
        Commands::Nav => match mount(&store)? {
            Mount::Authenticated { navigation, .. } => {
                for entry in navigation.entries {
                    let marker = if entry.path == navigation.home_path {
                        " (home)"
                    } else {
                        ""
                    };
                    println!("{:<28} {}{}", entry.path, entry.label, marker);
                }
            }
            _ => println!("Not signed in."),
        },
        Commands::Logout => {
            let redirect = logout(&store)?;
            println!("Signed out. Redirect: {redirect}");
        }
        Commands::Directory => {
            let directory = CredentialDirectory::default();
            println!("Test users (password: {}):", directory.shared_secret());
            for entry in directory.entries() {
                println!("  {:<22} {:<14} {}", entry.login_key, entry.role, entry.display_name);
            }
        }
    }

    Ok(())
}

fn config_from_env() -> anyhow::Result<CoreConfig> {
    let session_dir =
        std::env::var("VIDA_SESSION_DIR").unwrap_or_else(|_| DEFAULT_SESSION_DIR.into());
    let delay_ms = match std::env::var("VIDA_AUTH_DELAY_MS") {
        Ok(value) => value.parse()?,
        Err(_) => DEFAULT_AUTH_DELAY_MS,
    };

    Ok(CoreConfig::new(
        PathBuf::from(session_dir),
        Duration::from_millis(delay_ms),
    )?)
}
