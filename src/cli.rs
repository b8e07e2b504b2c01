// Command-line surface. `Cli::run` builds the config and the HTTP client and
// dispatches to `commands`, writing diagnostics to stdout.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use crate::api::ApiClient;
use crate::commands;
use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_TOKEN_FILE};
use crate::ui::TerminalInput;

#[derive(Parser, Debug)]
#[command(name = "h2w", version)]
#[command(about = "Command-line client for Health2Wealth", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// File the login token is kept in
    #[arg(long, global = true, env = "H2W_TOKEN_FILE", default_value = DEFAULT_TOKEN_FILE)]
    pub token_file: PathBuf,

    /// Root of the Health2Wealth API
    #[arg(long, global = true, env = "H2W_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the Health2Wealth login token
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },

    /// All the user's H2W data
    ///
    /// Current steps, points and goals for the day, week and quarter.
    Dashboard {
        /// One-line summary of day and week step counts
        #[arg(
            short,
            long,
            action = ArgAction::Set,
            num_args = 0..=1,
            default_value_t = true,
            default_missing_value = "true"
        )]
        short_stats: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Log in and store the user token
    ///
    /// Prompts for the email and/or password when they are not given.
    Login {
        /// User login email
        #[arg(short, long, default_value = "")]
        email: String,

        /// User login password
        #[arg(short, long, default_value = "")]
        password: String,
    },

    /// Verify a user token is valid
    Verify {
        /// User token, read from the token file when omitted
        #[arg(short, long, default_value = "")]
        token: String,
    },

    /// Delete the stored token
    Logout,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(self.base_url.clone(), self.token_file.clone())
    }

    pub fn run(self) -> Result<()> {
        let config = self.config();
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.command {
            Commands::Auth {
                command: AuthCommands::Login { email, password },
            } => {
                let api = ApiClient::new()?;
                let mut input = TerminalInput;
                commands::login(&api, &config, &mut input, &email, &password, &mut out)
                    .context("login failed")?;
            }
            Commands::Auth {
                command: AuthCommands::Verify { token },
            } => {
                let api = ApiClient::new()?;
                commands::verify(&api, &config, &token, &mut out)
                    .context("token verification failed")?;
            }
            Commands::Auth {
                command: AuthCommands::Logout,
            } => {
                commands::logout(&config).context("logout failed")?;
            }
            Commands::Dashboard { short_stats } => {
                let api = ApiClient::new()?;
                if short_stats {
                    commands::short_stats(&api, &config, &mut out)
                        .context("could not build short stats")?;
                } else {
                    commands::dashboard(&api, &config, &mut out)
                        .context("could not fetch dashboard")?;
                }
            }
        }
        Ok(())
    }
}
