//! Mass Log
//!
//! Command-line front end for the mass tracking API.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use masslog::build_info::BuildInfo;
use masslog::models::{Credentials, ImportOutcome, Mass, NewMass};
use masslog::units::{convert_to_kg, NumberLocale};
use masslog::{ApiClient, ApiResult, ClientConfig, MassUnit, SessionState};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// API root, e.g. https://mass.example.com/api
    #[arg(long, env = "MASSLOG_BASE_URL")]
    base_url: Option<String>,

    /// Display and input unit (kg or lbs)
    #[arg(long, env = "MASSLOG_UNIT", default_value = "kg")]
    unit: MassUnit,

    /// Number locale for display (e.g. en-US, de-DE); defaults to LANG
    #[arg(long, env = "MASSLOG_LOCALE")]
    locale: Option<NumberLocale>,

    /// Do not treat error statuses on single-mass requests as failures
    #[arg(long)]
    lenient_status: bool,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(flatten)]
    login: LoginArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct LoginArgs {
    #[arg(long, env = "MASSLOG_USERNAME")]
    username: Option<String>,

    #[arg(long, env = "MASSLOG_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all masses
    List,
    /// Record a new mass, given in the display unit
    Add {
        value: f64,
        /// Measurement time; naive values are local time
        #[arg(long)]
        at: Option<String>,
    },
    /// Show one mass
    Show { id: i64 },
    /// Change a mass
    Update {
        id: i64,
        value: f64,
        #[arg(long)]
        at: Option<String>,
    },
    /// Delete a mass
    Delete { id: i64 },
    /// Create an account with the given credentials
    Signup,
    /// Show the logged-in user
    Whoami,
    /// Import user data from a JSON file
    Import { file: PathBuf },
    /// Print all masses as importable JSON
    Export,
    /// Print build information
    Info,
}

impl Command {
    fn needs_login(&self) -> bool {
        !matches!(self, Command::Signup | Command::Info)
    }
}

impl LoginArgs {
    fn credentials(&self) -> Result<Credentials, Box<dyn std::error::Error>> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Ok(Credentials::new(username, password)),
            _ => Err("username and password are required (--username/--password or MASSLOG_USERNAME/MASSLOG_PASSWORD)".into()),
        }
    }
}

fn build_config(cli: &Cli) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config.base_url = masslog::config::parse_base_url(base_url)?;
    }
    if cli.lenient_status {
        config.lenient_status = true;
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout = Some(Duration::from_secs(secs));
    }
    Ok(config)
}

fn print_mass(mass: &Mass, unit: MassUnit, locale: &NumberLocale) {
    println!(
        "#{:<6} {}  {}",
        mass.id,
        mass.measurement_timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
        mass.format_value(unit, locale)
    );
}

fn new_mass(value: f64, unit: MassUnit, at: Option<String>) -> NewMass {
    let payload = NewMass::new(convert_to_kg(value, unit));
    match at {
        Some(ts) => payload.with_measurement_timestamp(ts),
        None => payload,
    }
}

async fn run(cli: Cli, client: &ApiClient) -> CliResult {
    let unit = client.session().unit();
    let locale = cli.locale.unwrap_or_else(NumberLocale::from_env);

    match cli.command {
        Command::List => {
            let masses = client.list_masses().await?;
            if masses.is_empty() {
                println!("No masses recorded.");
            }
            for mass in &masses {
                print_mass(mass, unit, &locale);
            }
        }
        Command::Add { value, at } => {
            let mass = client.create_mass(&new_mass(value, unit, at)).await?;
            print_mass(&mass, unit, &locale);
        }
        Command::Show { id } => {
            let mass = client.get_mass(id).await?;
            print_mass(&mass, unit, &locale);
        }
        Command::Update { id, value, at } => {
            client.update_mass(id, &new_mass(value, unit, at)).await?;
            println!("Updated mass #{}", id);
        }
        Command::Delete { id } => {
            client.delete_mass(id).await?;
            println!("Deleted mass #{}", id);
        }
        Command::Signup => {
            client.signup(&cli.login.credentials()?).await?;
            println!("Account created.");
        }
        Command::Whoami => match client.load_user().await?.user {
            Some(user) => println!("{} (id {}, since {})", user.username, user.id, user.created_at.format("%Y-%m-%d")),
            None => println!("Not logged in."),
        },
        Command::Import { file } => {
            let text = std::fs::read_to_string(&file)?;
            if let ImportOutcome::Rejected { status, .. } = client.import_user_data(&text).await? {
                return Err(format!("import rejected with status {}", status).into());
            }
        }
        Command::Export => {
            println!("{}", client.export_user_data().await?.to_pretty_string());
        }
        Command::Info => {
            let info = BuildInfo::current();
            println!("{} {} ({})", info.name, info.version, info.build_timestamp);
            println!("API: {}", client.url(""));
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> CliResult {
    // Log to stderr so command output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("masslog=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let session = SessionState::with_unit(cli.unit);
    let client = ApiClient::new(&config, session)?;

    let needs_login = cli.command.needs_login();
    if needs_login {
        client.login(&cli.login.credentials()?).await?;
    }

    let result = run(cli, &client).await;

    if needs_login {
        return finish(result, client.logout().await);
    }

    result
}

/// Combine the command's result with the closing logout; the command's error wins
fn finish(result: CliResult, logout: ApiResult<()>) -> CliResult {
    match (result, logout) {
        (Ok(()), Err(e)) => Err(e.into()),
        (result, Err(e)) => {
            warn!(error = %e, "Logout failed");
            result
        }
        (result, Ok(())) => result,
    }
}
