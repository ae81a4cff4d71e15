use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rms_client::{
    auth::{decode_claims, FileTokenStore, TokenStore},
    models::{
        CreateShiftReq, CreateShiftRequestReq, GetShiftAssignmentListReq, GetShiftListReq, GetShiftRequestListReq,
        UpdateShiftReq,
    },
    services, ApiClient, ClientConfig, ClientError,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "rms")]
#[command(version)]
#[command(about = "Command-line access to the RMS shift-scheduling API", long_about = None)]
struct Cli {
    /// Overrides RMS_API_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the issued token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "RMS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and store the issued token
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "RMS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored token
    Logout,
    /// Show who the stored token belongs to
    Whoami,
    /// Manage shifts
    #[command(subcommand)]
    Shifts(ShiftCommands),
    /// Manage shift requests
    #[command(subcommand)]
    Requests(RequestCommands),
    /// List shift assignments
    Assignments {
        #[arg(long)]
        user_id: Option<i64>,
        #[arg(long)]
        limit: Option<i64>,
        #[arg(long)]
        offset: Option<i64>,
    },
    /// List workers
    Workers,
}

#[derive(Subcommand)]
enum ShiftCommands {
    List {
        #[arg(long)]
        unassigned: bool,
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        limit: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
    },
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        date: String,
        #[arg(long)]
        start_time: String,
        #[arg(long)]
        end_time: String,
        #[arg(long)]
        role_id: i64,
        #[arg(long)]
        location: Option<String>,
    },
    Update {
        id: i64,
        #[arg(long)]
        date: String,
        #[arg(long)]
        start_time: String,
        #[arg(long)]
        end_time: String,
        #[arg(long)]
        role_id: i64,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        inactive: bool,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
enum RequestCommands {
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,
    },
    Create {
        #[arg(long)]
        user_id: i64,
        #[arg(long)]
        shift_id: i64,
    },
    Approve {
        id: i64,
    },
    Reject {
        id: i64,
        #[arg(long)]
        reason: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with conditional JSON/text output; stdout is reserved for responses
    let use_json = std::env::var("LOG_FORMAT")
        .unwrap_or_else(|_| "text".to_string()) == "json";

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn,rms_client=info".into());

    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let cli = Cli::parse();

    let config = match cli.base_url {
        Some(base_url) => ClientConfig::new(base_url).with_env_overrides(),
        None => ClientConfig::from_env(),
    }
    .map_err(|e| {
        tracing::error!("Configuration error: {}", e);
        ClientError::Config(e)
    })?;

    let store = FileTokenStore::new(config.token_file.clone());
    let api = ApiClient::new(config)?;

    run(cli.command, &api, &store).await?;

    Ok(())
}

async fn run(command: Commands, api: &ApiClient, store: &FileTokenStore) -> CliResult {
    match command {
        Commands::Login { email, password } => {
            print_json(&services::login(api, store, &email, &password).await?)
        }
        Commands::Register {
            first_name,
            last_name,
            email,
            password,
        } => print_json(&services::register(api, store, &first_name, &last_name, &email, &password).await?),
        Commands::Logout => {
            store.clear().await?;
            tracing::info!(path = %store.path().display(), "Stored token removed");
            Ok(())
        }
        Commands::Whoami => {
            let token = store.get().await?.ok_or(ClientError::MissingData("stored token"))?;
            print_json(&decode_claims(&token)?)
        }
        Commands::Shifts(command) => run_shift_command(command, api, store).await,
        Commands::Requests(command) => run_request_command(command, api, store).await,
        Commands::Assignments { user_id, limit, offset } => {
            let filter = GetShiftAssignmentListReq { user_id, limit, offset };
            print_json(&services::fetch_shift_assignments(api, store, &filter).await?)
        }
        Commands::Workers => print_json(&services::fetch_workers(api, store).await?),
    }
}

async fn run_shift_command(command: ShiftCommands, api: &ApiClient, store: &FileTokenStore) -> CliResult {
    match command {
        ShiftCommands::List {
            unassigned,
            limit,
            offset,
        } => {
            let filter = GetShiftListReq {
                show_only_unassigned: unassigned,
                limit,
                offset,
            };
            print_json(&services::fetch_shifts(api, store, &filter).await?)
        }
        ShiftCommands::Get { id } => print_json(&services::get_shift(api, store, id).await?),
        ShiftCommands::Create {
            date,
            start_time,
            end_time,
            role_id,
            location,
        } => {
            let shift = CreateShiftReq {
                date,
                start_time,
                end_time,
                role_id,
                location,
            };
            print_json(&services::create_shift(api, store, &shift).await?)
        }
        ShiftCommands::Update {
            id,
            date,
            start_time,
            end_time,
            role_id,
            location,
            inactive,
        } => {
            let shift = UpdateShiftReq {
                date,
                start_time,
                end_time,
                role_id,
                location,
                is_active: !inactive,
            };
            print_json(&services::update_shift(api, store, id, &shift).await?)
        }
        ShiftCommands::Delete { id } => print_json(&services::delete_shift(api, store, id).await?),
    }
}

async fn run_request_command(
    command: RequestCommands,
    api: &ApiClient,
    store: &FileTokenStore,
) -> CliResult {
    match command {
        RequestCommands::List { status, limit, offset } => {
            let filter = GetShiftRequestListReq { limit, offset, status };
            print_json(&services::fetch_shift_requests(api, store, &filter).await?)
        }
        RequestCommands::Create { user_id, shift_id } => {
            let input = CreateShiftRequestReq { user_id, shift_id };
            print_json(&services::create_shift_request(api, store, &input).await?)
        }
        RequestCommands::Approve { id } => print_json(&services::approve_shift_request(api, store, id).await?),
        RequestCommands::Reject { id, reason } => {
            print_json(&services::reject_shift_request(api, store, id, &reason).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
