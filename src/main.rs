use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use hipchat_notify::config;
use hipchat_notify::models::{
    AlertContext, DeliveryOutcome, EventContext, HipchatOptions, IssueContext,
};
use hipchat_notify::services::{
    HipchatNotifier, HipchatService, InMemoryOptionStore, ReqwestTransport,
};

/// Send a single event notification to a HipChat room
#[derive(Parser)]
#[command(name = "hipchat-notify")]
#[command(author = "Rustrak Team")]
#[command(version = "0.1.0")]
#[command(about = "Event notification to HipChat")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    options: ProjectOptions,

    /// Project name
    #[arg(long, env = "HIPCHAT_PROJECT", default_value = "default")]
    project: String,

    #[command(subcommand)]
    command: Commands,
}

/// HipChat options for the project
#[derive(Args)]
struct ProjectOptions {
    /// Your HipChat API v2 token
    #[arg(long, env = "HIPCHAT_TOKEN", default_value = "")]
    token: String,

    /// Room name or ID
    #[arg(long, env = "HIPCHAT_ROOM", default_value = "")]
    room: String,

    /// Notify message in chat window
    #[arg(long, env = "HIPCHAT_NOTIFY")]
    notify: bool,

    /// Include project name in message
    #[arg(long, env = "HIPCHAT_INCLUDE_PROJECT_NAME")]
    include_project_name: bool,

    /// Custom API endpoint to send notifications to
    #[arg(long, env = "HIPCHAT_ENDPOINT")]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Send an alert
    Alert {
        /// Alert message
        #[arg(long)]
        message: String,
        /// Absolute URL of the alert
        #[arg(long)]
        url: String,
    },

    /// Send an issue event
    Issue {
        /// Severity level (error, warning, info, debug, ...)
        #[arg(long, default_value = "error")]
        level: String,
        /// Error text
        #[arg(long)]
        error: String,
        /// URL of the issue
        #[arg(long)]
        url: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let transport = match ReqwestTransport::new() {
        Ok(transport) => transport,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let options = HipchatOptions {
        token: cli.options.token,
        room: cli.options.room,
        notify: cli.options.notify,
        include_project_name: cli.options.include_project_name,
        endpoint: cli.options.endpoint,
    };

    let store = Arc::new(InMemoryOptionStore::new());
    if let Err(e) = store.set_options(&cli.project, &options) {
        log::error!("{}", e);
        return ExitCode::FAILURE;
    }

    let notifier = HipchatNotifier::new(Arc::new(transport));

    // Options without a token or room are skipped by the service
    if !options.token.is_empty() && !options.room.is_empty() {
        let value = match serde_json::to_value(&options) {
            Ok(value) => value,
            Err(e) => {
                log::error!("Failed to read options: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = notifier.validate_config(&value) {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    let service = HipchatService::new(store, notifier, config);

    let context = match cli.command {
        Commands::Alert { message, url } => EventContext::Alert(AlertContext {
            project_name: cli.project,
            message,
            url,
        }),
        Commands::Issue { level, error, url } => EventContext::Issue(IssueContext {
            project_name: cli.project,
            level,
            error_text: error,
            url,
        }),
    };

    match service.notify(&context).await {
        Ok(Some(DeliveryOutcome::Success)) => {
            log::info!("Notification delivered");
            ExitCode::SUCCESS
        }
        Ok(Some(_)) => ExitCode::FAILURE,
        Ok(None) => {
            log::warn!("HIPCHAT_TOKEN and HIPCHAT_ROOM must be set, nothing sent");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("Failed to send notification: {}", e);
            ExitCode::FAILURE
        }
    }
}
