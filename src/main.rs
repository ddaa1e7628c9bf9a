use crate::app_config::AppConfig;
use crate::discovery::{Discovery, VoiceOutcome};
use crate::domain::{CallbackRequest, ContactRequest, LoginRequest, ResourceKind, SignupRequest};
use crate::platform::{ConfiguredPosition, ConsoleDialer, PositionSource, PromptRecognizer};
use crate::presenter::{notify, render_dashboard, render_results};
use crate::search_view::SearchView;
use crate::sos::SosDispatcher;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;

mod api;
mod app_config;
mod coordinates_deserializer;
mod discovery;
mod domain;
mod geolocation;
mod intent;
mod platform;
mod presenter;
mod search_view;
mod sos;

/// Find nearby hospitals and ambulances, request help, or raise an SOS alert.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List hospitals near the current location
    Hospitals,
    /// List ambulances near the current location
    Ambulances,
    /// Say 'ambulance' or 'hospital' to search for it
    Voice {
        /// Use this transcript instead of listening on stdin
        #[arg(long)]
        transcript: Option<String>,
    },
    /// Send the current location and call emergency services
    Sos,
    /// Request a callback
    Callback {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Ask about our services
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Create an account
    Signup {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Sign in to an existing account
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Summarize users, leads and SOS alerts
    Admin,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
    let cli = Cli::parse();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(AppConfig::load()?);
    info!(base_url = config.api().base_url(), "✅  Loaded configuration");

    let client = api::new_client(&config)?;
    let position: Arc<dyn PositionSource> = Arc::new(ConfiguredPosition::new(config.geolocation().position()));
    let mut view = SearchView::new(config.display().max_results());

    match cli.command {
        Command::Hospitals => {
            let discovery = Discovery::new(client, config.clone(), position, Arc::new(PromptRecognizer::new(None)));
            search_nearby(&discovery, &mut view, ResourceKind::Hospital).await;
        }
        Command::Ambulances => {
            let discovery = Discovery::new(client, config.clone(), position, Arc::new(PromptRecognizer::new(None)));
            search_nearby(&discovery, &mut view, ResourceKind::Ambulance).await;
        }
        Command::Voice { transcript } => {
            let discovery = Discovery::new(client, config.clone(), position, Arc::new(PromptRecognizer::new(transcript)));
            match discovery.voice_search().await {
                Ok(outcome) => {
                    view.heard(outcome.recognition());
                    println!("{}", view.voice_status());

                    if let VoiceOutcome::Searched { search, .. } = outcome {
                        match search {
                            Ok(search) => {
                                let kind = search.kind;
                                view.apply(search);
                                render_results(&view, kind);
                            }
                            Err(error) => notify(error.user_message()),
                        }
                    }
                }
                Err(error) => notify(error.user_message()),
            }
        }
        Command::Sos => {
            let dispatcher = SosDispatcher::new(client, config.clone(), position, Arc::new(ConsoleDialer));
            let report = dispatcher.dispatch().await;
            notify(report.user_message());
        }
        Command::Callback { name, phone } => {
            let mut request = CallbackRequest::new(name, phone);
            match api::submit_callback(&client, &config, &mut request).await {
                Ok(message) => notify(message),
                Err(error) => notify(error.user_message()),
            }
        }
        Command::Contact { name, phone, email, message } => {
            let mut request = ContactRequest { name, email, phone, message };
            match api::submit_contact(&client, &config, &mut request).await {
                Ok(message) => notify(message),
                Err(error) => notify(error.user_message()),
            }
        }
        Command::Signup { name, email, password } => {
            let mut request = SignupRequest { name, email, password };
            match api::signup(&client, &config, &mut request).await {
                Ok(session) => {
                    info!(token_len = session.token.len(), "🔑 Received session token");
                    notify(&session.signed_up_message());
                }
                Err(error) => notify(error.user_message()),
            }
        }
        Command::Login { email, password } => {
            let mut request = LoginRequest { email, password };
            match api::login(&client, &config, &mut request).await {
                Ok(session) => {
                    info!(token_len = session.token.len(), "🔑 Received session token");
                    notify(&session.logged_in_message());
                }
                Err(error) => notify(error.user_message()),
            }
        }
        Command::Admin => match api::fetch_dashboard(&client, &config).await {
            Ok(dashboard) => render_dashboard(&dashboard),
            Err(error) => notify(&format!("Unable to load the dashboard: {}", error)),
        },
    }

    Ok(())
}

async fn search_nearby(discovery: &Discovery, view: &mut SearchView, kind: ResourceKind) {
    match discovery.search_nearby(kind).await {
        Ok(search) => {
            view.apply(search);
            render_results(view, kind);
        }
        Err(error) => notify(error.user_message()),
    }
}
