// src/main.rs
// Sakina - questionnaire-aware supportive chat service

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sakina::api::create_router;
use sakina::config::{CONFIG, SakinaConfig};
use sakina::persona::PersonaId;
use sakina::prompt::assemble;
use sakina::questionnaire::QuestionnaireAnswers;
use sakina::session::{ChatSession, HttpChatBackend, SendOutcome};
use sakina::state::AppState;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "sakina")]
#[command(about = "Supportive chat backed by a text-generation service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API (default)
    Serve {
        /// Port to listen on (overrides SAKINA_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides SAKINA_HOST)
        #[arg(long)]
        host: Option<String>,
    },

    /// Print the instruction assembled for a set of answers
    Prompt {
        #[command(flatten)]
        answers: AnswerArgs,
    },

    /// Chat with a running server from the terminal
    Chat {
        /// Server root URL
        #[arg(long, env = "SAKINA_SERVER_URL", default_value = "http://localhost:5000")]
        server: String,

        #[command(flatten)]
        answers: AnswerArgs,
    },
}

#[derive(Args)]
struct AnswerArgs {
    #[arg(long, default_value = "psychological")]
    persona: PersonaId,

    #[arg(long, default_value = "26-35")]
    age: String,

    #[arg(long, default_value = "single")]
    marital_status: String,

    #[arg(long, default_value = "sometimes")]
    prayer: String,

    #[arg(long, default_value = "sometimes")]
    dhikr: String,

    #[arg(long, default_value = "moderate")]
    mental_state: String,

    /// Free-text concerns
    #[arg(long)]
    concerns: Option<String>,
}

impl AnswerArgs {
    fn answers(&self) -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            age: self.age.clone(),
            marital_status: self.marital_status.clone(),
            prayer_commitment: self.prayer.clone(),
            remembrance_practice: self.dhikr.clone(),
            mental_state: self.mental_state.clone(),
            specific_concerns: self.concerns.clone(),
        }
    }
}

async fn run_server(config: SakinaConfig) -> Result<()> {
    info!(
        model = %config.gemini_model,
        strategy = ?config.transcript_strategy,
        fallback = config.local_fallback,
        "Starting Sakina"
    );

    let bind_address = config.bind_address();
    let state = Arc::new(AppState::from_config(config));
    if !state.service_available() {
        warn!("GEMINI_API_KEY not set and LOCAL_FALLBACK off; chat will answer 503");
    }

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn run_chat(server: String, args: AnswerArgs) -> Result<()> {
    let mut session = ChatSession::new(HttpChatBackend::new(server), args.answers(), args.persona);
    if !session.check_health().await {
        println!("الخدمة غير متاحة حالياً.");
        return Ok(());
    }

    println!("{}", args.persona.profile().title);
    if let Some(greeting) = session.messages().first() {
        println!("{}\n", greeting.content);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        session.set_input(line);
        match session.send().await {
            SendOutcome::Replied => {
                if let Some(reply) = session.messages().last() {
                    println!("\n{}\n", reply.content);
                }
            }
            SendOutcome::Rejected(_) => {
                if !session.service_available() {
                    break;
                }
            }
            SendOutcome::Failed(_) => {
                if let Some(notice) = session.notice() {
                    eprintln!("{}: {}", notice.title, notice.description);
                }
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let level = CONFIG.log_level.parse::<Level>().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve { port: None, host: None }) {
        Commands::Serve { port, host } => {
            let mut config = CONFIG.clone();
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            run_server(config).await?;
        }
        Commands::Prompt { answers } => {
            println!("{}", assemble(&answers.answers(), answers.persona));
        }
        Commands::Chat { server, answers } => {
            run_chat(server, answers).await?;
        }
    }

    Ok(())
}
