use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use clinichat::{
    AskQuestionUseCase, ChatQuery, HttpBackendConfig, HttpChatBackend, Language, DEFAULT_BASE_URL,
};

#[derive(Parser)]
#[command(name = "clinichat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the question-answering backend
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the clinic assistant a question
    Ask {
        question: String,

        /// Answer language: english or vietnamese
        #[arg(short, long, default_value = "english")]
        language: Language,

        /// Ask the backend to run its enhanced retrieval pipeline
        #[arg(long)]
        enhance_retrieval: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = HttpBackendConfig::new(&cli.base_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let backend = Arc::new(HttpChatBackend::new(config)?);

    match cli.command {
        Commands::Ask {
            question,
            language,
            enhance_retrieval,
        } => {
            let query = ChatQuery::new(question)
                .with_language(language)
                .with_enhanced_retrieval(enhance_retrieval);

            let use_case = AskQuestionUseCase::new(backend);
            let answer = use_case.execute(&query).await?;

            println!("{}", answer.answer());

            if let Some(sources) = answer.sources() {
                if !sources.is_empty() {
                    println!("\nSources:");
                    for (i, source) in sources.iter().enumerate() {
                        println!("  {}. {}", i + 1, source);
                    }
                }
            }
        }
    }

    Ok(())
}
