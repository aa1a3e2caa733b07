// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rag_retriever::{
    Config, DocumentLoader, GroqChatClient, OperationTimer, OutputFormat, QaPipeline,
    TfIdfRetriever, output,
    utils::logging::{format_success, format_warning},
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "rag_retriever")]
#[command(version = "0.1.0")]
#[command(about = "TF-IDF search, document QA, and text generation over the Groq API", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the corpus against a query by TF-IDF cosine similarity
    Search {
        /// Query text
        query: String,

        /// Corpus file (one document per line) or directory of text files;
        /// defaults to the configured built-in corpus
        #[arg(long, value_name = "PATH")]
        corpus: Option<PathBuf>,

        #[arg(short, long, default_value_t = 1)]
        limit: usize,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[arg(long)]
        pretty: bool,
    },

    /// Answer a question about a document (PDF, markdown, or plain text)
    Ask {
        /// Question text
        question: String,

        /// Document to answer from
        #[arg(short, long, value_name = "PATH")]
        file: PathBuf,

        /// Retrieved chunks to stuff into the prompt
        #[arg(short = 'k', long, value_name = "NUM")]
        top_k: Option<usize>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[arg(long)]
        pretty: bool,
    },

    /// Send a raw prompt to the chat model and print the completion
    Generate {
        /// Prompt text
        prompt: String,

        #[arg(long, value_name = "NUM")]
        max_tokens: Option<u32>,
    },

    /// Print the active corpus
    Corpus,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    rag_retriever::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using built-in defaults",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Search {
            query,
            corpus,
            limit,
            format,
            pretty,
        } => {
            cmd_search(&config, &query, corpus, limit, format, pretty)?;
        }
        Commands::Ask {
            question,
            file,
            top_k,
            format,
            pretty,
        } => {
            cmd_ask(&config, &question, &file, top_k, format, pretty, cli.color).await?;
        }
        Commands::Generate { prompt, max_tokens } => {
            cmd_generate(&config, &prompt, max_tokens).await?;
        }
        Commands::Corpus => {
            cmd_corpus(&config)?;
        }
    }

    Ok(())
}

fn cmd_search(
    config: &Config,
    query: &str,
    corpus_path: Option<PathBuf>,
    limit: usize,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    let loader = DocumentLoader::new(config.corpus.clone());

    let documents = match corpus_path {
        Some(path) => loader
            .load_corpus(&path)
            .with_context(|| format!("Failed to load corpus from {}", path.display()))?,
        None => loader.builtin_corpus().context("No corpus configured")?,
    };

    info!("Searching {} documents", documents.len());
    let timer = OperationTimer::new("tfidf search");

    let retriever = TfIdfRetriever::new(config.retrieval.min_score);
    let mut matches = retriever
        .rank(query, &documents)
        .context("Ranking failed")?;
    matches.truncate(limit.max(1));

    timer.finish_with_count(documents.len());

    match format {
        OutputFormat::Text => print!("{}", output::render_search(query, &matches)),
        OutputFormat::Json => println!("{}", output::to_json(&matches, pretty)?),
    }

    Ok(())
}

async fn cmd_ask(
    config: &Config,
    question: &str,
    file: &PathBuf,
    top_k: Option<usize>,
    format: OutputFormat,
    pretty: bool,
    colored_output: bool,
) -> Result<()> {
    let pipeline = QaPipeline::new(config.clone(), colored_output);

    let (answer, stats) = pipeline
        .run(file, question, top_k)
        .await
        .context("QA pipeline failed")?;

    if stats.used_fallback_embeddings && config.llm.api_key.is_some() {
        eprintln!(
            "{}",
            format_warning("API embeddings unavailable; results used the local fallback")
        );
    }

    match format {
        OutputFormat::Text => print!("{}", output::render_answer(&answer)),
        OutputFormat::Json => println!("{}", output::to_json(&answer, pretty)?),
    }

    info!(
        "Pipeline: {} chunks, {} embedded, {:.2}s",
        stats.chunks_total, stats.chunks_embedded, stats.duration_secs
    );

    Ok(())
}

async fn cmd_generate(config: &Config, prompt: &str, max_tokens: Option<u32>) -> Result<()> {
    let api_key = config
        .llm
        .api_key
        .clone()
        .context("generate requires llm.api_key (or RAG_RETRIEVER__LLM__API_KEY)")?;

    let client = GroqChatClient::new(
        api_key,
        config.llm.chat_model.clone(),
        config.llm.max_tokens,
        config.llm.temperature,
    );

    let timer = OperationTimer::new("chat completion");
    let completion = match max_tokens {
        Some(limit) => client.complete_with_limit(prompt, limit).await?,
        None => client.complete(prompt).await?,
    };
    timer.finish();

    println!("{}", format_success("Generated Text:"));
    println!("{}", completion.trim());

    Ok(())
}

fn cmd_corpus(config: &Config) -> Result<()> {
    let loader = DocumentLoader::new(config.corpus.clone());
    let documents = loader.builtin_corpus().context("No corpus configured")?;
    print!("{}", output::render_corpus(&documents));
    Ok(())
}
