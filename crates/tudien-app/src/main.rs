use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tudien_config::Config;
use tudien_core::preprocess::{DefaultPreprocessor, Preprocessor};
use tudien_core::{NormalizeError, Normalizer};
use tudien_fetch::{
    DefinitionClient, FetchError, PayloadSource, TranslateClient, WikitextClient,
};

mod render;

#[derive(Parser)]
#[command(name = "tudien")]
#[command(about = "Look up a word and print a normalized dictionary entry")]
struct Args {
    /// Word to look up
    term: String,

    /// Which upstream to consult
    #[arg(long, value_enum, default_value = "translate")]
    source: Source,

    /// Print the normalized entry as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Source {
    /// Machine-translation endpoint (bilingual lookup)
    Translate,
    /// Structured dictionary REST endpoint
    Definitions,
    /// Raw wiki markup (monolingual analysis)
    Wikitext,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::new();

    let term = DefaultPreprocessor.process(&args.term);
    if term.is_empty() {
        anyhow::bail!("nothing to look up: the term is empty");
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()?;

    let source: Box<dyn PayloadSource> = match args.source {
        Source::Translate => Box::new(TranslateClient::new(
            client,
            config.network.translate_url.clone(),
            config.lookup.source_lang.clone(),
            config.lookup.target_lang.clone(),
        )),
        Source::Definitions => Box::new(DefinitionClient::new(
            client,
            config.network.definition_url.clone(),
        )),
        Source::Wikitext => Box::new(WikitextClient::new(
            client,
            config.network.wikitext_url.clone(),
        )),
    };

    tracing::info!("looking up '{}' via {}", term, source.kind());

    let payload = match source.fetch(&term).await {
        Ok(payload) => payload,
        Err(FetchError::NotFound) => {
            println!("Không tìm thấy từ này.");
            return Ok(());
        }
        Err(err @ FetchError::Network(_)) => {
            tracing::debug!("fetch failed: {err}");
            println!("Lỗi kết nối.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let normalizer = Normalizer::with_languages(
        config.lookup.definition_language.clone(),
        config.lookup.section_label.clone(),
    );

    let entry = match normalizer.normalize(payload, source.kind(), &term) {
        Ok(entry) => entry,
        Err(NormalizeError::NoStructuredData { language }) => {
            println!("No structured senses for '{term}' in '{language}'.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        print!("{}", render::entry(&entry));
    }
    Ok(())
}
