//! Command-line summarizer.
//!
//! Reads text from `--text`, `--file`, `--url` or stdin and prints an
//! extractive summary, or a JSON document with `--json`.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{ArgGroup, Parser, ValueEnum};
use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

use tf_summarizer::{
    summarize_source, FetchOptions, MatchMode, Options, Sentence, Source, SourceReader, Summary,
    Summarizer, Weighting, DEFAULT_NUM_SENTENCES,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WeightingArg {
    /// Raw term frequency
    Tf,
    /// Term frequency with per-sentence IDF
    SentenceTfidf,
}

impl From<WeightingArg> for Weighting {
    fn from(arg: WeightingArg) -> Self {
        match arg {
            WeightingArg::Tf => Self::TermFrequency,
            WeightingArg::SentenceTfidf => Self::SentenceTfIdf,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MatchModeArg {
    /// Exact word match
    Token,
    /// Case-insensitive substring match
    Substring,
}

impl From<MatchModeArg> for MatchMode {
    fn from(arg: MatchModeArg) -> Self {
        match arg {
            MatchModeArg::Token => Self::Token,
            MatchModeArg::Substring => Self::Substring,
        }
    }
}

/// Summarize text, a file, or a web page by term frequency.
#[derive(Debug, Parser)]
#[command(name = "summarize", version, about)]
#[command(group(ArgGroup::new("input").args(["text", "file", "url"]).multiple(false)))]
struct Cli {
    /// Text to summarize
    #[arg(long)]
    text: Option<String>,

    /// File to summarize
    #[arg(long)]
    file: Option<PathBuf>,

    /// Web page whose paragraphs are summarized
    #[arg(long)]
    url: Option<String>,

    /// Maximum number of sentences
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_SENTENCES)]
    sentences: usize,

    /// Stopword language (ISO 639-1)
    #[arg(long, default_value = "en")]
    language: String,

    /// Term weighting scheme
    #[arg(long, value_enum, default_value_t = WeightingArg::Tf)]
    weighting: WeightingArg,

    /// How ranked words are matched against sentences
    #[arg(long, value_enum, default_value_t = MatchModeArg::Token)]
    match_mode: MatchModeArg,

    /// Only consider this many top-ranked words
    #[arg(long)]
    top_words: Option<usize>,

    /// HTTP timeout in seconds
    #[arg(long, env = "SUMMARIZER_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Maximum input size in bytes
    #[arg(long, env = "SUMMARIZER_MAX_BYTES", default_value_t = 5 * 1024 * 1024)]
    max_bytes: usize,

    /// Print a JSON document instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    source: &'static str,
    summary: String,
    sentences: &'a [Sentence],
    top_words: Vec<&'a str>,
}

fn read_source(cli: &Cli, reader: &SourceReader) -> Source {
    if let Some(text) = &cli.text {
        return Source::Text(text.clone());
    }
    if let Some(url) = &cli.url {
        return Source::Url(url.clone());
    }
    if let Some(path) = &cli.file {
        return reader.load_file(path).unwrap_or_else(|err| {
            error!(path = %path.display(), error = %err, "cannot read file");
            Source::File(Vec::new())
        });
    }

    let mut text = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut text) {
        error!(error = %err, "cannot read stdin");
    }
    Source::Text(text)
}

fn fetch_options(cli: &Cli) -> FetchOptions {
    FetchOptions {
        timeout: Duration::from_secs(cli.timeout_secs),
        max_bytes: cli.max_bytes,
        ..FetchOptions::default()
    }
}

fn summarizer_options(cli: &Cli) -> Options {
    Options {
        num_sentences: cli.sentences,
        language: cli.language.clone(),
        weighting: cli.weighting.into(),
        match_mode: cli.match_mode.into(),
        top_words: cli.top_words,
        ..Options::default()
    }
}

/// Text to print for a summary. Plain output of an empty summary prints
/// nothing.
fn render(cli: &Cli, source: &Source, summary: &Summary) -> Option<String> {
    if cli.json {
        let output = Output {
            source: source.kind(),
            summary: summary.text(),
            sentences: &summary.sentences,
            top_words: summary.terms.iter().take(10).map(|t| t.word.as_str()).collect(),
        };
        return serde_json::to_string(&output).ok();
    }
    (!summary.is_empty()).then(|| summary.to_string())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tf_summarizer=warn,summarize=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let reader = match SourceReader::new(fetch_options(&cli)) {
        Ok(reader) => reader,
        Err(err) => {
            error!(error = %err, "cannot build HTTP client");
            return ExitCode::FAILURE;
        }
    };
    let summarizer = Summarizer::new(summarizer_options(&cli));

    let source = read_source(&cli, &reader);
    let summary = summarize_source(&reader, &summarizer, &source).unwrap_or_default();

    if let Some(output) = render(&cli, &source, &summary) {
        println!("{output}");
    }

    ExitCode::SUCCESS
}
