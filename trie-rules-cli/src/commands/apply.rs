//! Apply command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use trie_rules_core::{SearchOptions, Transliterator};

use crate::commands::init_logging;
use crate::error::CliError;
use crate::input::{read_file, resolve_inputs, InputSource};
use crate::output::{Document, JsonFormatter, MatchRecord, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use crate::rules_source::RuleSource;

/// Arguments for the apply command
#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Rule file (.toml or .json)
    #[arg(short, long, value_name = "FILE")]
    pub rules: PathBuf,

    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Context file; rules with `confirm` apply only if one of their
    /// `anyOf` strings occurs in it
    #[arg(long, value_name = "FILE")]
    pub context: Option<PathBuf>,

    /// Process input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for --parallel (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Transformed text only
    Text,
    /// JSON array with the transformed text and every match per input
    Json,
}

impl ApplyArgs {
    /// Execute the apply command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {self:?}");

        let transliterator = RuleSource::new(&self.rules)?.transliterator()?;
        let inputs = resolve_inputs(&self.input)?;
        let context = self.context.as_deref().map(read_file).transpose()?;

        let progress = ProgressReporter::new(inputs.len() as u64, self.quiet);
        let documents = if self.parallel && inputs.len() > 1 {
            self.process_parallel(&transliterator, &inputs, context.as_deref(), &progress)?
        } else {
            inputs
                .iter()
                .map(|input| process_input(&transliterator, input, context.as_deref(), &progress))
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        let replacements: usize = documents.iter().map(|d| d.matches.len()).sum();
        log::info!(
            "Made {replacements} replacements across {} input(s)",
            documents.len()
        );

        self.write_output(&documents)
    }

    fn process_parallel(
        &self,
        transliterator: &Transliterator,
        inputs: &[InputSource],
        context: Option<&str>,
        progress: &ProgressReporter,
    ) -> Result<Vec<Document>> {
        let threads = self.threads.unwrap_or_else(num_cpus::get);
        log::info!("Processing {} inputs on {threads} threads", inputs.len());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| CliError::ProcessingError(format!("Failed to build thread pool: {e}")))?;

        pool.install(|| {
            inputs
                .par_iter()
                .map(|input| process_input(transliterator, input, context, progress))
                .collect()
        })
    }

    fn write_output(&self, documents: &[Document]) -> Result<()> {
        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout())),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        for document in documents {
            formatter.write_document(document)?;
        }
        formatter.finish()
    }
}

/// Transform one input, recording every accepted match
fn process_input(
    transliterator: &Transliterator,
    input: &InputSource,
    context: Option<&str>,
    progress: &ProgressReporter,
) -> Result<Document> {
    let text = input.read_text()?;
    let mut matches = Vec::new();

    let mut options = SearchOptions::new().with_log(|event| {
        matches.push(MatchRecord {
            start: event.start,
            end: event.end,
            matched: event.matched_text(),
            target: event.target.to_string(),
        })
    });
    if let Some(context) = context {
        options = options.with_confirm(move |confirm| confirm.is_found_in(context));
    }

    let transformed = transliterator.apply_with(&text, options);
    let name = input.name();

    log::debug!("{name}: {} replacements", matches.len());
    progress.file_completed(&name, matches.len());

    Ok(Document {
        source: name,
        text: transformed,
        matches,
    })
}
