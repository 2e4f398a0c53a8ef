use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use pt_text_clean::{
    process_files, AdapterError, DocumentKind, Linguistics, Normalizer, ProcessOptions,
    ResourceConfig,
};

/// Normalize Portuguese text files through the thirteen-stage pipeline.
#[derive(Debug, Parser)]
#[command(name = "pt-text-clean", version, about)]
struct Cli {
    /// Input text files.
    #[arg(default_values = ["doril.txt", "no14011801.txt"])]
    inputs: Vec<PathBuf>,
    /// Directory receiving `<name>_processado.txt` files.
    #[arg(long, env = "PT_CLEAN_OUTPUT_DIR", default_value = "processados")]
    output_dir: PathBuf,
    /// Directory with the Hunspell pair, word list and lemma lexicon.
    #[arg(long, env = "PT_CLEAN_DICT_DIR")]
    dict_dir: Option<PathBuf>,
    /// JSON resource config; `--dict-dir` overrides its directory.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Kind of document being processed.
    #[arg(long, value_enum, default_value_t = KindArg::Standard)]
    kind: KindArg,
    /// Also write `<name>_etapas.json` with every stage's output.
    #[arg(long)]
    trace: bool,
    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Standard,
    Social,
}

impl From<KindArg> for DocumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Standard => DocumentKind::Standard,
            KindArg::Social => DocumentKind::Social,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = ResourceConfig::resolve(cli.config.as_deref(), cli.dict_dir.as_deref())
        .context("loading resource config")?;
    let linguistics = Linguistics::load(&config).context("initializing linguistic resources")?;
    let normalizer = Normalizer::new(linguistics);
    let options = ProcessOptions {
        kind: cli.kind.into(),
        write_trace: cli.trace,
    };

    let report = process_files(&cli.inputs, &cli.output_dir, &normalizer, options);
    for (input, result) in &report.results {
        match result {
            Ok(written) => {
                println!("Texto final processado salvo em: {}", written.output_path.display());
                if let Some(trace_path) = &written.trace_path {
                    println!("Etapas salvas em: {}", trace_path.display());
                }
            }
            Err(err) => match err {
                AdapterError::NotFound(_) => println!("{err}"),
                _ => error!(input = %input.display(), "{err}"),
            },
        }
    }
    Ok(report.is_success())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
