mod catalog;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use datasmith_core::{Error as CoreError, TemplateDocument};
use datasmith_encode::{ArrayStyle, EncodeOptions, EncodingError, OutputFormat, encode_with};
use datasmith_generate::{GenerationError, RecordSynthesizer};

/// Upper bound on --count; generation work must stay bounded at this layer.
const MAX_COUNT: usize = 100_000;

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Core(CoreError::TemplateNotFound(_)) => 3,
            CliError::Core(CoreError::SchemaParse(_)) | CliError::InvalidArgs(_) => 2,
            _ => 1,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "datasmith", version, about = "Synthetic data from schema templates")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in template catalog.
    Templates,
    /// Generate a batch of records and encode it.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
#[command(group = ArgGroup::new("source").required(true).args(["template", "schema"]))]
struct GenerateArgs {
    /// Name of a catalog template.
    #[arg(long)]
    template: Option<String>,
    /// Path to an ad-hoc schema file (template content JSON).
    #[arg(long)]
    schema: Option<PathBuf>,
    /// Display name for --schema; defaults to the file stem.
    #[arg(long)]
    name: Option<String>,
    /// Number of records to generate.
    #[arg(long, default_value_t = 10)]
    count: usize,
    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatArg::Json)]
    format: FormatArg,
    /// Seed for reproducible output; omit for OS entropy.
    #[arg(long)]
    seed: Option<u64>,
    /// Flatten scalar arrays to comma-joined CSV cells (legacy style).
    #[arg(long, default_value_t = false)]
    joined_arrays: bool,
    /// Write the payload to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Csv,
    Sql,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Sql => OutputFormat::Sql,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Templates => {
            for entry in catalog::BUILTIN {
                println!("{}", entry.name);
            }
            Ok(())
        }
        Command::Generate(args) => generate(args),
    }
}

fn generate(args: GenerateArgs) -> Result<(), CliError> {
    if args.count > MAX_COUNT {
        return Err(CliError::InvalidArgs(format!(
            "--count {} exceeds the limit of {MAX_COUNT}",
            args.count
        )));
    }

    let template = resolve_template(&args)?;

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let synthesizer = RecordSynthesizer::new();
    let batch = synthesizer.generate_batch(&template, args.count, &mut rng)?;

    let options = EncodeOptions {
        arrays: if args.joined_arrays {
            ArrayStyle::Joined
        } else {
            ArrayStyle::Nested
        },
    };
    let payload = encode_with(&batch, args.format.into(), &template, options)?;

    info!(
        template = %template.name,
        records = batch.len(),
        content_type = payload.content_type,
        filename = %payload.filename,
        "batch encoded"
    );

    match &args.out {
        Some(path) => {
            fs::write(path, &payload.body)?;
            info!(path = %path.display(), "payload written");
        }
        None => println!("{}", payload.body),
    }
    Ok(())
}

fn resolve_template(args: &GenerateArgs) -> Result<TemplateDocument, CliError> {
    if let Some(name) = &args.template {
        return Ok(catalog::resolve(name)?);
    }

    let Some(path) = args.schema.as_ref() else {
        return Err(CliError::InvalidArgs(
            "either --template or --schema is required".to_string(),
        ));
    };
    let content = fs::read_to_string(path)?;
    let name = match &args.name {
        Some(name) => name.clone(),
        None => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "schema".to_string()),
    };
    Ok(TemplateDocument::from_content(&name, &content)?)
}
