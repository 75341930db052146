use std::env;
use std::path::PathBuf;

use datasmith_core::TemplateDocument;
use datasmith_encode::{EncodeOptions, OutputFormat, encode_with};
use datasmith_generate::RecordSynthesizer;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut schema_path: Option<PathBuf> = None;
    let mut format = OutputFormat::Csv;
    let mut count = 10_usize;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--schema" => schema_path = args.next().map(PathBuf::from),
            "--format" => {
                let value = args.next().ok_or("missing --format value")?;
                format = value.parse()?;
            }
            "--count" => {
                let value = args.next().ok_or("missing --count value")?;
                count = value.parse()?;
            }
            _ => return Err("unexpected argument".into()),
        }
    }

    let schema_path = schema_path.ok_or("missing --schema path")?;
    let content = std::fs::read_to_string(&schema_path)?;
    let name = schema_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "schema".to_string());
    let template = TemplateDocument::from_content(&name, &content)?;

    let synthesizer = RecordSynthesizer::new();
    let mut rng = ChaCha8Rng::from_os_rng();
    let batch = synthesizer.generate_batch(&template, count, &mut rng)?;

    let payload = encode_with(&batch, format, &template, EncodeOptions::default())?;
    println!("{}", payload.body);
    Ok(())
}
