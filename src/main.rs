use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bionic::{glyphs_from_text, BionicConfig, BionicPainter, TerminalCanvas};

/// Resting font of the terminal canvas
const TERMINAL_FONT: &str = "400 16px monospace";

#[derive(Parser, Debug)]
#[command(name = "bionic")]
#[command(about = "Bionic reading emphasis with verb/noun highlighting for plain text")]
#[command(version)]
struct Args {
    /// Text file to render
    file: PathBuf,

    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shift every bold prefix by this many glyphs
    #[arg(long, allow_hyphen_values = true)]
    parsing_offset: Option<i32>,

    /// Colour verbs
    #[arg(long)]
    highlight_verbs: bool,

    /// Colour nouns
    #[arg(long)]
    highlight_nouns: bool,

    /// Document language, checked against the disabled-language list
    #[arg(long)]
    language: Option<String>,

    /// Print spans as JSON lines instead of styled text
    #[arg(long)]
    json: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<BionicConfig> {
        let mut config = match &self.config {
            Some(path) => BionicConfig::from_toml_file(path)?,
            None => BionicConfig::default(),
        };
        if let Some(offset) = self.parsing_offset {
            config.parsing_offset = offset;
        }
        config.highlight_verbs |= self.highlight_verbs;
        config.highlight_nouns |= self.highlight_nouns;
        if let Some(language) = &self.language {
            config.enabled = config.is_enabled_for_language(language);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging on stderr keeps stdout clean for rendered output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    if !args.file.is_file() {
        anyhow::bail!("Input is not a readable file: {}", args.file.display());
    }

    let config = args.resolve_config()?;
    info!(?config, "Resolved configuration");

    let text = tokio::fs::read_to_string(&args.file).await?;
    let mut painter = BionicPainter::with_default_tagger()?;

    let stdout = std::io::stdout();
    if args.json {
        let mut out = stdout.lock();
        for (line_number, line) in text.lines().enumerate() {
            let glyphs = glyphs_from_text(line);
            let spans = painter.segment(&glyphs, &config);
            for span in &spans {
                let record = serde_json::json!({ "line": line_number + 1, "span": span });
                writeln!(out, "{record}")?;
            }
        }
        out.flush()?;
    } else {
        let mut canvas = TerminalCanvas::new(stdout.lock(), TERMINAL_FONT);
        for line in text.lines() {
            let glyphs = glyphs_from_text(line);
            painter.paint(&mut canvas, &glyphs, &config)?;
            canvas.newline()?;
        }
        canvas.flush()?;
    }

    info!(
        lines = text.lines().count(),
        cached_words = painter.segmenter().classifier().cache().len(),
        "Rendering complete"
    );
    Ok(())
}
