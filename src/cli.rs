//! Command-line interface

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::domain::{LabeledSelection, Point, Rect};
use crate::export::{ExportClient, FieldRegion, to_payload};
use crate::render::PdftoppmRenderer;
use crate::session::SelectionSession;

#[derive(Parser)]
#[command(
    name = "fieldmark",
    version,
    about = "Mark labeled field regions on a PDF page and export them for data extraction"
)]
pub struct Cli {
    /// Path to a JSON config file (defaults apply when omitted)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render page 1 of a PDF at the configured scale
    Render {
        /// Path to the PDF file
        input: PathBuf,

        /// Output PNG path
        #[arg(short, long, default_value = "page.png")]
        out: PathBuf,
    },
    /// Mark labeled field regions and write the overlay and selections
    Mark {
        /// Path to the PDF file
        input: PathBuf,

        /// Field region as LABEL:X,Y,WxH (repeatable, committed in order)
        #[arg(short, long = "field", value_name = "SPEC", required = true)]
        fields: Vec<String>,

        /// Output PNG path for the composed overlay
        #[arg(short, long, default_value = "overlay.png")]
        out: PathBuf,

        /// Write the committed selections to a JSON file
        #[arg(long, value_name = "FILE")]
        selections: Option<PathBuf>,
    },
    /// Submit selections to the extraction endpoint and save the spreadsheet
    Export {
        /// Selections JSON file (as written by `mark --selections`)
        #[arg(long, value_name = "FILE")]
        selections: PathBuf,

        /// Extraction endpoint URL (overrides the config)
        #[arg(long)]
        endpoint: Option<String>,

        /// Output path for the spreadsheet (overrides the config filename)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Render { input, out } => render(config, &input, &out).await,
        Commands::Mark {
            input,
            fields,
            out,
            selections,
        } => mark(config, &input, &fields, &out, selections.as_deref()).await,
        Commands::Export {
            selections,
            endpoint,
            out,
        } => export(config, &selections, endpoint, out).await,
    }
}

async fn load_and_render(config: Config, input: &Path) -> anyhow::Result<SelectionSession> {
    let bytes = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let mut session = SelectionSession::new(config);
    session.load_document(bytes)?;
    session.render_page(&PdftoppmRenderer::new()).await?;
    Ok(session)
}

async fn render(config: Config, input: &Path, out: &Path) -> anyhow::Result<()> {
    let session = load_and_render(config, input).await?;
    let overlay = session.overlay()?;
    overlay
        .save(out)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Rendered page 1 to {}", out.display());
    Ok(())
}

async fn mark(
    config: Config,
    input: &Path,
    fields: &[String],
    out: &Path,
    selections_out: Option<&Path>,
) -> anyhow::Result<()> {
    let mut session = load_and_render(config, input).await?;

    // Replay each field spec as a drag gesture followed by its label
    for spec in fields {
        let (label, rect) = parse_field_spec(spec)?;
        session.pointer_down(Point::new(rect.x, rect.y));
        session.pointer_move(Point::new(rect.x + rect.width, rect.y + rect.height));
        session.pointer_up(Point::new(rect.x + rect.width, rect.y + rect.height));
        if !session.provide_label(Some(label)) {
            bail!("field spec {spec:?} was not committed");
        }
    }

    let overlay = session.overlay()?;
    overlay
        .save(out)
        .with_context(|| format!("writing {}", out.display()))?;

    if let Some(path) = selections_out {
        let payload = to_payload(session.store().all());
        let file = std::fs::File::create(path)
            .with_context(|| format!("writing {}", path.display()))?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &payload)?;
    }

    println!("Marked fields:");
    for line in session.field_summaries() {
        println!("  {line}");
    }
    println!("Overlay written to {}", out.display());
    Ok(())
}

async fn export(
    config: Config,
    selections_path: &Path,
    endpoint: Option<String>,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let file = std::fs::File::open(selections_path)
        .with_context(|| format!("reading {}", selections_path.display()))?;
    let regions: Vec<FieldRegion> = serde_json::from_reader(std::io::BufReader::new(file))?;
    if regions.is_empty() {
        bail!("no selections to export");
    }
    let selections: Vec<LabeledSelection> = regions.into_iter().map(Into::into).collect();

    let endpoint = endpoint.unwrap_or_else(|| config.endpoint.clone());
    let out = out.unwrap_or_else(|| PathBuf::from(&config.download_filename));

    let client = ExportClient::new(endpoint);
    client.submit_to_file(&selections, &out).await?;
    println!("Spreadsheet saved to {}", out.display());
    Ok(())
}

/// Parse "LABEL:X,Y,WxH" into a label and rect (extents may be signed)
fn parse_field_spec(spec: &str) -> anyhow::Result<(String, Rect)> {
    let (label, rest) = spec
        .split_once(':')
        .with_context(|| format!("field spec {spec:?} is missing the LABEL: prefix"))?;
    if label.trim().is_empty() {
        bail!("field spec {spec:?} has an empty label");
    }

    let parts: Vec<&str> = rest.split(',').collect();
    let [x, y, size] = parts.as_slice() else {
        bail!("field spec {spec:?} must be LABEL:X,Y,WxH");
    };
    let (w, h) = size
        .split_once('x')
        .with_context(|| format!("field spec {spec:?} must give the size as WxH"))?;

    let parse = |s: &str, what: &str| -> anyhow::Result<f32> {
        s.trim()
            .parse::<f32>()
            .with_context(|| format!("field spec {spec:?}: invalid {what} {s:?}"))
    };

    Ok((
        label.trim().to_string(),
        Rect::new(
            parse(x, "x")?,
            parse(y, "y")?,
            parse(w, "width")?,
            parse(h, "height")?,
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_spec() {
        let (label, rect) = parse_field_spec("Total:10,10,50x20").unwrap();
        assert_eq!(label, "Total");
        assert_eq!(rect, Rect::new(10.0, 10.0, 50.0, 20.0));
    }

    #[test]
    fn test_parse_field_spec_signed_extents() {
        let (_, rect) = parse_field_spec("Fecha:60.5,30,-50x-20").unwrap();
        assert_eq!(rect, Rect::new(60.5, 30.0, -50.0, -20.0));
    }

    #[test]
    fn test_parse_field_spec_rejects_malformed_input() {
        assert!(parse_field_spec("no-colon").is_err());
        assert!(parse_field_spec(":10,10,50x20").is_err());
        assert!(parse_field_spec("Total:10,10").is_err());
        assert!(parse_field_spec("Total:10,10,50by20").is_err());
        assert!(parse_field_spec("Total:a,10,50x20").is_err());
    }
}
