//! Shared helpers for the generate-class commands: export flag resolution,
//! reference image loading, the save primitive, and the progress spinner.

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use merchforge_core::{
    Config, ExportArtifact, ExportRequest, Exporter, ImageFormat, ImageHandle, SizeClass,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::{FormatArg, SizeArg};

/// Export flags shared by every command that produces a downloadable result.
#[derive(Args, Debug)]
pub struct ExportFlags {
    /// Download format (defaults to config)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Download size class (defaults to config)
    #[arg(long, value_enum)]
    pub size: Option<SizeArg>,

    /// Title used to derive the output filename
    #[arg(long)]
    pub title: Option<String>,

    /// Output directory (defaults to config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExportFlags {
    /// Resolve the format flag against the config default.
    pub fn format(&self, config: &Config) -> anyhow::Result<ImageFormat> {
        match self.format {
            Some(arg) => Ok(arg.into()),
            None => ImageFormat::parse(&config.export.format).with_context(|| {
                format!("invalid export.format in config: {}", config.export.format)
            }),
        }
    }

    /// Resolve the size flag against the config default.
    pub fn size(&self, config: &Config) -> anyhow::Result<SizeClass> {
        match self.size {
            Some(arg) => Ok(arg.into()),
            None => SizeClass::parse(&config.export.size).with_context(|| {
                format!("invalid export.size in config: {}", config.export.size)
            }),
        }
    }

    /// Resolve the output directory (with ~ expansion) against the config.
    pub fn output_dir(&self, config: &Config) -> PathBuf {
        match &self.output {
            Some(dir) => {
                let raw = dir.to_string_lossy();
                let expanded = shellexpand::tilde(raw.as_ref());
                PathBuf::from(expanded.into_owned())
            }
            None => config.output_dir(),
        }
    }
}

/// Run the export pipeline on a generated result and save the artifact.
///
/// This is the single download action: one export in flight, no partial
/// file on failure, and a short retryable message when preparation fails.
pub async fn export_and_save(
    config: &Config,
    image: ImageHandle,
    flags: &ExportFlags,
    default_title: &str,
) -> anyhow::Result<PathBuf> {
    let exporter = Exporter::new(config.limits.clone());
    let title = flags.title.as_deref().unwrap_or(default_title);
    let request = ExportRequest::new(image, flags.format(config)?, flags.size(config)?, title);

    let artifact = exporter
        .export(request)
        .await
        .context("Failed to prepare image for download")?;

    let path = save_artifact(&artifact, &flags.output_dir(config))?;
    println!("Saved {} ({}x{})", path.display(), artifact.width, artifact.height);
    Ok(path)
}

/// The file-save primitive: write artifact bytes under the output directory.
pub fn save_artifact(artifact: &ExportArtifact, output_dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("cannot create output directory {}", output_dir.display()))?;
    let path = output_dir.join(&artifact.file_name);
    std::fs::write(&path, &artifact.bytes)
        .with_context(|| format!("cannot write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = artifact.bytes.len(), "artifact saved");
    Ok(path)
}

/// Read a local image file into a handle.
pub fn load_image(path: &Path) -> anyhow::Result<ImageHandle> {
    let bytes =
        std::fs::read(path).with_context(|| format!("cannot read image {}", path.display()))?;
    Ok(ImageHandle::from_bytes(bytes))
}

/// Timeout for catalog reference downloads.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch a catalog reference photo over HTTP.
pub async fn fetch_reference(url: &str) -> anyhow::Result<ImageHandle> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("cannot build HTTP client")?;
    fetch_reference_with(&client, url).await
}

async fn fetch_reference_with(client: &reqwest::Client, url: &str) -> anyhow::Result<ImageHandle> {
    tracing::debug!(url, "fetching catalog reference image");
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("cannot fetch {url}"))?
        .error_for_status()
        .with_context(|| format!("cannot fetch {url}"))?;
    let mime = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = resp.bytes().await.context("reference download failed")?;
    Ok(match mime {
        Some(mime) => ImageHandle::with_mime_type(bytes.to_vec(), mime),
        None => ImageHandle::from_bytes(bytes.to_vec()),
    })
}

/// Spinner shown while a generation call is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("static spinner template"),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
