use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ResolvedConfig;
use crate::domain::AssetDescriptor;
use crate::error::FetchError;
use crate::http::AssetClient;
use crate::prompt::{CONTINUE_QUESTION, Confirm};
use crate::store::TargetDir;

#[derive(Debug, Clone, Serialize)]
pub struct FetchResult {
    pub items: Vec<FetchItemResult>,
    pub succeeded: usize,
    pub total: usize,
    pub target_dir: String,
    pub ignore_file: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FetchItemResult {
    pub url: String,
    pub file_name: String,
    pub path: String,
    pub action: String,
    pub bytes: Option<u64>,
    pub error: Option<String>,
}

impl FetchItemResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The target already had entries and the user said no.
    Declined,
    Completed(FetchResult),
}

#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub message: String,
    pub elapsed: Option<Duration>,
}

pub trait ProgressSink {
    fn event(&self, event: ProgressEvent);
}

fn say(sink: &dyn ProgressSink, message: String) {
    sink.event(ProgressEvent {
        message,
        elapsed: None,
    });
}

pub struct App<C: AssetClient, P: Confirm> {
    client: C,
    prompt: P,
}

impl<C: AssetClient, P: Confirm> App<C, P> {
    pub fn new(client: C, prompt: P) -> Self {
        Self { client, prompt }
    }

    pub fn run(
        &self,
        config: &ResolvedConfig,
        sink: &dyn ProgressSink,
    ) -> Result<RunOutcome, FetchError> {
        let target = TargetDir::new(config.target_dir.clone());
        target.ensure()?;

        if config.confirm_existing && !self.confirm_existing(&target, sink)? {
            say(sink, "Aborting download.".to_string());
            return Ok(RunOutcome::Declined);
        }

        let mut items = Vec::with_capacity(config.assets.len());
        for asset in config.assets.iter() {
            items.push(self.fetch_one(&target, asset, sink)?);
        }

        let succeeded = items.iter().filter(|item| item.is_success()).count();
        let total = items.len();
        let absolute = target.absolute()?;
        info!(succeeded, total, target = %absolute, "fetch finished");
        say(
            sink,
            format!(
                "\nTesseract download completed! Successfully downloaded {succeeded}/{total} files."
            ),
        );
        say(sink, format!("Files downloaded to: {absolute}"));

        let ignore_file = if config.write_ignore_file {
            let path = target.write_ignore_file()?;
            say(
                sink,
                format!("Created .gitignore for tesseract directory: {path}"),
            );
            Some(path.to_string())
        } else {
            None
        };

        Ok(RunOutcome::Completed(FetchResult {
            items,
            succeeded,
            total,
            target_dir: absolute.to_string(),
            ignore_file,
        }))
    }

    fn confirm_existing(
        &self,
        target: &TargetDir,
        sink: &dyn ProgressSink,
    ) -> Result<bool, FetchError> {
        let entries = target.existing_entries()?;
        if entries.is_empty() {
            return Ok(true);
        }
        say(
            sink,
            format!(
                "Warning: {} already contains {} files:",
                target.root(),
                entries.len()
            ),
        );
        for name in &entries {
            say(sink, format!("  - {name}"));
        }
        self.prompt.confirm(CONTINUE_QUESTION)
    }

    /// Transient failures become a failed item; anything else ends the run.
    fn fetch_one(
        &self,
        target: &TargetDir,
        asset: &AssetDescriptor,
        sink: &dyn ProgressSink,
    ) -> Result<FetchItemResult, FetchError> {
        let destination = target.asset_path(&asset.file_name);
        say(sink, format!("Downloading {} to {destination}", asset.url));

        let start = Instant::now();
        match self.client.download(&asset.url, destination.as_std_path()) {
            Ok(bytes) => {
                let elapsed = start.elapsed();
                debug!(
                    url = %asset.url,
                    bytes,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "download finished"
                );
                sink.event(ProgressEvent {
                    message: format!("Download completed: {destination}"),
                    elapsed: Some(elapsed),
                });
                Ok(FetchItemResult {
                    url: asset.url.clone(),
                    file_name: asset.file_name.to_string(),
                    path: destination.to_string(),
                    action: "downloaded".to_string(),
                    bytes: Some(bytes),
                    error: None,
                })
            }
            Err(err) if err.is_transient() => {
                warn!(url = %asset.url, error = %err, "download failed");
                say(sink, format!("Error downloading {}: {err}", asset.url));
                Ok(FetchItemResult {
                    url: asset.url.clone(),
                    file_name: asset.file_name.to_string(),
                    path: destination.to_string(),
                    action: "failed".to_string(),
                    bytes: None,
                    error: Some(err.to_string()),
                })
            }
            Err(err) => Err(err),
        }
    }
}
