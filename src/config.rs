use camino::Utf8PathBuf;

use crate::domain::{AssetList, AssetSet};
use crate::error::FetchError;

pub const DEFAULT_TARGET_DIR: &str = "src/content/tesseract";

#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub target_dir: Option<Utf8PathBuf>,
    pub assets: AssetSet,
    pub no_confirm: bool,
    pub no_ignore_file: bool,
    pub yes: bool,
    pub non_interactive: bool,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub target_dir: Utf8PathBuf,
    pub assets: AssetList,
    pub confirm_existing: bool,
    pub write_ignore_file: bool,
    pub assume_yes: bool,
    pub interactive: bool,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn resolve(options: FetchOptions) -> Result<ResolvedConfig, FetchError> {
        let target_dir = options
            .target_dir
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_TARGET_DIR));
        let assets = AssetList::tesseract(options.assets)?;

        Ok(ResolvedConfig {
            target_dir,
            assets,
            confirm_existing: !options.no_confirm,
            write_ignore_file: !options.no_ignore_file,
            assume_yes: options.yes,
            interactive: !options.non_interactive,
        })
    }
}
