use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::FetchError;

const TESSERACT_JS_URL: &str =
    "https://cdn.jsdelivr.net/npm/tesseract.js@v4.1.1/dist/tesseract.min.js";
const TESSERACT_CORE_URL: &str =
    "https://cdn.jsdelivr.net/npm/tesseract.js-core@v4.0.1/tesseract-core.wasm.js";
const ENG_TRAINEDDATA_URL: &str =
    "https://cdn.jsdelivr.net/npm/tesseract.js@v4.1.1/dist/lang-data/eng.traineddata.gz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AssetSet {
    /// Script bundle, wasm loader and English language data.
    #[default]
    Full,
    /// Script bundle and wasm loader only.
    Core,
}

impl fmt::Display for AssetSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetSet::Full => write!(f, "full"),
            AssetSet::Core => write!(f, "core"),
        }
    }
}

/// A local file name that is exactly one path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AssetFileName(String);

impl AssetFileName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AssetFileName {
    type Err = FetchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let is_valid = !value.is_empty()
            && value != "."
            && value != ".."
            && !value.contains(['/', '\\', '\0']);
        if !is_valid {
            return Err(FetchError::InvalidFileName(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetDescriptor {
    pub url: String,
    pub file_name: AssetFileName,
}

impl AssetDescriptor {
    pub fn new(url: impl Into<String>, file_name: &str) -> Result<Self, FetchError> {
        Ok(Self {
            url: url.into(),
            file_name: file_name.parse()?,
        })
    }
}

/// Ordered descriptors with no two sharing a destination file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetList {
    items: Vec<AssetDescriptor>,
}

impl AssetList {
    pub fn new(items: Vec<AssetDescriptor>) -> Result<Self, FetchError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.file_name.as_str()) {
                return Err(FetchError::DuplicateFileName(item.file_name.to_string()));
            }
        }
        Ok(Self { items })
    }

    pub fn tesseract(set: AssetSet) -> Result<Self, FetchError> {
        let mut items = vec![
            AssetDescriptor::new(TESSERACT_JS_URL, "tesseract.min.js")?,
            AssetDescriptor::new(TESSERACT_CORE_URL, "tesseract-core.wasm.js")?,
        ];
        if set == AssetSet::Full {
            items.push(AssetDescriptor::new(
                ENG_TRAINEDDATA_URL,
                "eng.traineddata.gz",
            )?);
        }
        Self::new(items)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetDescriptor> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
