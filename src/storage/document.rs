use anyhow::{Context, Result};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::config::CorruptionPolicy;
use crate::errors::{dir_context, read_context, write_context, CorruptDocument};

const INDENT: &[u8] = b"    ";

/// One JSON document on disk, read and rewritten as a whole
pub struct JsonDocument<T> {
    path: PathBuf,
    kind: &'static str,
    on_corrupt: CorruptionPolicy,
    _data: PhantomData<fn() -> T>,
}

impl<T> JsonDocument<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new<P: AsRef<Path>>(path: P, kind: &'static str, on_corrupt: CorruptionPolicy) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            kind,
            on_corrupt,
            _data: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, creating it empty when the file does not exist yet
    pub fn load(&self) -> Result<T> {
        if !self.path.exists() {
            let empty = T::default();
            self.save(&empty)?;
            info!("Created empty {} at {}", self.kind, self.path.display());
            return Ok(empty);
        }

        let bytes = fs::read(&self.path).with_context(|| read_context(&self.path))?;
        match serde_json::from_slice(&bytes) {
            Ok(data) => Ok(data),
            Err(source) => self.recover(source),
        }
    }

    /// Replace the document on disk via a temp file and rename
    pub fn save(&self, data: &T) -> Result<()> {
        self.ensure_parent_dir()?;

        let temp_path = self.build_temp_path();
        let json = to_pretty_json(data).with_context(|| format!("Failed to serialize {}", self.kind))?;

        fs::write(&temp_path, json).with_context(|| write_context(&temp_path))?;
        if let Err(err) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err).with_context(|| write_context(&self.path));
        }
        Ok(())
    }

    fn recover(&self, source: serde_json::Error) -> Result<T> {
        let err = CorruptDocument {
            path: self.path.clone(),
            kind: self.kind,
            source,
        };

        match self.on_corrupt {
            CorruptionPolicy::Fail => Err(err.into()),
            CorruptionPolicy::Empty => {
                warn!("{err}; continuing with an empty {}", self.kind);
                Ok(T::default())
            }
        }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir).with_context(|| dir_context(dir))
            }
            _ => Ok(()),
        }
    }

    fn build_temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn to_pretty_json<T: Serialize>(data: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)?;
    Ok(buf)
}
