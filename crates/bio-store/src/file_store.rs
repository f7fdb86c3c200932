use crate::{KeyValueStore, Result as StoreResult, StoreError};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

const RECORD_EXTENSION: &str = ".json";

/// Directory-backed store holding one file per key.
///
/// File names are an escaped form of the key: only `[a-z0-9_-]` pass through,
/// everything else (upper-case letters included) becomes `%XX`. That keeps
/// distinct keys in distinct files on case-insensitive file systems too.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens the store, creating `dir` if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(dir.clone(), e))?;
        debug!("Opened file store at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{}{RECORD_EXTENSION}", encode_file_name(key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(StoreError::corrupted(
                key,
                format!("{}: not valid UTF-8", path.display()),
            )),
            Err(e) => Err(StoreError::read(key, format!("{}: {e}", path.display()))),
        }
    }

    /// Writes through a temp file, fsync and rename so a crash mid-write
    /// never leaves a truncated record behind.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let final_path = self.path_for(key);
        let temp_path = final_path.with_extension(format!("json.tmp.{}", std::process::id()));

        let write_temp = || -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()
        };

        if let Err(e) = write_temp() {
            let _ = fs::remove_file(&temp_path);
            return Err(match e.kind() {
                ErrorKind::StorageFull | ErrorKind::QuotaExceeded => {
                    StoreError::quota_exceeded(key, value.len(), 0)
                }
                _ => StoreError::write(key, format!("{}: {e}", temp_path.display())),
            });
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path.clone(), final_path.clone(), e)
        })?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    /// Copies the file byte for byte, so values that are not text survive.
    fn copy(&mut self, from: &str, to: &str) -> StoreResult<()> {
        let source = self.path_for(from);
        match fs::copy(&source, self.path_for(to)) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(source, e)),
        }
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| StoreError::io(self.dir.clone(), e))?;

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(self.dir.clone(), e))?;
            let name = entry.file_name();
            let Some(stem) = name.to_str().and_then(|n| n.strip_suffix(RECORD_EXTENSION)) else {
                continue;
            };
            match decode_file_name(stem) {
                Some(key) => keys.push(key),
                None => warn!("Ignoring unrecognised file in store: {:?}", entry.path()),
            }
        }

        keys.sort();
        Ok(keys)
    }
}

fn encode_file_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn decode_file_name(name: &str) -> Option<String> {
    let bytes = name.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = name.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}
