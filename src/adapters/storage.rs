use crate::domain::ports::Storage;
use crate::utils::error::{NormalizeError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Files under a directory on disk.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn full_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    fn exists(&self, name: &str) -> bool {
        self.full_path(name).exists()
    }

    fn read_text(&self, name: &str) -> Result<String> {
        let full_path = self.full_path(name);
        let data = fs::read(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => NormalizeError::Missing {
                path: full_path.clone(),
            },
            _ => NormalizeError::io(&full_path, e),
        })?;
        String::from_utf8(data).map_err(|source| NormalizeError::Decode {
            path: full_path,
            source,
        })
    }

    fn write_text(&self, name: &str, text: &str) -> Result<()> {
        let full_path = self.full_path(name);
        fs::write(&full_path, text).map_err(|e| NormalizeError::io(&full_path, e))
    }
}

/// In-memory files, for tests and for embedding the normalizer without a
/// filesystem. Records every read and write so callers can check which
/// names were touched.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<HashMap<String, Vec<u8>>>,
    reads: RefCell<Vec<String>>,
    writes: RefCell<Vec<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, name: &str, text: &str) -> Self {
        self.insert_bytes(name, text.as_bytes().to_vec());
        self
    }

    pub fn insert_bytes(&self, name: &str, data: Vec<u8>) {
        self.files.borrow_mut().insert(name.to_string(), data);
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.files
            .borrow()
            .get(name)
            .map(|data| String::from_utf8_lossy(data).into_owned())
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.borrow().clone()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.files.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn exists(&self, name: &str) -> bool {
        self.files.borrow().contains_key(name)
    }

    fn read_text(&self, name: &str) -> Result<String> {
        self.reads.borrow_mut().push(name.to_string());
        let data = self
            .files
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| NormalizeError::Missing {
                path: PathBuf::from(name),
            })?;
        String::from_utf8(data).map_err(|source| NormalizeError::Decode {
            path: PathBuf::from(name),
            source,
        })
    }

    fn write_text(&self, name: &str, text: &str) -> Result<()> {
        self.writes.borrow_mut().push(name.to_string());
        self.files
            .borrow_mut()
            .insert(name.to_string(), text.as_bytes().to_vec());
        Ok(())
    }
}
