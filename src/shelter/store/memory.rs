use super::{decode_lines, DataFile, DataStore};
use crate::error::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data. Files are kept as raw bytes so reads go through the
/// same line decoding as [`FileStore`](super::fs::FileStore).
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: HashMap<DataFile, Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: DataFile, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(file, contents.into());
        self
    }

    /// Current file contents, lossily decoded. `None` if never written.
    pub fn contents(&self, file: DataFile) -> Option<String> {
        self.files
            .get(&file)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl DataStore for InMemoryStore {
    fn read_lines(&self, file: DataFile) -> Result<Option<Vec<String>>> {
        Ok(self.files.get(&file).map(|bytes| decode_lines(bytes)))
    }

    fn write_lines(&mut self, file: DataFile, lines: &[String]) -> Result<()> {
        self.files.insert(file, lines.concat().into_bytes());
        Ok(())
    }

    fn location(&self, file: DataFile) -> PathBuf {
        PathBuf::from(format!("memory://{}s", file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.read_lines(DataFile::Pets).unwrap(), None);
    }

    #[test]
    fn write_replaces_previous_contents() {
        let mut store = InMemoryStore::new().with_file(DataFile::Adopters, "old,line,here\n");
        store
            .write_lines(DataFile::Adopters, &["A1,Jane,555,\n".to_string()])
            .unwrap();
        assert_eq!(
            store.read_lines(DataFile::Adopters).unwrap(),
            Some(vec!["A1,Jane,555,".to_string()])
        );
    }

    #[test]
    fn empty_write_leaves_empty_file() {
        let mut store = InMemoryStore::new();
        store.write_lines(DataFile::Pets, &[]).unwrap();
        assert_eq!(store.contents(DataFile::Pets).as_deref(), Some(""));
        assert_eq!(store.read_lines(DataFile::Pets).unwrap(), Some(vec![]));
    }
}
