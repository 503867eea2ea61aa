use super::{decode_lines, DataFile, DataStore};
use crate::config::ShelterConfig;
use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
    pets_file: String,
    adopters_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self::with_config(root, &ShelterConfig::default())
    }

    pub fn with_config(root: PathBuf, config: &ShelterConfig) -> Self {
        Self {
            root,
            pets_file: config.pets_file.clone(),
            adopters_file: config.adopters_file.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, file: DataFile) -> PathBuf {
        match file {
            DataFile::Pets => self.root.join(&self.pets_file),
            DataFile::Adopters => self.root.join(&self.adopters_file),
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn read_lines(&self, file: DataFile) -> Result<Option<Vec<String>>> {
        let path = self.path_for(file);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(decode_lines(&bytes))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_lines(&mut self, file: DataFile, lines: &[String]) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.path_for(file), lines.concat())?;
        Ok(())
    }

    fn location(&self, file: DataFile) -> PathBuf {
        self.path_for(file)
    }
}
