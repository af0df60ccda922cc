use crate::calendar::Calendar;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Storage {
    /// Charge le calendrier (jours fériés + rattrapages).
    fn load(&self) -> anyhow::Result<Calendar>;
    /// Sauvegarde de manière atomique.
    fn save(&self, calendar: &Calendar) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Calendrier intégré tant que le fichier n'existe pas ; un fichier
    /// illisible reste une erreur.
    pub fn load_or_builtin(&self) -> anyhow::Result<Calendar> {
        if self.path.exists() {
            self.load()
        } else {
            Ok(Calendar::builtin())
        }
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Calendar> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let calendar: Calendar = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(calendar)
    }

    fn save(&self, calendar: &Calendar) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(calendar)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
