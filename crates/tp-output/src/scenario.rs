//! Flat, append-only store of named scenario configurations.
//!
//! The store is a single JSON file holding an array of
//! [`ScenarioRecord`]s.  It only saves and recalls configurations; it never
//! reads or writes simulation results.
//!
//! ```json
//! [
//!   {
//!     "name": "weekday peak",
//!     "config": { "automaticBooths": 3, "manualBooths": 2, ... }
//!   }
//! ]
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tp_core::RawPlazaConfig;

use crate::{OutputError, OutputResult};

/// One saved scenario.
///
/// The configuration is stored as supplied; it is validated only when a run
/// is built from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub name:   String,
    pub config: RawPlazaConfig,
}

/// JSON-file-backed scenario list.
#[derive(Clone, Debug)]
pub struct ScenarioStore {
    path: PathBuf,
}

impl ScenarioStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All saved scenarios, oldest first.  A store file that does not exist
    /// yet is an empty store.
    pub fn list(&self) -> OutputResult<Vec<ScenarioRecord>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_reader(BufReader::new(file)).map_err(|source| OutputError::CorruptStore {
            path: self.path.display().to_string(),
            source,
        })
    }

    /// Append `record` and rewrite the store.
    ///
    /// The new contents go to a sibling temp file first and replace the store
    /// with a rename, so a failed write leaves the previous list intact.
    pub fn append(&self, record: ScenarioRecord) -> OutputResult<()> {
        let mut records = self.list()?;
        log::debug!("saving scenario {:?} to {}", record.name, self.path.display());
        records.push(record);

        let tmp = self.path.with_extension("json.tmp");
        {
            let mut w = BufWriter::new(File::create(&tmp)?);
            serde_json::to_writer_pretty(&mut w, &records)?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Look up the most recently saved scenario called `name`.
    pub fn find(&self, name: &str) -> OutputResult<Option<ScenarioRecord>> {
        Ok(self.list()?.into_iter().rev().find(|r| r.name == name))
    }
}
