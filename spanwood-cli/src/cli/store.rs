//! JSON file persistence for the `spanwood` binary.
//!
//! The whole store is one JSON document. It is loaded on open and rewritten
//! through a temporary file in the same directory after every mutation, so a
//! crash never leaves a half-written document behind.

use std::fs;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use spanwood_core::{GraphId, GraphRecord, GraphStore, InMemoryGraphStore, NewGraph, StoreError};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

const BACKEND: &str = "json-file";

#[derive(Debug, Default, Deserialize, Serialize)]
struct StoreDocument {
    graphs: Vec<GraphRecord>,
}

/// A [`GraphStore`] persisted as a single JSON document on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: InMemoryGraphStore,
    writer: Mutex<()>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store; the file
    /// and its parent directories are created on the first mutation.
    ///
    /// # Errors
    /// Returns [`StoreError::Backend`] when the file exists but cannot be read
    /// or parsed.
    #[instrument(name = "store.open", err, skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let document = match fs::File::open(path) {
            Ok(file) => serde_json::from_reader::<_, StoreDocument>(BufReader::new(file))
                .map_err(backend)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => StoreDocument::default(),
            Err(err) => return Err(backend(err)),
        };
        debug!(graphs = document.graphs.len(), "store loaded");
        Ok(Self {
            path: path.to_path_buf(),
            records: InMemoryGraphStore::from_records(document.graphs),
            writer: Mutex::new(()),
        })
    }

    /// Returns the location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs `apply` against a draft of the records, writes the draft to disk
    /// and only then publishes it, all while holding the writer lock. A
    /// failed write leaves both the file and the visible records unchanged.
    fn mutate<T, E>(&self, apply: impl FnOnce(&InMemoryGraphStore) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let _guard = self.writer.lock().map_err(|_| StoreError::LockPoisoned {
            resource: "json file writer",
        })?;
        let draft = self.records.try_clone()?;
        let value = apply(&draft)?;
        self.persist(&draft)?;
        self.records.replace(draft)?;
        Ok(value)
    }

    fn persist(&self, records: &InMemoryGraphStore) -> Result<(), StoreError> {
        let document = StoreDocument {
            graphs: records.snapshot()?,
        };
        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(directory).map_err(backend)?;

        let mut temp = NamedTempFile::new_in(directory).map_err(backend)?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, &document).map_err(backend)?;
            writer.write_all(b"\n").map_err(backend)?;
            writer.flush().map_err(backend)?;
        }
        temp.persist(&self.path).map_err(|err| backend(err.error))?;
        debug!(path = %self.path.display(), graphs = document.graphs.len(), "store written");
        Ok(())
    }
}

fn backend(err: impl std::error::Error + Send + Sync + 'static) -> StoreError {
    StoreError::Backend {
        backend: BACKEND,
        source: Box::new(err),
    }
}

impl GraphStore for JsonFileStore {
    fn insert(&self, graph: NewGraph) -> Result<GraphRecord, StoreError> {
        self.mutate(|records| records.insert(graph))
    }

    fn get(&self, id: GraphId) -> Result<GraphRecord, StoreError> {
        self.records.get(id)
    }

    fn list(&self) -> Result<Vec<GraphRecord>, StoreError> {
        self.records.list()
    }

    fn update<T, E, F>(&self, id: GraphId, apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut GraphRecord) -> Result<T, E>,
        E: From<StoreError>,
    {
        self.mutate(|records| records.update(id, apply))
    }

    fn remove(&self, id: GraphId) -> Result<GraphRecord, StoreError> {
        self.mutate(|records| records.remove(id))
    }
}
