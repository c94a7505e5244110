use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::storage::InstanceStorage;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("json: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Durable sandbox state: the storage of every contract instance plus the
/// sequence number of the last committed change.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub sequence_number: u32,
    pub instances: BTreeMap<String, InstanceStorage>,
}

impl LedgerSnapshot {
    pub fn read(reader: impl io::Read) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn read_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Reads the snapshot, treating a missing file as an empty ledger. The
    /// file is created on the next write.
    pub fn read_or_default(path: impl AsRef<Path>) -> Result<Self, Error> {
        match Self::read_file(path) {
            Err(Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            r => r,
        }
    }

    pub fn write(&self, writer: impl Write) -> Result<(), Error> {
        Ok(serde_json::to_writer_pretty(writer, self)?)
    }

    /// Writes the snapshot next to `path` and renames it into place, so an
    /// interrupted write never leaves a truncated ledger behind.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let tmp_path = path.with_extension("tmp");
        let mut writer = BufWriter::new(File::create(&tmp_path)?);
        self.write(&mut writer)?;
        writer.into_inner().map_err(io::IntoInnerError::into_error)?.sync_all()?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn instance(&self, contract_id: &str) -> Option<&InstanceStorage> {
        self.instances.get(contract_id)
    }

    /// Storage of `contract_id`, created empty if the instance has never
    /// been written.
    pub fn instance_mut(&mut self, contract_id: &str) -> &mut InstanceStorage {
        self.instances.entry(contract_id.to_string()).or_default()
    }

    /// Marks a state change as committed.
    pub fn bump_sequence(&mut self) {
        self.sequence_number = self.sequence_number.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use assert_fs::{
        prelude::{FileWriteStr, PathChild},
        TempDir,
    };

    use super::*;
    use crate::storage::Storage;

    #[test]
    fn missing_file_is_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let snapshot = LedgerSnapshot::read_or_default(dir.child("ledger.json").path()).unwrap();
        assert_eq!(snapshot, LedgerSnapshot::default());
    }

    #[test]
    fn write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.child(".soroban").child("ledger.json");

        let mut snapshot = LedgerSnapshot::default();
        snapshot.instance_mut("counter").set("COUNTER", 4);
        snapshot.bump_sequence();
        snapshot.write_file(path.path()).unwrap();

        let read = LedgerSnapshot::read_file(path.path()).unwrap();
        assert_eq!(read.sequence_number, 1);
        assert_eq!(read.instance("counter").unwrap().get("COUNTER"), Some(4));
    }

    #[test]
    fn write_replaces_existing_ledger() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("ledger.json");
        path.write_str("{ \"truncated").unwrap();

        let mut snapshot = LedgerSnapshot::default();
        snapshot.instance_mut("counter").set("COUNTER", 7);
        snapshot.write_file(path.path()).unwrap();

        assert_eq!(LedgerSnapshot::read_file(path.path()).unwrap(), snapshot);
        assert!(!dir.child("ledger.tmp").path().exists());
    }

    #[test]
    fn instances_are_isolated() {
        let mut snapshot = LedgerSnapshot::default();
        snapshot.instance_mut("a").set("COUNTER", 1);
        assert!(snapshot.instance("b").is_none());
        assert_eq!(snapshot.instance_mut("b").get("COUNTER"), None);
    }

    #[test]
    fn rejects_garbage() {
        let err = LedgerSnapshot::read(&b"not json"[..]).unwrap_err();
        assert!(matches!(err, Error::Serde(_)));
    }
}
