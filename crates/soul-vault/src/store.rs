//! Journal file operations: initialise, append, load.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use soul_core::error::{Result, SoulError};
use soul_core::record::JournalRecord;
use tracing::{debug, info};

/// Column names of the journal file, in order.
pub const HEADER: [&str; 3] = ["Date", "Entry", "Mood"];

/// File name used when no other location is configured.
pub const DEFAULT_FILE_NAME: &str = "entries.csv";

/// Handle to the journal file. Opening a store performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Create the journal file with only the header row if it does not exist yet.
    ///
    /// Safe to call on every run. Returns `true` when the file was created.
    ///
    /// # Errors
    ///
    /// Returns [`SoulError::Io`] if the directory or file cannot be created.
    pub fn init(&self) -> Result<bool> {
        if self.path.exists() {
            debug!(path = %self.path.display(), "journal file already present");
            return Ok(false);
        }
        self.ensure_parent()?;

        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(e.into()),
        };
        file.write_all(&header_bytes()?)?;
        file.flush()?;

        info!(path = %self.path.display(), "created journal file");
        Ok(true)
    }

    /// Append one record.
    ///
    /// The row is serialised in memory and written with a single `write_all`,
    /// so a serialisation failure never leaves a partial row behind. The header
    /// is written first when the file is missing or empty.
    ///
    /// # Errors
    ///
    /// Returns [`SoulError::InvalidMood`] if the record breaks the mood invariant,
    /// [`SoulError::Csv`] if it cannot be serialised, or [`SoulError::Io`] on write failure.
    pub fn append(&self, record: &JournalRecord) -> Result<()> {
        record.validate()?;
        self.ensure_parent()?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;

        let len = file.metadata()?.len();
        let mut bytes = Vec::new();
        if len > 0 && !ends_with_newline(&mut file)? {
            bytes.push(b'\n');
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(len == 0)
            .from_writer(bytes);
        writer
            .serialize(record)
            .map_err(|e| SoulError::Csv(e.to_string()))?;
        let bytes = writer
            .into_inner()
            .map_err(|e| SoulError::Csv(e.to_string()))?;

        file.write_all(&bytes)?;
        file.flush()?;

        info!(
            path = %self.path.display(),
            date = %record.date,
            mood = record.mood,
            "appended journal record"
        );
        Ok(())
    }

    /// Load every record in file order.
    ///
    /// # Errors
    ///
    /// Returns [`SoulError::Io`] if the file is missing or unreadable and
    /// [`SoulError::CorruptRecord`] if a row cannot be parsed or breaks the
    /// record invariants.
    pub fn load(&self) -> Result<Vec<JournalRecord>> {
        let file = File::open(&self.path)?;
        read_records(file)
    }

    /// Like [`JournalStore::load`], but a missing file yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Same as [`JournalStore::load`] for any failure other than the file being absent.
    pub fn load_if_exists(&self) -> Result<Option<Vec<JournalRecord>>> {
        match File::open(&self.path) {
            Ok(file) => read_records(file).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "journal file not found");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

fn header_bytes() -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(HEADER)
        .map_err(|e| SoulError::Csv(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| SoulError::Csv(e.to_string()))
}

fn ends_with_newline(file: &mut File) -> Result<bool> {
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

fn read_records(file: File) -> Result<Vec<JournalRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| SoulError::Csv(e.to_string()))?
        .clone();
    if headers.is_empty() {
        debug!("journal file is empty");
        return Ok(Vec::new());
    }
    if headers.iter().ne(HEADER) {
        return Err(SoulError::CorruptRecord {
            line: 1,
            reason: format!(
                "expected header {}, found {}",
                HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        });
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| SoulError::CorruptRecord {
            line: e.position().map_or(0, |p| p.line()),
            reason: e.to_string(),
        })?;
        let line = row.position().map_or(0, |p| p.line());
        let record: JournalRecord =
            row.deserialize(Some(&headers))
                .map_err(|e| SoulError::CorruptRecord {
                    line,
                    reason: e.to_string(),
                })?;
        record.validate().map_err(|e| SoulError::CorruptRecord {
            line,
            reason: e.to_string(),
        })?;
        records.push(record);
    }

    debug!(count = records.len(), "loaded journal records");
    Ok(records)
}
