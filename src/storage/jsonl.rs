//! JSONL storage for persons
//!
//! Persons are stored one JSON object per line, in list order. Every field
//! is re-validated on load, so a hand-edited file with a bad value is
//! rejected with the offending line number.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::{AddressBook, Person};

/// Store for person records in JSONL format
pub struct PersonStore {
    path: PathBuf,
}

impl PersonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all persons in file order
    pub fn read_all(&self) -> Result<Vec<Person>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open person store: {}", self.path.display()))?;

        file.lock_shared()
            .context("Failed to acquire read lock on person store")?;

        let reader = BufReader::new(&file);
        let mut persons = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;

            if line.trim().is_empty() {
                continue;
            }

            let person: Person = serde_json::from_str(&line)
                .with_context(|| format!("Failed to parse person at line {}", line_num + 1))?;

            persons.push(person);
        }

        Ok(persons)
    }

    /// Loads the stored persons into an address book
    ///
    /// Fails if two lines describe the same person.
    pub fn load(&self) -> Result<AddressBook> {
        let mut book = AddressBook::new();
        for (i, person) in self.read_all()?.into_iter().enumerate() {
            book.add(person)
                .with_context(|| format!("Invalid record {} in {}", i + 1, self.path.display()))?;
        }
        Ok(book)
    }

    /// Writes all persons to the store (full rewrite)
    pub fn write_all(&self, persons: &[Person]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on person store")?;

            let mut writer = BufWriter::new(&file);

            for person in persons {
                let line = serde_json::to_string(person).context("Failed to serialize person")?;
                writeln!(writer, "{}", line).context("Failed to write person")?;
            }

            writer.flush().context("Failed to flush person store")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }

    /// Saves every person in the address book, ignoring any filter
    pub fn save(&self, book: &AddressBook) -> Result<()> {
        self.write_all(book.persons())
    }
}
