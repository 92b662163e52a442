//! Generic record-fetch pipeline shared by every parameter table.
//!
//! This module owns the database lifecycle: it locates the database file
//! from the configuration, opens a read-only connection, prepares the
//! single-key SELECT for a table, steps it once, and hands the raw column
//! text to the schema's decoder. Table-specific readers only declare their
//! data shape through [`ParamTable`]; all orchestration lives here.
//!
//! Connection and statement handles are rusqlite RAII values, so they are
//! released on every exit path without explicit finalization.

use crate::app::services::value_parser::parse_numeric_list;
use crate::config::Config;
use crate::constants::DEFAULT_RECORD_ID;
use crate::{Error, Result};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Row, params};
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Shape declaration for one parameter table
///
/// Implementors name their table and column list and decode one row's
/// column text into a validated parameter set. `from_row` receives the
/// columns in declaration order, one entry per name in `COLUMNS`, and must
/// return a fully-populated value or an error; there is no partially
/// assigned state for callers to observe.
pub trait ParamTable: Sized {
    /// Table this parameter set is stored in
    const TABLE: &'static str;

    /// Columns selected from the table, in order
    const COLUMNS: &'static [&'static str];

    /// Decode one row's column text into a validated parameter set
    fn from_row(columns: &[String]) -> Result<Self>;
}

/// Loads one keyed record of a parameter table into its typed form
///
/// Construction resolves and checks the database file; the connection is
/// deferred to [`load`](Self::load), and each call opens its own
/// connection, so a reader holds no backend resources between calls.
#[derive(Debug, Clone)]
pub struct RecordReader<T: ParamTable> {
    db_path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: ParamTable> RecordReader<T> {
    /// Create a reader for table `T::TABLE` in the configured database
    ///
    /// # Errors
    /// * Returns `Error::DatabaseMissing` if the composed database path
    ///   does not exist on disk
    pub fn new(config: &Config) -> Result<Self> {
        let db_path = config.database_path();
        if !db_path.exists() {
            return Err(Error::database_missing(db_path));
        }

        Ok(Self {
            db_path,
            _marker: PhantomData,
        })
    }

    /// Path of the database file this reader queries
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Load the record with the default key
    pub fn load_default(&self) -> Result<T> {
        self.load(DEFAULT_RECORD_ID)
    }

    /// Load one record: connect, prepare the keyed SELECT, step once and
    /// decode the row
    ///
    /// Stages short-circuit at the first failure. A query that returns no
    /// row is reported as `Error::NoData`, distinct from backend errors.
    pub fn load(&self, id: i64) -> Result<T> {
        debug!(
            "Loading record {} from table '{}' in {}",
            id,
            T::TABLE,
            self.db_path.display()
        );

        let conn = self.connect()?;

        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            T::COLUMNS.join(", "),
            T::TABLE
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| Error::statement(T::TABLE, e))?;

        let mut rows = stmt
            .query(params![id])
            .map_err(|e| Error::statement(T::TABLE, e))?;

        match rows.next().map_err(|e| Error::query(T::TABLE, e))? {
            Some(row) => {
                let columns = read_text_columns(row, T::TABLE, T::COLUMNS)?;
                let params = T::from_row(&columns)?;
                debug!("Loaded parameter set from table '{}'", T::TABLE);
                Ok(params)
            }
            None => {
                warn!(
                    "No parameter record found in table '{}' for id {}",
                    T::TABLE,
                    id
                );
                Err(Error::no_data(T::TABLE, id))
            }
        }
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| Error::connection(&self.db_path, e))
    }
}

/// Read every expected column of the row as text
///
/// INTEGER and REAL columns are coerced to their text form; a NULL in any
/// expected column is a data-integrity error before anything is parsed.
fn read_text_columns(row: &Row<'_>, table: &str, columns: &[&str]) -> Result<Vec<String>> {
    let mut values = Vec::with_capacity(columns.len());

    for (index, column) in columns.iter().enumerate() {
        let text = match row.get_ref(index).map_err(|e| Error::query(table, e))? {
            ValueRef::Null => {
                return Err(Error::data_integrity(
                    table,
                    format!("column '{}' is NULL", column),
                ));
            }
            ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            ValueRef::Integer(value) => value.to_string(),
            ValueRef::Real(value) => value.to_string(),
            ValueRef::Blob(_) => {
                return Err(Error::data_integrity(
                    table,
                    format!("column '{}' holds a BLOB, expected numeric text", column),
                ));
            }
        };
        values.push(text);
    }

    Ok(values)
}

/// Decode a column and take its first value, for single-valued columns
pub(crate) fn first_value(table: &str, column: &str, raw: &str) -> Result<f64> {
    parse_numeric_list(raw).first().copied().ok_or_else(|| {
        Error::data_integrity(
            table,
            format!("column '{}' decoded to an empty value list", column),
        )
    })
}

/// Decode a column into a sequence that must contain at least one value
pub(crate) fn require_values(table: &str, column: &str, raw: &str) -> Result<Vec<f64>> {
    let values = parse_numeric_list(raw);
    if values.is_empty() {
        return Err(Error::data_integrity(
            table,
            format!("column '{}' decoded to an empty value list", column),
        ));
    }
    Ok(values)
}
