// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Expense;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use thiserror::Error;
use tracing::{error, warn};

/// Key under which the whole expense collection is stored.
pub const STORAGE_KEY: &str = "expense-tracker-expenses";

const WRITE_ATTEMPTS: u32 = 2;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend failed: {0}")]
    Backend(#[from] rusqlite::Error),
    #[error("stored expenses are unreadable: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("could not serialize expenses: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Whole-collection persistence of the expense list.
///
/// Backends only move one serialized payload in and out; decoding, retries
/// and the read-modify-write helpers live in the provided methods.
pub trait ExpenseStore {
    fn load_raw(&self) -> Result<Option<String>, StorageError>;
    fn save_raw(&self, payload: &str) -> Result<(), StorageError>;
    fn delete_raw(&self) -> Result<(), StorageError>;

    fn try_read_all(&self) -> Result<Vec<Expense>, StorageError> {
        match self.load_raw()? {
            None => Ok(Vec::new()),
            Some(s) => serde_json::from_str(&s).map_err(StorageError::Corrupt),
        }
    }

    /// Empty when nothing is stored or the payload cannot be read.
    fn read_all(&self) -> Vec<Expense> {
        match self.try_read_all() {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "falling back to an empty expense list");
                Vec::new()
            }
        }
    }

    fn write_all(&self, expenses: &[Expense]) -> Result<(), StorageError> {
        let payload = serde_json::to_string(expenses).map_err(StorageError::Serialize)?;
        let mut attempt = 1;
        loop {
            match self.save_raw(&payload) {
                Ok(()) => return Ok(()),
                Err(e) if attempt < WRITE_ATTEMPTS => {
                    warn!(error = %e, attempt, "expense write failed, retrying");
                    attempt += 1;
                }
                Err(e) => {
                    error!(error = %e, count = expenses.len(), "expense write failed");
                    return Err(e);
                }
            }
        }
    }

    /// Drops the record with `id` and returns what remains. Unknown ids
    /// leave the store untouched.
    fn remove_by_id(&self, id: &str) -> Result<Vec<Expense>, StorageError> {
        let mut all = self.try_read_all()?;
        let before = all.len();
        all.retain(|e| e.id != id);
        if all.len() != before {
            self.write_all(&all)?;
        }
        Ok(all)
    }

    fn clear_all(&self) -> Result<(), StorageError> {
        self.delete_raw()
    }
}

/// Key-value rows in the application database.
pub struct SqliteStore<'c> {
    conn: &'c Connection,
    key: String,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self::with_key(conn, STORAGE_KEY)
    }

    pub fn with_key(conn: &'c Connection, key: &str) -> Self {
        Self {
            conn,
            key: key.to_string(),
        }
    }
}

impl ExpenseStore for SqliteStore<'_> {
    fn load_raw(&self) -> Result<Option<String>, StorageError> {
        let v = self
            .conn
            .query_row(
                "SELECT value FROM storage WHERE key=?1",
                params![self.key],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v)
    }

    fn save_raw(&self, payload: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO storage(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![self.key, payload],
        )?;
        Ok(())
    }

    fn delete_raw(&self) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM storage WHERE key=?1", params![self.key])?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: &str) -> Self {
        Self {
            slot: RefCell::new(Some(payload.to_string())),
        }
    }

    pub fn payload(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl ExpenseStore for MemoryStore {
    fn load_raw(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.borrow().clone())
    }

    fn save_raw(&self, payload: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(payload.to_string());
        Ok(())
    }

    fn delete_raw(&self) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}
