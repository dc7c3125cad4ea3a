//! Memoized parse cache keyed by raw file bytes.
//!
//! Re-uploading identical bytes must not re-parse the file. Entries are keyed
//! by the SHA-256 of the contents, so renamed copies of the same file share
//! one parse.

use std::collections::HashMap;
use std::sync::Arc;

use super::parser::{Parser, content_hash};
use super::source::DataTable;
use crate::error::Result;

/// Content-addressed cache of parsed tables.
#[derive(Default)]
pub struct ParseCache {
    entries: HashMap<String, Arc<DataTable>>,
}

impl ParseCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Parse `bytes` with `parser`, reusing a previous parse of identical bytes.
    pub fn get_or_parse(&mut self, parser: &Parser, bytes: &[u8]) -> Result<Arc<DataTable>> {
        let key = content_hash(bytes);
        if let Some(table) = self.entries.get(&key) {
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(parser.parse_bytes(bytes)?);
        self.entries.insert(key, Arc::clone(&table));
        Ok(table)
    }

    /// Number of cached parses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
