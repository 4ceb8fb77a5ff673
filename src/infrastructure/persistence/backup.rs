//! Line-oriented backup of the URL store.
//!
//! One record per line:
//!
//! ```text
//! <identifier>[<chainId>,<chainId>,...]:<longURL>
//! ```
//!
//! An empty chain renders as `[]`. Writes are a plain overwrite of the
//! backup file; atomicity is not guaranteed. Loading tolerates a missing
//! file (first run) and skips malformed lines with a warning rather than
//! refusing the whole file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::domain::entities::UrlRecord;
use crate::domain::store::UrlStore;
use crate::error::StoreError;

/// Serializes every record and overwrites the backup file.
///
/// # Errors
///
/// Surfaces the underlying [`io::Error`] as [`StoreError::Io`]; the write
/// is never retried here.
pub fn backup(store: &UrlStore, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let mut contents = String::new();
    for record in store.records() {
        render_line(record, &mut contents);
    }
    std::fs::write(path, contents)?;
    Ok(())
}

/// Reconstructs a store from the backup file.
///
/// A missing file is not an error: it is created empty and an empty store
/// is returned. Malformed lines are skipped with a warning carrying the
/// line number.
pub fn load(path: impl AsRef<Path>) -> Result<UrlStore, StoreError> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            File::create(path)?;
            tracing::info!(path = %path.display(), "created empty backup file");
            return Ok(UrlStore::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut store = UrlStore::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        match parse_line(&line) {
            Some(record) => store.insert(record),
            None => {
                tracing::warn!(line = index + 1, "skipping malformed backup line");
            }
        }
    }
    Ok(store)
}

fn render_line(record: &UrlRecord, out: &mut String) {
    out.push_str(&record.id);
    out.push('[');
    out.push_str(&record.collision_chain.join(","));
    out.push_str("]:");
    out.push_str(&record.long_url);
    out.push('\n');
}

/// Splits on the first `[`, then the first `]`, then the `:` that
/// introduces the URL. Lines missing any of the three are malformed.
fn parse_line(line: &str) -> Option<UrlRecord> {
    let (id, rest) = line.split_once('[')?;
    let (chain, rest) = rest.split_once(']')?;
    let long_url = rest.strip_prefix(':')?;

    if id.is_empty() || long_url.is_empty() {
        return None;
    }

    let collision_chain = if chain.is_empty() {
        Vec::new()
    } else {
        chain.split(',').map(str::to_string).collect()
    };

    Some(UrlRecord {
        id: id.to_string(),
        long_url: long_url.to_string(),
        collision_chain,
    })
}
