//! Data-file loading.
//!
//! The upstream script writes dates in chronological order; display order is
//! most-recent-first, so the top-level sequence is reversed here at the load
//! seam. A missing or malformed file aborts the build: the data is
//! author-controlled and a broken deploy is preferable to an empty page.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

use crate::model::{DateEntry, PoolData};

/// Load a bare date array (goal/bet tracker variants), newest date first.
pub fn load_dates(path: &Path) -> Result<Vec<DateEntry>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let mut dates: Vec<DateEntry> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    dates.reverse();
    Ok(dates)
}

/// Load the pool object (playoff variant). The nested `games` sequence is the
/// date-ordered one, so the reversal applies there; the aggregate tables keep
/// their upstream order.
pub fn load_pool(path: &Path) -> Result<PoolData> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let mut pool: PoolData =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    pool.games.reverse();
    Ok(pool)
}

/// SHA-256 of the raw input bytes. Recorded in the build manifest and used by
/// the revalidation loop to skip rebuilds when the input has not changed.
pub fn file_sha256(path: &Path) -> Result<String> {
    let mut file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf).with_context(|| format!("reading {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
