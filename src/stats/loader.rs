use super::{CharacterStatistics, CharacterStatisticsStore, LENGTH_BUCKETS, ORDER_BUCKETS};
use crate::error::{NameDividerError, NdResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

const COLUMN_COUNT: usize = 1 + ORDER_BUCKETS + LENGTH_BUCKETS;

pub fn load_statistics_from_path<P: AsRef<Path>>(path: P) -> NdResult<CharacterStatisticsStore> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let store = load_statistics(file)?;
    info!(
        "📚 Loaded statistics for {} characters from {:?}",
        store.len(),
        path
    );
    Ok(store)
}

/// Reads the character table: a header row, then
/// `character, 6 order counts, 8 length counts` per row.
///
/// Short rows and non-integer counts are fatal. Rows whose key is not exactly
/// one character can never be looked up and are skipped.
pub fn load_statistics<R: Read>(reader: R) -> NdResult<CharacterStatisticsStore> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0;

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        // header is line 1
        let line = row_idx + 2;

        if rec.len() < COLUMN_COUNT {
            return Err(NameDividerError::Validation(format!(
                "Statistics row {} has {} columns, expected {}",
                line,
                rec.len(),
                COLUMN_COUNT
            )));
        }

        let key = rec[0].trim();
        let mut chars = key.chars();
        let character = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                skipped += 1;
                continue;
            }
        };

        let mut order_counts = [0u32; ORDER_BUCKETS];
        for (i, slot) in order_counts.iter_mut().enumerate() {
            *slot = parse_count(&rec[1 + i], line)?;
        }
        let mut length_counts = [0u32; LENGTH_BUCKETS];
        for (i, slot) in length_counts.iter_mut().enumerate() {
            *slot = parse_count(&rec[1 + ORDER_BUCKETS + i], line)?;
        }

        records.push(CharacterStatistics {
            character,
            order_counts,
            length_counts,
        });
    }

    if skipped > 0 {
        warn!("⚠️  Skipped {} statistics rows without a single-character key.", skipped);
    }

    Ok(CharacterStatisticsStore::from_records(records))
}

fn parse_count(raw: &str, line: usize) -> NdResult<u32> {
    raw.trim().parse::<u32>().map_err(|_| {
        NameDividerError::Validation(format!(
            "Statistics row {} has an invalid count '{}'",
            line, raw
        ))
    })
}
