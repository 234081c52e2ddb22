//! Tabular CSV round-trip and object-store archiving for curve batches.

use std::collections::BTreeSet;

use parspot_core::{CurveBatch, CurveRow, Date};
use parspot_curves::pipeline::BatchOutcome;
use parspot_storage::ObjectStore;

use crate::error::{FeedError, FeedResult};

const DATE_COLUMN: &str = "Date";

/// Encodes a batch as a CSV table.
///
/// Columns are `Date` plus the union of maturities across the batch, in
/// increasing order. A maturity a row does not carry (for instance one
/// that failed to convert) becomes an empty cell - visibly missing in
/// the output table, never a stand-in number.
///
/// # Errors
///
/// Returns `FeedError::Csv` if encoding fails.
pub fn batch_to_csv(batch: &CurveBatch) -> FeedResult<Vec<u8>> {
    let maturities: BTreeSet<u32> = batch
        .iter()
        .flat_map(|(_, row)| row.maturities())
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec![DATE_COLUMN.to_string()];
    header.extend(maturities.iter().map(u32::to_string));
    writer.write_record(&header)?;

    for (date, row) in batch.iter() {
        let mut record = vec![date.to_string()];
        for days in &maturities {
            record.push(row.get(*days).map(|r| r.to_string()).unwrap_or_default());
        }
        writer.write_record(&record)?;
    }

    writer
        .into_inner()
        .map_err(|e| FeedError::Csv(csv::Error::from(e.into_error())))
}

/// Decodes a batch from a CSV table written by [`batch_to_csv`].
///
/// Empty cells are skipped, reproducing rows with missing maturities.
///
/// # Errors
///
/// Returns a `FeedError` on a malformed header or cell.
pub fn batch_from_csv(data: &[u8]) -> FeedResult<CurveBatch> {
    let mut reader = csv::Reader::from_reader(data);

    let headers = reader.headers()?.clone();
    let mut header_iter = headers.iter();
    if header_iter.next() != Some(DATE_COLUMN) {
        return Err(FeedError::unexpected_columns(
            &[DATE_COLUMN, "<maturity day-counts>"],
            &headers.iter().map(str::to_string).collect::<Vec<_>>(),
        ));
    }

    let mut maturities: Vec<u32> = Vec::new();
    for column in header_iter {
        let days: u32 = column
            .parse()
            .map_err(|_| FeedError::invalid_rate(column, "non-numeric maturity column"))?;
        maturities.push(days);
    }

    let mut batch = CurveBatch::new();
    for record in reader.records() {
        let record = record?;

        let date_cell = &record[0];
        let as_of =
            Date::parse(date_cell).map_err(|_| FeedError::invalid_date(date_cell))?;

        let mut row = CurveRow::new(as_of);
        for (days, cell) in maturities.iter().zip(record.iter().skip(1)) {
            if cell.is_empty() {
                continue;
            }
            let rate: f64 = cell
                .parse()
                .map_err(|_| FeedError::invalid_rate(days.to_string(), cell))?;
            row.insert(*days, rate)?;
        }
        batch.insert(row);
    }

    Ok(batch)
}

/// Archives a converted batch under `prefix` as two tables,
/// `{prefix}/spot.csv` and `{prefix}/ytm.csv`.
///
/// # Errors
///
/// Returns `FeedError::Storage` if a write fails. Callers treating
/// persistence as best-effort log the error and keep the computed
/// curves; nothing here consumes or invalidates the outcome.
pub fn archive_outcome(
    store: &dyn ObjectStore,
    prefix: &str,
    outcome: &BatchOutcome,
) -> FeedResult<()> {
    let spot = batch_to_csv(&outcome.spot_batch())?;
    store.write(&format!("{prefix}/spot.csv"), &spot)?;

    let ytm = batch_to_csv(&outcome.ytm_batch())?;
    store.write(&format!("{prefix}/ytm.csv"), &ytm)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parspot_storage::{InMemoryStore, StorageError};

    fn sample_batch() -> CurveBatch {
        let mut batch = CurveBatch::new();
        for (day, r1, r2) in [(2, 0.0301, 0.0312), (3, 0.0305, 0.0318)] {
            let as_of = Date::from_ymd(2025, 6, day).unwrap();
            batch.insert(CurveRow::from_points(as_of, [(365, r1), (730, r2)]).unwrap());
        }
        batch
    }

    #[test]
    fn test_csv_round_trip() {
        let batch = sample_batch();

        let bytes = batch_to_csv(&batch).unwrap();
        let back = batch_from_csv(&bytes).unwrap();

        assert_eq!(back, batch);
    }

    #[test]
    fn test_missing_maturity_is_empty_cell() {
        let mut batch = sample_batch();
        // Second day lost its 2Y point.
        let as_of = Date::from_ymd(2025, 6, 3).unwrap();
        batch.insert(CurveRow::from_points(as_of, [(365, 0.0305)]).unwrap());

        let bytes = batch_to_csv(&batch).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.lines().any(|l| l.ends_with(',')));

        let back = batch_from_csv(&bytes).unwrap();
        assert_eq!(back.get(as_of).unwrap().get(730), None);
        assert_eq!(back.get(as_of).unwrap().get(365), Some(0.0305));
    }

    #[test]
    fn test_from_csv_rejects_bad_header() {
        let err = batch_from_csv(b"When,365\n2025-06-02,0.03\n").unwrap_err();
        assert!(matches!(err, FeedError::UnexpectedColumns { .. }));

        let err = batch_from_csv(b"Date,1 Yr\n2025-06-02,0.03\n").unwrap_err();
        assert!(matches!(err, FeedError::InvalidRate { .. }));
    }

    #[test]
    fn test_archive_writes_both_tables() {
        use parspot_curves::pipeline::convert_batch;
        use parspot_curves::prelude::SolverConfig;

        let outcome = convert_batch(&sample_batch(), &SolverConfig::default());
        let store = InMemoryStore::new();

        archive_outcome(&store, "treasury/2025-06", &outcome).unwrap();

        let spot = store.read("treasury/2025-06/spot.csv").unwrap();
        let ytm = store.read("treasury/2025-06/ytm.csv").unwrap();

        let spot_batch = batch_from_csv(&spot).unwrap();
        assert_eq!(spot_batch, outcome.spot_batch());
        assert_eq!(batch_from_csv(&ytm).unwrap(), outcome.ytm_batch());
    }

    #[test]
    fn test_archive_failure_is_reported_not_hidden() {
        use parspot_curves::pipeline::convert_batch;
        use parspot_curves::prelude::SolverConfig;

        /// Store whose writes always fail.
        struct BrokenStore;

        impl ObjectStore for BrokenStore {
            fn backend_name(&self) -> &'static str {
                "broken"
            }
            fn read(&self, key: &str) -> Result<Vec<u8>, StorageError> {
                Err(StorageError::not_found(key))
            }
            fn write(&self, _key: &str, _data: &[u8]) -> Result<(), StorageError> {
                Err(StorageError::Backend("write refused".into()))
            }
            fn copy(&self, src: &str, _dst: &str) -> Result<(), StorageError> {
                Err(StorageError::not_found(src))
            }
            fn rename(&self, src: &str, _dst: &str) -> Result<(), StorageError> {
                Err(StorageError::not_found(src))
            }
            fn remove(&self, key: &str) -> Result<(), StorageError> {
                Err(StorageError::not_found(key))
            }
        }

        let outcome = convert_batch(&sample_batch(), &SolverConfig::default());
        let err = archive_outcome(&BrokenStore, "x", &outcome).unwrap_err();

        assert!(matches!(err, FeedError::Storage(_)));
        // The outcome is untouched and still fully usable.
        assert!(outcome.is_clean());
        assert_eq!(outcome.spot_batch().len(), 2);
    }
}
