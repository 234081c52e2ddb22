//! The daily Treasury yields dataset workflow.

use std::sync::Arc;

use parspot_curves::pipeline::{convert_batch, BatchOutcome};
use parspot_curves::prelude::SolverConfig;
use parspot_storage::ObjectStore;

use crate::archive::archive_outcome;
use crate::error::FeedResult;
use crate::treasury::ParRateSource;

/// Daily par-to-yield workflow: load a par-rate batch from a source,
/// convert every date, and optionally archive the spot and YTM tables.
///
/// Archiving is best-effort by contract: a storage failure is logged and
/// the computed curves are returned regardless. Only the load step can
/// fail the run, since without input there is nothing to compute.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use parspot_feeds::{CsvParRateSource, TreasuryDailyYields};
/// use parspot_storage::FsObjectStore;
///
/// let dataset = TreasuryDailyYields::new(CsvParRateSource::new("daily-rates.csv"))
///     .with_archive(Arc::new(FsObjectStore::new("./archive")), "treasury/2025");
///
/// let outcome = dataset.run().unwrap();
/// println!("{outcome}");
/// ```
pub struct TreasuryDailyYields {
    source: Box<dyn ParRateSource>,
    archive: Option<(Arc<dyn ObjectStore>, String)>,
    solver: SolverConfig,
}

impl TreasuryDailyYields {
    /// Creates a dataset over a par-rate source.
    pub fn new(source: impl ParRateSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            archive: None,
            solver: SolverConfig::default(),
        }
    }

    /// Archives converted tables to `store` under `prefix`.
    #[must_use]
    pub fn with_archive(mut self, store: Arc<dyn ObjectStore>, prefix: impl Into<String>) -> Self {
        self.archive = Some((store, prefix.into()));
        self
    }

    /// Overrides the yield solver configuration.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Loads, converts, and (best-effort) archives one batch.
    ///
    /// # Errors
    ///
    /// Returns a `FeedError` only if the source fails; conversion records
    /// per-maturity failures inside the outcome, and archive failures are
    /// logged without discarding results.
    pub fn run(&self) -> FeedResult<BatchOutcome> {
        let batch = self.source.fetch()?;
        log::debug!("loaded {} par-rate rows", batch.len());

        let outcome = convert_batch(&batch, &self.solver);

        if let Some((store, prefix)) = &self.archive {
            if let Err(err) = archive_outcome(store.as_ref(), prefix, &outcome) {
                log::warn!(
                    "archive to '{}' backend failed, keeping results: {err}",
                    store.backend_name()
                );
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::batch_from_csv;
    use crate::error::FeedError;
    use crate::treasury::parse_par_rate_csv;
    use parspot_core::CurveBatch;
    use parspot_storage::{InMemoryStore, StorageError, StorageResult};

    const SAMPLE: &str = "\
Date,1 Mo,1.5 Month,2 Mo,3 Mo,4 Mo,6 Mo,1 Yr,2 Yr,3 Yr,5 Yr,7 Yr,10 Yr,20 Yr,30 Yr
06/02/2025,4.35,4.34,4.34,4.33,4.31,4.22,4.05,3.90,3.87,3.96,4.13,4.26,4.82,4.89
06/03/2025,4.36,4.35,4.35,4.34,4.32,4.23,4.06,3.92,3.88,3.98,4.15,4.28,4.83,4.90
";

    struct StaticSource(&'static str);

    impl ParRateSource for StaticSource {
        fn fetch(&self) -> FeedResult<CurveBatch> {
            parse_par_rate_csv(self.0.as_bytes())
        }
    }

    struct FailingSource;

    impl ParRateSource for FailingSource {
        fn fetch(&self) -> FeedResult<CurveBatch> {
            Err(FeedError::invalid_date("source offline"))
        }
    }

    struct RefusingStore;

    impl ObjectStore for RefusingStore {
        fn backend_name(&self) -> &'static str {
            "refusing"
        }
        fn read(&self, key: &str) -> StorageResult<Vec<u8>> {
            Err(StorageError::not_found(key))
        }
        fn write(&self, _key: &str, _data: &[u8]) -> StorageResult<()> {
            Err(StorageError::Backend("disk full".into()))
        }
        fn copy(&self, src: &str, _dst: &str) -> StorageResult<()> {
            Err(StorageError::not_found(src))
        }
        fn rename(&self, src: &str, _dst: &str) -> StorageResult<()> {
            Err(StorageError::not_found(src))
        }
        fn remove(&self, key: &str) -> StorageResult<()> {
            Err(StorageError::not_found(key))
        }
    }

    #[test]
    fn test_run_converts_and_archives() {
        let store = Arc::new(InMemoryStore::new());
        let dataset = TreasuryDailyYields::new(StaticSource(SAMPLE))
            .with_archive(store.clone(), "treasury/2025-06");

        let outcome = dataset.run().unwrap();

        assert_eq!(outcome.len(), 2);
        assert!(outcome.is_clean());

        let archived = store.read("treasury/2025-06/ytm.csv").unwrap();
        assert_eq!(batch_from_csv(&archived).unwrap(), outcome.ytm_batch());
    }

    #[test]
    fn test_run_without_archive() {
        let outcome = TreasuryDailyYields::new(StaticSource(SAMPLE)).run().unwrap();
        assert_eq!(outcome.len(), 2);
    }

    #[test]
    fn test_storage_failure_keeps_results() {
        let dataset = TreasuryDailyYields::new(StaticSource(SAMPLE))
            .with_archive(Arc::new(RefusingStore), "x");

        // The run still succeeds and the curves are all there.
        let outcome = dataset.run().unwrap();
        assert_eq!(outcome.len(), 2);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_source_failure_aborts() {
        let result = TreasuryDailyYields::new(FailingSource).run();
        assert!(result.is_err());
    }
}
