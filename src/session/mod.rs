use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{info, warn};

use crate::config::Config;
use crate::engine::filter::{Availability, check_availability, select_range};
use crate::engine::record::RecordSet;
use crate::error::{QuizError, Result};
use crate::generator::composer::compose;
use crate::generator::{SelectionCriteria, TestItem};
use crate::layout::engine::PageLayoutEngine;
use crate::layout::labels::DocumentLabels;
use crate::layout::TestHeader;
use crate::render::{DocumentRenderer, artifact_filename};
use crate::store::artifact_store::ArtifactStore;

/// Records and test carried between import, generate and export.
///
/// State only changes by wholesale replacement after an operation has fully
/// succeeded; a failing operation leaves everything as it was.
pub struct Session {
    pub config: Config,
    records: Option<RecordSet>,
    test: Option<Vec<TestItem>>,
    rng: SmallRng,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, rng: SmallRng) -> Self {
        Self {
            config,
            records: None,
            test: None,
            rng,
        }
    }

    pub fn records(&self) -> Option<&RecordSet> {
        self.records.as_ref()
    }

    pub fn test(&self) -> Option<&[TestItem]> {
        self.test.as_deref()
    }

    /// Parse `text` and make it the current record set. Returns the number
    /// of records loaded. Any previous test is discarded on success.
    pub fn import(&mut self, text: &str) -> Result<usize> {
        let records = match self.config.parser().parse(text) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "import rejected, keeping previous records");
                return Err(e);
            }
        };

        let count = records.len();
        info!(
            count,
            min = records.min_number(),
            max = records.max_number(),
            "imported vocabulary"
        );
        self.records = Some(records);
        self.test = None;
        Ok(count)
    }

    /// Read `path` and import it. Bytes that are not valid UTF-8 become
    /// U+FFFD, so only the lines they damage can be lost.
    pub fn import_file(&mut self, path: &Path) -> Result<usize> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);
        if matches!(text, Cow::Owned(_)) {
            warn!(path = %path.display(), "input is not valid UTF-8, invalid bytes replaced");
        }
        self.import(&text)
    }

    /// Pool size for a prospective request; `None` before the first import.
    pub fn availability(&self, start: i64, end: i64, requested: usize) -> Option<Availability> {
        self.records
            .as_ref()
            .map(|records| check_availability(&select_range(records, start, end), requested))
    }

    pub fn generate(&mut self, criteria: &SelectionCriteria) -> Result<&[TestItem]> {
        let records = self.records.as_ref().ok_or(QuizError::NoRecords)?;
        let eligible = select_range(records, criteria.start_num, criteria.end_num);
        let items = compose(&eligible, criteria, &mut self.rng)?;

        info!(
            items = items.len(),
            start = criteria.start_num,
            end = criteria.end_num,
            "generated test"
        );
        let items = self.test.insert(items);
        Ok(items.as_slice())
    }

    /// Lay out, render and write the current test. Returns the written path.
    pub fn export(
        &self,
        renderer: &dyn DocumentRenderer,
        labels: &DocumentLabels,
        date: NaiveDate,
        store: &ArtifactStore,
    ) -> Result<PathBuf> {
        let items = self.test.as_deref().ok_or(QuizError::NoTest)?;

        let engine = PageLayoutEngine::new(&self.config.layout, labels);
        let doc = engine.layout_document(items, &TestHeader { date });
        let bytes = renderer.render(&doc, &self.config.layout)?;

        let name = artifact_filename(&labels.file_prefix, date, renderer.extension());
        info!(pages = doc.page_count, file = %name, "exporting test");
        store.write(&name, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::DirectionMode;
    use crate::render::TextRenderer;

    const WORDS: &str = "1,cat,ねこ\n2,dog,いぬ\n3,bird,とり\n";

    fn criteria(start: i64, end: i64, count: usize) -> SelectionCriteria {
        SelectionCriteria {
            start_num: start,
            end_num: end,
            question_count: count,
            direction_mode: DirectionMode::FrontToBack,
        }
    }

    #[test]
    fn test_failed_import_keeps_previous_records() {
        let mut session = Session::with_seed(Config::default(), 1);
        assert_eq!(session.import(WORDS).unwrap(), 3);
        assert!(matches!(session.import("garbage\n"), Err(QuizError::Parse)));
        assert_eq!(session.records().unwrap().len(), 3);
    }

    #[test]
    fn test_new_import_replaces_records_and_clears_test() {
        let mut session = Session::with_seed(Config::default(), 1);
        session.import(WORDS).unwrap();
        session.generate(&criteria(1, 3, 2)).unwrap();
        assert!(session.test().is_some());

        session.import("10,sun,たいよう").unwrap();
        assert_eq!(session.records().unwrap().len(), 1);
        assert!(session.test().is_none());
    }

    #[test]
    fn test_generate_before_import() {
        let mut session = Session::with_seed(Config::default(), 1);
        assert!(matches!(
            session.generate(&criteria(1, 3, 1)),
            Err(QuizError::NoRecords)
        ));
        assert!(session.availability(1, 3, 1).is_none());
    }

    #[test]
    fn test_failed_generate_keeps_previous_test() {
        let mut session = Session::with_seed(Config::default(), 3);
        session.import(WORDS).unwrap();
        let first: Vec<i64> = session
            .generate(&criteria(1, 3, 2))
            .unwrap()
            .iter()
            .map(|i| i.record.number)
            .collect();

        let err = session.generate(&criteria(1, 2, 5)).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InsufficientData {
                available: 2,
                requested: 5
            }
        ));
        let kept: Vec<i64> = session.test().unwrap().iter().map(|i| i.record.number).collect();
        assert_eq!(kept, first);
    }

    #[test]
    fn test_availability_reports_range() {
        let mut session = Session::with_seed(Config::default(), 1);
        session.import(WORDS).unwrap();
        let a = session.availability(2, 3, 3).unwrap();
        assert_eq!(a.available, 2);
        assert!(!a.sufficient);
        assert_eq!(session.availability(3, 1, 1).unwrap().available, 0);
    }

    #[test]
    fn test_import_file_tolerates_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.csv");
        fs::write(&path, b"1,cat,neko\n2,dog,inu\n3,bird,\xff\xfe\n\xff,\xfe\n").unwrap();

        let mut session = Session::with_seed(Config::default(), 1);
        assert_eq!(session.import_file(&path).unwrap(), 3);
        let records = session.records().unwrap().as_slice();
        assert_eq!(records[0].back, "neko");
        assert_eq!(records[1].back, "inu");
        assert_eq!(records[2].back, "\u{fffd}\u{fffd}");
    }

    #[test]
    fn test_import_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::with_seed(Config::default(), 1);
        let err = session.import_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, QuizError::Io(_)));
        assert!(session.records().is_none());
    }

    #[test]
    fn test_export_without_test() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();
        let mut session = Session::with_seed(Config::default(), 1);
        session.import(WORDS).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let err = session
            .export(&TextRenderer::new(80, 66), &DocumentLabels::default(), date, &store)
            .unwrap_err();
        assert!(matches!(err, QuizError::NoTest));
    }
}
