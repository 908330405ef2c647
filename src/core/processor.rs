use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{ExitSeverity, SaveFormat, SwapOutcome, SwapRequest};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Drives the swap engine over a list of save dumps.
pub struct SaveSwapper<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

/// Per-file results of a run plus the accumulated worst severity.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub succeeded: Vec<SwapOutcome>,
    pub failed: Vec<(PathBuf, ExitSeverity)>,
    pub severity: ExitSeverity,
}

impl RunSummary {
    /// Record one file's result, returning the summary so it can be folded.
    pub fn record(mut self, path: &Path, result: Result<SwapOutcome>) -> Self {
        match result {
            Ok(outcome) => self.succeeded.push(outcome),
            Err(e) => {
                let severity = e.severity();
                self.severity = self.severity.worst(severity);
                self.failed.push((path.to_path_buf(), severity));
            }
        }
        self
    }

    pub fn exit_code(&self) -> i32 {
        self.severity.code()
    }
}

impl<S: Storage, C: ConfigProvider> SaveSwapper<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Swap a single file in place, backing it up first if enabled.
    ///
    /// Nothing is written, backup included, unless the swap succeeds.
    pub fn process_path(&self, path: &Path) -> Result<SwapOutcome> {
        let data = self.storage.read_file(path)?;
        let mode = self.config.swap_mode();

        let (request, format) = match self.config.force_padding() {
            Some(padding) => {
                tracing::debug!("{}: using forced padding of {} bytes", path.display(), padding);
                (SwapRequest::forced(&data, mode, padding), None)
            }
            None => {
                let format = SaveFormat::from_size(data.len())?;
                tracing::debug!("{}: detected {}", path.display(), format);
                (SwapRequest::detected(&data, mode, format), Some(format))
            }
        };

        let swapped = request.execute()?;

        let backup = if self.config.backup_enabled() {
            let backup = self.storage.backup_file(path)?;
            tracing::info!("Backed up {} to {}", path.display(), backup.display());
            Some(backup)
        } else {
            None
        };

        self.storage.write_file(path, &swapped)?;
        tracing::info!("Swapped {} ({}, {} bytes)", path.display(), mode, swapped.len());

        Ok(SwapOutcome {
            path: path.to_path_buf(),
            len: swapped.len(),
            format,
            backup,
        })
    }

    /// Process every path in order. A failing file is logged and skipped.
    pub fn run<P: AsRef<Path>>(&self, paths: &[P]) -> RunSummary {
        paths.iter().fold(RunSummary::default(), |summary, path| {
            let path = path.as_ref();
            let result = self.process_path(path);

            if let Err(e) = &result {
                tracing::error!("{}", e);
                tracing::warn!("Suggestion: {}", e.recovery_suggestion());
            }

            summary.record(path, result)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SwapMode;
    use crate::utils::error::SaveSwapError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockStorage {
        files: Mutex<HashMap<PathBuf, Vec<u8>>>,
        read_only: bool,
    }

    impl MockStorage {
        fn with_file(self, path: &str, data: Vec<u8>) -> Self {
            self.files.lock().unwrap().insert(PathBuf::from(path), data);
            self
        }

        fn read_only(mut self) -> Self {
            self.read_only = true;
            self
        }

        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(Path::new(path)).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
            self.files
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| SaveSwapError::Read {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
        }

        fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
            if self.read_only {
                return Err(SaveSwapError::Write {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                });
            }
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), data.to_vec());
            Ok(())
        }

        fn backup_file(&self, path: &Path) -> Result<PathBuf> {
            let data = self.read_file(path)?;
            let mut backup = path.as_os_str().to_owned();
            backup.push(".bak");
            let backup = PathBuf::from(backup);
            self.write_file(&backup, &data)?;
            Ok(backup)
        }
    }

    struct TestConfig {
        mode: SwapMode,
        force_padding: Option<usize>,
        backup: bool,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                mode: SwapMode::Both,
                force_padding: None,
                backup: true,
            }
        }
    }

    impl ConfigProvider for TestConfig {
        fn swap_mode(&self) -> SwapMode {
            self.mode
        }

        fn force_padding(&self) -> Option<usize> {
            self.force_padding
        }

        fn backup_enabled(&self) -> bool {
            self.backup
        }
    }

    fn pattern(repeats: usize) -> Vec<u8> {
        b"1234".repeat(repeats)
    }

    #[test]
    fn test_process_detected_size() {
        let storage = MockStorage::default().with_file("game.eep", pattern(128));
        let swapper = SaveSwapper::new(storage, TestConfig::default());

        let outcome = swapper.process_path(Path::new("game.eep")).unwrap();

        assert_eq!(outcome.format, Some(SaveFormat::Eeprom4k));
        assert_eq!(outcome.len, 512);
        assert_eq!(outcome.backup, Some(PathBuf::from("game.eep.bak")));
        assert_eq!(swapper.storage().get_file("game.eep"), Some(b"4321".repeat(128)));
        assert_eq!(swapper.storage().get_file("game.eep.bak"), Some(pattern(128)));
    }

    #[test]
    fn test_process_without_backup() {
        let storage = MockStorage::default().with_file("game.sra", pattern(8192));
        let config = TestConfig {
            mode: SwapMode::WordsOnly,
            backup: false,
            ..Default::default()
        };
        let swapper = SaveSwapper::new(storage, config);

        let outcome = swapper.process_path(Path::new("game.sra")).unwrap();

        assert_eq!(outcome.format, Some(SaveFormat::Sram256k));
        assert_eq!(outcome.backup, None);
        assert_eq!(swapper.storage().get_file("game.sra"), Some(b"3412".repeat(8192)));
        assert_eq!(swapper.storage().get_file("game.sra.bak"), None);
    }

    #[test]
    fn test_unrecognized_size_leaves_file_alone() {
        let storage = MockStorage::default().with_file("big.bin", pattern(100_000));
        let swapper = SaveSwapper::new(storage, TestConfig::default());

        let err = swapper.process_path(Path::new("big.bin")).unwrap_err();

        assert_eq!(err.severity(), ExitSeverity::UnrecognizedSize);
        assert_eq!(swapper.storage().get_file("big.bin"), Some(pattern(100_000)));
        assert_eq!(swapper.storage().get_file("big.bin.bak"), None);
    }

    #[test]
    fn test_forced_padding_skips_classifier() {
        let storage = MockStorage::default().with_file("odd.bin", pattern(1000));
        let config = TestConfig {
            mode: SwapMode::BytesOnly,
            force_padding: Some(0),
            backup: false,
        };
        let swapper = SaveSwapper::new(storage, config);

        let outcome = swapper.process_path(Path::new("odd.bin")).unwrap();

        assert_eq!(outcome.format, None);
        assert_eq!(swapper.storage().get_file("odd.bin"), Some(b"2143".repeat(1000)));
    }

    #[test]
    fn test_forced_padding_misaligned() {
        let storage = MockStorage::default().with_file("odd.bin", pattern(1000));
        let config = TestConfig {
            force_padding: Some(3000),
            ..Default::default()
        };
        let swapper = SaveSwapper::new(storage, config);

        let err = swapper.process_path(Path::new("odd.bin")).unwrap_err();

        assert_eq!(err.severity(), ExitSeverity::MisalignedSize);
        assert_eq!(swapper.storage().get_file("odd.bin.bak"), None);
    }

    #[test]
    fn test_write_failure_is_io_severity() {
        let storage = MockStorage::default()
            .with_file("game.eep", pattern(128))
            .read_only();
        let config = TestConfig {
            backup: false,
            ..Default::default()
        };
        let swapper = SaveSwapper::new(storage, config);

        let err = swapper.process_path(Path::new("game.eep")).unwrap_err();

        assert!(matches!(err, SaveSwapError::Write { .. }));
        assert_eq!(err.severity(), ExitSeverity::Io);
        assert_eq!(swapper.storage().get_file("game.eep"), Some(pattern(128)));

        let summary = swapper.run(&["game.eep"]);
        assert_eq!(summary.exit_code(), 10);
    }

    #[test]
    fn test_run_aggregates_worst_severity() {
        let storage = MockStorage::default()
            .with_file("ok.eep", pattern(128))
            .with_file("big.bin", pattern(100_000));
        let swapper = SaveSwapper::new(storage, TestConfig::default());

        let summary = swapper.run(&["ok.eep", "big.bin", "missing.eep"]);

        assert_eq!(summary.succeeded.len(), 1);
        assert_eq!(
            summary.failed,
            vec![
                (PathBuf::from("big.bin"), ExitSeverity::UnrecognizedSize),
                (PathBuf::from("missing.eep"), ExitSeverity::Io),
            ]
        );
        assert_eq!(summary.exit_code(), 20);
    }

    #[test]
    fn test_run_all_succeed() {
        let storage = MockStorage::default()
            .with_file("a.eep", pattern(128))
            .with_file("b.eep", pattern(512));
        let swapper = SaveSwapper::new(storage, TestConfig::default());

        let summary = swapper.run(&["a.eep", "b.eep"]);

        assert!(summary.failed.is_empty());
        assert_eq!(summary.exit_code(), 0);
    }
}
