mod types;

pub use types::*;

use crate::{Error, Result};

impl Config {
    /// Check the configuration before any probing starts.
    ///
    /// Returns warnings for settings that work but are probably unintended.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotADirectory`] when the target is missing or is a
    /// plain file.
    pub fn validate(&self) -> Result<Vec<String>> {
        if !self.target.is_dir() {
            return Err(Error::NotADirectory(self.target.clone()));
        }

        let mut warnings = Vec::new();

        let cpus = num_cpus::get();
        if self.jobs > cpus {
            warnings.push(format!(
                "--jobs {} exceeds the {} available CPUs; probes will contend for cores",
                self.jobs, cpus
            ));
        }

        if let Some(path) = &self.ffprobe {
            if path.components().count() > 1 && !path.exists() {
                warnings.push(format!("ffprobe path does not exist: {}", path.display()));
            }
        }

        if self.min_ffprobe_version < DEFAULT_MIN_FFPROBE_VERSION {
            warnings.push(format!(
                "minimum ffprobe version {} is below {}; older releases may omit stream fields",
                self.min_ffprobe_version, DEFAULT_MIN_FFPROBE_VERSION
            ));
        }

        Ok(warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use avls_common::OutputMode;
    use semver::Version;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir) -> Config {
        Config {
            target: dir.path().to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.output, OutputFormat::Plain);
        assert_eq!(config.mode(), OutputMode::Human);
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert_eq!(config.min_ffprobe_version, Version::new(4, 1, 4));
        assert_eq!(config.jobs, 1);
        assert!(!config.recursive);
    }

    #[test]
    fn json_selects_machine_mode() {
        let config = Config {
            output: OutputFormat::Json,
            ..Default::default()
        };
        assert_eq!(config.mode(), OutputMode::Machine);
    }

    #[test]
    fn valid_config_has_no_warnings() {
        let dir = TempDir::new().unwrap();
        assert!(config_for(&dir).validate().unwrap().is_empty());
    }

    #[test]
    fn missing_target_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            target: dir.path().join("nope"),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::NotADirectory(_))));
    }

    #[test]
    fn oversubscribed_jobs_warn() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            jobs: num_cpus::get() + 1,
            ..config_for(&dir)
        };
        let warnings = config.validate().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("--jobs"));
    }

    #[test]
    fn low_minimum_version_warns() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            min_ffprobe_version: Version::new(3, 0, 0),
            ..config_for(&dir)
        };
        assert_eq!(config.validate().unwrap().len(), 1);
    }

    #[test]
    fn missing_ffprobe_path_warns() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            ffprobe: Some(dir.path().join("bin/ffprobe")),
            ..config_for(&dir)
        };
        let warnings = config.validate().unwrap();
        assert!(warnings[0].starts_with("ffprobe path does not exist"));
    }

    #[test]
    fn verbosity_flags() {
        assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(1, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(3, false), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(2, true), Verbosity::Quiet);
        assert_eq!(Verbosity::Quiet.log_filter(), "error");
        assert_eq!(Verbosity::Normal.log_filter(), "warn");
        assert!(Verbosity::Verbose.log_filter().contains("avls=debug"));
    }
}
