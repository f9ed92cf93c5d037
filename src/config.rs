use std::env;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::iter::repeat;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::data::page::{PageRequest, SortDirection, DEFAULT_PAGE_SIZE};
use crate::data::preference::rules::MAX_PREFERENCES_PER_STUDENT;
use crate::error::ConfigurationError;

pub static CONFIG_FILE_NAMES: &[&str] = &["settings.yml", "settings.yaml"];

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|it| it.parse().ok())
        .unwrap_or(default)
}

fn default_page_size() -> u32 {
    env_or("PAGE_SIZE", DEFAULT_PAGE_SIZE)
}

fn default_max_page_size() -> u32 {
    env_or("MAX_PAGE_SIZE", 100)
}

fn default_max_preferences() -> usize {
    env_or("MAX_PREFERENCES_PER_STUDENT", MAX_PREFERENCES_PER_STUDENT)
}

fn default_log_level() -> String {
    env::var("LOG_LEVEL").unwrap_or("info".to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    #[serde(skip)]
    file_path: PathBuf,

    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,

    #[serde(default = "default_max_preferences")]
    pub max_preferences_per_student: usize,

    /// `trace`..`error`, or `off`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::with_dir(config_dir())
    }
}

#[inline]
fn config_dir() -> PathBuf {
    PathBuf::from(env::var("CONFIG_DIR").unwrap_or("./config".to_string()))
}

fn find_first_subpath<P: AsRef<Path>, F: Fn(&Path) -> bool>(
    root: impl AsRef<Path>,
    subpaths: &[P],
    search: F,
) -> Option<PathBuf> {
    subpaths
        .iter()
        .zip(repeat(root.as_ref()))
        .map(|(b, a)| a.join(b))
        .find(|it: &PathBuf| search(it))
}

impl Settings {
    /// Defaults that [`Settings::save`] writes into `dir`.
    pub fn with_dir(dir: impl AsRef<Path>) -> Settings {
        Settings {
            file_path: dir.as_ref().join(CONFIG_FILE_NAMES[0]),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            max_preferences_per_student: default_max_preferences(),
            log_level: default_log_level(),
        }
    }

    pub fn load() -> Result<Settings, ConfigurationError> {
        Settings::load_from(config_dir())
    }

    pub fn load_from(dir: impl AsRef<Path>) -> Result<Settings, ConfigurationError> {
        let dir = dir.as_ref();
        let config_file = find_first_subpath(dir, CONFIG_FILE_NAMES, Path::exists)
            .ok_or_else(|| ConfigurationError::NotFound(dir.to_path_buf()))?;

        let file = File::open(&config_file)?;
        let mut settings: Settings = serde_yaml::from_reader(BufReader::new(file))?;
        settings.file_path = config_file;

        Ok(settings)
    }

    pub fn save(&self) -> Result<(), ConfigurationError> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.file_path)?;
        let mut out = BufWriter::new(file);
        serde_yaml::to_writer(&mut out, self)?;
        out.flush()?;
        Ok(())
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// `None` turns logging off. Unknown names fall back to `INFO`.
    pub fn log_level(&self) -> Option<Level> {
        let name = self.log_level.trim();
        if name.eq_ignore_ascii_case("off") {
            return None;
        }
        match Level::from_str(name) {
            Ok(level) => Some(level),
            Err(_) => {
                tracing::warn!("Unknown log level '{}', using INFO.", name);
                Some(Level::INFO)
            }
        }
    }

    /// Builds a page request from query parameters, applying the configured
    /// default and maximum page size.
    pub fn page_request(
        &self,
        page: Option<u32>,
        size: Option<u32>,
        sort_by: Option<&str>,
        direction: Option<&str>,
    ) -> PageRequest {
        let mut request = PageRequest::new(page.unwrap_or(0), size.unwrap_or(self.default_page_size))
            .clamp_size(self.max_page_size);
        if let Some(column) = sort_by {
            request = request.sorted(column, SortDirection::parse_lenient(direction));
        }
        request
    }
}
