use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Which optional reference-month sources are active. Resolved once at
/// startup; the accountant consults a source only when its flag is on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Features {
    #[serde(default = "default_true")]
    pub month_to_calculate: bool,
    #[serde(default = "default_true")]
    pub chosen_month: bool,
    #[serde(default = "default_true")]
    pub history_month_filter: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Features {
    fn default() -> Self {
        Self {
            month_to_calculate: true,
            chosen_month: true,
            history_month_filter: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Document-store database file.
    pub database: String,
    /// Roster snapshot cache database file.
    pub roster_cache: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Hard cap the store imposes on operations per atomic batch.
    #[serde(default = "default_batch_hard_limit")]
    pub batch_hard_limit: usize,
    /// Gap deliberately left below the hard cap when planning batches.
    #[serde(default = "default_batch_margin")]
    pub batch_margin: usize,
    /// Audit identity override; falls back to the OS user.
    #[serde(default)]
    pub user: Option<String>,
    /// Default "chosen month" (YYYY-MM) for the elegido day count.
    #[serde(default)]
    pub chosen_month: Option<String>,
    #[serde(default)]
    pub features: Features,
}

fn default_collection() -> String {
    "registros_art".to_string()
}
fn default_batch_hard_limit() -> usize {
    500
}
fn default_batch_margin() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            roster_cache: Self::roster_cache_file().to_string_lossy().to_string(),
            collection: default_collection(),
            batch_hard_limit: default_batch_hard_limit(),
            batch_margin: default_batch_margin(),
            user: None,
            chosen_month: None,
            features: Features::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("artrack")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".artrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("artrack.conf")
    }

    /// Return the full path of the document-store database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("artrack.sqlite")
    }

    /// Return the full path of the roster cache database
    pub fn roster_cache_file() -> PathBuf {
        Self::config_dir().join("artrack_roster.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Largest batch the planner may emit: hard limit minus margin.
    pub fn max_per_batch(&self) -> usize {
        self.batch_hard_limit
            .saturating_sub(self.batch_margin)
            .max(1)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
