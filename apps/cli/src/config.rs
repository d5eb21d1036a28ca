pub struct Config {
    pub data_dir: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let data_dir = std::env::var("SAVINGS_DATA_DIR").unwrap_or_else(|_| "./data".into());
        let log_format = std::env::var("SAVINGS_LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or(LogFormat::Text);
        Self {
            data_dir,
            log_format,
        }
    }

    /// Command-line flags take precedence over the environment.
    pub fn with_data_dir(mut self, data_dir: Option<String>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }
}
