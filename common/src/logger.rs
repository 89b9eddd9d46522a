use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Timestamped log lines on stderr, leaving stdout to the game display.
pub struct Logger {
    prefix: Option<String>,
    enabled: bool,
}

impl Logger {
    fn new(prefix: Option<String>, enabled: bool) -> Self {
        Self { prefix, enabled }
    }

    pub fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        if self.enabled {
            eprintln!("{}", self.format_line(file, line, message));
        }
    }
}

/// First call wins; later calls are ignored.
pub fn init_logger(prefix: Option<String>, enabled: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, enabled));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else if cfg!(not(test)) {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
