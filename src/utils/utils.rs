use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use indicatif::{ProgressBar, ProgressStyle};

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))?;
    Ok(())
}

// 不確定進度的忙碌指示器，沒有百分比
pub struct BusyIndicator {
    pb: ProgressBar,
    start: Instant,
}

impl BusyIndicator {
    pub fn start(message: String, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner} {msg} [{elapsed_precise}]")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        };
        pb.set_message(message);
        BusyIndicator {
            pb,
            start: Instant::now(),
        }
    }

    pub fn finish(&self) {
        log::debug!("轉換耗時：{:.2} 秒", self.start.elapsed().as_secs_f64());
        self.pb.finish_and_clear();
    }
}

pub fn get_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn format_file_size(size: u64) -> String {
    if size < 1024 * 1024 {
        format!("{:.2} KB", size as f64 / 1024.0)
    } else {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "0.50 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_get_file_name() {
        assert_eq!(get_file_name(Path::new("/out/movie.mp3")), "movie.mp3");
    }

    #[test]
    fn test_hidden_busy_indicator() {
        let busy = BusyIndicator::start("轉換中".to_string(), true);
        busy.finish();
    }
}
