//! 標準エラー出力へのロガー
//!
//! ログレベルは環境変数`NFA_REGEX_LOG`で指定する。
//! 指定がない場合や不正な値の場合はwarnとなる。
use log::{LevelFilter, Log, Metadata, Record};
use std::{env, str::FromStr};

/// ログレベルを指定する環境変数
pub const LOG_ENV: &str = "NFA_REGEX_LOG";

/// 標準エラー出力に書き出すロガー
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        StderrLogger { level }
    }

    /// 環境変数からログレベルを読み込んで生成
    pub fn from_env() -> Self {
        let level = env::var(LOG_ENV)
            .ok()
            .and_then(|s| parse_level(&s))
            .unwrap_or(LevelFilter::Warn);
        StderrLogger::new(level)
    }

    /// グローバルなロガーとして登録
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(s.trim()).ok()
}
