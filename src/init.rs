use env_logger::Env;

/// 預設日誌過濾等級，可用 `RUST_LOG` 覆寫
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// 初始化日誌
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_timestamp_secs()
        .try_init();
}
