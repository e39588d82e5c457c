use tracing::Subscriber;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "chord_remote=debug,info"
    } else {
        "chord_remote=info"
    }
}

/// `RUST_LOG` 優先，否則依 verbose 決定
pub fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// 同一個過濾器套用在 compact 或 JSON 輸出上
pub fn build_subscriber(filter: EnvFilter, json: bool) -> impl Subscriber + Send + Sync + 'static {
    let compact = (!json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .compact()
    });
    // 非互動環境 (例如 systemd 或容器) 使用 JSON 格式
    let structured = json.then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .json()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(structured)
}

pub fn init_logger(verbose: bool, json: bool) {
    build_subscriber(default_filter(verbose), json).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn debug_enabled(verbose: bool, json: bool) -> bool {
        let subscriber = build_subscriber(EnvFilter::new(default_directives(verbose)), json);
        tracing::subscriber::with_default(subscriber, || {
            tracing::enabled!(target: "chord_remote::core::player", Level::DEBUG)
        })
    }

    #[test]
    fn test_json_logs_honour_verbose() {
        assert!(debug_enabled(true, true));
        assert!(!debug_enabled(false, true));
    }

    #[test]
    fn test_compact_logs_honour_verbose() {
        assert!(debug_enabled(true, false));
        assert!(!debug_enabled(false, false));
    }
}
