use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日誌輸出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 給人看的單行格式
    #[default]
    Compact,
    /// 每行一筆 JSON，方便串接其他工具
    Json,
}

impl LogFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

/// `RUST_LOG` 優先；否則依 verbose 決定本 crate 的等級。
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "solid_capabilities=debug,info"
    } else {
        "solid_capabilities=info"
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// 初始化全域 subscriber。日誌一律寫到 stderr，stdout 只留指令結果。
pub fn init_logger(verbose: bool, format: LogFormat) {
    let base = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(build_filter(verbose));
    match format {
        LogFormat::Compact => registry.with(base.compact()).init(),
        LogFormat::Json => registry.with(base.json()).init(),
    }
}
