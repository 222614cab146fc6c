//! Opt-in tracing for embedded use. Compiled to no-ops unless the `trace`
//! feature is on; `RUST_LOG` overrides the default filter.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "trace")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "sebeol_engine=debug,sebeol_session=debug,sebeol_core=debug";

#[cfg(feature = "trace")]
const LOG_FILE: &str = "sebeol-trace.jsonl";

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Append JSON events to `<log_dir>/sebeol-trace.jsonl`. Later calls are ignored.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // Host editors keep the engine loaded for the whole process.
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}

/// C entry point for `init_tracing`; a null or non-UTF-8 path is ignored.
#[no_mangle]
pub extern "C" fn sebeol_init_tracing(log_dir: *const std::ffi::c_char) {
    if log_dir.is_null() {
        return;
    }
    let Ok(dir) = unsafe { std::ffi::CStr::from_ptr(log_dir) }.to_str() else {
        return;
    };
    init_tracing(std::path::Path::new(dir));
}
