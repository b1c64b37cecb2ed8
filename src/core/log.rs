//! Diagnostic events for fallback transitions.
//!
//! With the `tracing` feature the events go to `tracing::warn!`. Without it they are printed
//! to stderr only when `MARKETDASH_DEBUG=1`.

macro_rules! fallback_warn {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::warn!($($arg)+);
        }
        #[cfg(not(feature = "tracing"))]
        {
            if std::env::var("MARKETDASH_DEBUG").ok().as_deref() == Some("1") {
                eprintln!("MARKETDASH_DEBUG: {}", format_args!($($arg)+));
            }
        }
    }};
}

pub(crate) use fallback_warn;
