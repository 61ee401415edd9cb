//! Tracing support for the algorithms and their timing.
//!
//! With the `tracing` feature enabled, the algorithms emit `tracing` spans and
//! events, and this module offers a subscriber that accumulates per-span wall
//! time.  With the feature disabled, the same names resolve to no-ops.

use std::time::Duration;

/// Accumulated wall time of every closed span with one name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanTiming {
    pub name: &'static str,
    pub total: Duration,
    pub count: usize,
}

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing::{Id, Subscriber, level_filters::LevelFilter, span::Attributes};
    use tracing_subscriber::{
        Layer, Registry,
        layer::{Context, SubscriberExt},
        registry::LookupSpan,
        util::SubscriberInitExt,
    };

    use super::SpanTiming;

    thread_local! {
        static TOTALS: RefCell<BTreeMap<&'static str, (Duration, usize)>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    /// Span extension holding the moment the span was created.
    struct OpenedAt(Instant);

    /// Adds the lifetime of each closed span to the per-thread totals.
    struct AlgorithmTimer;

    impl<S> Layer<S> for AlgorithmTimer
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(&self, _attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(OpenedAt(Instant::now()));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(OpenedAt(opened)) = span.extensions_mut().remove::<OpenedAt>() else {
                return;
            };
            let name = span.metadata().name();
            TOTALS.with(|totals| {
                let mut totals = totals.borrow_mut();
                let (total, count) = totals.entry(name).or_default();
                *total += opened.elapsed();
                *count += 1;
            });
        }
    }

    fn install(level: Option<LevelFilter>) {
        let printer = level.map(|level| {
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(level)
        });
        // Another global subscriber may already be installed; keep it.
        let _ = Registry::default()
            .with(AlgorithmTimer)
            .with(printer)
            .try_init();
    }

    /// Installs the timing subscriber as the global default.  Only the first
    /// call of this or [`init_logging`] has any effect.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| install(None));
    }

    /// Installs a subscriber that prints events at `level` or above to
    /// stderr, in addition to recording span timings.
    pub fn init_logging(level: LevelFilter) {
        static INIT: Once = Once::new();
        INIT.call_once(|| install(Some(level)));
    }

    /// Span timings recorded on this thread, longest total first.
    pub fn method_timings() -> Vec<SpanTiming> {
        let mut timings: Vec<SpanTiming> = TOTALS.with(|totals| {
            totals
                .borrow()
                .iter()
                .map(|(&name, &(total, count))| SpanTiming { name, total, count })
                .collect()
        });
        timings.sort_by(|a, b| b.total.cmp(&a.total));
        timings
    }

    #[doc(hidden)]
    pub fn dump_method_timings() {
        eprintln!("Span timings (desc):");
        for SpanTiming { name, total, count } in method_timings() {
            eprintln!("  {name}: {total:?} ({count}x)");
        }
    }

    /// Forgets this thread's timings, installing the subscriber if needed.
    #[doc(hidden)]
    pub fn reset_method_timings() {
        init_tracing();
        TOTALS.with(|totals| totals.borrow_mut().clear());
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use super::SpanTiming;

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn method_timings() -> Vec<SpanTiming> {
        Vec::new()
    }

    #[doc(hidden)]
    pub fn dump_method_timings() {
        // No-op when tracing is disabled
    }

    #[doc(hidden)]
    pub fn reset_method_timings() {
        // No-op when tracing is disabled
    }

    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    macro_rules! debug {
        ($($args:tt)*) => {{}};
    }

    macro_rules! trace {
        ($($args:tt)*) => {{}};
    }

    // `warn` alone would be ambiguous with the built-in lint attribute.
    macro_rules! warn_event {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use {debug, info_span, trace, warn_event};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;
#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, info_span, trace, warn};

#[cfg(not(feature = "tracing"))]
pub use disabled::{
    NoOpSpan, NoOpSpanGuard, dump_method_timings, init_tracing, method_timings,
    reset_method_timings,
};
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, info_span, trace, warn_event as warn};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdjacencyGraph, mst::prim};

    #[test]
    fn test_spans_recorded_only_with_tracing() {
        reset_method_timings();
        // Disconnected, so prim also takes its warning path.
        let graph = AdjacencyGraph::from_weighted_edges(false, [(0, 1, 1.0), (2, 3, 1.0)]);
        let mut dst = AdjacencyGraph::default();
        assert_eq!(prim(&mut dst, &graph, None).len(), 1);

        let prim_spans: usize = method_timings()
            .iter()
            .filter(|timing| timing.name == "prim")
            .map(|timing| timing.count)
            .sum();
        assert_eq!(prim_spans, usize::from(cfg!(feature = "tracing")));
    }
}
