//! Tracing hooks that vanish when the `tracing` feature is off.
//!
//! Decode and search entry points open a span with `trace_span!` and report
//! sizes and outcomes with `trace_event!`. Without the feature both macros
//! expand to nothing observable, so call sites stay free of `cfg` noise.

/// Opens a debug-level span around a decode or search call.
///
/// With the `tracing` feature this is `tracing::debug_span!`; without it the
/// macro yields a [`NoopSpan`] so `.entered()` still works.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::debug_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Emits a debug-level event carrying sizes or match counts.
///
/// With the `tracing` feature this is `tracing::debug!`. Without it the field
/// values are still evaluated, then dropped, so callers see no unused warnings.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::debug!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Stand-in for `tracing::Span` so `trace_span!(..).entered()` always compiles.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Returns the guard unchanged, like `Span::entered`.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
