//! Observable degraded paths.
//!
//! Generation never fails. Hostname lookup failures fall back to a
//! timestamp-derived fingerprint, and a body that does not render to
//! [`ID_WIDTH`] characters is still returned. Both are reported through a
//! [`Diagnostics`] sink instead, so callers and tests can observe them.
//!
//! [`ID_WIDTH`]: crate::ID_WIDTH

use crate::{Error, Fingerprint, FingerprintSource};

/// An event reported by a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Diagnostic<'a> {
    /// The host name could not be read; the fallback fingerprint is used.
    HostnameUnavailable {
        /// Why the lookup failed.
        error: &'a Error,
    },

    /// The machine fingerprint was computed. Reported once per generator.
    FingerprintResolved {
        fingerprint: Fingerprint,
        source: FingerprintSource,
    },

    /// The rendered blocks did not add up to 20 characters.
    LengthMismatch {
        prefix: &'a str,
        high: &'a str,
        low: &'a str,
    },
}

/// A sink for [`Diagnostic`] events.
///
/// Any `Fn(&Diagnostic<'_>)` closure is a sink:
///
/// ```
/// use sid::{Diagnostic, Diagnostics};
///
/// let sink = |event: &Diagnostic<'_>| println!("{event:?}");
/// sink.report(&Diagnostic::LengthMismatch { prefix: "", high: "1", low: "2" });
/// ```
pub trait Diagnostics {
    fn report(&self, event: &Diagnostic<'_>);
}

impl<F> Diagnostics for F
where
    F: Fn(&Diagnostic<'_>),
{
    fn report(&self, event: &Diagnostic<'_>) {
        self(event);
    }
}

/// Forwards events to `tracing`: degraded paths at `WARN`, the fingerprint
/// at `DEBUG`.
#[derive(Default, Clone, Copy, Debug)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, event: &Diagnostic<'_>) {
        match event {
            Diagnostic::HostnameUnavailable { error } => {
                tracing::warn!(%error, "hostname unavailable, using timestamp fingerprint");
            }
            Diagnostic::FingerprintResolved {
                fingerprint,
                source,
            } => {
                tracing::debug!(%fingerprint, ?source, "machine fingerprint resolved");
            }
            Diagnostic::LengthMismatch { prefix, high, low } => {
                tracing::warn!(
                    prefix,
                    high,
                    low,
                    len = high.len() + low.len(),
                    "id length != 20"
                );
            }
        }
    }
}

/// Discards every event.
#[derive(Default, Clone, Copy, Debug)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn report(&self, _event: &Diagnostic<'_>) {}
}
