//! Error types for the AIS demodulator core.
//!
//! Only one class of fault the spec names is a recoverable `Result` a caller
//! actually inspects: a [`MessageSink`](crate::sink::MessageSink) refusing a
//! delivered frame. Corrupt input (bad CRC, runaway frame length) is never
//! an error — it is reflected in the `crc_rejects` counter. A non-OK sink
//! result is itself treated as an invariant violation by the dispatcher, not
//! propagated further.

use thiserror::Error;

/// Error a [`MessageSink`](crate::sink::MessageSink) may report when it
/// cannot accept a delivered frame.
///
/// This is a diagnostic payload, not a recoverable outcome: the dispatcher
/// treats any `Err` returned from `on_message` as a fatal invariant
/// violation and aborts, matching the original callback contract's "a
/// non-OK status is treated as an internal bug".
#[derive(Debug, Error)]
pub enum CallbackError {
    /// The sink rejected the frame for a caller-defined reason.
    #[error("message sink rejected frame: {reason}")]
    Rejected {
        /// Human-readable rejection reason, for diagnostics only.
        reason: &'static str,
    },
}
