//! # ais-demod
//!
//! A portable, no_std, allocation-free streaming demodulator core for AIS
//! (Automatic Identification System, ITU-R M.1371) VHF vessel-tracking
//! bursts: GMSK-modulated, NRZI-encoded, HDLC-framed data on 25 kHz marine
//! channels.
//!
//! This crate implements the burst receiver state machine only:
//! - preamble/start-flag detection with sub-sample timing uncertainty
//! - NRZI decoding with HDLC zero-bit de-stuffing
//! - flag-delimited frame extraction and CRC-16 validation
//!
//! RF tuning, the FM discriminator producing the PCM input, and AIS payload
//! decoding (six-bit ASCII de-armoring, NMEA formatting) are callers on
//! either side of this core and are out of scope.
//!
//! ## Crate features
//! | Feature    | Description |
//! |------------|-------------|
//! | `std`      | Disables `#![no_std]`; unlocks the `FnMut` blanket [`sink::MessageSink`] impl used by tests and desktop callers |
//! | `log`      | Uses the `log` crate for non-semantic state-transition tracing |
//! | `defmt-0-3`| Uses `defmt` for the same tracing on embedded targets |
//!
//! ## Usage
//!
//! ```rust
//! use ais_demod::demod::Demodulator;
//! use ais_demod::sink::MessageSink;
//! use ais_demod::errors::CallbackError;
//!
//! struct PrintSink;
//! impl MessageSink for PrintSink {
//!     fn on_message(&mut self, freq: u32, payload: &[u8]) -> Result<(), CallbackError> {
//!         let _ = (freq, payload);
//!         Ok(())
//!     }
//! }
//!
//! fn main() {
//!     // D = 5 is the reference decimation rate: 48 kHz PCM over 9600 baud.
//!     let mut demod: Demodulator<5, PrintSink> = Demodulator::new(161_975_000, PrintSink);
//!     let samples: [i16; 4] = [0, 0, 0, 0];
//!     demod.push_samples(&samples);
//! }
//! ```
//!
//! ## Integration Notes
//!
//! - Sample input is signed 16-bit PCM at `D * 9600` Hz; only the sign of
//!   each sample is consulted.
//! - The demodulator is single-threaded and cooperative: all work happens
//!   inside `push_samples`, which never suspends and never allocates.
//! - One demodulator instance per AIS channel; distinct instances are fully
//!   independent and may be driven from distinct threads without
//!   synchronization.
//!
//! ## Status
//!
//! This crate is in early development. Contributions welcome!
//!
//! --
//! Designed for `#![no_std]` use in resource-constrained embedded
//! environments as well as desktop SDR pipelines.

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod consts;
pub(crate) mod crc;
pub mod demod;
pub(crate) mod detector;
pub mod errors;
pub(crate) mod nrzi;
pub(crate) mod receiver;
pub mod sink;

#[cfg(all(test, feature = "std"))]
mod test_support;
