//! Protocol-wide constants for AIS GMSK/HDLC burst demodulation.
//!
//! These values are fixed by the AIS data link (ITU-R M.1371) and by the
//! reference decimation rate of the original demodulator; they are not
//! deployment knobs and are not exposed through a runtime config struct.
//!
//! ## Key Concepts
//!
//! - **Preamble reference**: the 32-bit NRZI-decoded pattern a locked phase
//!   hypothesis must resemble: alternating training bits followed by the
//!   opening HDLC flag.
//! - **Hamming tolerance**: how many bit errors a phase hypothesis may carry
//!   and still count toward lock.
//! - **Frame bit cap**: a hard runaway-corruption bound, since no valid AIS
//!   frame approaches it.

/// Reference decimation rate: PCM samples per symbol at 48 kHz / 9600 baud.
///
/// This is the value the original source was built against. Callers that
/// sample at a different rate instantiate [`crate::demod::Demodulator`] with
/// a different const generic `D` instead of changing this constant.
pub const REFERENCE_DECIMATION_RATE: usize = 5;

/// Detector match word: alternating preamble bits (`0x55555555`) with the
/// low byte replaced by the opening HDLC flag (`0x7E`).
pub const PREAMBLE_REF: u32 = 0x5555_557e;

/// Maximum Hamming distance a phase hypothesis may have from
/// [`PREAMBLE_REF`] and still count as a match.
pub const PREAMBLE_TOL: u32 = 2;

/// Minimum number of phase hypotheses that must match for the detector to
/// declare lock.
pub const MIN_PHASE_MATCHES: usize = 3;

/// Hard cap on destuffed payload bits collected in one frame; a runaway
/// corruption bound, not a protocol limit.
pub const MAX_FRAME_BITS: usize = 1280;

/// Initial value of `sample_skip` on transition into `RECEIVING`.
///
/// Empirically chosen by the original source to land near the center of the
/// following symbol given how the detector's winning phase aligns with it.
/// See `DESIGN.md` for why this is preserved unchanged rather than rederived.
pub const SKIP_SEED: usize = 2;

/// HDLC flag octet, both opening (embedded in [`PREAMBLE_REF`]) and closing.
pub const HDLC_FLAG: u8 = 0x7e;

/// Capacity of the receiver's packet buffer, in bytes.
///
/// `MAX_FRAME_BITS / 8` exactly; sized to hold the worst-case destuffed
/// frame the length cap allows.
pub const PACKET_BUF_LEN: usize = MAX_FRAME_BITS / 8;
