//! NRZI (Non-Return-to-Zero Inverted) encode/decode helpers shared by the
//! detector and receiver.
//!
//! Decoded bit convention: a decoded `1` ("mark") means the current slice
//! matches the previous one; a decoded `0` ("space") means it flipped.

/// Decodes one NRZI bit given the previous and current sign-sliced samples.
#[inline]
pub(crate) fn decode_bit(prev: bool, cur: bool) -> bool {
    !(prev ^ cur)
}

/// Encodes one NRZI bit: given the previous line level and the bit to send,
/// returns the new line level.
///
/// Inverse of [`decode_bit`]: `decode_bit(level, encode_bit(level, bit)) == bit`.
#[cfg(test)]
pub(crate) fn encode_bit(prev_level: bool, bit: bool) -> bool {
    !(prev_level ^ bit)
}
