//! Shared fixtures for building synthetic AIS sample streams, used by the
//! concrete scenario tests (S2 through S6 in the crate's test suite).
//!
//! Construction mirrors the wire path in reverse: payload -> CRC append ->
//! bit-stuff -> flag-bracket -> NRZI-encode -> upsample by `D`, plus a
//! leading training sequence, exactly as a real transmitter would produce.

use crate::consts::HDLC_FLAG;
use crate::crc::crc16;
use crate::nrzi;
use std::vec::Vec;

/// A 21-byte (168-bit) payload matching the standard AIS Class A position
/// report size named by the clean-frame concrete scenario.
pub(crate) const DEFAULT_PAYLOAD: [u8; 21] = [
    0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10,
    0x11, 0x12, 0x13, 0x14, 0x15,
];

const TRAINING_BITS: usize = 24;
const DECIMATION: usize = 5;

fn bits_lsb_first(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for i in 0..8 {
            bits.push((byte >> i) & 1 == 1);
        }
    }
    bits
}

/// Inserts a 0 after every run of five consecutive 1s.
fn bit_stuff(bits: &[bool]) -> Vec<bool> {
    let mut out = Vec::with_capacity(bits.len() + bits.len() / 5 + 1);
    let mut ones = 0u8;
    for &bit in bits {
        out.push(bit);
        if bit {
            ones += 1;
            if ones == 5 {
                out.push(false);
                ones = 0;
            }
        } else {
            ones = 0;
        }
    }
    out
}

fn nrzi_encode(bits: &[bool], seed: bool) -> Vec<bool> {
    let mut level = seed;
    let mut out = Vec::with_capacity(bits.len());
    for &bit in bits {
        level = nrzi::encode_bit(level, bit);
        out.push(level);
    }
    out
}

/// Builds one complete S3-style sample stream carrying `payload`: CRC
/// computed and appended, the body bit-stuffed, bracketed with HDLC flags,
/// NRZI-encoded from a fixed seed, and upsampled by the reference
/// decimation rate `D = 5` with a leading alternating training sequence.
pub(crate) fn build_s3_stream(payload: &[u8]) -> Vec<i16> {
    let crc = crc16(payload);
    let mut body_bytes = Vec::with_capacity(payload.len() + 2);
    body_bytes.extend_from_slice(payload);
    body_bytes.push((crc & 0xff) as u8);
    body_bytes.push((crc >> 8) as u8);

    let body_bits = bits_lsb_first(&body_bytes);
    let stuffed_body = bit_stuff(&body_bits);
    let flag_bits = bits_lsb_first(&[HDLC_FLAG]);

    // The training tail must land the detector's reference window on
    // exactly PREAMBLE_REF once the flag bits follow: 24 alternating bits
    // ending on a 1, then the flag's own (palindromic) bit pattern.
    let training: Vec<bool> = (0..TRAINING_BITS).map(|i| i % 2 == 1).collect();

    let mut raw_bits =
        Vec::with_capacity(training.len() + flag_bits.len() * 2 + stuffed_body.len());
    raw_bits.extend_from_slice(&training);
    raw_bits.extend_from_slice(&flag_bits);
    raw_bits.extend_from_slice(&stuffed_body);
    raw_bits.extend_from_slice(&flag_bits);

    let line_levels = nrzi_encode(&raw_bits, false);

    let mut samples = Vec::with_capacity(line_levels.len() * DECIMATION);
    for level in line_levels {
        let sample: i16 = if level { 16000 } else { -16000 };
        for _ in 0..DECIMATION {
            samples.push(sample);
        }
    }
    samples
}
