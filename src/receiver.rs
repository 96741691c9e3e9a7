//! The frame receiver: decimated, locked sample processing that NRZI-decodes,
//! removes HDLC bit-stuffing, assembles destuffed bits into bytes, and
//! detects the closing flag or a runaway-length corruption cap.

use crate::consts::{HDLC_FLAG, MAX_FRAME_BITS, PACKET_BUF_LEN};
use crate::crc::crc16;
use crate::nrzi;

/// Outcome of feeding one decimated sample to the receiver.
pub(crate) enum ReceiverEvent<'a> {
    /// Frame still in progress.
    Receiving,
    /// End-of-frame reached. `outcome` distinguishes a validated payload
    /// from a structural CRC mismatch or an empty/too-short frame.
    Done { outcome: FrameOutcome<'a> },
}

/// What happened when a frame ended.
pub(crate) enum FrameOutcome<'a> {
    /// CRC matched; `payload` is the frame content with the FCS stripped.
    Valid { payload: &'a [u8] },
    /// Frame was long enough to carry an FCS, but it did not match.
    CrcMismatch,
    /// Frame ended (end-flag or length cap) before 4 bytes accumulated;
    /// too short to even carry an FCS. Silently dropped, same as a CRC
    /// mismatch, per spec: it is not a distinct failure class, just the
    /// `packet_bytes < 4` guard on checking CRC at all.
    TooShort,
}

/// Receiver scratch: the fixed packet buffer, the raw (pre-destuff) shift
/// register used for end-flag detection, and the bit-stuffing run counter.
///
/// Invariant: bits `0..current_bit` of `packet` (LSB-first within each
/// byte) are the destuffed received bits so far; bytes `0..current_bit/8`
/// are complete.
pub(crate) struct Receiver {
    packet: [u8; PACKET_BUF_LEN],
    raw_shr: u32,
    current_bit: usize,
    nr_ones: u8,
    last_sample: bool,
}

impl Receiver {
    pub(crate) fn new() -> Self {
        Self {
            packet: [0; PACKET_BUF_LEN],
            raw_shr: 0,
            current_bit: 0,
            nr_ones: 0,
            last_sample: false,
        }
    }

    /// Resets scratch and seeds `last_sample` from the detector's winning
    /// phase, as required at the SEARCH_SYNC -> RECEIVING transition.
    pub(crate) fn reset_and_seed(&mut self, seed_last_sample: bool) {
        self.packet = [0; PACKET_BUF_LEN];
        self.raw_shr = 0;
        self.current_bit = 0;
        self.nr_ones = 0;
        self.last_sample = seed_last_sample;
    }

    pub(crate) fn handle_sample(&mut self, sample: i16) -> ReceiverEvent<'_> {
        let raw = sample > 0;
        let bit = nrzi::decode_bit(self.last_sample, raw);
        self.last_sample = raw;

        self.raw_shr = (self.raw_shr << 1) | bit as u32;

        if self.nr_ones < 5 {
            if bit {
                self.packet[self.current_bit / 8] |= 1 << (self.current_bit % 8);
            }
            self.current_bit += 1;
        }

        if bit {
            self.nr_ones += 1;
        } else {
            self.nr_ones = 0;
        }

        let end_flag = (self.raw_shr & 0xff) as u8 == HDLC_FLAG;
        if end_flag || self.current_bit == MAX_FRAME_BITS {
            let packet_bytes = self.current_bit / 8;
            let outcome = if packet_bytes >= 4 {
                let crc = crc16(&self.packet[..packet_bytes - 2]);
                let rx_crc = self.packet[packet_bytes - 2] as u16
                    | (self.packet[packet_bytes - 1] as u16) << 8;
                if rx_crc == crc {
                    FrameOutcome::Valid {
                        payload: &self.packet[..packet_bytes - 2],
                    }
                } else {
                    FrameOutcome::CrcMismatch
                }
            } else {
                FrameOutcome::TooShort
            };
            ReceiverEvent::Done { outcome }
        } else {
            ReceiverEvent::Receiving
        }
    }
}
