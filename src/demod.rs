//! The top-level demodulator: owns the Detector and Receiver scratch, the
//! channel frequency tag, and the push-sample dispatcher that alternates
//! between them.

use crate::consts::SKIP_SEED;
use crate::detector::{Detector, DetectorEvent};
use crate::receiver::{FrameOutcome, Receiver, ReceiverEvent};
use crate::sink::MessageSink;

#[cfg(feature = "log")]
use log::{debug, trace};

/// One of the two states the demodulator cycles between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SearchSync,
    Receiving,
}

/// A per-channel AIS burst demodulator.
///
/// `D` is the decimation rate: PCM samples per symbol. The reference
/// configuration is `D = 5` (48 kHz PCM over 9600 baud AIS symbols); other
/// front-end sample rates instantiate a different `D`.
///
/// Owns all its scratch inline; no heap allocation occurs on the hot path.
pub struct Demodulator<const D: usize, S: MessageSink> {
    state: State,
    freq: u32,
    sample_skip: usize,
    crc_rejects: u64,
    sink: S,
    detector: Detector<D>,
    receiver: Receiver,
}

// Written by hand rather than derived: deriving `Debug` would add an
// unwanted `S: Debug` bound, but the sink's contents aren't observable
// state worth printing anyway.
impl<const D: usize, S: MessageSink> core::fmt::Debug for Demodulator<D, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Demodulator")
            .field("state", &self.state)
            .field("freq", &self.freq)
            .field("sample_skip", &self.sample_skip)
            .field("crc_rejects", &self.crc_rejects)
            .finish_non_exhaustive()
    }
}

impl<const D: usize, S: MessageSink> Demodulator<D, S> {
    /// Creates a demodulator bound to a channel frequency tag and a sink.
    ///
    /// There is no corresponding `destroy`: the demodulator owns no
    /// resource beyond its own scratch, so ordinary `Drop` suffices, and
    /// there is no double-destroy to reject because ownership can only be
    /// consumed once.
    pub fn new(freq: u32, sink: S) -> Self {
        Self {
            state: State::SearchSync,
            freq,
            sample_skip: 0,
            crc_rejects: 0,
            sink,
            detector: Detector::new(),
            receiver: Receiver::new(),
        }
    }

    /// Number of frames that parsed structurally but failed CRC.
    pub fn crc_rejects(&self) -> u64 {
        self.crc_rejects
    }

    /// The channel frequency tag captured at construction.
    pub fn freq(&self) -> u32 {
        self.freq
    }

    /// Feeds a block of signed PCM samples through the demodulator.
    ///
    /// An empty slice is a no-op; there is no invalid argument to reject,
    /// since a `&[i16]` cannot be null and the dispatch loop degenerates
    /// cleanly on zero length.
    pub fn push_samples(&mut self, samples: &[i16]) {
        let mut idx = 0;
        while idx < samples.len() {
            match self.state {
                State::SearchSync => {
                    idx = self.run_search_sync(samples, idx);
                }
                State::Receiving => {
                    idx = self.run_receiving(samples, idx);
                }
            }
        }
    }

    /// Feeds samples to the detector until lock or the block is exhausted.
    /// Returns the index of the next sample to process (the dispatch
    /// contract: no sample is both a final detector sample and a first
    /// receiver sample).
    fn run_search_sync(&mut self, samples: &[i16], start: usize) -> usize {
        for i in start..samples.len() {
            if let DetectorEvent::Locked { seed_last_sample } = self.detector.handle_sample(samples[i]) {
                #[cfg(feature = "log")]
                trace!("SEARCH_SYNC -> RECEIVING at sample {i}");
                #[cfg(feature = "defmt-0-3")]
                defmt::trace!("SEARCH_SYNC -> RECEIVING at sample {}", i);

                self.receiver.reset_and_seed(seed_last_sample);
                self.sample_skip = SKIP_SEED;
                self.state = State::Receiving;
                return i + 1;
            }
        }
        samples.len()
    }

    /// Feeds every Dth sample to the receiver until it finishes a frame or
    /// the block is exhausted.
    fn run_receiving(&mut self, samples: &[i16], start: usize) -> usize {
        for i in start..samples.len() {
            let due = self.sample_skip % D == 0;
            self.sample_skip += 1;
            if !due {
                continue;
            }

            if let ReceiverEvent::Done { outcome } = self.receiver.handle_sample(samples[i]) {
                self.finish_frame(outcome);
                return i + 1;
            }
        }
        samples.len()
    }

    fn finish_frame(&mut self, outcome: FrameOutcome<'_>) {
        match outcome {
            FrameOutcome::Valid { payload } => {
                #[cfg(feature = "log")]
                debug!("frame delivered, {} payload bytes", payload.len());
                #[cfg(feature = "defmt-0-3")]
                defmt::debug!("frame delivered, {} payload bytes", payload.len());

                // A non-OK sink result is an invariant violation per the
                // original callback contract, not a recoverable error.
                self.sink
                    .on_message(self.freq, payload)
                    .expect("message sink rejected a CRC-valid frame");
            }
            FrameOutcome::CrcMismatch => {
                #[cfg(feature = "log")]
                debug!("CRC mismatch, rejecting frame");
                #[cfg(feature = "defmt-0-3")]
                defmt::debug!("CRC mismatch, rejecting frame");
                self.crc_rejects += 1;
            }
            FrameOutcome::TooShort => {
                // Fewer than 4 bytes accumulated: too short to even carry
                // an FCS. Matches the source's `packet_bytes < 4` guard,
                // which does not touch `crc_rejects` either.
            }
        }

        #[cfg(feature = "log")]
        trace!("RECEIVING -> SEARCH_SYNC");
        #[cfg(feature = "defmt-0-3")]
        defmt::trace!("RECEIVING -> SEARCH_SYNC");

        self.detector.reset();
        self.sample_skip = 0;
        self.state = State::SearchSync;
    }
}
