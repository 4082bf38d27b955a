//! Cooperative tune playback.
//!
//! [`TunePlayer::poll`] is called once per tick. It starts at most one note per
//! call, waiting for the previous note's gap to elapse, and stops for good as
//! soon as it sees a button trigger.

use crate::hal::Buzzer;

/// One note of a tune.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    /// MIDI pitch; 60 is middle C.
    pub pitch: u8,

    /// How long the note sounds.
    pub duration_ms: u32,

    /// Time from the start of this note to the start of the next.
    pub gap_ms: u32,
}

impl Note {
    pub const fn new(pitch: u8, duration_ms: u32, gap_ms: u32) -> Self {
        Self {
            pitch,
            duration_ms,
            gap_ms,
        }
    }
}

const fn short(pitch: u8) -> Note {
    Note::new(pitch, 500, 300)
}

const C4: Note = short(60);
const E4: Note = short(64);
const G4: Note = short(67);
const C5: Note = short(72);
const C6: Note = short(84);

/// Beep beep beeeeep: alternating octaves, a rising arpeggio, the octaves
/// again, then a falling run that slows into long notes.
///
/// The run opens on three C6 notes where a C6 G5 E5 descent was written; the
/// device has always played it that way.
#[rustfmt::skip]
pub const COMPLETION_TUNE: [Note; 32] = [
    C4, C5, C4, C5, C4, C5, C4, C5,
    C4, E4, G4, C5, C4, E4, G4, C5,
    C4, C5, C4, C5, C4, C5, C4, C5,
    C6, C6, C6, C5,
    Note::new(72, 600, 600),
    Note::new(67, 700, 600),
    Note::new(64, 800, 1200),
    Note::new(60, 1000, 2000),
];

/// Playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TuneState {
    /// Not started.
    Idle,
    /// Notes remain to be played.
    Playing,
    /// Every note was played.
    Finished,
    /// Stopped early by a button press or mode exit.
    Cancelled,
}

/// Steps through a tune one note at a time.
#[derive(Debug, Clone)]
pub struct TunePlayer {
    notes: &'static [Note],
    next: usize,
    next_at_ms: u64,
    state: TuneState,
}

impl TunePlayer {
    pub const fn new(notes: &'static [Note]) -> Self {
        Self {
            notes,
            next: 0,
            next_at_ms: 0,
            state: TuneState::Idle,
        }
    }

    /// Starts playback; the first note sounds on the next poll.
    pub fn start(&mut self, now_ms: u64) {
        self.next = 0;
        self.next_at_ms = now_ms;
        self.state = TuneState::Playing;
    }

    /// Stops playback if it is in progress.
    pub fn cancel(&mut self) {
        if self.state == TuneState::Playing {
            #[cfg(feature = "defmt")]
            defmt::debug!("tune cancelled after {} notes", self.next);
            self.state = TuneState::Cancelled;
        }
    }

    pub fn state(&self) -> TuneState {
        self.state
    }

    /// Advances playback to `now_ms`.
    ///
    /// `interrupted` reports a button trigger seen this tick; it cancels the
    /// tune before any further note starts.
    pub fn poll(&mut self, now_ms: u64, interrupted: bool, buzzer: &mut dyn Buzzer) -> TuneState {
        if self.state != TuneState::Playing {
            return self.state;
        }

        if interrupted {
            self.cancel();
            return self.state;
        }

        if now_ms < self.next_at_ms {
            return self.state;
        }

        match self.notes.get(self.next) {
            Some(note) => {
                buzzer.play_note(note.pitch, note.duration_ms);
                self.next_at_ms = now_ms + note.gap_ms as u64;
                self.next += 1;
            }
            None => self.state = TuneState::Finished,
        }

        self.state
    }
}
