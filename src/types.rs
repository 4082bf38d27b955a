//! Core types shared by the state machine and the modes.

/// Identity of a mode. One variant per concrete behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeKind {
    /// One-shot startup animation.
    Start,

    /// 12-hour clock with the day/night pixel blend.
    Clock,

    /// Clock face without animation, returns to `Clock` after a while.
    Nap,

    /// Countdown timer with a completion tune.
    Timeout,

    /// Scrolling credits message.
    Credits,

    /// Once-per-second decimal counter.
    CountDecimal,

    /// Once-per-second hexadecimal counter.
    CountHex,

    /// Freezes the counter of the mode it was entered from.
    Pause,

    /// Ambient temperature readout.
    Temperature,

    /// Roster of selectable modes.
    Menu,
}

impl ModeKind {
    /// Short label that fits the 4-glyph display.
    pub const fn label(self) -> &'static str {
        match self {
            ModeKind::Start => "HELO",
            ModeKind::Clock => "CLOK",
            ModeKind::Nap => " NAP",
            ModeKind::Timeout => "Tout",
            ModeKind::Credits => "CRDT",
            ModeKind::CountDecimal => "1234",
            ModeKind::CountHex => " HEX",
            ModeKind::Pause => "PAUS",
            ModeKind::Temperature => "TEMP",
            ModeKind::Menu => "MENU",
        }
    }

    /// Long human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            ModeKind::Start => "Hello",
            ModeKind::Clock => "Clock",
            ModeKind::Nap => "Nap",
            ModeKind::Timeout => "Timeout",
            ModeKind::Credits => "Credits",
            ModeKind::CountDecimal => "Count Decimal",
            ModeKind::CountHex => "Count Hexadecimal",
            ModeKind::Pause => "Pause",
            ModeKind::Temperature => "Temperature",
            ModeKind::Menu => "Menu",
        }
    }
}

/// Value an exiting mode leaves behind for its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Handoff {
    /// Nothing to pass on.
    #[default]
    None,

    /// A counter value.
    Counter(u32),
}

impl Handoff {
    /// Returns the counter value, if this hand-off carries one.
    pub fn counter(&self) -> Option<u32> {
        match self {
            Handoff::Counter(value) => Some(*value),
            Handoff::None => None,
        }
    }
}

/// What an entering mode learns about the mode it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Departure {
    /// Kind of the mode that was left.
    pub kind: ModeKind,

    /// Hand-off read from the mode after its exit hook ran.
    pub handoff: Handoff,
}

/// Configuration and input validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// Sunrise must come before sunset, both within 0-23.
    InvalidSunHours,

    /// Countdown duration of zero seconds.
    ZeroCountdown,

    /// Wall time field out of range.
    InvalidWallTime,
}

impl core::fmt::Display for ClockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ClockError::InvalidSunHours => {
                write!(f, "sunrise hour must be earlier than sunset hour, both within 0-23")
            }
            ClockError::ZeroCountdown => {
                write!(f, "countdown duration must be at least one second")
            }
            ClockError::InvalidWallTime => {
                write!(f, "wall time out of range (hour 0-23, minute 0-59, second 0-59)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClockError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ModeKind; 10] = [
        ModeKind::Start,
        ModeKind::Clock,
        ModeKind::Nap,
        ModeKind::Timeout,
        ModeKind::Credits,
        ModeKind::CountDecimal,
        ModeKind::CountHex,
        ModeKind::Pause,
        ModeKind::Temperature,
        ModeKind::Menu,
    ];

    #[test]
    fn labels_fill_the_display_exactly() {
        for kind in ALL {
            assert_eq!(kind.label().len(), crate::DISPLAY_WIDTH, "{}", kind.name());
        }
    }

    #[test]
    fn names_are_distinct() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn only_counters_carry_a_value() {
        assert_eq!(Handoff::Counter(42).counter(), Some(42));
        assert_eq!(Handoff::default().counter(), None);
    }
}
