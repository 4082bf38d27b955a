//! Modes: the selectable behaviors of the clock.
//!
//! Exactly one [`Mode`] is active at a time. Each variant wraps a struct that
//! implements the shared lifecycle (`enter`, `exiting`, `render`, hand-off).
//! Button bindings do not live on the instances; [`binding`] is a fixed table
//! from `(ModeKind, Button)` to an optional action and an optional successor.

mod clock;
mod count;
mod credits;
mod menu;
mod pause;
mod start;
mod temperature;
mod timeout;

pub use clock::{ClockMode, NapMode};
pub use count::{CountMode, Radix};
pub use credits::{CREDITS_MESSAGE, CreditsMode};
pub use menu::{MenuCursor, MenuMode, ROSTER};
pub use pause::PauseMode;
pub use start::StartMode;
pub use temperature::TemperatureMode;
pub use timeout::TimeoutMode;

use crate::buttons::{Button, ButtonState};
use crate::hal::Devices;
use crate::settings::Settings;
use crate::time::WallTime;
use crate::types::{Departure, Handoff, ModeKind};

/// Per-tick inputs handed to a mode's render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Time since the mode was entered.
    pub elapsed_ms: u64,

    /// Time since the previous tick.
    pub delta_ms: u64,

    /// Local time of day.
    pub wall: WallTime,

    /// A button trigger was raised this tick.
    pub interrupted: bool,
}

/// Everything outside the mode that a hook may read or change.
pub(crate) struct Context<'a, 'd> {
    pub devices: &'a mut Devices<'d>,
    pub settings: &'a Settings,
    pub menu: &'a mut MenuCursor,
}

/// Callback actions that can be bound to a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Move the menu cursor down one entry.
    MenuDown,

    /// Enter the roster entry under the menu cursor.
    MenuSelect,

    /// Move the menu cursor up one entry.
    MenuUp,

    /// Switch between Celsius and Fahrenheit.
    ToggleUnit,
}

/// Where a button leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Target {
    /// A fixed mode.
    Mode(ModeKind),

    /// The mode the active mode was entered from.
    Resume,
}

/// What pressing a button does in a given mode.
///
/// When both are set the action runs first, then the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Binding {
    pub action: Option<Action>,
    pub target: Option<Target>,
}

impl Binding {
    pub const NONE: Binding = Binding {
        action: None,
        target: None,
    };

    pub const fn to(kind: ModeKind) -> Self {
        Binding {
            action: None,
            target: Some(Target::Mode(kind)),
        }
    }

    pub const fn run(action: Action) -> Self {
        Binding {
            action: Some(action),
            target: None,
        }
    }

    pub const RESUME: Binding = Binding {
        action: None,
        target: Some(Target::Resume),
    };
}

/// Button binding table.
pub const fn binding(kind: ModeKind, button: Button) -> Binding {
    use Button::{A, B, C};
    use ModeKind::*;

    match (kind, button) {
        (Start, _) => Binding::NONE,

        (Clock, A) => Binding::to(Nap),
        (Clock, B) => Binding::to(Menu),
        (Clock, C) => Binding::to(Timeout),

        (Nap, A) => Binding::to(Clock),
        (Nap, B) => Binding::to(Menu),
        (Nap, C) => Binding::NONE,

        (Timeout, _) => Binding::to(Clock),

        (Credits, _) => Binding::to(Menu),

        (CountDecimal | CountHex, A | C) => Binding::to(Pause),
        (CountDecimal | CountHex, B) => Binding::to(Menu),

        (Pause, _) => Binding::RESUME,

        (Temperature, A) => Binding::NONE,
        (Temperature, B) => Binding::to(Menu),
        (Temperature, C) => Binding::run(Action::ToggleUnit),

        (Menu, A) => Binding::run(Action::MenuDown),
        (Menu, B) => Binding::run(Action::MenuSelect),
        (Menu, C) => Binding::run(Action::MenuUp),
    }
}

/// Lifecycle shared by every mode.
pub(crate) trait Behavior {
    fn kind(&self) -> ModeKind;

    /// Whether the label preview is suppressed after entering.
    fn skip_preview(&self) -> bool {
        true
    }

    /// Called after the previous mode has been torn down.
    fn enter(&mut self, _from: Option<Departure>, _cx: &mut Context<'_, '_>) {}

    /// Called before this mode is replaced by `next`, ahead of the successor's `enter`.
    fn exiting(&mut self, _next: ModeKind, _cx: &mut Context<'_, '_>) {}

    /// Value offered to the successor.
    fn handoff(&self) -> Handoff {
        Handoff::None
    }

    /// Mode that [`Target::Resume`] leads back to.
    fn resume_target(&self) -> Option<ModeKind> {
        None
    }

    /// Runs a bound action. Returns a mode to switch to, if the action asks for one.
    fn perform(
        &mut self,
        _action: Action,
        _cx: &mut Context<'_, '_>,
        _buttons: &mut ButtonState,
    ) -> Option<ModeKind> {
        None
    }

    /// Draws one frame. Returns a mode to switch to, if the mode is done.
    fn render(&mut self, frame: &Frame, cx: &mut Context<'_, '_>) -> Option<ModeKind>;
}

/// The active mode.
#[derive(Debug, Clone)]
pub enum Mode {
    Start(StartMode),
    Clock(ClockMode),
    Nap(NapMode),
    Timeout(TimeoutMode),
    Credits(CreditsMode),
    Count(CountMode),
    Pause(PauseMode),
    Temperature(TemperatureMode),
    Menu(MenuMode),
}

impl Mode {
    /// Constructs a fresh, not yet entered, mode of the given kind.
    pub fn new(kind: ModeKind, settings: &Settings) -> Self {
        match kind {
            ModeKind::Start => Mode::Start(StartMode::new()),
            ModeKind::Clock => Mode::Clock(ClockMode::new()),
            ModeKind::Nap => Mode::Nap(NapMode::new()),
            ModeKind::Timeout => Mode::Timeout(TimeoutMode::new()),
            ModeKind::Credits => Mode::Credits(CreditsMode::new()),
            ModeKind::CountDecimal => Mode::Count(CountMode::new(Radix::Decimal)),
            ModeKind::CountHex => Mode::Count(CountMode::new(Radix::Hex)),
            ModeKind::Pause => Mode::Pause(PauseMode::new()),
            ModeKind::Temperature => Mode::Temperature(TemperatureMode::new(settings.fahrenheit)),
            ModeKind::Menu => Mode::Menu(MenuMode::new()),
        }
    }

    pub(crate) fn behavior(&self) -> &dyn Behavior {
        match self {
            Mode::Start(mode) => mode,
            Mode::Clock(mode) => mode,
            Mode::Nap(mode) => mode,
            Mode::Timeout(mode) => mode,
            Mode::Credits(mode) => mode,
            Mode::Count(mode) => mode,
            Mode::Pause(mode) => mode,
            Mode::Temperature(mode) => mode,
            Mode::Menu(mode) => mode,
        }
    }

    pub(crate) fn behavior_mut(&mut self) -> &mut dyn Behavior {
        match self {
            Mode::Start(mode) => mode,
            Mode::Clock(mode) => mode,
            Mode::Nap(mode) => mode,
            Mode::Timeout(mode) => mode,
            Mode::Credits(mode) => mode,
            Mode::Count(mode) => mode,
            Mode::Pause(mode) => mode,
            Mode::Temperature(mode) => mode,
            Mode::Menu(mode) => mode,
        }
    }

    pub fn kind(&self) -> ModeKind {
        self.behavior().kind()
    }

    /// Short label shown during the preview window.
    pub fn label(&self) -> &'static str {
        self.kind().label()
    }

    pub fn skip_preview(&self) -> bool {
        self.behavior().skip_preview()
    }

    /// Value this mode would hand to its successor right now.
    pub fn handoff(&self) -> Handoff {
        self.behavior().handoff()
    }

    /// Mode a [`Target::Resume`] binding leads to.
    pub fn resume_target(&self) -> Option<ModeKind> {
        self.behavior().resume_target()
    }
}

/// Fixed-period cadence driven by accumulated tick deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cadence {
    period_ms: i64,
    remaining_ms: i64,
}

impl Cadence {
    /// A cadence that fires on its first poll.
    pub const fn new(period_ms: i64) -> Self {
        Self {
            period_ms,
            remaining_ms: 0,
        }
    }

    /// Returns true when a period has run out, consuming `delta_ms` otherwise.
    pub fn ready(&mut self, delta_ms: u64) -> bool {
        if self.remaining_ms > 0 {
            self.remaining_ms -= delta_ms as i64;
            return false;
        }
        self.remaining_ms += self.period_ms;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cadence_fires_once_per_period() {
        let mut cadence = Cadence::new(1000);

        assert!(cadence.ready(0));
        assert!(!cadence.ready(500));
        assert!(!cadence.ready(500));
        assert!(cadence.ready(500));
    }

    #[test]
    fn every_kind_constructs_a_mode_of_that_kind() {
        let settings = Settings::default();
        let kinds = [
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
        for kind in kinds {
            assert_eq!(Mode::new(kind, &settings).kind(), kind);
        }
    }

    #[test]
    fn clock_buttons_lead_to_nap_menu_timeout() {
        assert_eq!(binding(ModeKind::Clock, Button::A), Binding::to(ModeKind::Nap));
        assert_eq!(binding(ModeKind::Clock, Button::B), Binding::to(ModeKind::Menu));
        assert_eq!(binding(ModeKind::Clock, Button::C), Binding::to(ModeKind::Timeout));
    }

    #[test]
    fn temperature_c_is_an_action_without_transition() {
        let c = binding(ModeKind::Temperature, Button::C);
        assert_eq!(c.action, Some(Action::ToggleUnit));
        assert_eq!(c.target, None);
        assert_eq!(binding(ModeKind::Temperature, Button::A), Binding::NONE);
    }
}
