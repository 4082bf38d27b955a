//! Mode state machine with transition handling and label preview.
//!
//! Provides [`StateMachine`], which owns the single active [`Mode`], resolves
//! button triggers into actions and transitions, and drives the per-tick render.

use crate::buttons::{Button, ButtonState};
use crate::hal::Devices;
use crate::mode::{Action, Context, Frame, MenuCursor, Mode, Target, binding};
use crate::settings::Settings;
use crate::time::{TimeDuration, TimeInstant, WallTime, millis_between};
use crate::types::{Departure, ModeKind};

/// Record of a completed mode change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Mode that was left, `None` for the very first transition.
    pub from: Option<ModeKind>,

    /// Mode that was entered.
    pub to: ModeKind,
}

struct Active<I> {
    mode: Mode,
    entered_at: I,
}

/// Owns the active mode and moves between modes.
///
/// Before the first [`change_mode`](StateMachine::change_mode) no mode is
/// active and both [`tick`](StateMachine::tick) and
/// [`dispatch_buttons`](StateMachine::dispatch_buttons) do nothing.
///
/// # Type Parameters
/// * `I` - Time instant type
pub struct StateMachine<I: TimeInstant> {
    active: Option<Active<I>>,
    last_tick: Option<I>,
    force_skip_preview: bool,
    generation: u32,
    menu: MenuCursor,
    settings: Settings,
}

impl<I: TimeInstant> StateMachine<I> {
    /// Creates a state machine with no active mode.
    pub fn new(settings: Settings) -> Self {
        Self {
            active: None,
            last_tick: None,
            force_skip_preview: false,
            generation: 0,
            menu: MenuCursor::new(),
            settings,
        }
    }

    /// Replaces the active mode with a fresh mode of kind `next`.
    ///
    /// The outgoing mode's exit hook runs first, its hand-off is copied out,
    /// and it is dropped before the new mode's entry timestamp is taken and its
    /// enter hook runs. Leaving the menu suppresses the next mode's preview.
    pub fn change_mode(&mut self, next: ModeKind, now: I, devices: &mut Devices<'_>) -> Transition {
        let mut mode = Mode::new(next, &self.settings);

        let departure = match self.active.take() {
            Some(mut previous) => {
                let mut cx = Context {
                    devices: &mut *devices,
                    settings: &self.settings,
                    menu: &mut self.menu,
                };
                previous.mode.behavior_mut().exiting(next, &mut cx);
                Some(Departure {
                    kind: previous.mode.kind(),
                    handoff: previous.mode.handoff(),
                })
            }
            None => None,
        };
        let from = departure.map(|departure| departure.kind);

        self.force_skip_preview = from == Some(ModeKind::Menu);

        let mut cx = Context {
            devices,
            settings: &self.settings,
            menu: &mut self.menu,
        };
        mode.behavior_mut().enter(departure, &mut cx);

        self.active = Some(Active {
            mode,
            entered_at: now,
        });
        self.generation = self.generation.wrapping_add(1);

        #[cfg(feature = "defmt")]
        defmt::info!("mode {} -> {}", from.map(ModeKind::name), next.name());

        Transition { from, to: next }
    }

    /// Resolves raised triggers against the bindings of the active mode.
    ///
    /// The triggers and the active mode are both captured when dispatch
    /// begins. Buttons are evaluated in the order A, B, C against that mode,
    /// even if an earlier button changed modes. For each triggered button the
    /// action runs first, then the transition. Once the captured mode has been
    /// replaced its actions only reach the menu cursor, and a transition into
    /// the kind that is already active is skipped.
    pub fn dispatch_buttons(&mut self, now: I, buttons: &mut ButtonState, devices: &mut Devices<'_>) {
        let Some(active) = self.active.as_ref() else {
            return;
        };
        let kind = active.mode.kind();
        let resume = active.mode.resume_target();
        let generation = self.generation;
        let triggered = Button::ALL.map(|button| buttons.is_triggered(button));

        for (button, raised) in Button::ALL.into_iter().zip(triggered) {
            if !raised {
                continue;
            }

            let bound = binding(kind, button);

            if let Some(action) = bound.action {
                if self.generation == generation {
                    if let Some(next) = self.perform(action, buttons, devices) {
                        self.change_mode(next, now, devices);
                    }
                } else {
                    self.perform_detached(action);
                }
            }

            let successor = match bound.target {
                Some(Target::Mode(next)) => Some(next),
                Some(Target::Resume) => resume,
                None => None,
            };
            if let Some(next) = successor {
                if self.active_kind() != Some(next) {
                    self.change_mode(next, now, devices);
                }
            }
        }
    }

    fn perform(
        &mut self,
        action: Action,
        buttons: &mut ButtonState,
        devices: &mut Devices<'_>,
    ) -> Option<ModeKind> {
        let active = self.active.as_mut()?;
        let mut cx = Context {
            devices,
            settings: &self.settings,
            menu: &mut self.menu,
        };
        active.mode.behavior_mut().perform(action, &mut cx, buttons)
    }

    /// Runs an action whose mode is gone. Only the cursor outlives the menu.
    fn perform_detached(&mut self, action: Action) {
        match action {
            Action::MenuDown => self.menu.down(),
            Action::MenuUp => self.menu.up(),
            Action::MenuSelect | Action::ToggleUnit => {}
        }
    }

    /// Advances the active mode by one tick.
    ///
    /// Inside the preview window the mode's label is shown instead of its
    /// render, unless the mode or the last transition suppresses the preview.
    /// A render that asks for a new mode switches to it immediately.
    pub fn tick(&mut self, now: I, wall: WallTime, interrupted: bool, devices: &mut Devices<'_>) {
        let delta_ms = self
            .last_tick
            .map(|last| now.duration_since(last))
            .unwrap_or(I::Duration::ZERO)
            .as_millis();
        self.last_tick = Some(now);

        let Some(active) = self.active.as_mut() else {
            return;
        };

        let elapsed_ms = millis_between(active.entered_at, now);
        let past_preview = elapsed_ms > self.settings.preview_ms;

        let request = if active.mode.skip_preview() || self.force_skip_preview || past_preview {
            let frame = Frame {
                elapsed_ms,
                delta_ms,
                wall,
                interrupted,
            };
            let mut cx = Context {
                devices: &mut *devices,
                settings: &self.settings,
                menu: &mut self.menu,
            };
            active.mode.behavior_mut().render(&frame, &mut cx)
        } else {
            devices.display.print_text(active.mode.label());
            None
        };

        if let Some(next) = request {
            self.change_mode(next, now, devices);
        }
    }

    /// The active mode, if any.
    pub fn mode(&self) -> Option<&Mode> {
        self.active.as_ref().map(|active| &active.mode)
    }

    /// Kind of the active mode, if any.
    pub fn active_kind(&self) -> Option<ModeKind> {
        self.mode().map(Mode::kind)
    }

    /// Whether the label preview is suppressed because the menu was just left.
    pub fn force_skip_preview(&self) -> bool {
        self.force_skip_preview
    }

    pub fn menu(&self) -> &MenuCursor {
        &self.menu
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
