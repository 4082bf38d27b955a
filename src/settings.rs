//! Tunable constants of the clock, validated once at startup.

use crate::types::ClockError;

/// Hours at which sunrise and sunset begin blending in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SunHours {
    /// First hour of the day palette; its 60 minutes fade night into day.
    pub sunrise: u8,

    /// Last hour of the day palette; its 60 minutes fade day into night.
    pub sunset: u8,
}

impl Default for SunHours {
    fn default() -> Self {
        Self {
            sunrise: 6,
            sunset: 19,
        }
    }
}

/// Clock settings.
///
/// Built from [`Settings::default`] and adjusted with the `with_*` setters.
/// [`Settings::validate`] is called by [`crate::Controller::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Sunrise and sunset hours for the day/night blend.
    pub sun: SunHours,

    /// How long a mode's label is shown after entering it.
    pub preview_ms: u64,

    /// Length of the timeout countdown.
    pub countdown_secs: u32,

    /// How long nap mode lasts before returning to the clock.
    pub nap_ms: u64,

    /// Initial temperature unit.
    pub fahrenheit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sun: SunHours::default(),
            preview_ms: 1000,
            countdown_secs: 120,
            nap_ms: 2 * 60 * 60 * 1000,
            fahrenheit: true,
        }
    }
}

impl Settings {
    /// Sets the sunrise and sunset hours.
    #[must_use]
    pub fn with_sun_hours(mut self, sunrise: u8, sunset: u8) -> Self {
        self.sun = SunHours { sunrise, sunset };
        self
    }

    /// Sets the label preview window.
    #[must_use]
    pub fn with_preview_ms(mut self, preview_ms: u64) -> Self {
        self.preview_ms = preview_ms;
        self
    }

    /// Sets the countdown length.
    #[must_use]
    pub fn with_countdown_secs(mut self, countdown_secs: u32) -> Self {
        self.countdown_secs = countdown_secs;
        self
    }

    /// Sets the nap length.
    #[must_use]
    pub fn with_nap_ms(mut self, nap_ms: u64) -> Self {
        self.nap_ms = nap_ms;
        self
    }

    /// Sets the initial temperature unit.
    #[must_use]
    pub fn with_fahrenheit(mut self, fahrenheit: bool) -> Self {
        self.fahrenheit = fahrenheit;
        self
    }

    /// Checks the settings for consistency.
    ///
    /// # Errors
    /// * `InvalidSunHours` - sunrise is not before sunset, or sunset is past 23
    /// * `ZeroCountdown` - the countdown has no duration
    pub fn validate(&self) -> Result<(), ClockError> {
        if self.sun.sunrise >= self.sun.sunset || self.sun.sunset > 23 {
            return Err(ClockError::InvalidSunHours);
        }

        if self.countdown_secs == 0 {
            return Err(ClockError::ZeroCountdown);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Settings::default().validate(), Ok(()));
    }

    #[test]
    fn sunrise_must_precede_sunset() {
        let settings = Settings::default().with_sun_hours(19, 6);
        assert_eq!(settings.validate(), Err(ClockError::InvalidSunHours));

        let settings = Settings::default().with_sun_hours(6, 24);
        assert_eq!(settings.validate(), Err(ClockError::InvalidSunHours));
    }

    #[test]
    fn countdown_must_be_positive() {
        let settings = Settings::default().with_countdown_secs(0);
        assert_eq!(settings.validate(), Err(ClockError::ZeroCountdown));
    }
}
