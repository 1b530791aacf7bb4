//! The weather cycle and its reward multiplier policy.
//!
//! Weather advances `clear → storm → fog → clear` on a fixed wall-clock
//! interval. The core owns only the transition function; the binary's event
//! loop owns the timer, so tests can drive the cycle without real time.

use crate::constants::{CLEAR_MULTIPLIER, FOG_MULTIPLIER, STORM_MULTIPLIER};
use serde::{Deserialize, Serialize};

/// Current weather over the sea chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Clear,
    Storm,
    Fog,
}

impl Weather {
    /// All phases in cycle order.
    pub const CYCLE: [Weather; 3] = [Weather::Clear, Weather::Storm, Weather::Fog];

    /// The next phase in cycle order.
    pub fn next(self) -> Weather {
        match self {
            Weather::Clear => Weather::Storm,
            Weather::Storm => Weather::Fog,
            Weather::Fog => Weather::Clear,
        }
    }

    /// Coin reward multiplier while this weather is active.
    ///
    /// Heavier weather pays better: completing quests through a storm is
    /// worth more than on a calm sea.
    pub fn multiplier(self) -> f64 {
        match self {
            Weather::Clear => CLEAR_MULTIPLIER,
            Weather::Storm => STORM_MULTIPLIER,
            Weather::Fog => FOG_MULTIPLIER,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Weather::Clear => "Clear",
            Weather::Storm => "Storm",
            Weather::Fog => "Fog",
        }
    }

    /// Single-glyph indicator for the header bar.
    pub fn icon(self) -> &'static str {
        match self {
            Weather::Clear => "☀",
            Weather::Storm => "⛈",
            Weather::Fog => "🌫",
        }
    }
}

/// Process-wide weather state.
///
/// `tick()` is the whole interface: it advances one phase and returns the
/// new value. Safe to call from any scheduling context since it only
/// mutates this one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherCycle {
    current: Weather,
}

impl WeatherCycle {
    pub fn new() -> Self {
        Self {
            current: Weather::Clear,
        }
    }

    /// Start the cycle at an arbitrary phase.
    pub fn starting_at(weather: Weather) -> Self {
        Self { current: weather }
    }

    pub fn current(&self) -> Weather {
        self.current
    }

    /// Advance to the next phase and return it.
    pub fn tick(&mut self) -> Weather {
        self.current = self.current.next();
        self.current
    }
}

impl Default for WeatherCycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        let mut cycle = WeatherCycle::new();
        assert_eq!(cycle.current(), Weather::Clear);
        assert_eq!(cycle.tick(), Weather::Storm);
        assert_eq!(cycle.tick(), Weather::Fog);
        assert_eq!(cycle.tick(), Weather::Clear);
    }

    #[test]
    fn test_multiplier_table() {
        assert_eq!(Weather::Clear.multiplier(), 1.0);
        assert_eq!(Weather::Storm.multiplier(), 1.5);
        assert_eq!(Weather::Fog.multiplier(), 1.25);
    }

    #[test]
    fn test_storm_active_on_second_phase() {
        let mut cycle = WeatherCycle::new();
        cycle.tick();
        assert_eq!(cycle.current(), Weather::Storm);
        assert_eq!(cycle.current().multiplier(), 1.5);
    }

    #[test]
    fn test_serde_wire_format() {
        let json = serde_json::to_string(&Weather::Storm).unwrap();
        assert_eq!(json, "\"storm\"");
        let back: Weather = serde_json::from_str("\"fog\"").unwrap();
        assert_eq!(back, Weather::Fog);
    }
}
