use bevy::prelude::*;
use std::time::Duration;

use crate::components::FlightTuning;
use crate::utils::period_duration;

/// Timers behind the boost/overheat engine model.
///
/// The repeating engine tick starts when the component is created and lives
/// as long as the vehicle entity does; despawning the vehicle drops it. The
/// cooldown timer is one-shot and only exists while an overheat is pending.
#[derive(Component, Debug, Clone)]
pub struct EngineHeat {
    tick: Option<Timer>,
    cooldown: Option<Timer>,
}

impl EngineHeat {
    pub fn new(tuning: &FlightTuning) -> Self {
        Self {
            tick: Some(Timer::new(
                period_duration(tuning.boost_tick_period),
                TimerMode::Repeating,
            )),
            cooldown: None,
        }
    }

    /// Advances the engine tick and returns how many periods elapsed.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        match self.tick.as_mut() {
            Some(timer) => timer.tick(delta).times_finished_this_tick(),
            None => 0,
        }
    }

    /// Starts the one-shot cooldown, replacing any pending one.
    pub fn arm_cooldown(&mut self, seconds: f32) {
        self.cooldown = Some(Timer::new(period_duration(seconds), TimerMode::Once));
    }

    /// Advances the pending cooldown. Returns true on the tick it expires;
    /// the timer is then discarded so it cannot fire again.
    pub fn advance_cooldown(&mut self, delta: Duration) -> bool {
        let expired = match self.cooldown.as_mut() {
            Some(timer) => timer.tick(delta).just_finished(),
            None => false,
        };
        if expired {
            self.cooldown = None;
        }
        expired
    }

    pub fn cooldown_remaining(&self) -> Option<Duration> {
        self.cooldown.as_ref().map(Timer::remaining)
    }

    pub fn is_running(&self) -> bool {
        self.tick.is_some()
    }

    /// Stops the engine tick and drops any pending cooldown.
    pub fn cancel(&mut self) {
        self.tick = None;
        self.cooldown = None;
    }
}
