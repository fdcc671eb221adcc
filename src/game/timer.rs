//! Scene clock and timers
//!
//! `SceneClock` counts milliseconds since the scene was created. `Timers`
//! holds delayed and repeating events; `tick` advances them against the
//! clock and hands back whatever fired, in firing order. Timers carry a
//! `TimerEvent` value instead of a closure so the runtime can match on
//! what happened.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneClock {
    now_ms: f64,
}

impl SceneClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> f64 {
        self.now_ms
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.now_ms += dt_ms;
    }
}

/// Things the gameplay scene schedules for later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Toggle the player's alpha while invulnerable
    FlashPlayer,
    /// Invulnerability window is over
    EndInvulnerability,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Timer {
    event: TimerEvent,
    next_ms: f64,
    delay_ms: f64,
    /// Remaining repeats after the next firing
    repeats_left: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Timers {
    timers: Vec<Timer>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `event` once, `delay_ms` after `now_ms`
    pub fn delayed_call(&mut self, now_ms: f64, delay_ms: f64, event: TimerEvent) {
        self.add_event(now_ms, delay_ms, 0, event);
    }

    /// Fire `event` every `delay_ms`, `repeat + 1` times in total
    pub fn add_event(&mut self, now_ms: f64, delay_ms: f64, repeat: u32, event: TimerEvent) {
        self.timers.push(Timer {
            event,
            next_ms: now_ms + delay_ms,
            delay_ms: delay_ms.max(1.0),
            repeats_left: repeat,
        });
    }

    /// Collect every firing due at or before `now_ms`
    pub fn tick(&mut self, now_ms: f64) -> Vec<TimerEvent> {
        let mut fired: Vec<(f64, TimerEvent)> = Vec::new();

        self.timers.retain_mut(|timer| {
            while timer.next_ms <= now_ms {
                fired.push((timer.next_ms, timer.event));
                if timer.repeats_left == 0 {
                    return false;
                }
                timer.repeats_left -= 1;
                timer.next_ms += timer.delay_ms;
            }
            true
        });

        fired.sort_by(|a, b| a.0.total_cmp(&b.0));
        fired.into_iter().map(|(_, event)| event).collect()
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn remove_all(&mut self) {
        self.timers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delayed_call_fires_once() {
        let mut timers = Timers::new();
        timers.delayed_call(0.0, 1600.0, TimerEvent::EndInvulnerability);

        assert!(timers.tick(1599.0).is_empty());
        assert_eq!(timers.tick(1600.0), vec![TimerEvent::EndInvulnerability]);
        assert!(timers.tick(5000.0).is_empty());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_repeating_event_fires_repeat_plus_one_times() {
        let mut timers = Timers::new();
        timers.add_event(0.0, 160.0, 5, TimerEvent::FlashPlayer);

        let fired = timers.tick(10_000.0);
        assert_eq!(fired.len(), 6);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_events_come_out_in_time_order() {
        let mut timers = Timers::new();
        timers.delayed_call(0.0, 1600.0, TimerEvent::EndInvulnerability);
        timers.add_event(0.0, 160.0, 8, TimerEvent::FlashPlayer);

        let fired = timers.tick(1600.0);
        assert_eq!(fired.len(), 10);
        assert_eq!(fired.last(), Some(&TimerEvent::EndInvulnerability));
    }

    #[test]
    fn test_remove_all() {
        let mut timers = Timers::new();
        timers.delayed_call(0.0, 10.0, TimerEvent::FlashPlayer);
        timers.remove_all();
        assert!(timers.tick(100.0).is_empty());
    }
}
