//! Edge-detecting key latch.
//!
//! Every game key moves through `Idle -> Armed -> Consumed -> Idle`:
//! a press arms it, taking the command consumes it, and only a release returns
//! it to idle. Holding a key therefore produces a single command.
//!
//! Some terminals never send release events. There, a consumed key with no
//! press events for `release_timeout` counts as released.

use std::time::{Duration, Instant};

use crate::map::GameKey;
use crate::types::Commands;

// Covers the gap between auto-repeat events once repeating has started. The
// initial repeat delay (often 250-600 ms) is longer, so without release events
// a held key fires a second time when repeating kicks in.
const DEFAULT_RELEASE_TIMEOUT_MS: u64 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyPhase {
    Idle,
    Armed,
    Consumed,
}

#[derive(Debug, Clone, Copy)]
struct KeySlot {
    phase: KeyPhase,
    last_press: Option<Instant>,
}

impl KeySlot {
    const fn new() -> Self {
        Self {
            phase: KeyPhase::Idle,
            last_press: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeyLatch {
    slots: [KeySlot; 4],
    release_timeout: Duration,
}

impl KeyLatch {
    pub fn new() -> Self {
        Self::with_release_timeout(Duration::from_millis(DEFAULT_RELEASE_TIMEOUT_MS))
    }

    pub fn with_release_timeout(release_timeout: Duration) -> Self {
        Self {
            slots: [KeySlot::new(); 4],
            release_timeout,
        }
    }

    pub fn release_timeout(&self) -> Duration {
        self.release_timeout
    }

    pub fn press(&mut self, key: GameKey) {
        self.press_at(key, Instant::now());
    }

    /// Register a key-down (or auto-repeat) event seen at `now`.
    pub fn press_at(&mut self, key: GameKey, now: Instant) {
        let slot = &mut self.slots[key.index()];
        slot.last_press = Some(now);
        if slot.phase == KeyPhase::Idle {
            slot.phase = KeyPhase::Armed;
        }
    }

    pub fn release(&mut self, key: GameKey) {
        self.slots[key.index()].phase = KeyPhase::Idle;
    }

    /// Auto-release consumed keys that have been silent past the timeout.
    pub fn update_at(&mut self, now: Instant) {
        for slot in &mut self.slots {
            if slot.phase != KeyPhase::Consumed {
                continue;
            }
            let silent = slot
                .last_press
                .map_or(true, |t| now.saturating_duration_since(t) > self.release_timeout);
            if silent {
                slot.phase = KeyPhase::Idle;
            }
        }
    }

    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    /// Consume `key` if it is armed.
    pub fn take(&mut self, key: GameKey) -> bool {
        let slot = &mut self.slots[key.index()];
        if slot.phase == KeyPhase::Armed {
            slot.phase = KeyPhase::Consumed;
            true
        } else {
            false
        }
    }

    /// Drain all armed keys into one frame of commands.
    ///
    /// Left and right in the same frame cancel out.
    pub fn take_commands(&mut self) -> Commands {
        let mut dx = 0;
        if self.take(GameKey::Left) {
            dx -= 1;
        }
        if self.take(GameKey::Right) {
            dx += 1;
        }
        Commands {
            dx,
            rotate: self.take(GameKey::Rotate),
            drop: self.take(GameKey::Drop),
        }
    }

    pub fn reset(&mut self) {
        self.slots = [KeySlot::new(); 4];
    }
}

impl Default for KeyLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_yields_one_command() {
        let mut latch = KeyLatch::new();
        latch.press(GameKey::Rotate);
        assert!(latch.take_commands().rotate);
        assert!(latch.take_commands().is_empty());
    }

    #[test]
    fn held_key_does_not_repeat() {
        let start = Instant::now();
        let mut latch = KeyLatch::with_release_timeout(Duration::from_millis(100));
        latch.press_at(GameKey::Left, start);
        assert_eq!(latch.take_commands().dx, -1);

        // Auto-repeat events keep arriving while the key is held.
        for step in 1..10 {
            let now = start + Duration::from_millis(30 * step);
            latch.press_at(GameKey::Left, now);
            latch.update_at(now);
            assert!(latch.take_commands().is_empty());
        }
    }

    #[test]
    fn release_rearms_the_key() {
        let mut latch = KeyLatch::new();
        latch.press(GameKey::Drop);
        assert!(latch.take_commands().drop);
        latch.release(GameKey::Drop);
        latch.press(GameKey::Drop);
        assert!(latch.take_commands().drop);
    }

    #[test]
    fn silent_key_auto_releases() {
        let start = Instant::now();
        let mut latch = KeyLatch::with_release_timeout(Duration::from_millis(50));
        latch.press_at(GameKey::Right, start);
        assert_eq!(latch.take_commands().dx, 1);

        latch.update_at(start + Duration::from_millis(51));
        latch.press_at(GameKey::Right, start + Duration::from_millis(60));
        assert_eq!(latch.take_commands().dx, 1);
    }

    #[test]
    fn slow_first_repeat_fires_again_without_release_events() {
        let start = Instant::now();
        let mut latch = KeyLatch::new();
        latch.press_at(GameKey::Left, start);
        assert_eq!(latch.take_commands().dx, -1);

        // First auto-repeat arrives after a 300 ms initial delay.
        latch.update_at(start + Duration::from_millis(300));
        latch.press_at(GameKey::Left, start + Duration::from_millis(300));
        assert_eq!(latch.take_commands().dx, -1);

        // Subsequent repeats are close together and stay swallowed.
        for step in 1..5 {
            let now = start + Duration::from_millis(300 + 33 * step);
            latch.update_at(now);
            latch.press_at(GameKey::Left, now);
            assert!(latch.take_commands().is_empty());
        }
    }

    #[test]
    fn armed_key_survives_timeout_until_taken() {
        let start = Instant::now();
        let mut latch = KeyLatch::with_release_timeout(Duration::from_millis(10));
        latch.press_at(GameKey::Rotate, start);
        latch.update_at(start + Duration::from_secs(1));
        assert!(latch.take_commands().rotate);
    }

    #[test]
    fn left_and_right_cancel() {
        let mut latch = KeyLatch::new();
        latch.press(GameKey::Left);
        latch.press(GameKey::Right);
        let commands = latch.take_commands();
        assert_eq!(commands.dx, 0);
        // Both were consumed anyway.
        assert!(!latch.take(GameKey::Left));
        assert!(!latch.take(GameKey::Right));
    }

    #[test]
    fn reset_clears_everything() {
        let mut latch = KeyLatch::new();
        latch.press(GameKey::Drop);
        latch.reset();
        assert!(latch.take_commands().is_empty());
    }
}
