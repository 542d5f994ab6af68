//! Countdown timer coordinator
//!
//! The coordinator owns the state machine and the three counters, and
//! drives the display/haptics/tick collaborators on every transition.
//! All timing comes from the injected tick source; nothing here blocks.

use crate::config::TimerConfig;
use crate::format::two_digit;
use crate::state::{Button, Event, TimerState};
use crate::traits::{ActionIcon, CountdownDisplay, Haptics, IconSlot, TickSource};

/// Countdown timer coordinating state, counters, and collaborators
///
/// One instance per timer widget; all fields are private and there are
/// no process-wide singletons.
pub struct CountdownTimer<D, H, T> {
    /// Current lifecycle state
    state: TimerState,
    /// Behavior configuration
    config: TimerConfig,
    /// User-configured countdown length (seconds)
    duration_s: u8,
    /// Live countdown value (seconds)
    remaining_s: u8,
    /// Get-ready countdown value (seconds)
    ready_s: u8,
    /// Display collaborator
    display: D,
    /// Haptics collaborator
    haptics: H,
    /// Tick source collaborator
    ticks: T,
}

impl<D, H, T> CountdownTimer<D, H, T>
where
    D: CountdownDisplay,
    H: Haptics,
    T: TickSource,
{
    /// Create a new timer in the idle state
    ///
    /// The duration starts at the configured power-on value, clamped to
    /// the maximum.
    pub fn new(config: TimerConfig, display: D, haptics: H, ticks: T) -> Self {
        let duration_s = config.default_duration_s.min(config.max_duration_s);
        Self {
            state: TimerState::Idle,
            config,
            duration_s,
            remaining_s: duration_s,
            ready_s: 0,
            display,
            haptics,
            ticks,
        }
    }

    /// Paint the initial screen
    ///
    /// Shows the configured duration, the adjust/arm icon set, and hides
    /// the get-ready marker. Call once before delivering events.
    pub fn attach(&mut self) {
        self.remaining_s = self.duration_s;
        self.render();
        self.display
            .set_action_icon(IconSlot::Increment, Some(ActionIcon::Plus));
        self.display
            .set_action_icon(IconSlot::Decrement, Some(ActionIcon::Minus));
        self.display
            .set_action_icon(IconSlot::Confirm, Some(ActionIcon::Play));
        self.display.set_ready_indicator(false);
    }

    /// Handle a debounced button press
    pub fn press(&mut self, button: Button) {
        match button {
            Button::Increment => self.handle_increment(),
            Button::Decrement => self.handle_decrement(),
            Button::Confirm => self.handle_confirm(),
        }
    }

    /// Handle one elapsed second from the tick source
    ///
    /// Ticks delivered outside the subscribed states are dropped.
    pub fn tick(&mut self) {
        match self.state {
            TimerState::ReadyCountdown => {
                self.ready_s = self.ready_s.saturating_sub(1);
                self.render();

                if self.ready_s == self.config.ready_warning_s {
                    self.haptics.pulse_long();
                }

                if self.ready_s == 0 {
                    self.apply(Event::ReadyElapsed);
                    self.display.set_ready_indicator(false);
                    self.haptics.pulse_long();
                }
            }
            TimerState::Running => {
                self.remaining_s = self.remaining_s.saturating_sub(1);
                self.render();

                if (1..=self.config.final_window_s).contains(&self.remaining_s) {
                    self.haptics.pulse_short();
                }

                if self.remaining_s == 0 {
                    self.haptics.pulse_long();
                    self.apply(Event::CountdownElapsed);
                }
            }
            TimerState::Idle | TimerState::Paused => {}
        }
    }

    /// Get current state
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Get the configured duration in seconds
    pub fn duration_s(&self) -> u8 {
        self.duration_s
    }

    /// Get the live countdown value in seconds
    pub fn remaining_s(&self) -> u8 {
        self.remaining_s
    }

    /// Get the get-ready countdown value in seconds
    pub fn ready_s(&self) -> u8 {
        self.ready_s
    }

    /// Raise the duration by one second, clamped to the maximum
    ///
    /// Outside the idle state, or at the bound, the press does nothing
    /// at all (no refresh either).
    fn handle_increment(&mut self) {
        if !self.state.accepts_adjustment() || self.duration_s >= self.config.max_duration_s {
            return;
        }
        self.duration_s += 1;
        self.remaining_s = self.duration_s;
        self.render();
    }

    /// Lower the duration by one second, clamped to zero
    fn handle_decrement(&mut self) {
        if !self.state.accepts_adjustment() || self.duration_s == 0 {
            return;
        }
        self.duration_s -= 1;
        self.remaining_s = self.duration_s;
        self.render();
    }

    /// Confirm means arm, pause, or reset depending on the state
    fn handle_confirm(&mut self) {
        match self.state {
            TimerState::Idle => {
                // Arm: enter the get-ready phase
                self.ready_s = self.config.ready_phase_s;
                self.display.set_ready_indicator(true);
                self.display.set_action_icon(IconSlot::Increment, None);
                self.display
                    .set_action_icon(IconSlot::Confirm, Some(ActionIcon::Stop));
                self.display.set_action_icon(IconSlot::Decrement, None);
                self.apply(Event::ConfirmPressed);
                self.render();
            }
            TimerState::ReadyCountdown | TimerState::Running => {
                // Manual pause; the ready marker stays as it is until reset
                self.display
                    .set_action_icon(IconSlot::Confirm, Some(ActionIcon::Reset));
                self.apply(Event::ConfirmPressed);
            }
            TimerState::Paused => {
                // Reset back to the adjustment screen
                self.display.set_ready_indicator(false);
                self.remaining_s = self.duration_s;
                self.render();
                self.display
                    .set_action_icon(IconSlot::Increment, Some(ActionIcon::Plus));
                self.display
                    .set_action_icon(IconSlot::Decrement, Some(ActionIcon::Minus));
                self.display
                    .set_action_icon(IconSlot::Confirm, Some(ActionIcon::Play));
                self.apply(Event::ConfirmPressed);
            }
        }
    }

    /// Run one event through the transition table and reconcile the tick
    /// subscription on the resulting edge
    fn apply(&mut self, event: Event) {
        let was_ticking = self.state.ticking();
        self.state = self.state.transition(event);
        let now_ticking = self.state.ticking();

        if now_ticking && !was_ticking {
            self.ticks.subscribe();
        } else if !now_ticking && was_ticking {
            self.ticks.unsubscribe();
        }
    }

    /// Push the active counter to the display as two digits
    fn render(&mut self) {
        let shown = match self.state {
            TimerState::ReadyCountdown => self.ready_s,
            _ => self.remaining_s,
        };
        self.display.render_countdown(&two_digit(shown));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::{String, Vec};

    /// Display fake recording every call
    #[derive(Default)]
    struct FakeDisplay {
        rendered: Vec<String<2>, 128>,
        indicator: Vec<bool, 16>,
        icons: Vec<(IconSlot, Option<ActionIcon>), 32>,
    }

    impl CountdownDisplay for FakeDisplay {
        fn render_countdown(&mut self, digits: &str) {
            let mut text = String::new();
            let _ = text.push_str(digits);
            self.rendered.push(text).unwrap();
        }

        fn set_ready_indicator(&mut self, visible: bool) {
            self.indicator.push(visible).unwrap();
        }

        fn set_action_icon(&mut self, slot: IconSlot, icon: Option<ActionIcon>) {
            self.icons.push((slot, icon)).unwrap();
        }
    }

    /// Haptics fake counting pulses
    #[derive(Default)]
    struct FakeHaptics {
        shorts: usize,
        longs: usize,
    }

    impl Haptics for FakeHaptics {
        fn pulse_short(&mut self) {
            self.shorts += 1;
        }

        fn pulse_long(&mut self) {
            self.longs += 1;
        }
    }

    /// Tick source fake enforcing the single-subscription discipline
    #[derive(Default)]
    struct FakeTicks {
        active: bool,
        subscribes: usize,
        unsubscribes: usize,
    }

    impl TickSource for FakeTicks {
        fn subscribe(&mut self) {
            assert!(!self.active, "subscribe while already subscribed");
            self.active = true;
            self.subscribes += 1;
        }

        fn unsubscribe(&mut self) {
            assert!(self.active, "unsubscribe without a subscription");
            self.active = false;
            self.unsubscribes += 1;
        }
    }

    fn make_timer() -> CountdownTimer<FakeDisplay, FakeHaptics, FakeTicks> {
        CountdownTimer::new(
            TimerConfig::default(),
            FakeDisplay::default(),
            FakeHaptics::default(),
            FakeTicks::default(),
        )
    }

    fn last_rendered(timer: &CountdownTimer<FakeDisplay, FakeHaptics, FakeTicks>) -> &str {
        timer.display.rendered.last().map(|s| s.as_str()).unwrap()
    }

    #[test]
    fn test_attach_paints_initial_screen() {
        let mut timer = make_timer();
        timer.attach();

        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.duration_s(), 9);
        assert_eq!(last_rendered(&timer), "09");
        assert_eq!(
            timer.display.icons.as_slice(),
            &[
                (IconSlot::Increment, Some(ActionIcon::Plus)),
                (IconSlot::Decrement, Some(ActionIcon::Minus)),
                (IconSlot::Confirm, Some(ActionIcon::Play)),
            ]
        );
        assert_eq!(timer.display.indicator.last(), Some(&false));
        assert!(!timer.ticks.active);
    }

    #[test]
    fn test_increment_adjusts_duration() {
        let mut timer = make_timer();
        timer.attach();

        timer.press(Button::Increment);
        assert_eq!(timer.duration_s(), 10);
        assert_eq!(timer.remaining_s(), 10);
        assert_eq!(last_rendered(&timer), "10");
    }

    #[test]
    fn test_decrement_adjusts_duration() {
        let mut timer = make_timer();
        timer.attach();

        timer.press(Button::Decrement);
        assert_eq!(timer.duration_s(), 8);
        assert_eq!(timer.remaining_s(), 8);
        assert_eq!(last_rendered(&timer), "08");
    }

    #[test]
    fn test_increment_clamped_at_max() {
        let mut timer = make_timer();
        timer.attach();

        for _ in 0..60 {
            timer.press(Button::Increment);
        }
        assert_eq!(timer.duration_s(), 60);

        // At the bound the press is a total no-op, including the refresh
        let renders = timer.display.rendered.len();
        timer.press(Button::Increment);
        assert_eq!(timer.duration_s(), 60);
        assert_eq!(timer.display.rendered.len(), renders);
    }

    #[test]
    fn test_decrement_clamped_at_zero() {
        let mut timer = make_timer();
        timer.attach();

        for _ in 0..9 {
            timer.press(Button::Decrement);
        }
        assert_eq!(timer.duration_s(), 0);
        assert_eq!(last_rendered(&timer), "00");

        let renders = timer.display.rendered.len();
        timer.press(Button::Decrement);
        assert_eq!(timer.duration_s(), 0);
        assert_eq!(timer.display.rendered.len(), renders);
    }

    #[test]
    fn test_adjustment_ignored_outside_idle() {
        let mut timer = make_timer();
        timer.attach();
        timer.press(Button::Confirm);
        assert_eq!(timer.state(), TimerState::ReadyCountdown);

        let renders = timer.display.rendered.len();
        timer.press(Button::Increment);
        timer.press(Button::Decrement);
        assert_eq!(timer.duration_s(), 9);
        assert_eq!(timer.display.rendered.len(), renders);

        for _ in 0..10 {
            timer.tick();
        }
        assert_eq!(timer.state(), TimerState::Running);
        timer.press(Button::Increment);
        assert_eq!(timer.duration_s(), 9);

        timer.press(Button::Confirm);
        assert_eq!(timer.state(), TimerState::Paused);
        timer.press(Button::Decrement);
        assert_eq!(timer.duration_s(), 9);
    }

    #[test]
    fn test_confirm_from_idle_starts_ready_phase() {
        let mut timer = make_timer();
        timer.attach();

        timer.press(Button::Confirm);
        assert_eq!(timer.state(), TimerState::ReadyCountdown);
        assert_eq!(timer.ready_s(), 10);
        assert_eq!(last_rendered(&timer), "10");
        assert_eq!(timer.display.indicator.last(), Some(&true));
        assert_eq!(
            &timer.display.icons[3..],
            &[
                (IconSlot::Increment, None),
                (IconSlot::Confirm, Some(ActionIcon::Stop)),
                (IconSlot::Decrement, None),
            ]
        );
        assert!(timer.ticks.active);
        assert_eq!(timer.ticks.subscribes, 1);
    }

    #[test]
    fn test_ready_countdown_reaches_running() {
        let mut timer = make_timer();
        timer.attach();
        timer.press(Button::Confirm);

        for _ in 0..7 {
            timer.tick();
        }
        assert_eq!(timer.state(), TimerState::ReadyCountdown);
        assert_eq!(timer.ready_s(), 3);
        assert_eq!(timer.haptics.longs, 1);

        for _ in 0..3 {
            timer.tick();
        }
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.remaining_s(), 9);
        assert_eq!(timer.haptics.longs, 2);
        assert_eq!(timer.display.indicator.last(), Some(&false));
        // The ready counter's zero stays on screen until the first
        // running tick replaces it
        assert_eq!(last_rendered(&timer), "00");
        assert!(timer.ticks.active);
    }

    #[test]
    fn test_running_counts_down_with_haptic_cues() {
        let mut timer = make_timer();
        timer.attach();
        for _ in 0..4 {
            timer.press(Button::Decrement);
        }
        assert_eq!(timer.duration_s(), 5);

        timer.press(Button::Confirm);
        for _ in 0..10 {
            timer.tick();
        }
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.remaining_s(), 5);
        assert_eq!(timer.haptics.longs, 2);

        timer.tick();
        assert_eq!(timer.remaining_s(), 4);
        assert_eq!(timer.haptics.shorts, 0);

        timer.tick();
        assert_eq!(timer.remaining_s(), 3);
        assert_eq!(timer.haptics.shorts, 1);

        timer.tick();
        assert_eq!(timer.remaining_s(), 2);
        assert_eq!(timer.haptics.shorts, 2);

        timer.tick();
        assert_eq!(timer.remaining_s(), 1);
        assert_eq!(timer.haptics.shorts, 3);

        timer.tick();
        assert_eq!(timer.remaining_s(), 0);
        assert_eq!(last_rendered(&timer), "00");
        assert_eq!(timer.haptics.shorts, 3);
        assert_eq!(timer.haptics.longs, 3);
        assert_eq!(timer.state(), TimerState::Paused);
        assert!(!timer.ticks.active);
        assert_eq!(timer.ticks.unsubscribes, 1);
    }

    #[test]
    fn test_confirm_during_ready_pauses() {
        let mut timer = make_timer();
        timer.attach();
        timer.press(Button::Confirm);
        timer.tick();
        timer.tick();
        assert_eq!(timer.ready_s(), 8);

        timer.press(Button::Confirm);
        assert_eq!(timer.state(), TimerState::Paused);
        assert!(!timer.ticks.active);
        assert_eq!(
            timer.display.icons.last(),
            Some(&(IconSlot::Confirm, Some(ActionIcon::Reset)))
        );
        // Cancelling the ready phase leaves the marker up; it clears on reset
        assert_eq!(timer.display.indicator.last(), Some(&true));
    }

    #[test]
    fn test_confirm_while_running_pauses() {
        let mut timer = make_timer();
        timer.attach();
        timer.press(Button::Confirm);
        for _ in 0..10 {
            timer.tick();
        }
        timer.tick();
        timer.tick();
        assert_eq!(timer.remaining_s(), 7);

        timer.press(Button::Confirm);
        assert_eq!(timer.state(), TimerState::Paused);
        assert!(!timer.ticks.active);
        assert_eq!(timer.remaining_s(), 7);
        assert_eq!(
            timer.display.icons.last(),
            Some(&(IconSlot::Confirm, Some(ActionIcon::Reset)))
        );
    }

    #[test]
    fn test_confirm_from_paused_resets_to_idle() {
        let mut timer = make_timer();
        timer.attach();
        timer.press(Button::Confirm);
        for _ in 0..12 {
            timer.tick();
        }
        timer.press(Button::Confirm);
        assert_eq!(timer.state(), TimerState::Paused);

        let icon_count = timer.display.icons.len();
        timer.press(Button::Confirm);
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_s(), 9);
        assert_eq!(last_rendered(&timer), "09");
        assert_eq!(timer.display.indicator.last(), Some(&false));
        assert_eq!(
            &timer.display.icons[icon_count..],
            &[
                (IconSlot::Increment, Some(ActionIcon::Plus)),
                (IconSlot::Decrement, Some(ActionIcon::Minus)),
                (IconSlot::Confirm, Some(ActionIcon::Play)),
            ]
        );
        assert!(!timer.ticks.active);
    }

    #[test]
    fn test_completed_run_keeps_stop_icon() {
        let mut timer = make_timer();
        timer.attach();
        for _ in 0..6 {
            timer.press(Button::Decrement);
        }
        timer.press(Button::Confirm);
        for _ in 0..13 {
            timer.tick();
        }
        assert_eq!(timer.state(), TimerState::Paused);

        // Auto-completion never swaps the confirm icon to Reset
        assert!(timer
            .display
            .icons
            .iter()
            .all(|(_, icon)| *icon != Some(ActionIcon::Reset)));
    }

    #[test]
    fn test_zero_duration_run() {
        let mut timer = make_timer();
        timer.attach();
        for _ in 0..9 {
            timer.press(Button::Decrement);
        }
        assert_eq!(timer.duration_s(), 0);

        timer.press(Button::Confirm);
        for _ in 0..10 {
            timer.tick();
        }
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.remaining_s(), 0);
        assert_eq!(timer.haptics.longs, 2);

        // First running tick completes immediately, with no short pulses
        timer.tick();
        assert_eq!(timer.state(), TimerState::Paused);
        assert_eq!(last_rendered(&timer), "00");
        assert_eq!(timer.haptics.shorts, 0);
        assert_eq!(timer.haptics.longs, 3);
        assert!(!timer.ticks.active);
    }

    #[test]
    fn test_stray_tick_ignored_when_not_ticking() {
        let mut timer = make_timer();
        timer.attach();

        let renders = timer.display.rendered.len();
        timer.tick();
        assert_eq!(timer.display.rendered.len(), renders);
        assert_eq!(timer.duration_s(), 9);
        assert_eq!(timer.remaining_s(), 9);

        timer.press(Button::Confirm);
        timer.press(Button::Confirm);
        assert_eq!(timer.state(), TimerState::Paused);

        let renders = timer.display.rendered.len();
        timer.tick();
        assert_eq!(timer.state(), TimerState::Paused);
        assert_eq!(timer.display.rendered.len(), renders);
    }

    #[test]
    fn test_resubscribe_after_reset() {
        let mut timer = make_timer();
        timer.attach();

        timer.press(Button::Confirm);
        for _ in 0..10 {
            timer.tick();
        }
        timer.press(Button::Confirm);
        timer.press(Button::Confirm);
        timer.press(Button::Confirm);

        assert_eq!(timer.state(), TimerState::ReadyCountdown);
        assert_eq!(timer.ready_s(), 10);
        assert!(timer.ticks.active);
        assert_eq!(timer.ticks.subscribes, 2);
        assert_eq!(timer.ticks.unsubscribes, 1);
    }

    #[test]
    fn test_default_duration_scenario() {
        let mut timer = make_timer();
        timer.attach();
        assert_eq!(last_rendered(&timer), "09");

        timer.press(Button::Increment);
        assert_eq!(timer.duration_s(), 10);
        assert_eq!(last_rendered(&timer), "10");

        timer.press(Button::Confirm);
        assert_eq!(timer.state(), TimerState::ReadyCountdown);
        assert_eq!(timer.ready_s(), 10);
        assert_eq!(last_rendered(&timer), "10");
        assert_eq!(timer.display.indicator.last(), Some(&true));

        for _ in 0..7 {
            timer.tick();
        }
        assert_eq!(timer.ready_s(), 3);
        assert_eq!(timer.haptics.longs, 1);

        for _ in 0..3 {
            timer.tick();
        }
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.remaining_s(), 10);
        assert_eq!(timer.display.indicator.last(), Some(&false));
        assert_eq!(timer.haptics.longs, 2);
    }

    #[test]
    fn test_new_clamps_default_duration() {
        let config = TimerConfig {
            default_duration_s: 200,
            ..TimerConfig::default()
        };
        let timer = CountdownTimer::new(
            config,
            FakeDisplay::default(),
            FakeHaptics::default(),
            FakeTicks::default(),
        );
        assert_eq!(timer.duration_s(), 60);
    }
}
