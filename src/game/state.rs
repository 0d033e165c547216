//! All mutable game state, owned in one place and driven by the frame loop
//! and the two keyboard hooks.

use crate::animation::AnimationState;
use crate::answer::{self, Verdict};
use crate::clock::{self, ClockTime, RandomSource};
use crate::config::GameConfig;
use crate::input::{InputBuffer, Key};

/// Whole-game phase, derived from the buffer cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    ReadyToSubmit,
}

/// What a key did, so the host can log it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Edited,
    /// Correct answer; carries the time that was solved.
    RoundSolved(ClockTime),
    /// Confirm pressed on a complete but wrong answer.
    Rejected,
}

pub struct GameState {
    time: ClockTime,
    animation: AnimationState,
    input: InputBuffer,
    last_frame_ms: Option<f64>,
    max_frame_dt: f64,
    rounds_solved: u32,
    rng: Box<dyn RandomSource>,
}

/// Frame delta cap from the config; an unusable cap falls back to the default.
fn frame_dt_cap(config: &GameConfig) -> f64 {
    if config.max_frame_dt > 0.0 {
        config.max_frame_dt
    } else {
        GameConfig::default().max_frame_dt
    }
}

impl GameState {
    /// Start the first round. Hands begin at rest and swing to the first time.
    pub fn new(config: &GameConfig, mut rng: Box<dyn RandomSource>) -> Self {
        let time = clock::next_time(rng.as_mut());
        let mut animation = AnimationState::new(config.convergence_rate);
        animation.retarget(clock::angles_for(time));
        Self {
            time,
            animation,
            input: InputBuffer::new(),
            last_frame_ms: None,
            max_frame_dt: frame_dt_cap(config),
            rounds_solved: 0,
            rng,
        }
    }

    pub fn time(&self) -> ClockTime {
        self.time
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn rounds_solved(&self) -> u32 {
        self.rounds_solved
    }

    pub fn phase(&self) -> Phase {
        if self.input.is_complete() { Phase::ReadyToSubmit } else { Phase::AwaitingInput }
    }

    pub fn verdict(&self) -> Verdict {
        answer::verdict(&self.input, self.time)
    }

    /// Per-frame update. `now_ms` is the rAF timestamp; the first frame has no
    /// baseline and advances by zero.
    pub fn tick(&mut self, now_ms: f64) {
        let dt = match self.last_frame_ms {
            Some(prev) => ((now_ms - prev) / 1000.0).max(0.0).min(self.max_frame_dt),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);
        self.animation.advance(dt);
    }

    pub fn on_key_down(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Digit(d) => {
                if self.input.is_complete() {
                    return KeyOutcome::Ignored;
                }
                self.input.push_digit(d);
                KeyOutcome::Edited
            }
            Key::Backspace => {
                if self.input.cursor() == 0 {
                    return KeyOutcome::Ignored;
                }
                self.input.backspace();
                KeyOutcome::Edited
            }
            Key::Confirm => KeyOutcome::Ignored,
        }
    }

    pub fn on_key_up(&mut self, key: Key) -> KeyOutcome {
        if key != Key::Confirm {
            return KeyOutcome::Ignored;
        }
        match self.verdict() {
            Verdict::Incomplete => KeyOutcome::Ignored,
            Verdict::Incorrect => KeyOutcome::Rejected,
            Verdict::Correct => {
                let solved = self.time;
                self.next_round();
                KeyOutcome::RoundSolved(solved)
            }
        }
    }

    fn next_round(&mut self) {
        self.time = clock::next_time(self.rng.as_mut());
        self.animation.retarget(clock::angles_for(self.time));
        self.input.clear();
        self.rounds_solved += 1;
    }
}
