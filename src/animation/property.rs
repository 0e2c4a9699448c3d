use std::cell::{Cell, RefCell};
use std::time::Duration;

use super::{
    AnimatingState, AnimationBody, AnimationCompletion, AnimationCurve, AnimationPosition,
    Animator, SpringState,
};

/// Spring runs end once position and velocity are this close to rest.
const SPRING_SETTLE_THRESHOLD: f32 = 0.001;

/// Time-driven [`Animator`] advanced by a [`super::FrameScheduler`].
pub struct PropertyAnimator {
    duration: Duration,
    curve: AnimationCurve,
    state: Cell<AnimatingState>,
    started: Cell<bool>,
    elapsed: Cell<Duration>,
    spring: RefCell<SpringState>,
    animations: RefCell<Vec<AnimationBody>>,
    completions: RefCell<Vec<AnimationCompletion>>,
}

impl PropertyAnimator {
    pub fn new(duration: Duration, curve: AnimationCurve) -> Self {
        Self {
            duration,
            curve,
            state: Cell::new(AnimatingState::Inactive),
            started: Cell::new(false),
            elapsed: Cell::new(Duration::ZERO),
            spring: RefCell::new(SpringState::new()),
            animations: RefCell::new(Vec::new()),
            completions: RefCell::new(Vec::new()),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether the run has started at some point, finished or not.
    pub fn has_started(&self) -> bool {
        self.started.get()
    }

    /// Eased progress for presenting interpolated values.
    /// Spring curves may overshoot 1.0.
    pub fn progress(&self) -> f32 {
        match &self.curve {
            AnimationCurve::Timing(timing) => timing.evaluate(self.fraction_complete()),
            AnimationCurve::Spring(_) => {
                if self.started.get() && self.state.get() == AnimatingState::Inactive {
                    1.0
                } else {
                    self.spring.borrow().position
                }
            }
        }
    }

    /// Advance by `dt`. Fires completions with [`AnimationPosition::End`]
    /// when the run reaches its end. Returns whether it is still running.
    pub fn advance(&self, dt: Duration) -> bool {
        if !self.is_running() {
            return false;
        }

        let elapsed = self.elapsed.get() + dt;
        self.elapsed.set(elapsed);

        let reached_end = match &self.curve {
            AnimationCurve::Timing(_) => elapsed >= self.duration,
            AnimationCurve::Spring(config) => {
                let mut spring = self.spring.borrow_mut();
                spring.step(dt.as_secs_f32(), config);
                spring.is_settled(SPRING_SETTLE_THRESHOLD) || elapsed >= self.duration
            }
        };

        if reached_end {
            log::trace!("Animator reached end after {:?}", elapsed);
            self.finish(AnimationPosition::End);
            return false;
        }
        true
    }

    fn finish(&self, position: AnimationPosition) {
        self.state.set(AnimatingState::Inactive);
        self.animations.borrow_mut().clear();
        let completions = std::mem::take(&mut *self.completions.borrow_mut());
        for completion in completions {
            completion(position);
        }
    }
}

impl Animator for PropertyAnimator {
    fn add_animations(&self, body: AnimationBody) {
        match self.state.get() {
            AnimatingState::Active => body(),
            AnimatingState::Inactive if !self.started.get() => {
                self.animations.borrow_mut().push(body)
            }
            _ => log::warn!("Animations added to a finished or stopped animator are ignored"),
        }
    }

    fn add_completion(&self, completion: AnimationCompletion) {
        if self.started.get() && self.state.get() == AnimatingState::Inactive {
            log::warn!("Completion added to a finished animator is ignored");
            return;
        }
        self.completions.borrow_mut().push(completion);
    }

    fn start_animation(&self) {
        if self.started.get() {
            log::warn!("Animator can only be started once");
            return;
        }
        self.started.set(true);
        self.state.set(AnimatingState::Active);

        // Bodies may add more animations; those run immediately.
        let bodies = std::mem::take(&mut *self.animations.borrow_mut());
        for body in bodies {
            body();
        }
    }

    fn stop_animation(&self, without_finishing: bool) {
        if self.state.get() != AnimatingState::Active {
            return;
        }
        if without_finishing {
            self.finish(AnimationPosition::Current);
        } else {
            self.state.set(AnimatingState::Stopped);
        }
    }

    fn finish_animation(&self, at: AnimationPosition) {
        if self.state.get() != AnimatingState::Stopped {
            log::warn!("finish_animation called on an animator that is not stopped");
            return;
        }
        self.finish(at);
    }

    fn is_running(&self) -> bool {
        self.state.get() == AnimatingState::Active
    }

    fn state(&self) -> AnimatingState {
        self.state.get()
    }

    fn fraction_complete(&self) -> f32 {
        if self.duration.is_zero() {
            return if self.started.get() { 1.0 } else { 0.0 };
        }
        (self.elapsed.get().as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}
