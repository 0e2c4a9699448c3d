//! Cancellable property-animation runs.
//!
//! An [`Animator`] collects animation bodies and completion callbacks, runs
//! the bodies when started and reports how it ended through
//! [`AnimationPosition`]. Bodies assign end values to model properties;
//! interpolating the presented values is left to the renderer, which can read
//! [`PropertyAnimator::progress`].
//!
//! Runs are created by an [`AnimatorProvider`] and driven by a
//! [`FrameScheduler`] that the host ticks once per frame.

mod property;
mod provider;
mod scheduler;
mod spring;
mod timing;

use std::rc::Rc;

pub use property::PropertyAnimator;
pub use provider::{CubicAnimatorProvider, SpringAnimatorProvider};
pub use scheduler::FrameScheduler;
pub use spring::{SpringConfig, SpringState};
pub use timing::TimingFunction;

/// Where an animation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPosition {
    /// Ran to its natural end
    End,
    /// Finished back at its starting values
    Start,
    /// Stopped somewhere in between
    Current,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatingState {
    /// Not started yet, or already finished
    Inactive,
    /// Started and advancing
    Active,
    /// Stopped without finishing; waiting for `finish_animation`
    Stopped,
}

pub type AnimationBody = Box<dyn FnOnce()>;
pub type AnimationCompletion = Box<dyn FnOnce(AnimationPosition)>;

/// A single cancellable animation run.
///
/// All methods take `&self` so callbacks can re-enter code that queries the
/// same run while it is finishing.
pub trait Animator {
    /// Queue a body. Runs on start, or immediately when already running.
    fn add_animations(&self, body: AnimationBody);

    /// Queue a completion. Each completion fires exactly once.
    fn add_completion(&self, completion: AnimationCompletion);

    fn start_animation(&self);

    /// Stop a running animation in place.
    ///
    /// With `without_finishing` the run becomes inactive at once and its
    /// completions fire with [`AnimationPosition::Current`]. Otherwise it
    /// moves to [`AnimatingState::Stopped`] and completions wait for
    /// [`Animator::finish_animation`].
    fn stop_animation(&self, without_finishing: bool);

    /// Finish a stopped animation, firing completions with `at`.
    fn finish_animation(&self, at: AnimationPosition);

    fn is_running(&self) -> bool;

    fn state(&self) -> AnimatingState;

    /// Linear time fraction in `0.0..=1.0`.
    fn fraction_complete(&self) -> f32;
}

pub type SharedAnimator = Rc<dyn Animator>;

/// Supplies the timing of every run a responder starts.
///
/// Responders keep only weak references to runs, so the provider (usually
/// through its [`FrameScheduler`]) must keep each run alive while it runs.
pub trait AnimatorProvider {
    fn make_animator(&self) -> SharedAnimator;
}

/// Curve a [`PropertyAnimator`] follows.
#[derive(Clone, Debug)]
pub enum AnimationCurve {
    Timing(TimingFunction),
    /// Physics spring; the run's duration acts as an upper bound
    Spring(SpringConfig),
}

impl Default for AnimationCurve {
    fn default() -> Self {
        AnimationCurve::Timing(TimingFunction::EaseInOut)
    }
}
