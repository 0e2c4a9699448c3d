use std::rc::Rc;
use std::time::Duration;

use super::{
    AnimationCurve, AnimatorProvider, FrameScheduler, PropertyAnimator, SharedAnimator,
    SpringConfig, TimingFunction,
};

/// Fixed-duration runs along a cubic timing curve.
#[derive(Clone)]
pub struct CubicAnimatorProvider {
    scheduler: FrameScheduler,
    duration: Duration,
    timing: TimingFunction,
}

impl CubicAnimatorProvider {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

    pub fn new(scheduler: &FrameScheduler) -> Self {
        Self {
            scheduler: scheduler.clone(),
            duration: Self::DEFAULT_DURATION,
            timing: TimingFunction::EaseInOut,
        }
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }
}

impl AnimatorProvider for CubicAnimatorProvider {
    fn make_animator(&self) -> SharedAnimator {
        let animator = Rc::new(PropertyAnimator::new(
            self.duration,
            AnimationCurve::Timing(self.timing.clone()),
        ));
        self.scheduler.register(animator.clone());
        animator
    }
}

/// Physics-based runs that end when the spring settles.
#[derive(Clone)]
pub struct SpringAnimatorProvider {
    scheduler: FrameScheduler,
    config: SpringConfig,
    max_duration: Duration,
}

impl SpringAnimatorProvider {
    pub fn new(scheduler: &FrameScheduler) -> Self {
        Self {
            scheduler: scheduler.clone(),
            config: SpringConfig::DEFAULT,
            max_duration: Duration::from_secs(1),
        }
    }

    pub fn config(mut self, config: SpringConfig) -> Self {
        self.config = config;
        self
    }

    /// Upper bound after which an unsettled spring is treated as finished
    pub fn max_duration(mut self, max_duration: Duration) -> Self {
        self.max_duration = max_duration;
        self
    }
}

impl AnimatorProvider for SpringAnimatorProvider {
    fn make_animator(&self) -> SharedAnimator {
        let animator = Rc::new(PropertyAnimator::new(
            self.max_duration,
            AnimationCurve::Spring(self.config),
        ));
        self.scheduler.register(animator.clone());
        animator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Animator;

    #[test]
    fn test_cubic_runs_for_configured_duration() {
        let scheduler = FrameScheduler::new();
        let provider = CubicAnimatorProvider::new(&scheduler).duration(Duration::from_millis(48));
        let animator = provider.make_animator();
        animator.start_animation();

        let frames = scheduler.run_until_idle(Duration::from_millis(16), 100);
        assert_eq!(frames, 3);
        assert!(!animator.is_running());
    }

    #[test]
    fn test_spring_is_capped_by_max_duration() {
        let scheduler = FrameScheduler::new();
        let provider = SpringAnimatorProvider::new(&scheduler)
            .config(SpringConfig::BOUNCY)
            .max_duration(Duration::from_millis(100));
        provider.make_animator().start_animation();

        let frames = scheduler.run_until_idle(Duration::from_millis(10), 100);
        assert_eq!(frames, 10);
    }

    #[test]
    fn test_each_call_makes_a_fresh_run() {
        let scheduler = FrameScheduler::new();
        let provider = CubicAnimatorProvider::new(&scheduler);
        let a = provider.make_animator();
        let b = provider.make_animator();
        assert!(!Rc::ptr_eq(&a, &b));
        assert_eq!(scheduler.len(), 2);
    }
}
