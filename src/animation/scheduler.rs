use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::{AnimatingState, Animator, PropertyAnimator};

/// Frame clock for [`PropertyAnimator`]s.
///
/// The host's frame loop calls [`FrameScheduler::tick`] with the time since
/// the previous frame. The scheduler owns every registered animator until it
/// has started and become inactive, so callers only need weak references.
/// Runs paused with `stop_animation(false)` are kept until they are finished.
/// Cloning yields another handle to the same scheduler.
#[derive(Clone, Default)]
pub struct FrameScheduler {
    animators: Rc<RefCell<Vec<Rc<PropertyAnimator>>>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, animator: Rc<PropertyAnimator>) {
        self.animators.borrow_mut().push(animator);
    }

    /// Advance all running animators by `dt`.
    ///
    /// Completions fire during the tick and may register new animators; those
    /// are first advanced on the next tick. Returns whether another frame is
    /// needed.
    pub fn tick(&self, dt: Duration) -> bool {
        let snapshot: Vec<_> = self.animators.borrow().clone();
        for animator in &snapshot {
            animator.advance(dt);
        }
        drop(snapshot);

        let mut animators = self.animators.borrow_mut();
        animators.retain(|a| a.state() != AnimatingState::Inactive || !a.has_started());
        let needs_frame = animators.iter().any(|a| a.is_running());
        log::trace!(
            "Scheduler tick {:?}: {} animators tracked, needs frame: {}",
            dt,
            animators.len(),
            needs_frame
        );
        needs_frame
    }

    /// Tick repeatedly until no animator is running or `max_frames` is hit.
    /// Returns the number of frames ticked.
    pub fn run_until_idle(&self, frame: Duration, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && self.is_animating() {
            self.tick(frame);
            frames += 1;
        }
        frames
    }

    pub fn is_animating(&self) -> bool {
        self.animators.borrow().iter().any(|a| a.is_running())
    }

    /// Number of animators still owned by the scheduler.
    pub fn len(&self) -> usize {
        self.animators.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.animators.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{AnimationCurve, AnimationPosition, TimingFunction};
    use std::cell::Cell;

    fn animator(ms: u64) -> Rc<PropertyAnimator> {
        Rc::new(PropertyAnimator::new(
            Duration::from_millis(ms),
            AnimationCurve::Timing(TimingFunction::Linear),
        ))
    }

    #[test]
    fn test_tick_drops_finished_animators() {
        let scheduler = FrameScheduler::new();
        let short = animator(16);
        let long = animator(100);
        scheduler.register(short.clone());
        scheduler.register(long.clone());
        short.start_animation();
        long.start_animation();

        assert!(scheduler.tick(Duration::from_millis(16)));
        assert_eq!(scheduler.len(), 1);
        assert!(!short.is_running());
        assert!(long.is_running());
    }

    #[test]
    fn test_unstarted_animators_are_kept() {
        let scheduler = FrameScheduler::new();
        let pending = animator(16);
        scheduler.register(pending.clone());

        assert!(!scheduler.tick(Duration::from_millis(16)));
        assert_eq!(scheduler.len(), 1);

        pending.start_animation();
        assert!(scheduler.is_animating());
        assert!(!scheduler.tick(Duration::from_millis(16)));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_scheduler_holds_the_only_strong_reference() {
        let scheduler = FrameScheduler::new();
        let a = animator(32);
        let weak = Rc::downgrade(&a);
        scheduler.register(a);
        if let Some(a) = weak.upgrade() {
            a.start_animation();
        }

        scheduler.run_until_idle(Duration::from_millis(16), 10);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_stopped_animators_wait_for_finish() {
        let scheduler = FrameScheduler::new();
        let a = animator(100);
        let weak = Rc::downgrade(&a);
        let ended_at = Rc::new(Cell::new(None));
        let sink = ended_at.clone();
        a.add_completion(Box::new(move |pos| sink.set(Some(pos))));
        scheduler.register(a.clone());
        a.start_animation();
        a.stop_animation(false);
        drop(a);

        assert!(!scheduler.tick(Duration::from_millis(16)));
        assert_eq!(scheduler.len(), 1);
        assert!(!scheduler.is_animating());

        let a = weak.upgrade().expect("stopped run is still owned");
        a.finish_animation(AnimationPosition::End);
        assert_eq!(ended_at.get(), Some(AnimationPosition::End));
        drop(a);

        scheduler.tick(Duration::from_millis(16));
        assert!(scheduler.is_empty());
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_completion_can_register_followup() {
        let scheduler = FrameScheduler::new();
        let first = animator(16);
        let followup_ran = Rc::new(Cell::new(false));

        let s = scheduler.clone();
        let flag = followup_ran.clone();
        first.add_completion(Box::new(move |pos| {
            assert_eq!(pos, AnimationPosition::End);
            let next = animator(16);
            let flag = flag.clone();
            next.add_completion(Box::new(move |_| flag.set(true)));
            s.register(next.clone());
            next.start_animation();
        }));
        scheduler.register(first.clone());
        first.start_animation();

        let frames = scheduler.run_until_idle(Duration::from_millis(16), 10);
        assert_eq!(frames, 2);
        assert!(followup_ran.get());
        assert!(scheduler.is_empty());
    }
}
