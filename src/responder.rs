//! Status responders drive the visual transition between two statuses.
//!
//! [`HudResponder`] is the HUD-style responder. For every status change it:
//!
//! 1. creates and positions the indicator surface on the first non-idle status,
//! 2. force-stops the previous run if it is still running,
//! 3. sets the pre-animation state (transparent and scaled down when showing),
//! 4. starts one run whose body fades the host tint and the indicator in or
//!    out and updates the indicator content,
//! 5. on natural completion calls `finished` and then tears the surface down
//!    if the HUD was hidden.
//!
//! A forced stop skips step 5 entirely; the next transition's preparation
//! starts from whatever end values the stopped run already assigned.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::animation::{
    AnimatingState, AnimationPosition, Animator, AnimatorProvider, SharedAnimator,
};
use crate::color::Color;
use crate::host::{HostRef, HostSurface};
use crate::indicator::{HudIndicatorProvider, IndicatorProvider, IndicatorSurface, StatusView};
use crate::layout::{HudLayout, LayoutError};
use crate::status::{Status, TransitionKind};
use crate::transform::AffineTransform;
use crate::HudConfig;

/// Something that can visualize a status change inside a host.
pub trait StatusResponder {
    /// Animate from `from` to `to`. `finished` is called once if, and only
    /// if, the transition runs to its natural end.
    fn change_status(
        &self,
        from: &Status,
        to: &Status,
        host: &HostRef,
        finished: Box<dyn FnOnce()>,
    );
}

#[derive(Debug, Clone, Copy)]
struct Appearance {
    dim_color: Color,
    hidden_scale: f32,
}

impl Appearance {
    fn hidden_transform(&self) -> AffineTransform {
        AffineTransform::scale(self.hidden_scale)
    }
}

struct ResponderState<S> {
    layout: HudLayout,
    /// Layout the current surface was placed with
    surface_layout: HudLayout,
    host: Option<Weak<RefCell<dyn HostSurface>>>,
    surface: Option<S>,
    last_animator: Option<Weak<dyn Animator>>,
    /// Bumped for every transition; a completion only finalizes its own
    generation: u64,
    /// Layout changed while visible; apply once hidden
    remove_on_finish: bool,
}

impl<S: IndicatorSurface> ResponderState<S> {
    fn discard_surface(&mut self) {
        let Some(mut surface) = self.surface.take() else {
            return;
        };
        match self.host.as_ref().and_then(Weak::upgrade) {
            Some(host) => surface.detach(&mut *host.borrow_mut()),
            None => log::debug!("Host already gone, dropping status surface without detach"),
        }
        log::debug!("Status surface {:?} removed", surface.id());
    }
}

type SurfaceFactory<S> = Box<dyn Fn(&HudLayout) -> S>;

/// HUD-style responder: a dimmed overlay with a centered (or top/bottom)
/// indicator panel.
pub struct HudResponder<S: IndicatorSurface + 'static = StatusView> {
    state: Rc<RefCell<ResponderState<S>>>,
    animator_provider: Rc<dyn AnimatorProvider>,
    make_surface: SurfaceFactory<S>,
    appearance: Appearance,
}

impl HudResponder<StatusView> {
    /// Responder drawing [`StatusView`]s with the default indicator content.
    pub fn new(config: &HudConfig, animator_provider: Rc<dyn AnimatorProvider>) -> Self {
        Self::with_indicator_provider(config, animator_provider, Rc::new(HudIndicatorProvider))
    }

    pub fn with_indicator_provider(
        config: &HudConfig,
        animator_provider: Rc<dyn AnimatorProvider>,
        indicator_provider: Rc<dyn IndicatorProvider>,
    ) -> Self {
        let style = config.background_style;
        Self::with_surface_factory(config, animator_provider, move |layout: &HudLayout| {
            StatusView::new(style, layout.indicator_size, indicator_provider.clone())
        })
    }
}

impl<S: IndicatorSurface + 'static> HudResponder<S> {
    /// Responder with a custom surface type. `factory` is called with the
    /// current layout whenever a new surface is needed.
    pub fn with_surface_factory(
        config: &HudConfig,
        animator_provider: Rc<dyn AnimatorProvider>,
        factory: impl Fn(&HudLayout) -> S + 'static,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(ResponderState {
                layout: config.layout,
                surface_layout: config.layout,
                host: None,
                surface: None,
                last_animator: None,
                generation: 0,
                remove_on_finish: false,
            })),
            animator_provider,
            make_surface: Box::new(factory),
            appearance: Appearance {
                dim_color: config.dim_color,
                hidden_scale: config.hidden_scale,
            },
        }
    }

    pub fn layout(&self) -> HudLayout {
        self.state.borrow().layout
    }

    /// Replace the layout. It takes effect on the next appearance.
    ///
    /// Without a surface this only stores the layout. With a surface in an
    /// inactive host the surface is discarded right away; in an active host
    /// it is discarded when the next hide completes.
    ///
    /// # Panics
    ///
    /// Panics if a surface exists but no host was ever recorded.
    pub fn set_layout(&self, layout: HudLayout) {
        let mut state = self.state.borrow_mut();
        state.layout = layout;
        if state.surface.is_none() {
            return;
        }

        let host = state
            .host
            .as_ref()
            .expect("status surface exists without a host")
            .upgrade();
        let host_active = host.as_ref().is_some_and(|h| h.borrow().is_active());

        if host_active {
            log::debug!("Layout changed while visible, deferring until hidden");
            state.remove_on_finish = true;
        } else {
            state.discard_surface();
        }
    }

    /// Validate and then [`set_layout`](Self::set_layout).
    pub fn try_set_layout(&self, layout: HudLayout) -> Result<(), LayoutError> {
        layout.validate()?;
        self.set_layout(layout);
        Ok(())
    }

    pub fn has_surface(&self) -> bool {
        self.state.borrow().surface.is_some()
    }

    /// Whether a layout change is waiting for the HUD to hide.
    pub fn is_removal_pending(&self) -> bool {
        self.state.borrow().remove_on_finish
    }

    /// Run `f` against the current surface, if any.
    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.state.borrow().surface.as_ref().map(f)
    }

    /// The run of the latest transition, while it is alive.
    pub fn current_animator(&self) -> Option<SharedAnimator> {
        self.state
            .borrow()
            .last_animator
            .as_ref()
            .and_then(Weak::upgrade)
    }

    pub fn is_animating(&self) -> bool {
        self.current_animator()
            .map(|a| a.is_running())
            .unwrap_or(false)
    }

    fn layout_surface(&self, host: &HostRef) {
        let mut state = self.state.borrow_mut();
        let mut surface = (self.make_surface)(&state.layout);

        let mut host_view = host.borrow_mut();
        let frame = state.layout.resolve_frame(
            host_view.bounds(),
            host_view.safe_area(),
            surface.intrinsic_size(),
        );
        surface.attach(&mut *host_view, frame);
        log::debug!("Status surface {:?} attached at {:?}", surface.id(), frame);

        state.host = Some(Rc::downgrade(host));
        state.surface_layout = state.layout;
        state.surface = Some(surface);
    }

    fn interrupt_running(&self) {
        // Release the borrow first: stopping fires completions.
        let last = self.state.borrow_mut().last_animator.take();
        let Some(animator) = last.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        match animator.state() {
            AnimatingState::Active => {
                log::debug!("Interrupting running status transition");
                animator.stop_animation(true);
            }
            AnimatingState::Stopped => {
                log::debug!("Releasing paused status transition");
                animator.finish_animation(AnimationPosition::Current);
            }
            AnimatingState::Inactive => {}
        }
    }

    fn prepare_animation(&self, host: &HostRef, from: &Status, to: &Status) {
        let mut state = self.state.borrow_mut();
        let mut host = host.borrow_mut();
        let Some(surface) = state.surface.as_mut() else {
            return;
        };

        surface.prepare_status(&mut *host, from, to);
        if from.is_idle() {
            host.set_background(self.appearance.dim_color.with_alpha(0.0));
            surface.set_alpha(0.0);
            surface.set_transform(self.appearance.hidden_transform());
        }
    }
}

fn run_animation<S: IndicatorSurface>(
    state: &mut ResponderState<S>,
    host: &mut dyn HostSurface,
    appearance: Appearance,
    from: &Status,
    to: &Status,
) {
    let layout = state.surface_layout;
    let Some(surface) = state.surface.as_mut() else {
        return;
    };

    match TransitionKind::between(from, to) {
        TransitionKind::Showing => {
            host.set_background(appearance.dim_color);
            surface.set_alpha(1.0);
            surface.set_transform(AffineTransform::IDENTITY);
        }
        TransitionKind::Hiding => {
            host.set_background(appearance.dim_color.with_alpha(0.0));
            surface.set_alpha(0.0);
            surface.set_transform(appearance.hidden_transform());
        }
        TransitionKind::Updating => {}
    }

    surface.update_status(host, from, to);

    // New content may need more room than the frame it was laid out with
    if surface.frame().is_some() {
        let frame =
            layout.resolve_frame(host.bounds(), host.safe_area(), surface.intrinsic_size());
        surface.set_frame(frame);
    }
}

fn animation_finished<S: IndicatorSurface>(
    state: &mut ResponderState<S>,
    generation: u64,
    kind: TransitionKind,
) {
    if state.generation != generation {
        log::debug!("Skipping finalize of superseded transition {}", generation);
        return;
    }
    state.last_animator = None;

    if kind == TransitionKind::Hiding {
        if state.remove_on_finish {
            log::debug!("Applying deferred layout change");
        }
        state.discard_surface();
        state.remove_on_finish = false;
    }
}

impl<S: IndicatorSurface + 'static> StatusResponder for HudResponder<S> {
    fn change_status(
        &self,
        from: &Status,
        to: &Status,
        host: &HostRef,
        finished: Box<dyn FnOnce()>,
    ) {
        let kind = TransitionKind::between(from, to);
        log::debug!(
            "Status transition {} -> {} ({:?})",
            from.kind(),
            to.kind(),
            kind
        );

        if !to.is_idle() && !self.has_surface() {
            self.layout_surface(host);
        }

        self.interrupt_running();
        self.prepare_animation(host, from, to);

        let animator = self.animator_provider.make_animator();
        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.last_animator = Some(Rc::downgrade(&animator));
            state.generation
        };

        let body_state = Rc::downgrade(&self.state);
        let body_host = host.clone();
        let appearance = self.appearance;
        let (body_from, body_to) = (from.clone(), to.clone());
        animator.add_animations(Box::new(move || {
            let Some(state) = body_state.upgrade() else {
                return;
            };
            let mut state = state.borrow_mut();
            let mut host = body_host.borrow_mut();
            run_animation(&mut state, &mut *host, appearance, &body_from, &body_to);
        }));

        let completion_state = Rc::downgrade(&self.state);
        animator.add_completion(Box::new(move |position| {
            if position != AnimationPosition::End {
                log::debug!("Transition {} stopped at {:?}", generation, position);
                return;
            }
            finished();
            if let Some(state) = completion_state.upgrade() {
                animation_finished(&mut state.borrow_mut(), generation, kind);
            }
        }));

        animator.start_animation();
    }
}
