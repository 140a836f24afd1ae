use valtext_core::Color;
use valtext_core::animation::{AnimatedValue, AnimationSpec, Easing, Interpolate};
use web_time::Duration;

use crate::layout::FieldLayout;
use crate::state::VisualState;

/// Appearing decorations (title, error row) fade in faster than they fade out.
pub const FADE_IN: Duration = Duration::from_millis(200);
pub const FADE_OUT: Duration = Duration::from_millis(300);

pub fn fade_in() -> AnimationSpec {
    AnimationSpec::tween(FADE_IN, Easing::EaseOut)
}

pub fn fade_out() -> AnimationSpec {
    AnimationSpec::tween(FADE_OUT, Easing::EaseOut)
}

fn fade_for(visible: bool) -> AnimationSpec {
    if visible { fade_in() } else { fade_out() }
}

/// Retarget only when the destination changed, so repeated recomputes with
/// the same outcome don't restart a running fade.
fn retarget<T: Interpolate + Clone + PartialEq>(
    a: &mut AnimatedValue<T>,
    target: T,
    spec: AnimationSpec,
) {
    if *a.target() != target {
        a.set_target_with(target, spec);
    }
}

/// Current animated values of a field's decorations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedDecorations {
    pub title_alpha: f32,
    pub title_y: f32,
    pub error_alpha: f32,
    pub underline_height: f32,
    pub underline_color: Color,
}

#[derive(Clone, Debug)]
pub struct FieldAnimator {
    title_alpha: AnimatedValue<f32>,
    title_y: AnimatedValue<f32>,
    error_alpha: AnimatedValue<f32>,
    underline_height: AnimatedValue<f32>,
    underline_color: AnimatedValue<Color>,
}

impl FieldAnimator {
    /// Start settled at `visual`; nothing animates on first render.
    pub fn new(visual: &VisualState, layout: &FieldLayout<'_>) -> Self {
        let spec = fade_in();
        Self {
            title_alpha: AnimatedValue::new(visual.title_alpha, spec),
            title_y: AnimatedValue::new(layout.title_rect(visual.title_visible).y, spec),
            error_alpha: AnimatedValue::new(alpha(visual.error_visible), spec),
            underline_height: AnimatedValue::new(
                layout.underline_rect(visual.underline_emphasized).h,
                spec,
            ),
            underline_color: AnimatedValue::new(visual.underline_color, spec),
        }
    }

    pub fn retarget(&mut self, visual: &VisualState, layout: &FieldLayout<'_>) {
        let title_spec = fade_for(visual.title_visible);
        retarget(&mut self.title_alpha, visual.title_alpha, title_spec);
        retarget(
            &mut self.title_y,
            layout.title_rect(visual.title_visible).y,
            title_spec,
        );
        retarget(
            &mut self.error_alpha,
            alpha(visual.error_visible),
            fade_for(visual.error_visible),
        );
        retarget(
            &mut self.underline_height,
            layout.underline_rect(visual.underline_emphasized).h,
            fade_in(),
        );
        retarget(&mut self.underline_color, visual.underline_color, fade_in());
    }

    /// Jump every value to its target (e.g. after a resize).
    pub fn settle(&mut self, visual: &VisualState, layout: &FieldLayout<'_>) {
        self.title_alpha.snap_to(visual.title_alpha);
        self.title_y.snap_to(layout.title_rect(visual.title_visible).y);
        self.error_alpha.snap_to(alpha(visual.error_visible));
        self.underline_height
            .snap_to(layout.underline_rect(visual.underline_emphasized).h);
        self.underline_color.snap_to(visual.underline_color);
    }

    /// Advance all values; true while any is still moving.
    pub fn tick(&mut self) -> bool {
        // No short-circuit: every value must advance.
        let moving = [
            self.title_alpha.update(),
            self.title_y.update(),
            self.error_alpha.update(),
            self.underline_height.update(),
            self.underline_color.update(),
        ];
        moving.contains(&true)
    }

    pub fn is_animating(&self) -> bool {
        self.title_alpha.is_animating()
            || self.title_y.is_animating()
            || self.error_alpha.is_animating()
            || self.underline_height.is_animating()
            || self.underline_color.is_animating()
    }

    pub fn title_spec(&self) -> AnimationSpec {
        self.title_alpha.spec()
    }

    pub fn current(&self) -> AnimatedDecorations {
        AnimatedDecorations {
            title_alpha: *self.title_alpha.get(),
            title_y: *self.title_y.get(),
            error_alpha: *self.error_alpha.get(),
            underline_height: *self.underline_height.get(),
            underline_color: *self.underline_color.get(),
        }
    }
}

fn alpha(visible: bool) -> f32 {
    if visible { 1.0 } else { 0.0 }
}
