use std::fmt;
use std::rc::Rc;

use unicode_segmentation::UnicodeSegmentation;
use valtext_core::{
    NoopHost, Rect, RenderHost, Role, Scene, SceneNode, Semantics, Signal, Size, SubId, Vec2,
    ViewId, next_view_id,
};

use crate::anim::{AnimatedDecorations, FieldAnimator};
use crate::config::PresentationConfig;
use crate::layout::FieldLayout;
use crate::state::{FieldState, Validity, VisualState};
use crate::textfield::{Focus, TextInput, TextInputState};

pub type ValidationPredicate = Rc<dyn Fn(&str) -> bool>;

const SECURE_BULLET: char = '\u{2022}';

/// Emitted after every edit, whether or not the outcome changed.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidityChanged {
    pub field: ViewId,
    pub is_valid: bool,
    pub validity: Validity,
}

/// A text input decorated with a floating title, an underline, a trailing
/// status icon and an error row, all driven by its content, focus and a host
/// supplied validity predicate.
///
/// The field composes any [`TextInput`]; the default is the platform-neutral
/// [`TextInputState`].
///
/// ```rust
/// use valtext_ui::{PresentationConfig, ValidationField, Validity};
///
/// let mut name = ValidationField::new(PresentationConfig::new().title("Name"));
/// name.set_valid_condition(|t| t.chars().count() > 5);
/// assert_eq!(name.validity(), Validity::Ready);
///
/// name.on_text_changed("ab");
/// assert!(!name.is_valid());
/// name.on_text_changed("abcdef");
/// assert!(name.is_valid());
/// ```
pub struct ValidationField<I: TextInput = TextInputState> {
    id: ViewId,
    input: I,
    config: PresentationConfig,
    predicate: Option<ValidationPredicate>,
    validity: Validity,
    enabled: bool,
    bounds: Rect,
    visual: VisualState,
    animator: FieldAnimator,
    // Kept through the fade-out after the error clears.
    error_text_painted: Option<String>,
    events: Signal<ValidityChanged>,
    text: Signal<String>,
    host: Rc<dyn RenderHost>,
}

impl ValidationField<TextInputState> {
    pub fn new(config: PresentationConfig) -> Self {
        Self::with_input(TextInputState::new(), config)
    }

    pub fn insert_text(&mut self, text: &str) {
        self.edit(|s| s.insert_text(text));
    }

    pub fn delete_backward(&mut self) {
        self.edit(|s| s.delete_backward());
    }

    pub fn delete_forward(&mut self) {
        self.edit(|s| s.delete_forward());
    }

    /// Caret movement changes no text; validity is left alone.
    pub fn move_cursor(&mut self, delta: isize, extend_selection: bool) {
        self.input.move_cursor(delta, extend_selection);
    }

    pub fn select_all(&mut self) {
        self.input.select_all();
    }
}

impl<I: TextInput> ValidationField<I> {
    pub fn with_input(input: I, config: PresentationConfig) -> Self {
        let id = next_view_id();
        let enabled = true;
        let state = FieldState {
            text: input.text().to_string(),
            focus: input.focus(),
            validity: Validity::Ready,
            enabled,
        };
        let visual = VisualState::derive(&state, &config);
        let bounds = Rect::ZERO;
        let animator = FieldAnimator::new(&visual, &FieldLayout::new(&config, bounds.size()));
        Self {
            id,
            input,
            config,
            predicate: None,
            validity: Validity::Ready,
            enabled,
            bounds,
            visual,
            animator,
            error_text_painted: None,
            events: Signal::new(ValidityChanged {
                field: id,
                is_valid: false,
                validity: Validity::Ready,
            }),
            text: Signal::new(state.text),
            host: Rc::new(NoopHost),
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn set_host(&mut self, host: Rc<dyn RenderHost>) {
        self.host = host;
    }

    /// Install or replace the predicate. It first runs on the next edit.
    pub fn set_valid_condition(&mut self, predicate: impl Fn(&str) -> bool + 'static) {
        self.predicate = Some(Rc::new(predicate));
    }

    pub fn clear_valid_condition(&mut self) {
        self.predicate = None;
    }

    pub fn has_valid_condition(&self) -> bool {
        self.predicate.is_some()
    }

    /// Text-changed callback from the host's text layer.
    pub fn on_text_changed(&mut self, new_text: &str) {
        if self.input.text() != new_text {
            self.input.set_text(new_text);
        }
        self.apply_edit();
    }

    /// Programmatic replacement; takes the same path as a keystroke.
    pub fn set_text(&mut self, text: &str) {
        self.on_text_changed(text);
    }

    /// Run an edit against the composed input, then validate.
    pub fn edit(&mut self, f: impl FnOnce(&mut I)) {
        f(&mut self.input);
        self.apply_edit();
    }

    fn apply_edit(&mut self) {
        let text = self.input.text().to_string();
        let valid = self.predicate.as_ref().is_none_or(|p| p(text.as_str()));
        let validity = Validity::from_outcome(valid);
        if validity != self.validity {
            log::debug!(
                "field {} validity {:?} -> {:?}",
                self.id,
                self.validity,
                validity
            );
        }
        self.validity = validity;
        self.text.set(text);
        self.recompute();
        self.events.set(ValidityChanged {
            field: self.id,
            is_valid: valid,
            validity,
        });
    }

    pub fn focus(&mut self) {
        self.set_focus(self.input.focus() | Focus::EDITING);
    }

    pub fn blur(&mut self) {
        self.set_focus(self.input.focus() - Focus::EDITING);
    }

    pub fn set_selected(&mut self, selected: bool) {
        let mut focus = self.input.focus();
        focus.set(Focus::SELECTED, selected);
        self.set_focus(focus);
    }

    /// Focus transitions restyle the field but never rerun validation.
    pub fn set_focus(&mut self, focus: Focus) {
        if focus == self.input.focus() {
            return;
        }
        self.input.set_focus(focus);
        self.recompute();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled != self.enabled {
            self.enabled = enabled;
            self.recompute();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn update_config(&mut self, f: impl FnOnce(&mut PresentationConfig)) {
        f(&mut self.config);
        self.apply_config_change();
    }

    pub fn set_config(&mut self, config: PresentationConfig) {
        self.config = config;
        self.apply_config_change();
    }

    fn apply_config_change(&mut self) {
        self.recompute();
        // Font or scale changes move every strip; don't tween geometry.
        let layout = FieldLayout::new(&self.config, self.bounds.size());
        self.animator.settle(&self.visual, &layout);
    }

    /// Re-derive the visual state and retarget the animations.
    pub fn recompute(&mut self) {
        let state = self.field_state();
        self.visual = VisualState::derive(&state, &self.config);
        log::trace!("field {} recomputed: {:?}", self.id, self.visual);
        if self.visual.error_visible {
            self.error_text_painted = self.visual.error_text.clone();
        }
        let layout = FieldLayout::new(&self.config, self.bounds.size());
        self.animator.retarget(&self.visual, &layout);
        self.host.request_layout(self.id);
        if self.animator.is_animating() {
            self.host.request_frame();
        }
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        if bounds == self.bounds {
            return;
        }
        let resized = bounds.size() != self.bounds.size();
        self.bounds = bounds;
        if resized {
            let layout = FieldLayout::new(&self.config, bounds.size());
            self.animator.settle(&self.visual, &layout);
        }
        self.host.request_layout(self.id);
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn layout(&self) -> FieldLayout<'_> {
        FieldLayout::new(&self.config, self.bounds.size())
    }

    pub fn title_rect(&self) -> Rect {
        self.layout().title_rect(self.visual.title_visible)
    }

    pub fn underline_rect(&self) -> Rect {
        self.layout().underline_rect(self.visual.underline_emphasized)
    }

    pub fn error_rect(&self) -> Rect {
        self.layout().error_rect()
    }

    pub fn text_input_rect(&self) -> Rect {
        self.layout().text_input_rect()
    }

    pub fn placeholder_rect(&self) -> Rect {
        self.layout().placeholder_rect()
    }

    pub fn left_icon_rect(&self) -> Option<Rect> {
        self.layout().left_icon_rect()
    }

    pub fn status_icon_rect(&self) -> Rect {
        self.layout().status_icon_rect()
    }

    pub fn intrinsic_size(&self) -> Size {
        self.layout().intrinsic_size()
    }

    /// Advance animations; true while another frame is needed.
    pub fn tick(&mut self) -> bool {
        let moving = self.animator.tick();
        if moving {
            self.host.request_frame();
        } else if !self.visual.error_visible {
            self.error_text_painted = None;
        }
        moving
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn decorations(&self) -> AnimatedDecorations {
        self.animator.current()
    }

    pub fn paint(&self, scene: &mut Scene) {
        let layout = self.layout();
        let origin = Vec2 {
            x: self.bounds.x,
            y: self.bounds.y,
        };
        let deco = self.animator.current();
        let cfg = &self.config;

        if let (Some(icon), Some(rect)) = (&cfg.left_icon, layout.left_icon_rect()) {
            scene.push(SceneNode::Image {
                rect: rect.offset(origin),
                image: icon.clone(),
                alpha: 1.0,
            });
        }

        if deco.title_alpha > 0.0 {
            let th = layout.title_height();
            scene.push(SceneNode::Text {
                rect: Rect::new(0.0, deco.title_y, self.bounds.w, th).offset(origin),
                text: self.visual.title_text.clone(),
                color: self.visual.title_color.fade(deco.title_alpha),
                size: cfg.title_font.size,
            });
        }

        let text = self.input.text();
        if !text.is_empty() {
            scene.push(SceneNode::Text {
                rect: layout.text_input_rect().offset(origin),
                text: self.display_text(),
                color: cfg.text_color,
                size: cfg.text_font.size,
            });
        } else if let (true, Some(placeholder)) =
            (self.visual.placeholder_visible, &cfg.placeholder)
        {
            scene.push(SceneNode::Text {
                rect: layout.placeholder_rect().offset(origin),
                text: placeholder.clone(),
                color: self.visual.placeholder_color,
                size: cfg.resolved_placeholder_font().size,
            });
        }

        if let Some(icon) = &self.visual.status_icon {
            scene.push(SceneNode::Image {
                rect: layout.status_icon_rect().offset(origin),
                image: icon.clone(),
                alpha: 1.0,
            });
        }

        let uh = deco.underline_height;
        scene.push(SceneNode::Rect {
            rect: Rect::new(0.0, self.bounds.h - uh, self.bounds.w, uh).offset(origin),
            color: deco.underline_color,
            radius: 0.0,
        });

        if deco.error_alpha > 0.0 {
            if let Some(message) = &self.error_text_painted {
                scene.push(SceneNode::Text {
                    rect: layout.error_rect().offset(origin),
                    text: message.clone(),
                    color: cfg.error_color.fade(deco.error_alpha),
                    size: cfg.error_font.size,
                });
            }
        }
    }

    /// Text as drawn: bullets (one per grapheme) for secure entry.
    pub fn display_text(&self) -> String {
        let text = self.input.text();
        if self.config.secure_entry {
            text.graphemes(true).map(|_| SECURE_BULLET).collect()
        } else {
            text.to_string()
        }
    }

    pub fn semantics(&self) -> Semantics {
        let label = if self.config.use_title {
            Some(self.config.title_text.clone())
        } else {
            self.config.placeholder.clone()
        };
        Semantics {
            role: Role::TextField,
            label,
            value: Some(self.display_text()),
            focused: self.input.focus().contains(Focus::EDITING),
            enabled: self.enabled,
            invalid: self.visual.error_visible,
        }
    }

    /// `true` only after an edit that passed the predicate (or with none).
    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    /// Cloneable handle to the field's text, for predicates of other fields.
    pub fn text_signal(&self) -> Signal<String> {
        self.text.clone()
    }

    pub fn events(&self) -> Signal<ValidityChanged> {
        self.events.clone()
    }

    pub fn subscribe(&self, f: impl Fn(&ValidityChanged) + 'static) -> SubId {
        self.events.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn field_state(&self) -> FieldState {
        FieldState {
            text: self.input.text().to_string(),
            focus: self.input.focus(),
            validity: self.validity,
            enabled: self.enabled,
        }
    }

    pub fn visual_state(&self) -> &VisualState {
        &self.visual
    }

    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    pub fn input(&self) -> &I {
        &self.input
    }
}

impl<I: TextInput> fmt::Debug for ValidationField<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationField")
            .field("id", &self.id)
            .field("text", &self.display_text())
            .field("validity", &self.validity)
            .field("has_predicate", &self.predicate.is_some())
            .field("bounds", &self.bounds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use valtext_core::animation::{TestClock, set_clock};
    use valtext_core::{BundledIcon, Color, Font, ImageRef};
    use web_time::{Duration, Instant};

    fn field(cfg: PresentationConfig) -> ValidationField {
        let mut f = ValidationField::new(cfg);
        f.set_bounds(Rect::new(10.0, 20.0, 200.0, 50.0));
        f
    }

    #[test]
    fn no_predicate_means_valid_after_edit() {
        let mut f = field(PresentationConfig::new());
        assert_eq!(f.validity(), Validity::Ready);
        assert!(!f.is_valid());
        f.on_text_changed("anything");
        assert!(f.is_valid());
        f.on_text_changed("");
        assert!(f.is_valid());
    }

    #[test]
    fn validity_matches_predicate() {
        let mut f = field(PresentationConfig::new());
        f.set_valid_condition(|t| t.len() > 8);
        for (text, expected) in [("abc", false), ("abcdefgh1", true), ("", false)] {
            f.on_text_changed(text);
            assert_eq!(f.is_valid(), expected, "{text:?}");
        }
    }

    #[test]
    fn installing_predicate_does_not_revalidate() {
        let mut f = field(PresentationConfig::new());
        f.on_text_changed("abc");
        assert!(f.is_valid());
        f.set_valid_condition(|_| false);
        assert!(f.is_valid());
        f.insert_text("d");
        assert!(!f.is_valid());
        f.clear_valid_condition();
        f.delete_backward();
        assert!(f.is_valid());
    }

    #[test]
    fn every_edit_notifies_subscribers() {
        let mut f = field(PresentationConfig::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        f.subscribe({
            let seen = seen.clone();
            move |e| seen.borrow_mut().push(e.is_valid)
        });
        f.set_valid_condition(|t| t.len() > 1);
        f.insert_text("a");
        f.insert_text("b");
        f.insert_text("c");
        assert_eq!(*seen.borrow(), vec![false, true, true]);
        assert_eq!(f.events().get().field, f.id());
    }

    #[test]
    fn focus_restyles_without_validation() {
        let mut f = field(PresentationConfig::new());
        let runs = Rc::new(Cell::new(0));
        f.set_valid_condition({
            let runs = runs.clone();
            move |_| {
                runs.set(runs.get() + 1);
                true
            }
        });
        f.focus();
        assert!(f.visual_state().underline_emphasized);
        assert_eq!(f.visual_state().underline_color, Color::COMPLETED);
        f.blur();
        assert!(!f.visual_state().underline_emphasized);
        f.set_selected(true);
        assert!(f.visual_state().underline_emphasized);
        assert_eq!(runs.get(), 0);
        assert_eq!(f.validity(), Validity::Ready);
    }

    #[test]
    fn underline_rect_thickens_when_editing() {
        let mut f = field(PresentationConfig::new().scale(1.0));
        assert_eq!(f.underline_rect().h, 2.0);
        f.focus();
        assert_eq!(f.underline_rect().h, 4.0);
    }

    #[test]
    fn error_row_and_icons_follow_validity() {
        let cfg = PresentationConfig::new()
            .error_message("Too short")
            .success_icon(ImageRef::named("thumb_up"));
        let mut f = field(cfg);
        f.set_valid_condition(|t| t.len() > 3);

        f.on_text_changed("ab");
        let v = f.visual_state();
        assert!(v.error_visible);
        assert_eq!(v.error_text.as_deref(), Some("Too short"));
        assert_eq!(v.status_icon, Some(ImageRef::Bundled(BundledIcon::Error)));

        f.on_text_changed("");
        assert!(!f.visual_state().error_visible);
        assert_eq!(f.visual_state().status_icon, None);

        f.on_text_changed("abcd");
        assert!(!f.visual_state().error_visible);
        assert_eq!(
            f.visual_state().status_icon,
            Some(ImageRef::named("thumb_up"))
        );
    }

    #[test]
    fn title_follows_text_even_when_invalid() {
        let mut f = field(PresentationConfig::new());
        f.set_valid_condition(|_| false);
        assert!(!f.visual_state().title_visible);
        f.on_text_changed("x");
        assert!(f.visual_state().title_visible);
        assert!(!f.is_valid());
    }

    #[test]
    fn paint_fades_title_and_error_in() {
        let t0 = Instant::now();
        set_clock(TestClock { t: t0 });

        let mut f = field(
            PresentationConfig::new()
                .title("Name")
                .error_message("Too short")
                .placeholder("Your name"),
        );
        f.set_valid_condition(|t| t.len() > 5);

        let mut scene = Scene::new();
        f.paint(&mut scene);
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["Your name"]);
        assert_eq!(scene.images().count(), 0);

        f.on_text_changed("ab");
        assert!(f.is_animating());
        set_clock(TestClock {
            t: t0 + Duration::from_millis(250),
        });
        assert!(!f.tick());

        let mut scene = Scene::new();
        f.paint(&mut scene);
        assert_eq!(
            scene.texts().collect::<Vec<_>>(),
            vec!["Too short", "ab", "Too short"]
        );
        assert_eq!(
            scene.images().collect::<Vec<_>>(),
            vec![&ImageRef::Bundled(BundledIcon::Error)]
        );
        match scene.nodes.iter().find(|n| matches!(n, SceneNode::Text { .. })) {
            Some(SceneNode::Text { rect, color, .. }) => {
                // Title strip, tinted like the error.
                assert_eq!(rect.y, 20.0);
                assert_eq!(*color, Color::ERROR);
            }
            other => panic!("unexpected {other:?}"),
        }
        // The error row is painted last.
        let error_node = scene
            .nodes
            .iter()
            .rev()
            .find(|n| matches!(n, SceneNode::Text { text, .. } if text == "Too short"));
        match error_node {
            Some(SceneNode::Text { rect, color, .. }) => {
                // Below the field, in host coordinates.
                assert_eq!(rect.y, 20.0 + 50.0);
                assert_eq!(*color, Color::ERROR);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn error_text_survives_its_fade_out() {
        let t0 = Instant::now();
        set_clock(TestClock { t: t0 });

        let mut f = field(PresentationConfig::new().error_message("bad"));
        f.set_valid_condition(|t| t.len() > 3);
        f.on_text_changed("ab");
        set_clock(TestClock {
            t: t0 + Duration::from_millis(300),
        });
        f.tick();

        f.on_text_changed("abcd");
        set_clock(TestClock {
            t: t0 + Duration::from_millis(450),
        });
        assert!(f.tick());
        let mut scene = Scene::new();
        f.paint(&mut scene);
        assert!(scene.texts().any(|t| t == "bad"));

        set_clock(TestClock {
            t: t0 + Duration::from_millis(700),
        });
        assert!(!f.tick());
        let mut scene = Scene::new();
        f.paint(&mut scene);
        assert!(!scene.texts().any(|t| t == "bad"));
    }

    #[test]
    fn secure_entry_masks_text() {
        let mut f = field(PresentationConfig::new().secure_entry(true));
        f.on_text_changed("p\u{1F44D}\u{1F3FD}ss");
        assert_eq!(f.display_text(), "\u{2022}\u{2022}\u{2022}\u{2022}");
        assert_eq!(f.text(), "p\u{1F44D}\u{1F3FD}ss");
        assert_eq!(f.semantics().value.as_deref(), Some("\u{2022}\u{2022}\u{2022}\u{2022}"));
    }

    #[test]
    fn config_change_recomputes() {
        let mut f = field(PresentationConfig::new());
        f.on_text_changed("abc");
        assert!(f.visual_state().title_visible);
        f.update_config(|c| c.use_title = false);
        assert!(!f.visual_state().title_visible);
        assert_eq!(f.decorations().title_alpha, 0.0);

        f.set_config(PresentationConfig::new().title_font(Font::system(10.0)));
        assert!((f.title_rect().h - 13.0).abs() < 0.001);
    }

    #[test]
    fn disabled_field_uses_disabled_color() {
        let mut f = field(PresentationConfig::new());
        f.set_enabled(false);
        assert_eq!(f.visual_state().underline_color, Color::DISABLED);
        assert!(!f.semantics().enabled);
    }

    #[test]
    fn host_receives_layout_requests() {
        #[derive(Default)]
        struct CountingHost {
            layouts: Cell<usize>,
            frames: Cell<usize>,
        }
        impl RenderHost for CountingHost {
            fn request_layout(&self, _id: ViewId) {
                self.layouts.set(self.layouts.get() + 1);
            }
            fn request_frame(&self) {
                self.frames.set(self.frames.get() + 1);
            }
        }

        let host = Rc::new(CountingHost::default());
        let mut f = field(PresentationConfig::new());
        f.set_host(host.clone());
        f.on_text_changed("a");
        assert_eq!(host.layouts.get(), 1);
        assert!(host.frames.get() >= 1);
    }
}
