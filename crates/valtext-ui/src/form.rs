//! Screen-level aggregation of field validity into one submit flag.

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use valtext_core::{Color, Rect, Role, Scene, SceneNode, Semantics, SubId};

use crate::field::ValidationField;
use crate::textfield::TextInput;

/// The action gated by the form's overall validity.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
    pub background: Color,
    pub active_tint: Color,
    pub inactive_tint: Color,
}

impl SubmitButton {
    /// Starts disabled with the inactive tint.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: false,
            background: Color::LIGHT_GRAY,
            active_tint: Color::COMPLETED,
            inactive_tint: Color::LIGHT_GRAY,
        }
    }

    pub fn tints(mut self, active: Color, inactive: Color) -> Self {
        self.active_tint = active;
        self.inactive_tint = inactive;
        self.background = if self.enabled { active } else { inactive };
        self
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.background = if enabled {
            self.active_tint
        } else {
            self.inactive_tint
        };
    }

    pub fn paint(&self, rect: Rect, scene: &mut Scene) {
        scene.push(SceneNode::Rect {
            rect,
            color: self.background,
            radius: 4.0,
        });
        scene.push(SceneNode::Text {
            rect,
            text: self.label.clone(),
            color: Color::WHITE,
            size: 17.0,
        });
    }

    pub fn semantics(&self) -> Semantics {
        Semantics {
            label: Some(self.label.clone()),
            enabled: self.enabled,
            ..Semantics::new(Role::Button)
        }
    }
}

type AllValidCallback = Rc<dyn Fn(bool)>;

struct AggregateState<K> {
    entries: Vec<(K, bool)>,
    all_valid: bool,
    submit: SubmitButton,
    on_change: Option<AllValidCallback>,
}

impl<K: Copy + PartialEq + Debug> AggregateState<K> {
    /// Overwrite one entry and recompute the AND in the same step. Returns
    /// the new flag when it flipped.
    fn record(&mut self, key: K, valid: bool) -> Option<bool> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = valid,
            None => self.entries.push((key, valid)),
        }
        self.refresh(key)
    }

    fn remove(&mut self, key: K) -> Option<bool> {
        self.entries.retain(|(k, _)| *k != key);
        self.refresh(key)
    }

    fn refresh(&mut self, via: K) -> Option<bool> {
        let all_valid = self.entries.iter().all(|(_, v)| *v);
        if all_valid == self.all_valid {
            return None;
        }
        log::debug!("form all_valid {} -> {} (via {:?})", self.all_valid, all_valid, via);
        self.all_valid = all_valid;
        self.submit.set_enabled(all_valid);
        Some(all_valid)
    }
}

/// Folds the validity of registered fields into one `all_valid` flag.
///
/// Keys are a small typed vocabulary chosen by the screen, usually an enum
/// with one variant per field. The aggregator is a cheap handle; clones
/// share state.
///
/// ```rust
/// use valtext_ui::{FormAggregator, PresentationConfig, SubmitButton, ValidationField};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Field { Name, Email }
///
/// let mut name = ValidationField::new(PresentationConfig::new());
/// let mut email = ValidationField::new(PresentationConfig::new());
/// email.set_valid_condition(|t| t.contains('@'));
///
/// let form = FormAggregator::new(SubmitButton::new("Confirm"));
/// form.register(Field::Name, &name);
/// form.register(Field::Email, &email);
///
/// name.on_text_changed("Ada");
/// email.on_text_changed("ada@example.com");
/// assert!(form.all_valid());
/// assert!(form.submit_button().enabled);
/// ```
pub struct FormAggregator<K> {
    state: Rc<RefCell<AggregateState<K>>>,
}

impl<K> Clone for FormAggregator<K> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<K: Copy + PartialEq + Debug + 'static> FormAggregator<K> {
    /// The submit control starts disabled, even before any registration.
    pub fn new(mut submit: SubmitButton) -> Self {
        submit.set_enabled(false);
        Self {
            state: Rc::new(RefCell::new(AggregateState {
                entries: Vec::new(),
                all_valid: false,
                submit,
                on_change: None,
            })),
        }
    }

    /// Subscribe to `field` and seed the entry with its current validity
    /// (`false` until its first edit). Registering a key again replaces the
    /// entry; the earlier field's notifications keep updating the same key
    /// until it is unregistered.
    pub fn register<I: TextInput>(&self, key: K, field: &ValidationField<I>) -> SubId {
        let weak = Rc::downgrade(&self.state);
        let id = field.subscribe(move |event| {
            if let Some(state) = weak.upgrade() {
                Self::apply(&state, key, event.is_valid);
            }
        });
        Self::apply(&self.state, key, field.is_valid());
        id
    }

    /// Detach `field` (using the id `register` returned) and drop `key`.
    pub fn unregister<I: TextInput>(&self, key: K, field: &ValidationField<I>, id: SubId) {
        field.unsubscribe(id);
        let (flipped, callback) = {
            let mut s = self.state.borrow_mut();
            (s.remove(key), s.on_change.clone())
        };
        if let (Some(all_valid), Some(cb)) = (flipped, callback) {
            cb(all_valid);
        }
    }

    /// Feed a validity report for `key` directly.
    pub fn report(&self, key: K, valid: bool) {
        Self::apply(&self.state, key, valid);
    }

    fn apply(state: &Rc<RefCell<AggregateState<K>>>, key: K, valid: bool) {
        let (flipped, callback) = {
            let mut s = state.borrow_mut();
            (s.record(key, valid), s.on_change.clone())
        };
        // Callback runs outside the borrow so it may query the form.
        if let (Some(all_valid), Some(cb)) = (flipped, callback) {
            cb(all_valid);
        }
    }

    pub fn on_all_valid_changed(&self, f: impl Fn(bool) + 'static) {
        self.state.borrow_mut().on_change = Some(Rc::new(f));
    }

    pub fn all_valid(&self) -> bool {
        self.state.borrow().all_valid
    }

    pub fn validity_of(&self, key: K) -> Option<bool> {
        self.state
            .borrow()
            .entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn entries(&self) -> Vec<(K, bool)> {
        self.state.borrow().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().entries.is_empty()
    }

    pub fn submit_button(&self) -> SubmitButton {
        self.state.borrow().submit.clone()
    }

    /// Press the submit control. Returns the per-field snapshot when the form
    /// is valid, `None` (and does nothing) otherwise.
    pub fn submit(&self) -> Option<Vec<(K, bool)>> {
        let s = self.state.borrow();
        if !s.submit.enabled {
            log::debug!("submit ignored, form incomplete");
            return None;
        }
        for (key, valid) in &s.entries {
            log::info!("{key:?}: {valid}");
        }
        Some(s.entries.clone())
    }
}
