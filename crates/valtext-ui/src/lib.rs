//! Validating text field, its decorations and form-level aggregation.
//!
//! A [`ValidationField`] wraps a plain [`TextInput`] and derives everything it
//! draws from three inputs: the text, the focus state and a host supplied
//! predicate. The derivation is the pure [`VisualState::derive`]; layout rects
//! come from [`FieldLayout`]; [`FieldAnimator`] eases between successive
//! visual states. A [`FormAggregator`] listens to several fields and gates a
//! [`SubmitButton`] on all of them being valid.

pub mod anim;
pub mod config;
pub mod field;
pub mod form;
pub mod layout;
pub mod state;
pub mod textfield;

pub use anim::{AnimatedDecorations, FieldAnimator};
pub use config::PresentationConfig;
pub use field::{ValidationField, ValidationPredicate, ValidityChanged};
pub use form::{FormAggregator, SubmitButton};
pub use layout::FieldLayout;
pub use state::{FieldState, Validity, VisualState};
pub use textfield::{Focus, TextInput, TextInputState};
