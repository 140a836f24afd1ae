//! # Valtext core
//!
//! Platform neutral building blocks shared by the valtext widgets:
//!
//! - geometry (`Rect`, `Size`, `Vec2`), `Color`, `Font` metrics and `ImageRef`;
//! - `AnimatedValue<T>` tweens driven by a per-thread, replaceable clock;
//! - `Signal<T>`, a cloneable observable value used for change notifications;
//! - `Scene` / `SceneNode`, the flat display list widgets paint into;
//! - `RenderHost`, the two requests a widget makes of its host.
//!
//! ## Signals
//!
//! ```rust
//! use valtext_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Subscribers run synchronously after every write:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use valtext_core::*;
//!
//! let valid = signal(false);
//! let seen = Rc::new(Cell::new(false));
//! valid.subscribe({
//!     let seen = seen.clone();
//!     move |v| seen.set(*v)
//! });
//! valid.set(true);
//! assert!(seen.get());
//! ```
//!
//! ## Animation
//!
//! Values animate toward a target on every `update()`; tests install a
//! `TestClock` with `set_clock` to step time deterministically.

pub mod animation;
pub mod color;
pub mod error;
pub mod font;
pub mod geometry;
pub mod image;
pub mod render_api;
pub mod scene;
pub mod semantics;
pub mod signal;
pub mod tests;
pub mod view;

pub use color::*;
pub use error::Error;
pub use font::*;
pub use geometry::*;
pub use image::*;
pub use render_api::*;
pub use scene::*;
pub use semantics::*;
pub use signal::*;
pub use view::*;
