//! Passcode Lattice: masked numeric password widgets.
//!
//! A row of slots, one per character. Empty slots are outlined circles,
//! entered characters are filled circles, and the character just typed is
//! shown briefly before it is masked. A reveal mode shows every character.
//!
//! Everything from `passcode-lattice-core` (timers, signals, tracing targets)
//! is re-exported at the crate root, and `passcode-lattice-render` (geometry,
//! colors, fonts and the [`Renderer`](render::Renderer) trait hosts
//! implement) under [`render`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use passcode_lattice::prelude::*;
//!
//! let timers = Arc::new(SharedTimerManager::new());
//! let mut input = PasswordInput::new(timers);
//!
//! input.edit_mut().insert_text("4821");
//! let layout = input.edit_mut().measure(
//!     &SimpleFontMetrics,
//!     SizeConstraint::Exact(300),
//!     SizeConstraint::Unconstrained,
//! );
//!
//! let mut renderer = RecordingRenderer::new();
//! let area = Size::new(layout.width as f32, layout.height as f32);
//! input.edit_mut().paint(&mut renderer, &SimpleFontMetrics, area);
//! assert_eq!(renderer.commands().len(), 6);
//!
//! input.set_error(true);
//! assert_eq!(input.text(), "");
//! ```

mod error;
pub mod prelude;
pub mod widget;

pub use passcode_lattice_core::*;

/// Rendering types re-exported from `passcode-lattice-render`.
pub mod render {
    pub use passcode_lattice_render::*;
}

pub use error::{StyleError, StyleResult};
