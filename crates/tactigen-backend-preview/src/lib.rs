//! Tactigen Preview Backend
//!
//! Turns generated patterns into inspectable artifacts:
//!
//! - [`grid`] - Rasterizes a pattern into `[time][row][col]` amplitude frames
//! - [`animation`] - Animated grayscale GIF previews
//! - [`npy`] - NumPy `.npy` array export
//!
//! # Example
//!
//! ```
//! use tactigen_backend_preview::{render_gif, AmplitudeGrid};
//! use tactigen_spec::{GridPosition, GridSize, MotorEvent, Pattern, PatternIteration, PreviewSettings};
//!
//! let pattern = Pattern::new(vec![PatternIteration::new(
//!     vec![MotorEvent::new(GridPosition::new(1, 1), 200, 300)],
//!     10.0,
//! )]);
//! let grid = AmplitudeGrid::from_pattern(&pattern, GridSize::default()).unwrap();
//! let gif = render_gif(&grid, &PreviewSettings::default()).unwrap();
//! assert_eq!(&gif[..6], b"GIF89a");
//! ```

pub mod animation;
pub mod error;
pub mod grid;
pub mod npy;

pub use animation::{encode_gif, render_gif};
pub use error::{PreviewError, PreviewResult};
pub use grid::AmplitudeGrid;
pub use npy::{render_npy, write_npy};
