//! Center-inside layout for crop viewports.
//!
//! Pure geometry: no pixel operations, no allocations, `no_std` compatible.
//!
//! # Modules
//!
//! - [`constraint`] — Measure modes, size negotiation, core value types
//! - [`placement`] — Center-inside content rect within a container
//! - [`aspect`] — Aspect-ratio arithmetic and crop overlay options
//! - [`orientation`] — Rotation bookkeeping and rotated content size
//! - [`viewport`] — Stateful driver mirroring a host view's callbacks

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod aspect;
pub mod constraint;
pub mod orientation;
pub mod placement;
pub mod viewport;

// Re-exports: value types and entry points
pub use aspect::{AspectRatio, CropOptions};
pub use constraint::{
    AxisConstraint, FitLayout, LayoutError, LayoutResult, MeasureMode, Rect, Rounding, Size,
    ZeroSizeFallback,
};
pub use orientation::{ViewState, rotated_size};
pub use placement::{center_inside, center_inside_dims};
pub use viewport::CropViewport;
