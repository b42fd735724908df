//! Size negotiation between a viewport's constraints and its content.
//!
//! Picks the final size of a viewport from one [`AxisConstraint`] per axis
//! and the intrinsic size of the image it shows. The content is never
//! upscaled here; when it overflows a cap, it shrinks uniformly along the
//! binding axis. No allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zencrop::{AxisConstraint, FitLayout, Rect, Size};
//!
//! let result = FitLayout::new().layout(
//!     AxisConstraint::at_most(300),
//!     AxisConstraint::at_most(300),
//!     Size::new(1000, 500),
//! );
//!
//! // Width binds (300/1000 < 300/500), height follows the aspect ratio.
//! assert_eq!(result.size, Size::new(300, 150));
//! assert_eq!(result.content_rect, Rect::new(0.0, 0.0, 300.0, 150.0));
//! ```

use core::fmt;

use num_traits::Float;

use crate::placement::center_inside;

/// Width × height dimensions in pixels.
///
/// A size with either dimension equal to zero means "no content".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// The absent size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero.
    pub const fn is_absent(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Swap width and height.
    pub const fn transpose(self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// Axis-aligned rectangle in view coordinates.
///
/// Edges are stored directly: `right >= left`, `bottom >= top`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// The "no content" rect. Overlays hide themselves when handed this.
    pub const EMPTY: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a rect from its edges.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Whether the rect has no area.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

/// How a host constrains one axis of the viewport.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureMode {
    /// No bound. The desired size is used as-is.
    Unconstrained,
    /// The axis must be exactly the given size.
    Exact,
    /// The axis may be anything up to the given size.
    AtMost,
}

const MODE_SHIFT: u32 = 30;
const SIZE_MASK: u32 = (1 << MODE_SHIFT) - 1;

impl MeasureMode {
    /// Resolve the final axis size from the cap and the desired size.
    pub fn resolve(self, cap: u32, desired: u32) -> u32 {
        match self {
            Self::Exact => cap,
            Self::AtMost => desired.min(cap),
            Self::Unconstrained => desired,
        }
    }

    fn bits(self) -> u32 {
        match self {
            Self::Unconstrained => 0,
            Self::Exact => 1,
            Self::AtMost => 2,
        }
    }
}

/// Constraint for a single axis: a mode plus a size.
///
/// `size` still matters for [`MeasureMode::Unconstrained`] when the content
/// is absent, because the raw constraint sizes become the result.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisConstraint {
    pub mode: MeasureMode,
    pub size: u32,
}

impl AxisConstraint {
    pub const fn new(mode: MeasureMode, size: u32) -> Self {
        Self { mode, size }
    }

    /// The axis must be exactly `size`.
    pub const fn exact(size: u32) -> Self {
        Self::new(MeasureMode::Exact, size)
    }

    /// The axis may be at most `size`.
    pub const fn at_most(size: u32) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    /// No bound. `size` is what a host reports anyway (often 0).
    pub const fn unconstrained(size: u32) -> Self {
        Self::new(MeasureMode::Unconstrained, size)
    }

    /// Build a constraint from a signed host value, rejecting negative sizes.
    pub fn try_new(mode: MeasureMode, size: i64) -> Result<Self, LayoutError> {
        let size = u32::try_from(size).map_err(|_| LayoutError::InvalidConstraint)?;
        Ok(Self::new(mode, size))
    }

    /// Decode a packed measure spec: mode in bits 30–31, size in bits 0–29.
    ///
    /// Mode bits `0` = unconstrained, `1` = exact, `2` = at-most. The fourth
    /// pattern is not a valid mode.
    pub fn from_measure_spec(spec: u32) -> Result<Self, LayoutError> {
        let mode = match spec >> MODE_SHIFT {
            0 => MeasureMode::Unconstrained,
            1 => MeasureMode::Exact,
            2 => MeasureMode::AtMost,
            _ => return Err(LayoutError::InvalidConstraint),
        };
        Ok(Self::new(mode, spec & SIZE_MASK))
    }

    /// Encode as a packed measure spec. Sizes above 30 bits don't fit.
    pub fn to_measure_spec(self) -> Result<u32, LayoutError> {
        if self.size > SIZE_MASK {
            return Err(LayoutError::InvalidConstraint);
        }
        Ok((self.mode.bits() << MODE_SHIFT) | self.size)
    }
}

/// Which axes fall back to the content's own dimension when the host
/// reports a zero-sized constraint.
///
/// Some scrolling containers measure their children with a height of 0.
/// Taken literally, that collapses the viewport, so by default a zero height
/// is replaced by the content height before negotiation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ZeroSizeFallback {
    /// Zero sizes are used as reported.
    Disabled,
    /// Only a zero height is replaced.
    #[default]
    HeightOnly,
    /// Zero width and zero height are both replaced.
    BothAxes,
}

impl ZeroSizeFallback {
    fn covers_width(self) -> bool {
        matches!(self, Self::BothAxes)
    }

    fn covers_height(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// How the derived (non-binding) axis is converted back to whole pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Toward zero.
    #[default]
    Truncate,
    /// To the nearest pixel, halves away from zero.
    Nearest,
}

impl Rounding {
    fn apply(self, value: f64) -> u32 {
        match self {
            Self::Truncate => Float::trunc(value) as u32,
            Self::Nearest => Float::round(value) as u32,
        }
    }
}

/// Output of one layout pass.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LayoutResult {
    /// Final negotiated viewport size.
    pub size: Size,
    /// Where the content sits inside `size`. [`Rect::EMPTY`] without content.
    pub content_rect: Rect,
}

/// Center-inside size negotiation.
///
/// # Example
///
/// ```
/// use zencrop::{AxisConstraint, FitLayout, Rounding, Size, ZeroSizeFallback};
///
/// let fit = FitLayout::new()
///     .zero_size_fallback(ZeroSizeFallback::Disabled)
///     .rounding(Rounding::Nearest);
///
/// // 999 × 0.3 = 299.7 rounds up instead of truncating to 299.
/// let size = fit.measure(
///     AxisConstraint::at_most(300),
///     AxisConstraint::at_most(1000),
///     Size::new(1000, 999),
/// );
/// assert_eq!(size, Size::new(300, 300));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FitLayout {
    pub zero_size_fallback: ZeroSizeFallback,
    pub rounding: Rounding,
}

impl FitLayout {
    /// Default policy: zero-height fallback on, truncating rounding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set which axes substitute the content size for a zero constraint.
    pub fn zero_size_fallback(mut self, fallback: ZeroSizeFallback) -> Self {
        self.zero_size_fallback = fallback;
        self
    }

    /// Set how the derived axis is rounded.
    pub fn rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Negotiate the viewport size for `content` under the two constraints.
    ///
    /// Absent content (either dimension zero) yields the raw constraint
    /// sizes, with no aspect preservation.
    pub fn measure(&self, width: AxisConstraint, height: AxisConstraint, content: Size) -> Size {
        if content.is_absent() {
            return Size::new(width.size, height.size);
        }

        let cap_w = if width.size == 0 && self.zero_size_fallback.covers_width() {
            content.width
        } else {
            width.size
        };
        let cap_h = if height.size == 0 && self.zero_size_fallback.covers_height() {
            content.height
        } else {
            height.size
        };

        let desired = self.desired_size(cap_w, cap_h, content);
        let size = Size::new(
            width.mode.resolve(cap_w, desired.width),
            height.mode.resolve(cap_h, desired.height),
        );

        #[cfg(feature = "tracing")]
        tracing::trace!(
            content_w = content.width,
            content_h = content.height,
            cap_w,
            cap_h,
            desired_w = desired.width,
            desired_h = desired.height,
            width = size.width,
            height = size.height,
            "measured viewport"
        );

        size
    }

    /// Measure, then place the content inside the measured size.
    pub fn layout(
        &self,
        width: AxisConstraint,
        height: AxisConstraint,
        content: Size,
    ) -> LayoutResult {
        let size = self.measure(width, height, content);
        LayoutResult {
            size,
            content_rect: center_inside(content, size),
        }
    }

    /// Shrink `content` uniformly until it fits both caps. Never upscales.
    fn desired_size(&self, cap_w: u32, cap_h: u32, content: Size) -> Size {
        let width_ratio = if cap_w < content.width {
            cap_w as f64 / content.width as f64
        } else {
            f64::INFINITY
        };
        let height_ratio = if cap_h < content.height {
            cap_h as f64 / content.height as f64
        } else {
            f64::INFINITY
        };

        if width_ratio.is_infinite() && height_ratio.is_infinite() {
            return content;
        }

        // Smaller ratio binds. Ties go to width.
        if width_ratio <= height_ratio {
            let h = self.rounding.apply(content.height as f64 * width_ratio);
            Size::new(cap_w, h)
        } else {
            let w = self.rounding.apply(content.width as f64 * height_ratio);
            Size::new(w, cap_h)
        }
    }
}

/// Layout computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutError {
    /// A ratio was computed against a zero height or a zero ratio.
    DivisionByZero,
    /// A negative size, or a packed measure spec with an unknown mode.
    InvalidConstraint,
    /// An aspect ratio that is zero, negative, or not finite.
    InvalidRatio,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => f.write_str("division by zero in ratio computation"),
            Self::InvalidConstraint => f.write_str("invalid size constraint"),
            Self::InvalidRatio => f.write_str("aspect ratio must be finite and positive"),
        }
    }
}

impl core::error::Error for LayoutError {}
