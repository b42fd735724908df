//! Aspect-ratio arithmetic for keeping a selection rect locked to a ratio.
//!
//! A ratio is always `width / height` and is recomputed from current
//! geometry rather than stored, so repeated drags never accumulate drift.
//!
//! # Example
//!
//! ```
//! use zencrop::aspect::{height_from_width, ratio, width_from_height};
//! use zencrop::Rect;
//!
//! let width = width_from_height(10.0, 110.0, 1.5);
//! assert_eq!(width, 150.0);
//!
//! let r = ratio(&Rect::new(0.0, 10.0, width, 110.0)).unwrap();
//! assert_eq!(r.value(), 1.5);
//!
//! assert_eq!(height_from_width(0.0, 150.0, 1.5), Ok(100.0));
//! ```

use crate::constraint::{LayoutError, Rect};

/// A strictly positive, finite `width / height` ratio.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct AspectRatio(f32);

impl AspectRatio {
    /// 1:1.
    pub const SQUARE: Self = Self(1.0);

    /// Wrap a ratio value. Zero, negative, and non-finite values are rejected.
    pub fn new(value: f32) -> Result<Self, LayoutError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(LayoutError::InvalidRatio)
        }
    }

    /// Ratio of `x : y`, e.g. `from_parts(16, 9)`.
    pub fn from_parts(x: u32, y: u32) -> Result<Self, LayoutError> {
        if y == 0 {
            return Err(LayoutError::DivisionByZero);
        }
        Self::new(x as f32 / y as f32)
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Width of a rect of this ratio with the given height.
    pub fn width_for_height(self, height: f32) -> f32 {
        self.0 * height
    }

    /// Height of a rect of this ratio with the given width.
    pub fn height_for_width(self, width: f32) -> f32 {
        width / self.0
    }
}

/// Aspect ratio of `rect`.
///
/// Fails with [`LayoutError::DivisionByZero`] for a zero-height rect and
/// [`LayoutError::InvalidRatio`] when the result isn't positive (zero width
/// or inverted edges).
pub fn ratio(rect: &Rect) -> Result<AspectRatio, LayoutError> {
    let height = rect.height();
    if height == 0.0 {
        return Err(LayoutError::DivisionByZero);
    }
    AspectRatio::new(rect.width() / height)
}

/// Width that gives `target_ratio` for a rect spanning `top..bottom`.
pub fn width_from_height(top: f32, bottom: f32, target_ratio: f32) -> f32 {
    target_ratio * (bottom - top)
}

/// Height that gives `target_ratio` for a rect spanning `left..right`.
pub fn height_from_width(left: f32, right: f32, target_ratio: f32) -> Result<f32, LayoutError> {
    if target_ratio == 0.0 {
        return Err(LayoutError::DivisionByZero);
    }
    Ok((right - left) / target_ratio)
}

/// Largest rect of `ratio` centered inside `bounds`.
///
/// Used as the initial crop window over freshly placed content. Empty
/// bounds give [`Rect::EMPTY`].
pub fn fit_selection(bounds: &Rect, ratio: AspectRatio) -> Rect {
    if bounds.is_empty() {
        return Rect::EMPTY;
    }

    let (bw, bh) = (bounds.width(), bounds.height());
    let (w, h) = if bw / bh > ratio.value() {
        // Bounds are wider: keep full height.
        (ratio.width_for_height(bh).min(bw), bh)
    } else {
        (bw, ratio.height_for_width(bw).min(bh))
    };

    let left = bounds.left + (bw - w) / 2.0;
    let top = bounds.top + (bh - h) / 2.0;
    Rect::new(left, top, left + w, top + h)
}

/// Crop overlay settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropOptions {
    /// Whether the selection keeps `aspect_ratio_x : aspect_ratio_y`.
    pub fixed_aspect_ratio: bool,
    pub aspect_ratio_x: u32,
    pub aspect_ratio_y: u32,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self::fixed(1, 1)
    }
}

impl CropOptions {
    /// Selection locked to `x : y`.
    pub const fn fixed(x: u32, y: u32) -> Self {
        Self {
            fixed_aspect_ratio: true,
            aspect_ratio_x: x,
            aspect_ratio_y: y,
        }
    }

    /// Selection resizable on both axes independently.
    pub const fn free() -> Self {
        Self {
            fixed_aspect_ratio: false,
            aspect_ratio_x: 1,
            aspect_ratio_y: 1,
        }
    }

    /// The ratio the selection must keep, or `None` when it is free.
    pub fn target_ratio(&self) -> Result<Option<AspectRatio>, LayoutError> {
        if !self.fixed_aspect_ratio {
            return Ok(None);
        }
        AspectRatio::from_parts(self.aspect_ratio_x, self.aspect_ratio_y).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn ratio_of_rect() {
        let r = ratio(&Rect::new(0.0, 0.0, 1600.0, 900.0)).unwrap();
        assert!(close(r.value(), 16.0 / 9.0));
    }

    #[test]
    fn ratio_rejects_zero_height() {
        assert_eq!(
            ratio(&Rect::new(0.0, 5.0, 10.0, 5.0)),
            Err(LayoutError::DivisionByZero)
        );
    }

    #[test]
    fn ratio_rejects_degenerate_width() {
        assert_eq!(
            ratio(&Rect::new(5.0, 0.0, 5.0, 10.0)),
            Err(LayoutError::InvalidRatio)
        );
        assert_eq!(ratio(&Rect::EMPTY), Err(LayoutError::DivisionByZero));
    }

    #[test]
    fn height_from_width_rejects_zero_ratio() {
        assert_eq!(
            height_from_width(0.0, 100.0, 0.0),
            Err(LayoutError::DivisionByZero)
        );
    }

    #[test]
    fn width_round_trip() {
        let ratios = [0.25f32, 0.5, 0.75, 1.0, 4.0 / 3.0, 16.0 / 9.0, 3.0, 21.0 / 9.0];
        let spans = [(0.0f32, 1.0f32), (10.0, 110.0), (-50.0, 25.5), (3.25, 1999.0)];
        for &target in &ratios {
            for &(top, bottom) in &spans {
                let width = width_from_height(top, bottom, target);
                let rect = Rect::new(7.0, top, 7.0 + width, bottom);
                let got = ratio(&rect).unwrap().value();
                assert!(close(got, target), "{target} over {top}..{bottom}: {got}");
            }
        }
    }

    #[test]
    fn height_round_trip() {
        let ratios = [0.25f32, 0.5, 1.0, 4.0 / 3.0, 16.0 / 9.0, 3.0];
        let spans = [(0.0f32, 1.0f32), (10.0, 110.0), (-50.0, 25.5), (3.25, 1999.0)];
        for &target in &ratios {
            for &(left, right) in &spans {
                let height = height_from_width(left, right, target).unwrap();
                let rect = Rect::new(left, -3.0, right, -3.0 + height);
                let got = ratio(&rect).unwrap().value();
                assert!(close(got, target), "{target} over {left}..{right}: {got}");
            }
        }
    }

    #[test]
    fn aspect_ratio_validation() {
        assert_eq!(AspectRatio::new(0.0), Err(LayoutError::InvalidRatio));
        assert_eq!(AspectRatio::new(-1.0), Err(LayoutError::InvalidRatio));
        assert_eq!(AspectRatio::new(f32::NAN), Err(LayoutError::InvalidRatio));
        assert_eq!(AspectRatio::new(f32::INFINITY), Err(LayoutError::InvalidRatio));
        assert_eq!(AspectRatio::from_parts(4, 0), Err(LayoutError::DivisionByZero));
        assert_eq!(AspectRatio::from_parts(0, 4), Err(LayoutError::InvalidRatio));
        assert_eq!(AspectRatio::from_parts(3, 3), Ok(AspectRatio::SQUARE));
    }

    #[test]
    fn fit_selection_in_wide_bounds() {
        let bounds = Rect::new(0.0, 75.0, 300.0, 225.0);
        let sel = fit_selection(&bounds, AspectRatio::SQUARE);
        assert_eq!(sel, Rect::new(75.0, 75.0, 225.0, 225.0));
    }

    #[test]
    fn fit_selection_in_tall_bounds() {
        let bounds = Rect::new(100.0, 0.0, 300.0, 400.0);
        let sel = fit_selection(&bounds, AspectRatio::from_parts(2, 1).unwrap());
        assert_eq!(sel, Rect::new(100.0, 150.0, 300.0, 250.0));
    }

    #[test]
    fn fit_selection_keeps_ratio_and_stays_inside() {
        let bounds = [
            Rect::new(0.0, 0.0, 640.0, 480.0),
            Rect::new(12.5, 40.0, 100.0, 500.0),
            Rect::new(0.0, 0.0, 1.0, 1.0),
        ];
        let ratios = [(1, 1), (4, 3), (3, 4), (16, 9), (1, 5)];
        for b in &bounds {
            for &(x, y) in &ratios {
                let r = AspectRatio::from_parts(x, y).unwrap();
                let sel = fit_selection(b, r);
                assert!(sel.left >= b.left && sel.right <= b.right + EPS, "{sel:?} in {b:?}");
                assert!(sel.top >= b.top && sel.bottom <= b.bottom + EPS, "{sel:?} in {b:?}");
                assert!(close(ratio(&sel).unwrap().value(), r.value()));
            }
        }
    }

    #[test]
    fn fit_selection_empty_bounds() {
        assert_eq!(fit_selection(&Rect::EMPTY, AspectRatio::SQUARE), Rect::EMPTY);
    }

    #[test]
    fn crop_options() {
        assert_eq!(CropOptions::default().target_ratio(), Ok(Some(AspectRatio::SQUARE)));
        assert_eq!(CropOptions::free().target_ratio(), Ok(None));
        assert_eq!(
            CropOptions::fixed(16, 0).target_ratio(),
            Err(LayoutError::DivisionByZero)
        );
    }
}
