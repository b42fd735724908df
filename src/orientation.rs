//! Rotation bookkeeping and the content size a rotation produces.
//!
//! Pixels are rotated elsewhere. This module tracks the cumulative angle
//! the host persists across restarts, and tells the caller what intrinsic
//! size to lay out once the rotated content exists.

use num_traits::Float;

use crate::constraint::Size;

/// Persisted view state: the cumulative clockwise rotation in degrees.
///
/// Saved by the host before teardown and handed back through
/// [`CropViewport::restore`](crate::CropViewport::restore).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewState {
    rotation_degrees: i32,
}

impl ViewState {
    /// Unrotated.
    pub const IDENTITY: Self = Self {
        rotation_degrees: 0,
    };

    /// State for an arbitrary angle, normalized to `[0, 360)`.
    pub fn new(degrees: i32) -> Self {
        Self::IDENTITY.rotate(degrees)
    }

    /// Cumulative rotation in `[0, 360)`.
    ///
    /// Normalizes again on read, since a deserialized state may carry any
    /// value.
    pub fn rotation_degrees(self) -> i32 {
        self.rotation_degrees.rem_euclid(360)
    }

    /// Add `delta` degrees (negative = counter-clockwise).
    pub fn rotate(self, delta: i32) -> Self {
        let sum = i64::from(self.rotation_degrees) + i64::from(delta);
        Self {
            // rem_euclid(360) is always in 0..360, so it fits.
            rotation_degrees: sum.rem_euclid(360) as i32,
        }
    }

    /// Whether the content currently shows rotated by 90° or 270°.
    pub fn swaps_axes(self) -> bool {
        matches!(quarter_turns(self.rotation_degrees), Some(1 | 3))
    }
}

/// Clockwise quarter turns (0-3) for angles on the 90° grid, else `None`.
pub fn quarter_turns(degrees: i32) -> Option<u8> {
    let d = degrees.rem_euclid(360);
    if d % 90 == 0 {
        Some((d / 90) as u8)
    } else {
        None
    }
}

/// Intrinsic size of `size` after rotating it by `degrees`.
///
/// Quarter turns are exact (90° and 270° swap the axes). Other angles give
/// the axis-aligned bounding box of the rotated content, rounded to the
/// nearest pixel.
pub fn rotated_size(size: Size, degrees: i32) -> Size {
    match quarter_turns(degrees) {
        Some(1 | 3) => size.transpose(),
        Some(_) => size,
        None => {
            let radians = Float::to_radians(degrees.rem_euclid(360) as f64);
            let (sin, cos) = Float::sin_cos(radians);
            let (w, h) = (size.width as f64, size.height as f64);
            let bw = Float::abs(w * cos) + Float::abs(h * sin);
            let bh = Float::abs(w * sin) + Float::abs(h * cos);
            Size::new(Float::round(bw) as u32, Float::round(bh) as u32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cumulative_rotation_wraps() {
        let state = [90, 90, 200]
            .into_iter()
            .fold(ViewState::IDENTITY, ViewState::rotate);
        assert_eq!(state.rotation_degrees(), 20);
    }

    #[test]
    fn negative_rotation_normalizes() {
        assert_eq!(ViewState::new(-90).rotation_degrees(), 270);
        assert_eq!(ViewState::new(-720).rotation_degrees(), 0);
        assert_eq!(ViewState::new(90).rotate(-180).rotation_degrees(), 270);
    }

    #[test]
    fn extreme_deltas_do_not_overflow() {
        let state = ViewState::new(359).rotate(i32::MAX).rotate(i32::MAX);
        let expected = (359i64 + 2 * i64::from(i32::MAX)).rem_euclid(360) as i32;
        assert_eq!(state.rotation_degrees(), expected);
        assert_eq!(ViewState::new(i32::MIN).rotation_degrees(), i32::MIN.rem_euclid(360));
    }

    #[test]
    fn swaps_axes_on_odd_quarter_turns() {
        assert!(!ViewState::IDENTITY.swaps_axes());
        assert!(ViewState::new(90).swaps_axes());
        assert!(!ViewState::new(180).swaps_axes());
        assert!(ViewState::new(-90).swaps_axes());
        assert!(!ViewState::new(45).swaps_axes());
    }

    #[test]
    fn quarter_turn_table() {
        assert_eq!(quarter_turns(0), Some(0));
        assert_eq!(quarter_turns(90), Some(1));
        assert_eq!(quarter_turns(-90), Some(3));
        assert_eq!(quarter_turns(540), Some(2));
        assert_eq!(quarter_turns(45), None);
    }

    #[test]
    fn quarter_turns_swap_exactly() {
        let s = Size::new(1000, 500);
        assert_eq!(rotated_size(s, 90), Size::new(500, 1000));
        assert_eq!(rotated_size(s, 270), Size::new(500, 1000));
        assert_eq!(rotated_size(s, -90), Size::new(500, 1000));
        assert_eq!(rotated_size(s, 180), s);
        assert_eq!(rotated_size(s, 360), s);
    }

    #[test]
    fn arbitrary_angle_gives_bounding_box() {
        // 45°: both sides become (w + h) / √2.
        let s = rotated_size(Size::new(100, 100), 45);
        assert_eq!(s, Size::new(141, 141));

        // 30°: w·cos + h·sin = 200·0.866 + 100·0.5 = 223.2
        //      w·sin + h·cos = 200·0.5 + 100·0.866 = 186.6
        let s = rotated_size(Size::new(200, 100), 30);
        assert_eq!(s, Size::new(223, 187));
    }
}
