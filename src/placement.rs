//! Center-inside placement of content within a container.
//!
//! The content keeps its aspect ratio, is scaled by the largest factor that
//! keeps it fully visible (upscaling included), and is centered on both axes.

use crate::constraint::{Rect, Size};

/// Place `content` centered and fully visible inside `container`.
///
/// Returns [`Rect::EMPTY`] when either size has a zero dimension.
///
/// ```
/// use zencrop::{Rect, Size, center_inside};
///
/// let rect = center_inside(Size::new(300, 150), Size::new(300, 300));
/// assert_eq!(rect, Rect::new(0.0, 75.0, 300.0, 225.0));
/// ```
pub fn center_inside(content: Size, container: Size) -> Rect {
    if content.is_absent() || container.is_absent() {
        return Rect::EMPTY;
    }

    let (w, h) = (content.width as f64, content.height as f64);
    let (cw, ch) = (container.width as f64, container.height as f64);

    // The binding axis takes the container edge exactly so the rect never
    // pokes out through float error.
    let (scaled_w, scaled_h) = if cw / w <= ch / h {
        (cw, h * cw / w)
    } else {
        (w * ch / h, ch)
    };

    let left = (cw - scaled_w) / 2.0;
    let top = (ch - scaled_h) / 2.0;
    Rect::new(
        left as f32,
        top as f32,
        (left + scaled_w) as f32,
        (top + scaled_h) as f32,
    )
}

/// [`center_inside`] over raw dimensions.
pub fn center_inside_dims(
    width: u32,
    height: u32,
    container_width: u32,
    container_height: u32,
) -> Rect {
    center_inside(
        Size::new(width, height),
        Size::new(container_width, container_height),
    )
}
