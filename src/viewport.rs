//! Host-side driver that sequences layout passes for a crop viewport.
//!
//! A UI host forwards its measure, size-change, rotate, save and restore
//! callbacks here. The viewport owns the content size, the rotation state
//! and the last layout; everything it computes comes from the pure
//! functions in [`constraint`](crate::constraint),
//! [`placement`](crate::placement), [`aspect`](crate::aspect) and
//! [`orientation`](crate::orientation).
//!
//! # Example
//!
//! ```
//! use zencrop::{AxisConstraint, CropViewport, FitLayout, Rect, Size};
//!
//! let mut viewport = CropViewport::new(FitLayout::new());
//! viewport.set_content(Size::new(1000, 500));
//!
//! let result = viewport.measure(AxisConstraint::at_most(300), AxisConstraint::at_most(300));
//! assert_eq!(result.size, Size::new(300, 150));
//!
//! // The host ends up 300×300; the overlay follows the image.
//! let rect = viewport.size_changed(300, 300);
//! assert_eq!(rect, Rect::new(0.0, 75.0, 300.0, 225.0));
//! ```

use crate::aspect::{CropOptions, fit_selection};
use crate::constraint::{AxisConstraint, FitLayout, LayoutError, LayoutResult, Rect, Size};
use crate::orientation::{ViewState, rotated_size};
use crate::placement::center_inside;

/// Layout state for one crop view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CropViewport {
    fit: FitLayout,
    options: CropOptions,
    content: Size,
    state: ViewState,
    last: Option<LayoutResult>,
}

impl CropViewport {
    /// Empty viewport with the given negotiation policy.
    pub fn new(fit: FitLayout) -> Self {
        Self {
            fit,
            ..Self::default()
        }
    }

    /// Set the crop overlay options.
    pub fn with_options(mut self, options: CropOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &CropOptions {
        &self.options
    }

    /// Current intrinsic content size, rotation included. `None` when absent.
    pub fn content(&self) -> Option<Size> {
        if self.content.is_absent() {
            None
        } else {
            Some(self.content)
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Result of the most recent measure or size change.
    pub fn last_layout(&self) -> Option<LayoutResult> {
        self.last
    }

    /// Replace the content. A size with a zero dimension clears it.
    ///
    /// The previous layout no longer applies; the host must measure again.
    pub fn set_content(&mut self, size: Size) {
        #[cfg(feature = "tracing")]
        tracing::debug!(width = size.width, height = size.height, "content set");

        self.content = size;
        self.last = None;
    }

    /// Drop the content. The overlay should hide until new content arrives.
    pub fn clear_content(&mut self) {
        self.set_content(Size::ZERO);
    }

    /// Negotiate the viewport size and place the content inside it.
    pub fn measure(&mut self, width: AxisConstraint, height: AxisConstraint) -> LayoutResult {
        let result = self.fit.layout(width, height, self.content);
        self.last = Some(result);
        result
    }

    /// The host settled on `width × height`; re-place the content there.
    ///
    /// Returns the new content rect, [`Rect::EMPTY`] without content.
    pub fn size_changed(&mut self, width: u32, height: u32) -> Rect {
        let size = Size::new(width, height);
        let content_rect = center_inside(self.content, size);
        self.last = Some(LayoutResult { size, content_rect });
        content_rect
    }

    /// Size the host should pin its layout to, when one was measured.
    pub fn layout_size(&self) -> Option<Size> {
        self.last
            .map(|result| result.size)
            .filter(|size| !size.is_absent())
    }

    /// Rotate the content by `degrees` clockwise.
    ///
    /// The rotation state always advances. The content size becomes the
    /// rotated bounds, and the previous layout is dropped.
    pub fn rotate(&mut self, degrees: i32) -> ViewState {
        if !self.content.is_absent() {
            self.content = rotated_size(self.content, degrees);
            self.last = None;
        }
        self.state = self.state.rotate(degrees);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            degrees,
            total = self.state.rotation_degrees(),
            width = self.content.width,
            height = self.content.height,
            "content rotated"
        );

        self.state
    }

    /// State the host persists before teardown.
    pub fn save(&self) -> ViewState {
        self.state
    }

    /// Re-apply a saved rotation to freshly loaded, unrotated content.
    ///
    /// Afterwards the state equals `saved`, whatever it was before.
    pub fn restore(&mut self, saved: ViewState) {
        let degrees = saved.rotation_degrees();
        self.rotate(degrees);
        self.state = ViewState::new(degrees);

        #[cfg(feature = "tracing")]
        tracing::debug!(degrees, "view state restored");
    }

    /// Initial crop window over the laid-out content.
    ///
    /// Fixed-ratio options give the largest centered rect of that ratio;
    /// free options give the whole content rect. `None` when nothing is
    /// laid out or the content rect is empty.
    pub fn initial_selection(&self) -> Result<Option<Rect>, LayoutError> {
        let bounds = match self.last {
            Some(result) if !result.content_rect.is_empty() => result.content_rect,
            _ => return Ok(None),
        };
        let selection = match self.options.target_ratio()? {
            Some(ratio) => fit_selection(&bounds, ratio),
            None => bounds,
        };
        Ok(Some(selection))
    }
}
