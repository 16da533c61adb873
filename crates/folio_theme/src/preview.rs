//! Appearance constants for document preview views.

use core::time::Duration;

use crate::color::{LinearRgba, WhiteAlpha};

pub const NORMAL_SHADOW_BLUR: f32 = 1.25;
pub const NORMAL_SHADOW_COLOR: WhiteAlpha = WhiteAlpha::new(0.0, 0.75);
pub const NORMAL_BORDER_COLOR: WhiteAlpha = WhiteAlpha::new(0.5, 1.0);
pub const SELECTED_BORDER_THICKNESS: f32 = 6.0;
pub const SELECTED_BORDER_COLOR: LinearRgba = LinearRgba::new(0.227, 0.557, 0.929, 0.850);
pub const SELECTION_TOUCH_BOUNCE_SCALE: f32 = 0.96;
pub const SELECTION_TOUCH_BOUNCE_DURATION: Duration = Duration::from_millis(170);
pub const HIGHLIGHT_ALPHA: f32 = 0.5;
pub const TRANSITION_DURATION: Duration = Duration::from_millis(200);
