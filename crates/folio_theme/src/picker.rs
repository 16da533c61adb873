//! Appearance constants for the document picker and friends.

use core::time::Duration;

use crate::color::{LinearRgba, WhiteAlpha};
use crate::geometry::{EdgeInsets, Size};

// Item views

pub const ITEM_VIEW_NAME_LABEL_FONT_SIZE: f32 = 17.0;
pub const ITEM_VIEW_NAME_LABEL_COLOR: WhiteAlpha = WhiteAlpha::new(0.0, 1.0);
pub const ITEM_VIEW_DETAIL_LABEL_FONT_SIZE: f32 = 12.0;
pub const ITEM_VIEW_DETAIL_LABEL_COLOR: WhiteAlpha = WhiteAlpha::new(0.4, 1.0);
pub const ITEM_METADATA_VIEW_BACKGROUND_COLOR: WhiteAlpha = WhiteAlpha::new(1.0, 0.9);
pub const ITEM_VIEW_NAME_TO_PREVIEW_PADDING: f32 = 7.0;
pub const ITEM_VIEW_NAME_TO_DATE_PADDING: f32 = 0.0;
pub const ITEM_VIEW_LABEL_SHADOW_COLOR: WhiteAlpha = WhiteAlpha::new(0.0, 0.66);
pub const ITEM_VIEW_PROGRESS_TINT_COLOR: LinearRgba = LinearRgba::new(0.5, 0.5, 0.85, 1.0);

pub const BACKGROUND_GRAY: f32 = 0.97;
pub const HOME_SCREEN_CELL_BACKGROUND_OPACITY: f32 = 0.95;
pub const HOME_SCREEN_CELL_BORDER_WIDTH: f32 = 1.0;

pub const FOLDER_ITEM_MINI_PREVIEW_SIZE: Size = Size::new(60.0, 60.0);
pub const FOLDER_ITEM_MINI_PREVIEW_INSETS: EdgeInsets = EdgeInsets::uniform(10.0);
pub const FOLDER_ITEM_MINI_PREVIEW_SPACING: f32 = 10.0;

pub const NAV_BAR_ITEMS_ADDITIONAL_SPACE: f32 = 20.0;

// Animations

pub const TEMPLATE_ANIMATION_DURATION: Duration = Duration::from_millis(250);
pub const TEMPLATE_ANIMATION_SCALE_FACTOR: f32 = 1.5;

pub const REVERT_ANIMATION_DURATION: Duration = Duration::from_millis(250);
