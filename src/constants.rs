// Rendering and page-layout constants for the web frontend.
//
// Scene defaults (room size, arc, camera) live in `core::defaults`; this
// file only holds values the browser shell and renderer need.
// Background color (sRGB hex)
pub const BACKGROUND_COLOR: u32 = 0x222222;

// DOM hooks
pub const CANVAS_SELECTOR: &str = ".lr-canvas";
pub const CANVAS_DISABLED_CLASS: &str = "lr-canvas--disabled";
pub const PANEL_SELECTOR: &str = ".lr-controls";
pub const PANEL_TITLE_CLASS: &str = "lr-controls__title";
pub const PANEL_SUMMARY_CLASS: &str = "lr-control-section__summary";
pub const LABEL_LAYER_ID: &str = "wall-labels";

// Saved room list markup
pub const ROOM_ITEM_CLASS: &str = "lr-saved-rooms__item";
pub const ROOM_NAME_CLASS: &str = "lr-saved-rooms__name";
pub const ROOM_DELETE_CLASS: &str = "lr-btn lr-btn--delete";

// Dialog text
pub const EMPTY_NAME_ALERT: &str = "Please enter a name for the room";
pub const RESET_CONFIRM: &str = "Reset all controls to default values?";

#[inline]
pub fn delete_confirm_message(name: &str) -> String {
    format!("Delete room '{}'?", name)
}
