//! Class names, fade steps and key codes shared by the modal components.
//!
//! The class names form a naming contract with the host stylesheet: they are
//! fixed per build, not configurable per call.

/// Full-page backdrop behind the player box.
pub const OVERLAY_CLASS: &str = "playerbox-overlay";
/// Outer container of the player box.
pub const PLAYERBOX_CLASS: &str = "playerbox";
/// Content wrapper nested inside the player box.
pub const CONTENT_CLASS: &str = "playerbox-content";
/// The close control inside the content wrapper.
pub const CLOSE_CLASS: &str = "playerbox-close";
/// Marker class carried by every element that is currently hidden.
pub const HIDE_CLASS: &str = "playerbox-hide";
/// Loading indicator shown until the player reports ready.
pub const LOADING_CLASS: &str = "playerbox-loading";

/// Image used by the loading indicator when the host does not supply one.
pub const DEFAULT_LOADING_IMG: &str = "playerbox-loading.gif";

/// Opacity added per animation tick while fading in.
pub const FADE_IN_STEP: f64 = 0.2;
/// Opacity removed per animation tick while fading out.
pub const FADE_OUT_STEP: f64 = 0.1;
/// Display value applied when a fade-in does not request one.
pub const DEFAULT_FADE_DISPLAY: &str = "block";

/// Key code of the Escape key in `keyup` events.
pub const ESCAPE_KEY_CODE: u32 = 27;
