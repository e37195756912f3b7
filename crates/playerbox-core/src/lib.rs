pub mod constants;
pub mod error;
pub mod fade;
pub mod modal;
pub mod template;

pub use constants::*;
pub use error::PlayerboxError;
pub use fade::{FadeIn, FadeOut};
pub use modal::{Effect, Effects, Modal, PlaybackState};
