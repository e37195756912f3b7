//! Markup templates and placeholder substitution.
//!
//! The playerbox template relies on a structural contract: the content
//! wrapper has exactly two children, first the empty div that becomes the
//! player mount slot, then the close control. Positional lookup depends on
//! that order because the mount slot carries no class of its own.

use crate::constants::{
    CLOSE_CLASS, CONTENT_CLASS, HIDE_CLASS, LOADING_CLASS, OVERLAY_CLASS, PLAYERBOX_CLASS,
};

pub const OVERLAY_TEMPLATE: &str = r#"<div class="{overlay} {hide}"></div>"#;
pub const PLAYERBOX_TEMPLATE: &str = r#"<div class="{playerbox} {hide}"><div class="{content}"><div></div><span class="{close}">&times;</span></div></div>"#;
pub const LOADING_TEMPLATE: &str =
    r#"<div class="{loading} {hide}"><img src="{loading_src}" alt="Loading indicator" /></div>"#;

/// Substitute `{name}` placeholders in `template`.
///
/// Every occurrence of each placeholder is replaced, and the substitution
/// order does not matter.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

pub fn render_overlay() -> String {
    render(
        OVERLAY_TEMPLATE,
        &[("overlay", OVERLAY_CLASS), ("hide", HIDE_CLASS)],
    )
}

pub fn render_playerbox() -> String {
    render(
        PLAYERBOX_TEMPLATE,
        &[
            ("playerbox", PLAYERBOX_CLASS),
            ("hide", HIDE_CLASS),
            ("content", CONTENT_CLASS),
            ("close", CLOSE_CLASS),
        ],
    )
}

pub fn render_loading(loading_src: &str) -> String {
    render(
        LOADING_TEMPLATE,
        &[
            ("loading", LOADING_CLASS),
            ("hide", HIDE_CLASS),
            ("loading_src", loading_src),
        ],
    )
}
