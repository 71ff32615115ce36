//! Minimal before/after diffs for rename previews
//!
//! A rename usually changes one contiguous span of a path, such as a single
//! mis-tagged folder segment. Collapsing the common prefix and suffix isolates
//! that span so previews highlight only what actually changes.

mod engine;
mod render;

pub use engine::{DiffSpans, PathDiff, diff_paths};
pub use render::{DiffStyle, RenamePreview, RenderedDiff, escape_markup, render_path_diff};
