//! Cell layout for lesson slots
//!
//! This module decides how one slot's lessons land in the page:
//! - Text fill (subject line and teacher/room line as styled runs)
//! - Cell splitting (width and border arithmetic for sub-groups)
//! - The per-slot strategy tying the two together

mod cell;
mod fill;
mod split;

pub use cell::layout_slot;
pub use fill::{fill_marker, lesson_paragraph, lesson_runs, LessonText};
pub use split::split_cell;
