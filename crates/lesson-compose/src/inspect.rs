//! Template inspection

use crate::options::ComposeOptions;
use crate::resolver::locate_marker;
use crate::tree::Document;
use crate::vocabulary::{all_lesson_markers, date_markers};

/// Known markers present in the template, in vocabulary order: group
/// marker, date markers, then lesson markers by weekday and slot.
pub fn template_markers(template: &Document, options: &ComposeOptions) -> Vec<String> {
    std::iter::once(options.group_marker.clone())
        .chain(date_markers().into_iter().map(str::to_string))
        .chain(all_lesson_markers())
        .filter(|marker| locate_marker(&template.body, marker).is_some())
        .collect()
}
