//! Schedule → page mapping
//!
//! Fills one page (a clone of the template body) from one record:
//! 1. Replace the group-name marker
//! 2. For each recognised weekday, write its `dd.MM` date
//! 3. Group the day's lessons by slot and lay out each slot
//! 4. Clear every marker left unfilled

use crate::format::format_date;
use crate::layout::layout_slot;
use crate::options::ComposeOptions;
use crate::resolver::{clear_markers, replace_text};
use crate::schedule::{ScheduleRecord, SlotGroup};
use crate::tree::Block;
use crate::types::*;
use crate::vocabulary::{date_markers, lesson_marker, lesson_prefixes, SLOT_SUFFIXES, UNKNOWN_SUFFIX};
use log::{debug, warn};

/// Fill dates and lessons of `record` into `page`.
pub fn fill_schedule(
    page: &mut [Block],
    record: &ScheduleRecord,
    options: &ComposeOptions,
) -> Result<PageSummary> {
    let mut summary = PageSummary::default();

    replace_text(page, &options.group_marker, &record.group_name);

    for (date_key, day) in &record.days {
        let Some(weekday) = Weekday::from_title(&day.title) else {
            warn!(
                "{}: unrecognised day title {:?} on {}, skipping",
                record.group_name, day.title, date_key
            );
            summary.days_skipped += 1;
            continue;
        };
        let (Some(prefix), Some(date_marker)) = (weekday.lesson_prefix(), weekday.date_marker())
        else {
            debug!("{}: no markers for {:?}, skipping", record.group_name, weekday);
            summary.days_skipped += 1;
            continue;
        };

        replace_text(page, date_marker, &format_date(date_key));

        for slot in SlotGroup::group_day(day) {
            let marker = lesson_marker(prefix, slot.number);
            if marker.ends_with(UNKNOWN_SUFFIX) {
                warn!(
                    "{}: lesson number {:?} on {} has no slot marker",
                    record.group_name, slot.number, date_key
                );
            }
            match layout_slot(page, &marker, &slot, options)? {
                SlotOutcome::Untouched => {}
                SlotOutcome::Filled => summary.slots_filled += 1,
                SlotOutcome::Paired { .. } | SlotOutcome::Split { .. } => {
                    summary.slots_filled += 1;
                    summary.cells_split += 1;
                }
            }
        }
        summary.days_filled += 1;
    }

    Ok(summary)
}

/// Remove all lesson and date markers that were not filled.
pub fn clear_unused_markers(page: &mut [Block]) -> usize {
    clear_markers(page, &lesson_prefixes(), &SLOT_SUFFIXES) + clear_markers(page, &date_markers(), &[""])
}
