//! Per-slot layout strategy

use super::fill::{fill_marker, lesson_paragraph, LessonText};
use super::split::split_cell;
use crate::options::ComposeOptions;
use crate::resolver::locate_marker;
use crate::schedule::SlotGroup;
use crate::tree::{cell_mut, Block, Cell, TreePath};
use crate::types::{ComposeError, Result, SlotOutcome};
use log::{debug, warn};

/// Lay out one slot's lessons at `marker`.
///
/// - no entries, or marker absent: nothing happens
/// - whole class (lowest sub-group id is 0): the marker cell is filled
/// - one sub-group: the cell is split into a pair; sub-group 1 takes the
///   first half, any other id the second, the unused half is emptied
/// - several sub-groups: the cell is split once per entry, in id order
pub fn layout_slot(
    page: &mut [Block],
    marker: &str,
    slot: &SlotGroup<'_>,
    options: &ComposeOptions,
) -> Result<SlotOutcome> {
    let Some(first) = slot.entries.first() else {
        return Ok(SlotOutcome::Untouched);
    };
    let Some(location) = locate_marker(page, marker) else {
        debug!("Marker {} not in template, {} lesson(s) not placed", marker, slot.len());
        return Ok(SlotOutcome::Untouched);
    };
    let style = options.lesson_style();

    let first_id = first.subgroup_id();
    if first_id == 0 {
        if slot.len() > 1 {
            warn!(
                "Slot {} has a whole-class lesson and {} more; only {:?} is shown",
                marker,
                slot.len() - 1,
                first.subject
            );
        }
        let text = LessonText::for_entry(first, options);
        match location.enclosing_cell() {
            Some(path) => fill_cell(page, &path, marker, &text, options)?,
            None => {
                fill_marker(page, marker, &text, style);
            }
        }
        return Ok(SlotOutcome::Filled);
    }

    let cell_path = location
        .enclosing_cell()
        .ok_or_else(|| ComposeError::MarkerOutsideCell(marker.to_string()))?;

    if slot.len() == 1 {
        let first_half = first_id == 1;
        debug!(
            "Slot {}: sub-group {} in {} half",
            marker,
            first_id,
            if first_half { "first" } else { "second" }
        );
        let halves = split_cell(page, &cell_path, 2, options)?;
        let text = LessonText::for_entry(first, options);
        if first_half {
            fill_cell(page, &halves[0], marker, &text, options)?;
        } else {
            write_cell(page, &halves[1], marker, &text, options)?;
            lookup_cell(page, &halves[0], marker)?.clear();
        }
        return Ok(SlotOutcome::Paired { first_half });
    }

    debug!("Slot {}: splitting into {} cells", marker, slot.len());
    let cells = split_cell(page, &cell_path, slot.len(), options)?;
    for (i, (entry, path)) in slot.entries.iter().zip(&cells).enumerate() {
        let text = LessonText::for_entry(entry, options);
        if i == 0 {
            fill_cell(page, path, marker, &text, options)?;
        } else {
            write_cell(page, path, marker, &text, options)?;
        }
    }
    Ok(SlotOutcome::Split { cells: cells.len() })
}

fn lookup_cell<'a>(page: &'a mut [Block], path: &TreePath, marker: &str) -> Result<&'a mut Cell> {
    cell_mut(page, path)
        .ok_or_else(|| ComposeError::Layout(format!("No cell at {:?} for {}", path.0, marker)))
}

/// Substitute the lesson for the marker, keeping the rest of the cell.
fn fill_cell(
    page: &mut [Block],
    path: &TreePath,
    marker: &str,
    text: &LessonText,
    options: &ComposeOptions,
) -> Result<()> {
    let cell = lookup_cell(page, path, marker)?;
    fill_marker(&mut cell.content, marker, text, options.lesson_style());
    Ok(())
}

/// Replace the whole cell content with the lesson paragraph.
fn write_cell(
    page: &mut [Block],
    path: &TreePath,
    marker: &str,
    text: &LessonText,
    options: &ComposeOptions,
) -> Result<()> {
    let cell = lookup_cell(page, path, marker)?;
    cell.content = vec![Block::Paragraph(lesson_paragraph(text, options.lesson_style()))];
    Ok(())
}
