//! Cell splitting
//!
//! An N-way split replaces one cell with N siblings in the same row:
//! - widths are `width / N`, the first cell also takes the remainder
//! - interior boundaries get the thin weight
//! - the last cell's right border keeps the template's trailing weight

use crate::options::ComposeOptions;
use crate::tree::{row_mut, Block, Border, TreePath};
use crate::types::{ComposeError, Result};

/// Split the cell at `path` into `parts` siblings. The first keeps the
/// original content (and so the marker); the rest copy only width and border
/// settings and start with a single empty paragraph.
/// Returns the paths of the new cells in order.
pub fn split_cell(
    blocks: &mut [Block],
    path: &TreePath,
    parts: usize,
    options: &ComposeOptions,
) -> Result<Vec<TreePath>> {
    let (row_path, index) = path
        .split_cell()
        .ok_or_else(|| ComposeError::Layout(format!("{:?} is not a cell path", path.0)))?;
    let row = row_mut(blocks, row_path)
        .filter(|row| index < row.cells.len())
        .ok_or_else(|| ComposeError::Layout(format!("No cell at {:?}", path.0)))?;

    if parts <= 1 {
        return Ok(vec![path.clone()]);
    }

    let original = row.cells[index].clone();
    let n = parts as u32;
    let base = original.width / n;
    let remainder = original.width % n;

    let thin = Border::single(options.thin_border);
    let thick = original
        .borders
        .right
        .unwrap_or(Border::single(options.thick_border));

    let siblings: Vec<_> = (0..parts)
        .map(|i| {
            let mut cell = original.clone();
            cell.width = if i == 0 { base + remainder } else { base };
            if i > 0 {
                cell.borders.left = Some(thin);
                cell.clear();
            }
            cell.borders.right = Some(if i == parts - 1 { thick } else { thin });
            cell
        })
        .collect();

    row.cells.splice(index..=index, siblings);

    Ok((0..parts)
        .map(|i| {
            let mut steps = row_path.to_vec();
            steps.push(index + i);
            TreePath(steps)
        })
        .collect())
}
