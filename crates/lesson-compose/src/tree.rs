//! Document tree model
//!
//! Templates and output documents share one tree shape:
//! - `Block`: either a paragraph or a table
//! - `Table` → `Row` → `Cell`, where a cell holds nested blocks
//! - `Paragraph` → `Run` → `RunContent` (text nodes and breaks)
//!
//! Nodes are addressed with [`TreePath`], a list of child indices that
//! alternates block → row → cell → block → ... starting at a block list.
//! Searches return paths; mutation happens afterwards on the collected
//! snapshot.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub body: Vec<Block>,
}

impl Document {
    pub fn new(body: Vec<Block>) -> Self {
        Self { body }
    }

    /// All text content in document order; line breaks become `\n`,
    /// page breaks `\u{c}`, paragraphs and cells are newline separated.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.body {
            block.write_text(&mut out);
        }
        out
    }

    /// Number of page-break separators in the body.
    pub fn page_breaks(&self) -> usize {
        self.body
            .iter()
            .filter(|block| matches!(block, Block::Paragraph(p) if p.is_page_break()))
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

impl Block {
    fn write_text(&self, out: &mut String) {
        match self {
            Block::Paragraph(p) => {
                for run in &p.runs {
                    for item in &run.content {
                        match item {
                            RunContent::Text(text) => out.push_str(text),
                            RunContent::Break(BreakKind::Line) => out.push('\n'),
                            RunContent::Break(BreakKind::Page) => out.push('\u{c}'),
                        }
                    }
                }
                out.push('\n');
            }
            Block::Table(t) => {
                for row in &t.rows {
                    for cell in &row.cells {
                        for block in &cell.content {
                            block.write_text(out);
                        }
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub cells: Vec<Cell>,
}

/// Table cell. Width is in layout units (twentieths of a point).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub borders: CellBorders,
    #[serde(default)]
    pub content: Vec<Block>,
}

impl Cell {
    /// Drop all content, leaving a single empty paragraph.
    pub fn clear(&mut self) {
        self.content = vec![Block::Paragraph(Paragraph {
            runs: vec![Run::text("")],
        })];
    }

    pub fn text(&self) -> String {
        let mut out = String::new();
        for block in &self.content {
            block.write_text(&mut out);
        }
        out
    }

    /// Size of the trailing (right) border, if the cell has one.
    pub fn trailing_weight(&self) -> Option<u32> {
        self.borders.right.map(|border| border.size)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CellBorders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Border>,
}

/// Border weight is in eighths of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    #[serde(default)]
    pub style: BorderStyle,
    pub size: u32,
}

impl Border {
    pub fn single(size: u32) -> Self {
        Self {
            style: BorderStyle::Single,
            size,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    #[default]
    Single,
    Double,
    Dashed,
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn page_break() -> Self {
        Self {
            runs: vec![Run {
                style: RunStyle::default(),
                content: vec![RunContent::Break(BreakKind::Page)],
            }],
        }
    }

    pub fn is_page_break(&self) -> bool {
        self.runs.len() == 1
            && self.runs[0].content == [RunContent::Break(BreakKind::Page)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    #[serde(default)]
    pub style: RunStyle,
    #[serde(default)]
    pub content: Vec<RunContent>,
}

impl Run {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            style: RunStyle::default(),
            content: vec![RunContent::Text(text.into())],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStyle {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    /// Font size in half-points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunContent {
    Text(String),
    Break(BreakKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakKind {
    Line,
    Page,
}

// =============================================================================
// Paths
// =============================================================================

/// Index path into a block list.
///
/// Length 1 (mod 3) addresses a block, length 2 a row, length 3 a cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreePath(pub Vec<usize>);

impl TreePath {
    pub fn is_cell(&self) -> bool {
        !self.0.is_empty() && self.0.len() % 3 == 0
    }

    pub fn is_block(&self) -> bool {
        self.0.len() % 3 == 1
    }

    /// Innermost cell enclosing the addressed block, if any.
    pub fn enclosing_cell(&self) -> Option<TreePath> {
        if !self.is_block() || self.0.len() < 4 {
            return None;
        }
        Some(TreePath(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Split a cell path into its row path and the cell's index in that row.
    pub fn split_cell(&self) -> Option<(&[usize], usize)> {
        if !self.is_cell() {
            return None;
        }
        let (last, row) = self.0.split_last()?;
        Some((row, *last))
    }

    fn child(&self, index: usize) -> TreePath {
        let mut steps = self.0.clone();
        steps.push(index);
        TreePath(steps)
    }
}

pub fn block_mut<'a>(blocks: &'a mut [Block], path: &[usize]) -> Option<&'a mut Block> {
    let (first, rest) = path.split_first()?;
    let block = blocks.get_mut(*first)?;
    if rest.is_empty() {
        return Some(block);
    }
    let Block::Table(table) = block else {
        return None;
    };
    let [row, cell, tail @ ..] = rest else {
        return None;
    };
    let cell = table.rows.get_mut(*row)?.cells.get_mut(*cell)?;
    block_mut(&mut cell.content, tail)
}

pub fn row_mut<'a>(blocks: &'a mut [Block], path: &[usize]) -> Option<&'a mut Row> {
    let (row, table_path) = path.split_last()?;
    match block_mut(blocks, table_path)? {
        Block::Table(table) => table.rows.get_mut(*row),
        Block::Paragraph(_) => None,
    }
}

pub fn cell_mut<'a>(blocks: &'a mut [Block], path: &TreePath) -> Option<&'a mut Cell> {
    let (row_path, index) = path.split_cell()?;
    row_mut(blocks, row_path)?.cells.get_mut(index)
}

pub fn paragraph_mut<'a>(blocks: &'a mut [Block], path: &TreePath) -> Option<&'a mut Paragraph> {
    match block_mut(blocks, &path.0)? {
        Block::Paragraph(p) => Some(p),
        Block::Table(_) => None,
    }
}

/// Visit every paragraph under `blocks` in document order.
pub fn for_each_paragraph(blocks: &[Block], mut f: impl FnMut(&TreePath, &Paragraph)) {
    fn walk(blocks: &[Block], base: &TreePath, f: &mut dyn FnMut(&TreePath, &Paragraph)) {
        for (i, block) in blocks.iter().enumerate() {
            let path = base.child(i);
            match block {
                Block::Paragraph(p) => f(&path, p),
                Block::Table(table) => {
                    for (r, row) in table.rows.iter().enumerate() {
                        for (c, cell) in row.cells.iter().enumerate() {
                            walk(&cell.content, &path.child(r).child(c), f);
                        }
                    }
                }
            }
        }
    }
    walk(blocks, &TreePath::default(), &mut f);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> Vec<Block> {
        vec![
            Block::Paragraph(Paragraph {
                runs: vec![Run::text("title")],
            }),
            Block::Table(Table {
                rows: vec![Row {
                    cells: vec![
                        Cell {
                            width: 100,
                            content: vec![Block::Paragraph(Paragraph {
                                runs: vec![Run::text("a")],
                            })],
                            ..Default::default()
                        },
                        Cell {
                            width: 200,
                            content: vec![Block::Paragraph(Paragraph {
                                runs: vec![Run::text("b")],
                            })],
                            ..Default::default()
                        },
                    ],
                }],
            }),
        ]
    }

    #[test]
    fn test_paths_visit_in_document_order() {
        let blocks = nested();
        let mut seen = Vec::new();
        for_each_paragraph(&blocks, |path, _| seen.push(path.0.clone()));
        assert_eq!(seen, vec![vec![0], vec![1, 0, 0, 0], vec![1, 0, 1, 0]]);
    }

    #[test]
    fn test_enclosing_cell() {
        assert_eq!(TreePath(vec![0]).enclosing_cell(), None);
        assert_eq!(
            TreePath(vec![1, 0, 1, 0]).enclosing_cell(),
            Some(TreePath(vec![1, 0, 1]))
        );
    }

    #[test]
    fn test_cell_mut_resolves_path() {
        let mut blocks = nested();
        let cell = cell_mut(&mut blocks, &TreePath(vec![1, 0, 1])).unwrap();
        assert_eq!(cell.width, 200);
        assert!(cell_mut(&mut blocks, &TreePath(vec![0, 0, 0])).is_none());
    }

    #[test]
    fn test_page_break_detection() {
        let doc = Document::new(vec![
            Block::Paragraph(Paragraph::page_break()),
            Block::Paragraph(Paragraph {
                runs: vec![Run::text("x")],
            }),
        ]);
        assert_eq!(doc.page_breaks(), 1);
        assert_eq!(doc.plain_text(), "\u{c}\nx\n");
    }
}
