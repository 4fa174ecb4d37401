//! Lesson text substitution

use crate::format::{subgroup_label, subject_line, teacher_line};
use crate::options::ComposeOptions;
use crate::resolver::find_marker;
use crate::schedule::LessonEntry;
use crate::tree::{paragraph_mut, Block, BreakKind, Paragraph, Run, RunContent, RunStyle};

/// The two lines written into a lesson cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonText {
    pub subject_line: String,
    pub teacher_line: String,
}

impl LessonText {
    pub fn for_entry(entry: &LessonEntry, options: &ComposeOptions) -> Self {
        let subgroup = subgroup_label(entry.subgroup_label(), &options.subgroup_prefix);
        Self {
            subject_line: subject_line(&entry.subject, &subgroup),
            teacher_line: teacher_line(&entry.teacher, &entry.room, &options.room_prefix),
        }
    }
}

/// Subject run, then a run opening with a line break so both lines stay in
/// one paragraph.
pub fn lesson_runs(text: &LessonText, style: RunStyle) -> [Run; 2] {
    [
        Run {
            style,
            content: vec![RunContent::Text(text.subject_line.clone())],
        },
        Run {
            style,
            content: vec![
                RunContent::Break(BreakKind::Line),
                RunContent::Text(text.teacher_line.clone()),
            ],
        },
    ]
}

/// A paragraph holding only the lesson runs, for cells without a marker.
pub fn lesson_paragraph(text: &LessonText, style: RunStyle) -> Paragraph {
    Paragraph {
        runs: lesson_runs(text, style).into(),
    }
}

/// Replace every text node containing `marker` with the lesson runs.
/// Returns the number of replaced nodes.
pub fn fill_marker(blocks: &mut [Block], marker: &str, text: &LessonText, style: RunStyle) -> usize {
    let runs = lesson_runs(text, style);

    let mut paragraphs: Vec<_> = find_marker(blocks, marker)
        .into_iter()
        .map(|location| location.paragraph)
        .collect();
    paragraphs.dedup();

    let mut replaced = 0;
    for path in &paragraphs {
        if let Some(paragraph) = paragraph_mut(blocks, path) {
            replaced += substitute(paragraph, marker, &runs);
        }
    }
    replaced
}

/// Rebuild a paragraph's runs, putting `replacement` where each marker node
/// was. Content sharing a run with the marker keeps its order and style.
fn substitute(paragraph: &mut Paragraph, marker: &str, replacement: &[Run]) -> usize {
    let mut runs = Vec::with_capacity(paragraph.runs.len() + replacement.len());
    let mut replaced = 0;

    for run in paragraph.runs.drain(..) {
        let has_marker = run
            .content
            .iter()
            .any(|item| matches!(item, RunContent::Text(t) if t.contains(marker)));
        if !has_marker {
            runs.push(run);
            continue;
        }

        let mut pending = Vec::new();
        for item in run.content {
            match item {
                RunContent::Text(t) if t.contains(marker) => {
                    if !pending.is_empty() {
                        runs.push(Run {
                            style: run.style,
                            content: std::mem::take(&mut pending),
                        });
                    }
                    runs.extend(replacement.iter().cloned());
                    replaced += 1;
                }
                other => pending.push(other),
            }
        }
        if !pending.is_empty() {
            runs.push(Run {
                style: run.style,
                content: pending,
            });
        }
    }

    paragraph.runs = runs;
    replaced
}
