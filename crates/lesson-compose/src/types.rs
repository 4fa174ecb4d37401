use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Malformed record: {0}")]
    Record(String),
    #[error("Cannot load schedule for {group}: {reason}")]
    RecordLoad { group: String, reason: String },
    #[error("Layout error: {0}")]
    Layout(String),
    #[error("Marker {0} is not inside a table cell")]
    MarkerOutsideCell(String),
}

pub type Result<T> = std::result::Result<T, ComposeError>;

impl ComposeError {
    /// Group a failed record belongs to, when its source is known.
    pub fn group(&self) -> Option<&str> {
        match self {
            ComposeError::RecordLoad { group, .. } => Some(group),
            _ => None,
        }
    }
}

/// Weekdays as titled by the schedule API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Day title exactly as it appears in schedule records
    pub fn title(self) -> &'static str {
        match self {
            Weekday::Monday => "Понедельник",
            Weekday::Tuesday => "Вторник",
            Weekday::Wednesday => "Среда",
            Weekday::Thursday => "Четверг",
            Weekday::Friday => "Пятница",
            Weekday::Saturday => "Суббота",
            Weekday::Sunday => "Воскресенье",
        }
    }

    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|day| day.title() == title.trim())
    }
}

/// Outcome of laying out one lesson slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOutcome {
    /// Marker absent from the page, nothing to do
    Untouched,
    /// Whole-class lesson written into the marker cell
    Filled,
    /// Single sub-group written into one half of a split pair
    Paired { first_half: bool },
    /// Cell split into this many sibling cells
    Split { cells: usize },
}

/// Per-page tallies produced by the schedule mapper
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSummary {
    pub days_filled: usize,
    pub days_skipped: usize,
    pub slots_filled: usize,
    pub cells_split: usize,
}

/// Statistics for a whole assembly pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    pub records_received: usize,
    pub pages_written: usize,
    /// Group name (or `<unknown>` when the source is not known) with the error text
    pub failed_records: Vec<(String, String)>,
    pub days_skipped: usize,
    pub slots_filled: usize,
    pub cells_split: usize,
}

impl AssemblyReport {
    pub(crate) fn absorb(&mut self, page: &PageSummary) {
        self.pages_written += 1;
        self.days_skipped += page.days_skipped;
        self.slots_filled += page.slots_filled;
        self.cells_split += page.cells_split;
    }
}
