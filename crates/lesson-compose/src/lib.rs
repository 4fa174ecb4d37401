mod assemble;
mod format;
mod inspect;
mod io;
pub mod layout;
mod mapper;
mod options;
mod resolver;
mod schedule;
pub mod tree;
mod types;
pub mod vocabulary;

pub use assemble::{assemble, compose_page, compose_schedule, Assembly};
pub use format::*;
pub use inspect::template_markers;
pub use io::{load_record, load_template, record_stream, save_document};
pub use mapper::{clear_unused_markers, fill_schedule};
pub use options::*;
pub use resolver::*;
pub use schedule::*;
pub use tree::{Document, TreePath};
pub use types::*;
