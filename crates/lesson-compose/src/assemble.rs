//! Document assembly: one page per schedule record
//!
//! Records are pulled one at a time from the stream. Each page is composed
//! from a fresh clone of the template; a record that fails only costs its
//! own page. The finished document is persisted once, after the stream ends.

use crate::io::{load_template, save_document};
use crate::mapper::{clear_unused_markers, fill_schedule};
use crate::options::ComposeOptions;
use crate::schedule::ScheduleRecord;
use crate::tree::{Block, Document, Paragraph};
use crate::types::*;
use futures::{Stream, StreamExt};
use log::{error, info};
use std::path::Path;

/// Assembled output together with its statistics
#[derive(Debug, Clone)]
pub struct Assembly {
    pub document: Document,
    pub report: AssemblyReport,
}

/// Compose a single page from the template for one record.
pub fn compose_page(
    template: &Document,
    record: &ScheduleRecord,
    options: &ComposeOptions,
) -> Result<(Vec<Block>, PageSummary)> {
    let mut page = template.body.clone();
    let summary = fill_schedule(&mut page, record, options)?;
    clear_unused_markers(&mut page);
    Ok((page, summary))
}

/// Build one document from every record in the stream.
///
/// `Err` items (failed fetches) and records whose page cannot be composed
/// are logged, counted in the report and skipped. Pages are separated by a
/// page-break paragraph; there is no separator after the last page.
pub async fn assemble<S>(template: &Document, records: S, options: &ComposeOptions) -> Assembly
where
    S: Stream<Item = Result<ScheduleRecord>>,
{
    let mut records = std::pin::pin!(records);
    let mut document = Document::default();
    let mut report = AssemblyReport::default();

    while let Some(item) = records.next().await {
        report.records_received += 1;

        let record = match item {
            Ok(record) => record,
            Err(e) => {
                error!("Failed to receive schedule: {}", e);
                let group = e.group().unwrap_or("<unknown>").to_string();
                report.failed_records.push((group, e.to_string()));
                continue;
            }
        };
        info!("Schedule for group {} received", record.group_name);

        match compose_page(template, &record, options) {
            Ok((page, summary)) => {
                if report.pages_written > 0 {
                    document.body.push(Block::Paragraph(Paragraph::page_break()));
                }
                document.body.extend(page);
                report.absorb(&summary);
                info!("Page for group {} formed", record.group_name);
            }
            Err(e) => {
                error!("Skipping page for group {}: {}", record.group_name, e);
                report.failed_records.push((record.group_name, e.to_string()));
            }
        }
    }

    Assembly { document, report }
}

/// Load the template, assemble every record and save the result.
///
/// A missing template is reported before the first record is pulled.
pub async fn compose_schedule<S>(
    template_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    records: S,
    options: &ComposeOptions,
) -> Result<AssemblyReport>
where
    S: Stream<Item = Result<ScheduleRecord>>,
{
    options.validate()?;

    let template = load_template(template_path).await?;
    let Assembly { document, report } = assemble(&template, records, options).await;

    save_document(document, output_path).await?;
    info!(
        "Document ready: {} page(s), {} failed record(s)",
        report.pages_written,
        report.failed_records.len()
    );

    Ok(report)
}
