//! Plain-text rendering of categories and search results.
//!
//! Renderers write into any `fmt::Write` so callers can print, buffer, or
//! assert on the exact output.

use crate::catalog::{Catalog, Institution};
use crate::presentation::labels::CategoryLabels;
use crate::presentation::state::AppState;
use std::fmt;

/// One line per category: label, key, and record count, in catalog order.
pub fn render_categories(
    catalog: &Catalog,
    labels: &CategoryLabels,
    writer: &mut impl fmt::Write,
) -> fmt::Result {
    let width = catalog
        .keys()
        .map(|key| labels.label_for(key).len())
        .max()
        .unwrap_or(0);
    for category in catalog.categories() {
        writeln!(
            writer,
            "{:<width$}  {:<26} {:>4}",
            labels.label_for(&category.key),
            category.key.as_str(),
            category.institutions.len(),
        )?;
    }
    Ok(())
}

/// Header plus numbered records for the state's current view.
pub fn render_view(
    state: &AppState,
    labels: &CategoryLabels,
    writer: &mut impl fmt::Write,
) -> fmt::Result {
    if state.is_loading() {
        return writeln!(writer, "loading catalog...");
    }
    if let Some(error) = state.error() {
        return writeln!(writer, "error: {error}");
    }

    let visible = state.visible();
    let label = labels.label_for(state.category());
    if state.query().is_empty() {
        writeln!(writer, "{label}: {} institutions", visible.len())?;
    } else {
        writeln!(
            writer,
            "{label}: {} matching \"{}\"",
            visible.len(),
            state.query()
        )?;
    }
    render_records(&visible, writer)
}

pub fn render_records(records: &[&Institution], writer: &mut impl fmt::Write) -> fmt::Result {
    if records.is_empty() {
        return writeln!(writer, "  (no institutions found)");
    }
    for (idx, record) in records.iter().enumerate() {
        render_record(idx + 1, record, writer)?;
    }
    Ok(())
}

fn render_record(idx: usize, record: &Institution, writer: &mut impl fmt::Write) -> fmt::Result {
    writeln!(
        writer,
        "[{idx}] {} | {} | {}",
        record.name,
        record.kind,
        record.website().unwrap_or("no website")
    )
}
