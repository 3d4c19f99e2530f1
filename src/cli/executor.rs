//! Command dispatch
//!
//! Every command produces a JSON document; `main` prints it.

use serde_json::Value;

use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::pagination::{Counter, PaginationSequence, PaginationState, page_count};
use crate::render::Renderable;

/// Execute the parsed command against the loaded settings.
pub fn execute_command(cli: &Cli, settings: &Settings) -> AppResult<String> {
    let output = match &cli.command {
        Commands::Window {
            page_index,
            total_records,
            total_pages,
            page_size,
            range_size,
        } => window(settings, *page_index, *total_records, *total_pages, *page_size, *range_size)?,
        Commands::Sequence {
            current,
            total_records,
            page_size,
            range_size,
        } => sequence(settings, *current, *total_records, *page_size, *range_size)?,
        Commands::CheckConfig => serde_json::to_value(settings)?,
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

fn window(
    settings: &Settings,
    page_index: u32,
    total_records: u64,
    total_pages: Option<u32>,
    page_size: Option<u32>,
    range_size: Option<u32>,
) -> AppResult<Value> {
    let defaults = &settings.pagination.defaults;
    let page_size = page_size.unwrap_or(defaults.page_size);
    let range_size = range_size.unwrap_or(defaults.range_size);
    let total_pages = match total_pages {
        Some(total_pages) => total_pages,
        None => u32::try_from(page_count(total_records, page_size))
            .map_err(|_| AppError::value(format!("{total_records} records do not fit a u32 page count")))?,
    };

    tracing::debug!(page_index, total_records, total_pages, page_size, range_size, "computing window");

    let mut state = PaginationState::new();
    state
        .set_page_sizes(defaults.page_sizes.clone())
        .set_page_index(page_index)
        .set_page_size(page_size)
        .set_range_size(range_size)
        .set_total_records(total_records)
        .set_total_pages(total_pages);

    Counter::new(state).view_data()
}

fn sequence(
    settings: &Settings,
    current: u32,
    total_records: u64,
    page_size: Option<u32>,
    range_size: Option<i64>,
) -> AppResult<Value> {
    let defaults = &settings.pagination.defaults;

    let mut sequence = PaginationSequence::<Value>::new(total_records);
    sequence
        .set_current_page(current)
        .set_page_size(page_size.unwrap_or(defaults.page_size))
        .set_range_size(range_size.unwrap_or_else(|| i64::from(defaults.range_size)));

    sequence.view_data()
}
