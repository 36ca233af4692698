//! Text rendering of quotes and of the module picker.

use crate::core::calculator::line_cost;
use crate::core::catalog::Catalog;
use crate::core::formatter::CurrencyFormat;
use crate::domain::model::QuoteResult;
use crate::utils::error::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, Table};
use rust_decimal::Decimal;

pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub const EMPTY_SELECTION_HINT: &str = "Select at least one module to generate the quote.";

pub fn render_quote(result: &QuoteResult, format: &CurrencyFormat) -> String {
    if result.is_empty() {
        return format!("{}\n", EMPTY_SELECTION_HINT);
    }

    let total_cost = format.format(result.total_cost);
    let mut lines = vec![
        "Quote results".to_string(),
        format!("  Total hours:     {} h", result.total_hours),
        format!("  Estimated time:  {:.1} days", result.total_days),
        format!("  Weeks:           {:.1} wk", result.total_weeks),
        format!("  Total cost:      {}", total_cost),
        String::new(),
        "Quote details".to_string(),
        breakdown_table(result, format).to_string(),
        String::new(),
        "Estimated dates".to_string(),
        format!("  - Start: {}", result.start_date.format(DATE_FORMAT)),
        format!("  - End: {}", result.end_date.format(DATE_FORMAT)),
        format!("  - Working days: {} days", result.working_days()),
        String::new(),
        "Executive summary".to_string(),
        format!("  - Total development hours: {} hours", result.total_hours),
        format!("  - Total cost: {}", total_cost),
        format!("  - Delivery time: {:.1} weeks", result.total_weeks),
        format!("  - Modules included: {}", result.module_count()),
    ];
    lines.push(String::new());
    lines.join("\n")
}

pub fn render_catalog(
    catalog: &Catalog,
    hourly_rate: Decimal,
    format: &CurrencyFormat,
) -> Result<String> {
    let mut table = Table::new();
    table.set_header(vec!["Module", "Hours", "Complexity", "Cost", "Description"]);
    apply_style(&mut table);
    for module in catalog.list_modules() {
        table.add_row(vec![
            module.name.clone(),
            module.effort_hours.to_string(),
            module.complexity.to_string(),
            format.format(line_cost(module.effort_hours, hourly_rate)?),
            module.description.clone(),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    Ok(format!("{}\n", table))
}

fn breakdown_table(result: &QuoteResult, format: &CurrencyFormat) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Module", "Hours", "Complexity", "Cost"]);
    apply_style(&mut table);
    for item in &result.line_items {
        table.add_row(vec![
            item.module.clone(),
            item.hours.to_string(),
            item.complexity.to_string(),
            format.format(item.cost),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table
}

fn apply_style(table: &mut Table) {
    table.load_preset(UTF8_FULL).apply_modifier(UTF8_ROUND_CORNERS);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
