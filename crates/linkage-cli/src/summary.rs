//! Table rendering for composed levels and dialects.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use linkage_compose::ComparisonLevel;
use linkage_model::SqlDialect;
use linkage_model::dialect::KNOWN_DIALECTS;

pub fn levels_table(levels: &[ComparisonLevel]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Label"),
        header_cell("SQL condition"),
        header_cell("Null level"),
        header_cell("m"),
        header_cell("Dialect"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (index, level) in levels.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(level.label_for_charts()),
            Cell::new(level.sql_condition()),
            null_level_cell(level.null_level_flag()),
            level
                .m_probability()
                .map_or_else(|| dim_cell("-"), Cell::new),
            level
                .dialect()
                .map_or_else(|| dim_cell("-"), |dialect| Cell::new(dialect.as_str())),
        ]);
    }
    table
}

pub fn dialects_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Dialect"), header_cell("Identifier quote")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for name in KNOWN_DIALECTS {
        let quote = SqlDialect::new(*name)
            .map(|dialect| dialect.identifier_quote().to_string())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(name).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(quote),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn null_level_cell(flag: Option<bool>) -> Cell {
    match flag {
        Some(true) => Cell::new("yes").fg(Color::Yellow),
        Some(false) => Cell::new("no"),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use linkage_model::LevelSettings;

    use super::*;

    #[test]
    fn one_row_per_level() {
        let levels = vec![
            ComparisonLevel::try_from(LevelSettings::new("x").with_null_level(true)).unwrap(),
            ComparisonLevel::try_from(LevelSettings::new("y").with_m_probability(0.5)).unwrap(),
        ];
        let mut table = levels_table(&levels);
        assert_eq!(table.row_iter().count(), 2);
        assert_eq!(table.column_count(), 6);
    }

    #[test]
    fn lists_known_dialects() {
        assert_eq!(dialects_table().row_iter().count(), KNOWN_DIALECTS.len());
    }
}
