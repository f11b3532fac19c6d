//! Table rendering. Cell values are always emitted as text; maud escapes
//! them for HTML.

use std::fmt::Write as _;

use maud::{Markup, PreEscaped, html};

use crate::table::{EmployeeRow, EmployeeTable};

/// Material icon code point for the delete glyph.
const DELETE_ICON: &str = "&#xE872;";

pub fn row_html(row: &EmployeeRow) -> Markup {
    html! {
        tr {
            @for cell in &row.cells {
                td { (cell) }
            }
            td {
                a href=(row.action.target()) class="delete" data-toggle="modal" {
                    i class="material-icons" data-toggle="tooltip" title=(row.action.label()) {
                        (PreEscaped(DELETE_ICON))
                    }
                }
            }
        }
    }
}

/// The `EmployeesTable` element: header row first, then one row per record.
pub fn table_html(table: &EmployeeTable) -> Markup {
    html! {
        table id="EmployeesTable" class="table table-striped table-hover" {
            tr {
                @for title in table.header() {
                    th { (title) }
                }
            }
            @for row in table.rows() {
                (row_html(row))
            }
        }
    }
}

/// Plain-text rendering for terminals. The action column is left out.
pub fn text_table(table: &EmployeeTable) -> String {
    let header = &table.header()[..5];
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in table.rows() {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, header.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in table.rows() {
        push_line(&mut out, row.cells.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (idx, (cell, width)) in cells.zip(widths).enumerate() {
        if idx > 0 {
            line.push_str("  ");
        }
        let _ = write!(line, "{cell:<width$}");
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
