//! Fixture documents in the default page layout.
//!
//! These render the same cell signatures as the timetable server, for use
//! with [`MockTimetable`](super::MockTimetable) and in tests.

use std::fmt::Write;

use super::layout::{ROUTE_CELL_STYLE, STOP_CELL_STYLE, TIMETABLE_CELL_STYLE};

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn document(body: &str) -> String {
    format!("<!DOCTYPE html>\n<html><head><title>MPK Kraków</title></head><body>\n{body}</body></html>\n")
}

/// Route list page of a lane with the given route labels.
pub fn routes_page(labels: &[&str]) -> String {
    let mut links = String::new();
    for (i, label) in labels.iter().enumerate() {
        let _ = write!(
            links,
            "\n      <a href=\"?linia=__{n}\">\n        &nbsp;{label}&nbsp;\n      </a><br>",
            n = i + 1,
            label = escape(label),
        );
    }

    document(&format!(
        "<table>\n  <tr><td style=\"{ROUTE_CELL_STYLE}\">Linia</td></tr>\n  <tr><td style=\"{ROUTE_CELL_STYLE}\">{links}\n  </td></tr>\n</table>\n"
    ))
}

/// Stop list page of a route. The last name is rendered as the terminus row.
pub fn stops_page(names: &[&str]) -> String {
    let mut rows = format!("  <tr><td style=\"{STOP_CELL_STYLE}\">Przystanki</td></tr>\n");

    for (i, name) in names.iter().enumerate() {
        let name = escape(name);
        if i + 1 == names.len() {
            let _ = writeln!(
                rows,
                "  <tr><td style=\"{STOP_CELL_STYLE}\">&nbsp;&nbsp;\n    <b><span class=\"terminus\">{name}</span></b>\n    &nbsp;&nbsp;</td></tr>"
            );
        } else {
            let _ = writeln!(
                rows,
                "  <tr><td style=\"{STOP_CELL_STYLE}\">&nbsp;<a href=\"?p={n}\">{name}</a>&nbsp;</td></tr>",
                n = i + 1
            );
        }
    }

    document(&format!("<table>\n{rows}</table>\n"))
}

/// Timetable page of a stop.
///
/// Each row is an hour followed by its minutes cells for regular days,
/// Saturdays and holidays.
pub fn schedule_page(rows: &[(u32, [&str; 3])]) -> String {
    let mut body = format!(
        "  <tr><td style=\"{TIMETABLE_CELL_STYLE}\">Godzina</td><td>Dzień powszedni</td><td>Sobota</td><td>Święto</td></tr>\n"
    );

    for (hour, [regular, saturday, holiday]) in rows {
        let _ = writeln!(
            body,
            "  <tr><td style=\"{TIMETABLE_CELL_STYLE}\">{hour:02}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(regular),
            escape(saturday),
            escape(holiday),
        );
    }

    body.push_str("  <tr><td>Legenda</td></tr>\n");
    body.push_str("  <tr><td>Rozkład ważny od 01.03</td></tr>\n");

    document(&format!("<table>\n{body}</table>\n"))
}
