//! Extraction of routes, stops and departures from timetable pages.
//!
//! Each function takes a whole HTML document. A missing element signature
//! is a [`LayoutError`]; the caller decides which stage it belongs to.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use crate::domain::{DayType, Departure};

use super::error::LayoutError;
use super::layout::{PageLayout, normalize_ws};

static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("static selector"));
static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("static selector"));
static A: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("static selector"));

/// All `<td>` cells whose style attribute is exactly `style`, in document order.
fn cells_with_style<'a>(document: &'a Html, style: &'a str) -> impl Iterator<Item = ElementRef<'a>> {
    document
        .select(&TD)
        .filter(move |td| td.value().attr("style") == Some(style))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Route labels of a lane, in document order.
///
/// The links live in the second route-styled cell. A cell without links
/// means the lane has no route variants and yields an empty list.
pub fn parse_routes(html: &str, layout: &PageLayout) -> Result<Vec<String>, LayoutError> {
    let document = Html::parse_document(html);

    let cell = cells_with_style(&document, &layout.route_cell_style)
        .nth(1)
        .ok_or_else(|| {
            LayoutError::Missing(format!(
                "a second route cell with style {:?}",
                layout.route_cell_style
            ))
        })?;

    let labels: Vec<String> = cell
        .select(&A)
        .map(|a| layout.route_label.extract(&text_of(a)))
        .collect();

    trace!(count = labels.len(), "parsed route labels");
    Ok(labels)
}

/// Stop names of a route, in document order.
///
/// The first stop-styled cell is a header and is skipped. The last one is
/// the terminus and is cleaned with the terminus pattern.
pub fn parse_stops(html: &str, layout: &PageLayout) -> Result<Vec<String>, LayoutError> {
    let document = Html::parse_document(html);

    let cells: Vec<String> = cells_with_style(&document, &layout.stop_cell_style)
        .skip(1)
        .map(text_of)
        .collect();

    let Some((terminus, departing)) = cells.split_last() else {
        return Err(LayoutError::Missing(format!(
            "stop cells with style {:?} after the header",
            layout.stop_cell_style
        )));
    };

    let mut names: Vec<String> = departing
        .iter()
        .map(|raw| layout.stop_name.extract(raw))
        .collect();
    names.push(layout.terminus_name.extract(terminus));

    trace!(count = names.len(), "parsed stop names");
    Ok(names)
}

/// Departures of a stop for one day type, in row order.
///
/// Rows are taken from the row group enclosing the timetable anchor cell,
/// minus the header row and two trailing rows. Each row holds the hour in
/// its first cell and one minutes cell per day type. Tokens that are not
/// plain digits are footnote markers and are dropped.
pub fn parse_departures(
    html: &str,
    layout: &PageLayout,
    day_type: DayType,
) -> Result<Vec<Departure>, LayoutError> {
    let document = Html::parse_document(html);

    let anchor = cells_with_style(&document, &layout.timetable_cell_style)
        .next()
        .ok_or_else(|| {
            LayoutError::Missing(format!(
                "a timetable cell with style {:?}",
                layout.timetable_cell_style
            ))
        })?;

    let group = anchor
        .parent()
        .and_then(|row| row.parent())
        .and_then(ElementRef::wrap)
        .ok_or_else(|| LayoutError::Missing("a row group around the timetable cell".into()))?;

    let rows: Vec<ElementRef<'_>> = group.select(&TR).collect();
    let body = rows.len().saturating_sub(3);
    let column = day_type.column();

    let mut departures = Vec::new();
    for row in rows.iter().skip(1).take(body) {
        let cells: Vec<ElementRef<'_>> = row.select(&TD).collect();

        let hour_text = cells.first().map(|c| normalize_ws(&text_of(*c))).unwrap_or_default();
        let hour: u32 = hour_text
            .parse()
            .map_err(|_| LayoutError::InvalidHour(hour_text.clone()))?;

        let minutes = cells
            .get(column)
            .ok_or(LayoutError::MissingColumn { hour, column })?;

        for minute in minute_tokens(&text_of(*minutes)) {
            departures.push(Departure::new(hour, minute?)?);
        }
    }

    trace!(count = departures.len(), %day_type, "parsed departures");
    Ok(departures)
}

/// Numeric minute values in a minutes cell.
///
/// An all-digit token too long to be a number is an error, not a marker.
fn minute_tokens(text: &str) -> impl Iterator<Item = Result<u32, LayoutError>> + '_ {
    text.split_whitespace()
        .filter(|token| token.bytes().all(|b| b.is_ascii_digit()))
        .map(|token| {
            token
                .parse()
                .map_err(|_| LayoutError::InvalidMinute(token.to_string()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mpk::pages;
    use crate::mpk::LabelPattern;

    fn layout() -> PageLayout {
        PageLayout::default()
    }

    #[test]
    fn routes_in_document_order() {
        let html = pages::routes_page(&["Czyżyny - Bieżanów", "Bieżanów - Czyżyny"]);
        let routes = parse_routes(&html, &layout()).unwrap();
        assert_eq!(routes, vec!["Czyżyny - Bieżanów", "Bieżanów - Czyżyny"]);
    }

    #[test]
    fn routes_apply_label_pattern() {
        let html = pages::routes_page(&["Trasa: Czyżyny - Bieżanów"]);
        let layout = PageLayout {
            route_label: LabelPattern::new("Trasa:", ""),
            ..PageLayout::default()
        };
        assert_eq!(parse_routes(&html, &layout).unwrap(), vec!["Czyżyny - Bieżanów"]);
    }

    #[test]
    fn routes_cell_without_links_is_empty() {
        let html = pages::routes_page(&[]);
        assert!(parse_routes(&html, &layout()).unwrap().is_empty());
    }

    #[test]
    fn routes_missing_cell_is_error() {
        let html = "<html><body><table><tr><td>Nie ma takiej linii</td></tr></table></body></html>";
        let err = parse_routes(html, &layout()).unwrap_err();
        assert!(matches!(err, LayoutError::Missing(_)));
    }

    #[test]
    fn route_style_must_match_exactly() {
        let html = pages::routes_page(&["A - B"]).replace(
            crate::mpk::layout::ROUTE_CELL_STYLE,
            "text-align: left; white-space: nowrap;",
        );
        assert!(parse_routes(&html, &layout()).is_err());
    }

    #[test]
    fn stops_skip_header_and_clean_terminus() {
        let html = pages::stops_page(&["Czyżyny", "Rondo Mogilskie", "Bieżanów"]);
        let stops = parse_stops(&html, &layout()).unwrap();
        assert_eq!(stops, vec!["Czyżyny", "Rondo Mogilskie", "Bieżanów"]);
    }

    #[test]
    fn stops_terminus_pattern_only_applies_to_last() {
        let html = pages::stops_page(&["Koniec A", "Koniec B"]);
        let layout = PageLayout {
            terminus_name: LabelPattern::new("Koniec", ""),
            ..PageLayout::default()
        };
        assert_eq!(parse_stops(&html, &layout).unwrap(), vec!["Koniec A", "B"]);
    }

    #[test]
    fn stops_terminus_boilerplate_is_stripped() {
        let style = crate::mpk::layout::STOP_CELL_STYLE;
        let html = format!(
            "<table>\
             <tr><td style=\"{style}\">Przystanki</td></tr>\
             <tr><td style=\"{style}\">&nbsp;<a href=\"?p=1\">Kurdwanów P+R</a>&nbsp;</td></tr>\
             <tr><td style=\"{style}\">&nbsp;&nbsp;\n  <b>Przystanek końcowy:&nbsp;<span>Bieżanów Nowy</span>\
             &nbsp;(wysiadanie)</b>\n&nbsp;&nbsp;</td></tr>\
             </table>"
        );
        let layout = PageLayout {
            terminus_name: LabelPattern::new("Przystanek końcowy:", "(wysiadanie)"),
            ..PageLayout::default()
        };

        let stops = parse_stops(&html, &layout).unwrap();
        assert_eq!(stops, vec!["Kurdwanów P+R", "Bieżanów Nowy"]);

        // Without the pattern the boilerplate survives normalization
        let raw = parse_stops(&html, &PageLayout::default()).unwrap();
        assert_eq!(raw[1], "Przystanek końcowy: Bieżanów Nowy (wysiadanie)");
    }

    #[test]
    fn stops_header_only_is_error() {
        let html = pages::stops_page(&[]);
        let err = parse_stops(&html, &layout()).unwrap_err();
        assert!(err.to_string().contains("stop cells"));
    }

    #[test]
    fn departures_select_day_type_column() {
        let html = pages::schedule_page(&[
            (5, ["10 40", "15", "20"]),
            (6, ["05 35", "", "50"]),
        ]);

        let regular = parse_departures(&html, &layout(), DayType::Regular).unwrap();
        let hhmm: Vec<String> = regular.iter().map(|d| d.to_string()).collect();
        assert_eq!(hhmm, vec!["05:10", "05:40", "06:05", "06:35"]);

        let saturday = parse_departures(&html, &layout(), DayType::Saturday).unwrap();
        assert_eq!(saturday, vec![Departure::new(5, 15).unwrap()]);

        let holiday = parse_departures(&html, &layout(), DayType::Holiday).unwrap();
        assert_eq!(
            holiday,
            vec![Departure::new(5, 20).unwrap(), Departure::new(6, 50).unwrap()]
        );
    }

    #[test]
    fn departures_keep_row_order() {
        let html = pages::schedule_page(&[(23, ["50 10", "", ""]), (4, ["30", "", ""])]);
        let deps = parse_departures(&html, &layout(), DayType::Regular).unwrap();
        let hhmm: Vec<String> = deps.iter().map(|d| d.to_string()).collect();
        assert_eq!(hhmm, vec!["23:50", "23:10", "04:30"]);
    }

    #[test]
    fn departures_drop_marker_tokens() {
        let html = pages::schedule_page(&[(7, ["A 12 x 45k -", "", ""]), (8, ["^ N", "", ""])]);
        let deps = parse_departures(&html, &layout(), DayType::Regular).unwrap();
        assert_eq!(deps, vec![Departure::new(7, 12).unwrap()]);
    }

    #[test]
    fn departures_out_of_range_minute_is_error() {
        let html = pages::schedule_page(&[(7, ["75", "", ""])]);
        let err = parse_departures(&html, &layout(), DayType::Regular).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidDeparture(_)));
    }

    #[test]
    fn departures_non_numeric_hour_is_error() {
        let html = pages::schedule_page(&[]).replacen(
            "<tr><td>Legenda</td></tr>",
            "<tr><td>Legenda</td></tr><tr><td>Legenda</td></tr><tr><td>Legenda</td></tr>",
            1,
        );
        let err = parse_departures(&html, &layout(), DayType::Regular).unwrap_err();
        assert_eq!(err, LayoutError::InvalidHour("Legenda".into()));
    }

    #[test]
    fn departures_missing_anchor_is_error() {
        let html = pages::stops_page(&["A", "B"]);
        let err = parse_departures(&html, &layout(), DayType::Regular).unwrap_err();
        assert!(err.to_string().contains("timetable cell"));
    }

    #[test]
    fn departures_empty_table() {
        let html = pages::schedule_page(&[]);
        assert!(parse_departures(&html, &layout(), DayType::Saturday).unwrap().is_empty());
    }

    #[test]
    fn minute_tokens_digits_only() {
        let tokens: Vec<u32> = minute_tokens(" 05  17a 29\u{a0}41 ")
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(tokens, vec![5, 29, 41]);
    }

    #[test]
    fn departures_oversized_minute_is_error() {
        let html = pages::schedule_page(&[(7, ["10 99999999999", "", ""])]);
        let err = parse_departures(&html, &layout(), DayType::Regular).unwrap_err();
        assert_eq!(err, LayoutError::InvalidMinute("99999999999".into()));
    }
}
