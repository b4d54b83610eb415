//! The page shape the extraction rules depend on.
//!
//! Timetable pages carry no semantic markup. Cells are told apart only by
//! their inline `style` attribute, which must match the server's rendering
//! byte for byte.

/// Style of the cells holding the lane header and the route links.
/// The route links sit in the second such cell.
pub const ROUTE_CELL_STYLE: &str = "text-align: left; white-space: nowrap; ";

/// Style of the stop-name cells. The first match is a header.
pub const STOP_CELL_STYLE: &str = " text-align: right; ";

/// Style of the cell that anchors the hour/minute table of a stop.
pub const TIMETABLE_CELL_STYLE: &str = "  border-right: solid black 1px;  text-align: left; white-space: nowrap;  border-bottom: solid black 1px; padding-right: 10px;  ";

/// Literal boilerplate around a label.
///
/// Text is whitespace-normalized first (including `&nbsp;`), then the
/// prefix and suffix are removed where present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelPattern {
    pub prefix: String,
    pub suffix: String,
}

impl LabelPattern {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Recover the label from a cell's raw text.
    ///
    /// # Examples
    ///
    /// ```
    /// use mpk_timetable::mpk::LabelPattern;
    ///
    /// let pattern = LabelPattern::new("Trasa:", "");
    /// assert_eq!(pattern.extract("\n   Trasa:\u{a0}Czyżyny -  Bieżanów "), "Czyżyny - Bieżanów");
    /// ```
    pub fn extract(&self, raw: &str) -> String {
        let text = normalize_ws(raw);
        let text = text.strip_prefix(self.prefix.as_str()).unwrap_or(text.as_str());
        let text = text.strip_suffix(self.suffix.as_str()).unwrap_or(text);
        text.trim().to_string()
    }
}

/// Collapse whitespace runs to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Everything the extraction rules assume about the pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub route_cell_style: String,
    pub stop_cell_style: String,
    pub timetable_cell_style: String,
    pub route_label: LabelPattern,
    pub stop_name: LabelPattern,
    /// The terminus row renders with extra markup around the name.
    pub terminus_name: LabelPattern,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            route_cell_style: ROUTE_CELL_STYLE.to_string(),
            stop_cell_style: STOP_CELL_STYLE.to_string(),
            timetable_cell_style: TIMETABLE_CELL_STYLE.to_string(),
            route_label: LabelPattern::default(),
            stop_name: LabelPattern::default(),
            terminus_name: LabelPattern::default(),
        }
    }
}
