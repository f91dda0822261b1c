//! Display rendering of report records
//!
//! The core never interprets report contents. Rendering only lifts a
//! `message` field into a banner and substitutes a placeholder for
//! empty values.

use super::zone::Report;
use serde::Serialize;

pub const MESSAGE_FIELD: &str = "message";
pub const MISSING_VALUE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportField {
    pub label: String,
    pub value: String,
}

/// A report ready for the side panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    pub fields: Vec<ReportField>,
}

impl ReportView {
    pub fn render(title: impl Into<String>, report: &Report) -> Self {
        let banner = report
            .get(MESSAGE_FIELD)
            .filter(|m| !m.is_empty())
            .cloned();

        let fields = report
            .iter()
            .filter(|(label, _)| label.as_str() != MESSAGE_FIELD)
            .map(|(label, value)| ReportField {
                label: label.clone(),
                value: if value.is_empty() {
                    MISSING_VALUE.to_string()
                } else {
                    value.clone()
                },
            })
            .collect();

        Self {
            title: title.into(),
            banner,
            fields,
        }
    }
}

/// Page-level reports shown with a zone selection, one per inspection mode
#[derive(Debug, Clone, Default)]
pub struct PageReports {
    pub zoning_report: Option<Report>,
    pub property_details: Option<Report>,
}
