//! Accumulate the queries of many rules into one Splunk dashboard document.
//!
//! Each query becomes a table panel. The dashboard carries a time picker whose token the
//! panels' searches refer to.

use query_engine_spl::spl::string::SPL;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::translation::error::Error;

const TIME_TOKEN: &str = "field1";

/// The outer settings of a dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardLayout {
    pub label: String,
    /// Default start of the time picker.
    pub earliest: String,
    /// Default end of the time picker.
    pub latest: String,
}

impl Default for DashboardLayout {
    fn default() -> Self {
        DashboardLayout {
            label: "MyDashboard".to_string(),
            earliest: "-24h@h".to_string(),
            latest: "now".to_string(),
        }
    }
}

impl DashboardLayout {
    fn preamble(&self) -> String {
        format!(
            "<form><label>{}</label><fieldset submitButton=\"false\"><input type=\"time\" token=\"{TIME_TOKEN}\">\
             <label></label><default><earliest>{}</earliest><latest>{}</latest></default></input></fieldset>",
            self.label, self.earliest, self.latest
        )
    }
}

const PANEL_TITLE: &str = "<row><panel><title>";
const PANEL_QUERY: &str = "</title><table><search><query>";
const DOCUMENT_SUFFIX: &str = "</form>";

fn panel_suffix() -> String {
    format!(
        "</query><earliest>${TIME_TOKEN}.earliest$</earliest><latest>${TIME_TOKEN}.latest$</latest>\
         <sampleRatio>1</sampleRatio></search><option name=\"count\">20</option>\
         <option name=\"dataOverlayMode\">none</option><option name=\"drilldown\">row</option>\
         <option name=\"percentagesRow\">false</option><option name=\"refresh.display\">progressbar</option>\
         <option name=\"rowNumbers\">false</option><option name=\"totalsRow\">false</option>\
         <option name=\"wrap\">true</option></table></panel></row>"
    )
}

/// Lifecycle of a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardState {
    /// Accepting panels.
    Open,
    /// The document suffix has been written.
    Finalized,
}

/// A dashboard document under construction.
#[derive(Debug)]
pub struct Dashboard {
    document: SPL,
    state: DashboardState,
    panels: usize,
}

impl Dashboard {
    /// Start a dashboard. The document preamble is written immediately.
    pub fn new(layout: &DashboardLayout) -> Self {
        let mut document = SPL::new();
        document.append_syntax(&layout.preamble());
        Dashboard {
            document,
            state: DashboardState::Open,
            panels: 0,
        }
    }

    pub fn state(&self) -> DashboardState {
        self.state
    }

    /// Number of panels appended so far.
    pub fn panels(&self) -> usize {
        self.panels
    }

    /// Append a panel showing a rule's query.
    ///
    /// Only `<` and `>` of the query are replaced by entities; the rule name is written as is.
    pub fn append_rule(&mut self, rule_name: &str, query: &str) -> Result<(), Error> {
        if self.state == DashboardState::Finalized {
            return Err(Error::DashboardFinalized);
        }
        self.document.append_syntax(PANEL_TITLE);
        self.document.append_syntax(rule_name);
        self.document.append_syntax(PANEL_QUERY);
        self.document.append_angle_escaped(query);
        self.document.append_syntax(&panel_suffix());
        self.panels += 1;
        Ok(())
    }

    /// Write the document suffix and return the whole document.
    pub fn finalize(&mut self) -> Result<String, Error> {
        if self.state == DashboardState::Finalized {
            return Err(Error::DashboardFinalized);
        }
        self.document.append_syntax(DOCUMENT_SUFFIX);
        self.state = DashboardState::Finalized;
        tracing::info!(panels = self.panels, "finalized dashboard");
        Ok(self.document.spl.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_are_written_in_call_order() {
        let mut dashboard = Dashboard::new(&DashboardLayout::default());
        dashboard.append_rule("R1", "q1 | search val > 5").unwrap();
        dashboard.append_rule("R2", "q2 <x>").unwrap();
        let document = dashboard.finalize().unwrap();

        assert!(document.starts_with("<form><label>MyDashboard</label>"));
        let first = document.find("<title>R1</title>").unwrap();
        let second = document.find("<title>R2</title>").unwrap();
        assert!(first < second);
        assert!(document.contains("<query>q1 | search val &gt; 5</query>"));
        assert!(document.contains("<query>q2 &lt;x&gt;</query>"));
        assert_eq!(document.matches(DOCUMENT_SUFFIX).count(), 1);
        assert!(document.ends_with("</panel></row></form>"));
        assert_eq!(dashboard.panels(), 2);
    }

    #[test]
    fn empty_dashboards_are_well_formed() {
        let layout = DashboardLayout::default();
        let mut dashboard = Dashboard::new(&layout);
        let document = dashboard.finalize().unwrap();
        assert_eq!(document, format!("{}</form>", layout.preamble()));
        assert!(!document.contains("<panel>"));
    }

    #[test]
    fn finalized_dashboards_reject_changes() {
        let mut dashboard = Dashboard::new(&DashboardLayout::default());
        dashboard.finalize().unwrap();
        assert_eq!(dashboard.state(), DashboardState::Finalized);
        assert!(matches!(
            dashboard.finalize(),
            Err(Error::DashboardFinalized)
        ));
        assert!(matches!(
            dashboard.append_rule("R1", "q1"),
            Err(Error::DashboardFinalized)
        ));
    }

    #[test]
    fn ampersands_and_quotes_are_not_escaped() {
        let mut dashboard = Dashboard::new(&DashboardLayout::default());
        dashboard.append_rule("R&D", r#"a="x&y""#).unwrap();
        let document = dashboard.finalize().unwrap();
        assert!(document.contains(r#"<title>R&D</title>"#));
        assert!(document.contains(r#"<query>a="x&y"</query>"#));
    }

    #[test]
    fn panels_refer_to_the_time_picker() {
        let layout = DashboardLayout {
            label: "Detections".to_string(),
            earliest: "-7d@d".to_string(),
            latest: "now".to_string(),
        };
        let mut dashboard = Dashboard::new(&layout);
        dashboard.append_rule("R1", "q1").unwrap();
        let document = dashboard.finalize().unwrap();
        assert!(document.contains("<label>Detections</label>"));
        assert!(document.contains("<earliest>-7d@d</earliest>"));
        assert!(document.contains("<earliest>$field1.earliest$</earliest>"));
    }
}
