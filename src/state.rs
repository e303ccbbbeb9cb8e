use std::path::PathBuf;

use crate::color::ColorMap;
use crate::config::SliderConfig;
use crate::data::aggregate::{self, ChartData};
use crate::data::filter;
use crate::data::model::{LaunchRecord, LaunchTable, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full dashboard state, independent of rendering.
///
/// Owns the selection state (site dropdown, payload slider) and caches the
/// output of the two chart queries so the UI only recomputes on change.
pub struct AppState {
    /// Loaded table (None until a file is loaded).
    pub table: Option<LaunchTable>,

    /// Where the current table was loaded from.
    pub source: Option<PathBuf>,

    /// Payload slider domain.
    pub slider: SliderConfig,

    site: SiteSelection,
    payload: PayloadRange,

    /// Pie chart data for the current site selection.
    pie: ChartData,

    /// Scatter rows for the current site and payload range.
    scatter: Vec<LaunchRecord>,

    /// Booster category colours for the scatter chart.
    pub category_colors: ColorMap,

    /// Search text typed into the site dropdown.
    pub site_query: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SliderConfig::default())
    }
}

impl AppState {
    pub fn new(slider: SliderConfig) -> Self {
        Self {
            table: None,
            source: None,
            slider,
            site: SiteSelection::All,
            payload: PayloadRange::new(slider.min, slider.max),
            pie: ChartData::default(),
            scatter: Vec::new(),
            category_colors: ColorMap::default(),
            site_query: String::new(),
            status_message: None,
        }
    }

    /// Ingest a newly loaded table and reset the selections to their defaults:
    /// all sites, and the observed payload bounds.
    pub fn set_table(&mut self, table: LaunchTable, source: Option<PathBuf>) {
        self.site = SiteSelection::All;
        self.payload = table
            .payload_bounds()
            .unwrap_or(PayloadRange::new(self.slider.min, self.slider.max));
        self.category_colors = ColorMap::new(table.booster_categories());
        self.site_query.clear();
        if table.is_empty() {
            log::warn!("Loaded dataset contains no launches");
        }

        self.table = Some(table);
        self.source = source;
        self.status_message = None;
        self.refresh_pie();
        self.refresh_scatter();
    }

    pub fn site(&self) -> &SiteSelection {
        &self.site
    }

    pub fn payload_range(&self) -> PayloadRange {
        self.payload
    }

    pub fn pie(&self) -> &ChartData {
        &self.pie
    }

    pub fn scatter(&self) -> &[LaunchRecord] {
        &self.scatter
    }

    /// Dropdown change: both charts depend on the site.
    pub fn set_site(&mut self, site: SiteSelection) {
        if site == self.site {
            return;
        }
        log::debug!("Site selection changed to {site}");
        self.site = site;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Slider change: only the scatter chart depends on the payload range.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if range == self.payload {
            return;
        }
        log::debug!("Payload range changed to {range}");
        self.payload = range;
        self.refresh_scatter();
    }

    /// Dropdown entries: "All Sites" first, then sites sorted by name.
    pub fn site_options(&self) -> Vec<SiteSelection> {
        let mut options = vec![SiteSelection::All];
        if let Some(table) = &self.table {
            let mut sites: Vec<&String> = table.sites().iter().collect();
            sites.sort();
            options.extend(sites.into_iter().map(|s| SiteSelection::site(s.clone())));
        }
        options
    }

    /// Dropdown entries whose label contains the search text (case
    /// insensitive). "All Sites" is always offered.
    pub fn matching_site_options(&self) -> Vec<SiteSelection> {
        let query = self.site_query.trim().to_lowercase();
        self.site_options()
            .into_iter()
            .filter(|o| {
                *o == SiteSelection::All || o.label().to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn pie_title(&self) -> String {
        aggregate::chart_title(&self.site)
    }

    pub fn scatter_title(&self) -> String {
        filter::chart_title(&self.site)
    }

    fn refresh_pie(&mut self) {
        self.pie = match &self.table {
            Some(table) => aggregate::aggregate(table, &self.site),
            None => ChartData::default(),
        };
    }

    fn refresh_scatter(&mut self) {
        self.scatter = match &self.table {
            Some(table) => filter::filter(table.records(), &self.payload, &self.site)
                .into_iter()
                .cloned()
                .collect(),
            None => Vec::new(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    fn table() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("VAFB SLC-4E", 500.0, Outcome::Success, "v1.1"),
            LaunchRecord::new("CCAFS LC-40", 1500.0, Outcome::Failed, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", 3600.0, Outcome::Success, "FT"),
            LaunchRecord::new("KSC LC-39A", 9600.0, Outcome::Success, "B5"),
        ])
    }

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.set_table(table(), None);
        state
    }

    #[test]
    fn empty_state_has_no_chart_data() {
        let state = AppState::default();
        assert!(state.pie().is_empty());
        assert!(state.scatter().is_empty());
        assert_eq!(state.site_options(), vec![SiteSelection::All]);
    }

    #[test]
    fn loading_defaults_to_all_sites_and_observed_bounds() {
        let state = loaded();
        assert_eq!(state.site(), &SiteSelection::All);
        assert_eq!(state.payload_range(), PayloadRange::new(500.0, 9600.0));
        assert_eq!(state.pie().len(), 3);
        assert_eq!(state.scatter().len(), 4);
    }

    #[test]
    fn site_options_are_sorted_after_all() {
        let options = loaded().site_options();
        let labels: Vec<&str> = options.iter().map(|o| o.label()).collect();
        assert_eq!(
            labels,
            vec!["All Sites", "CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
    }

    #[test]
    fn site_change_refreshes_both_charts() {
        let mut state = loaded();
        state.set_site(SiteSelection::site("CCAFS LC-40"));
        assert_eq!(state.pie().get("Success"), Some(1));
        assert_eq!(state.pie().get("Failed"), Some(1));
        assert_eq!(state.scatter().len(), 2);
        assert_eq!(
            state.pie_title(),
            "Total Success vs Failed Launches for site CCAFS LC-40"
        );
    }

    #[test]
    fn payload_change_only_narrows_scatter() {
        let mut state = loaded();
        let pie_before = state.pie().clone();
        state.set_payload_range(PayloadRange::new(1000.0, 4000.0));
        assert_eq!(state.pie(), &pie_before);
        let masses: Vec<f64> = state.scatter().iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(masses, vec![1500.0, 3600.0]);
    }

    #[test]
    fn inverted_range_clears_scatter() {
        let mut state = loaded();
        state.set_payload_range(PayloadRange::new(5000.0, 1000.0));
        assert!(state.scatter().is_empty());
    }

    #[test]
    fn site_search_narrows_dropdown() {
        let mut state = loaded();
        state.site_query = "ccafs".to_string();
        assert_eq!(
            state.matching_site_options(),
            vec![SiteSelection::All, SiteSelection::site("CCAFS LC-40")]
        );

        state.site_query = "Boca".to_string();
        assert_eq!(state.matching_site_options(), vec![SiteSelection::All]);

        state.site_query.clear();
        assert_eq!(state.matching_site_options().len(), 4);
    }

    #[test]
    fn reloading_resets_selection() {
        let mut state = loaded();
        state.set_site(SiteSelection::site("KSC LC-39A"));
        state.set_table(table(), Some(PathBuf::from("again.csv")));
        assert_eq!(state.site(), &SiteSelection::All);
        assert_eq!(state.source, Some(PathBuf::from("again.csv")));
    }
}
