use super::model::{LaunchRecord, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Payload / site filter for the scatter chart
// ---------------------------------------------------------------------------

/// Return the records that pass both the payload range and site selection.
///
/// A record passes when:
/// * `range.low <= payload_mass_kg <= range.high`
/// * the selection is [`SiteSelection::All`] or names the record's site
///
/// Relative order is preserved. An inverted range yields nothing.
pub fn filter<'a>(
    records: &'a [LaunchRecord],
    range: &PayloadRange,
    selection: &SiteSelection,
) -> Vec<&'a LaunchRecord> {
    if range.is_inverted() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| selection.matches(&r.site))
        .collect()
}

/// Title shown above the scatter chart.
pub fn chart_title(selection: &SiteSelection) -> String {
    format!(
        "Correlation between Payload and Success for {}",
        selection.label()
    )
}
