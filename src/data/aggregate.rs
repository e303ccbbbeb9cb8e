use super::model::{LaunchTable, Outcome, SiteSelection};

// ---------------------------------------------------------------------------
// Chart data: labelled counts for the proportion chart
// ---------------------------------------------------------------------------

/// One wedge of the proportion chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    pub label: String,
    pub value: u64,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Ordered `(label, value)` pairs without duplicate labels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartData {
    pub slices: Vec<Slice>,
}

impl ChartData {
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[cfg(test)]
impl ChartData {
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.slices
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.value)
    }
}

// ---------------------------------------------------------------------------
// Outcome aggregation
// ---------------------------------------------------------------------------

/// Count launch outcomes for the proportion chart.
///
/// * [`SiteSelection::All`] → one slice per site (first-appearance order)
///   holding that site's number of successful launches, zero included.
/// * [`SiteSelection::Site`] → `Success` then `Failed` counts for that site.
/// * A site that is not in the table → empty.
pub fn aggregate(table: &LaunchTable, selection: &SiteSelection) -> ChartData {
    let slices = match selection {
        SiteSelection::All => table
            .sites()
            .iter()
            .map(|site| {
                let successes = table
                    .records()
                    .iter()
                    .filter(|r| r.site == *site && r.outcome.is_success())
                    .count();
                Slice::new(site.clone(), successes as u64)
            })
            .collect(),
        SiteSelection::Site(site) => {
            if !table.has_site(site) {
                return ChartData::default();
            }
            let (mut success, mut failed) = (0u64, 0u64);
            for rec in table.records().iter().filter(|r| r.site == *site) {
                match rec.outcome {
                    Outcome::Success => success += 1,
                    Outcome::Failed => failed += 1,
                }
            }
            vec![
                Slice::new(Outcome::Success.label(), success),
                Slice::new(Outcome::Failed.label(), failed),
            ]
        }
    };
    ChartData { slices }
}

/// Title shown above the proportion chart.
pub fn chart_title(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::All => "Total Successful Launches By Site".to_string(),
        SiteSelection::Site(site) => {
            format!("Total Success vs Failed Launches for site {site}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn scenario() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success, "FT"),
            LaunchRecord::new("A", 1500.0, Outcome::Failed, "v1.1"),
            LaunchRecord::new("B", 2000.0, Outcome::Success, "B4"),
        ])
    }

    fn mixed() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, Outcome::Failed, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", 500.0, Outcome::Failed, "v1.1"),
            LaunchRecord::new("CCAFS LC-40", 2500.0, Outcome::Success, "FT"),
            LaunchRecord::new("KSC LC-39A", 5300.0, Outcome::Success, "FT"),
            LaunchRecord::new("KSC LC-39A", 9600.0, Outcome::Success, "B5"),
            LaunchRecord::new("CCAFS LC-40", 3100.0, Outcome::Failed, "FT"),
        ])
    }

    #[test]
    fn all_sites_counts_successes_per_site() {
        let data = aggregate(&scenario(), &SiteSelection::All);
        assert_eq!(data.slices, vec![Slice::new("A", 1), Slice::new("B", 1)]);
    }

    #[test]
    fn single_site_splits_success_and_failed() {
        let data = aggregate(&scenario(), &SiteSelection::site("A"));
        assert_eq!(
            data.slices,
            vec![Slice::new("Success", 1), Slice::new("Failed", 1)]
        );
    }

    #[test]
    fn all_sites_has_one_entry_per_site_including_zero() {
        let table = mixed();
        let data = aggregate(&table, &SiteSelection::All);
        assert_eq!(data.len(), table.sites().len());
        assert_eq!(data.get("VAFB SLC-4E"), Some(0));

        let successes = table
            .records()
            .iter()
            .filter(|r| r.outcome.is_success())
            .count() as u64;
        assert_eq!(data.total(), successes);
    }

    #[test]
    fn site_entries_sum_to_site_launch_count() {
        let table = mixed();
        for site in table.sites() {
            let data = aggregate(&table, &SiteSelection::site(site.clone()));
            let launches = table.records().iter().filter(|r| r.site == *site).count();
            assert_eq!(data.len(), 2);
            assert_eq!(data.total(), launches as u64, "site {site}");
        }
    }

    #[test]
    fn unknown_site_is_empty() {
        let data = aggregate(&mixed(), &SiteSelection::site("Boca Chica"));
        assert!(data.is_empty());
    }

    #[test]
    fn empty_table_all_sites_is_empty() {
        let data = aggregate(&LaunchTable::default(), &SiteSelection::All);
        assert!(data.is_empty());
    }

    #[test]
    fn titles() {
        assert_eq!(
            chart_title(&SiteSelection::All),
            "Total Successful Launches By Site"
        );
        assert_eq!(
            chart_title(&SiteSelection::site("KSC LC-39A")),
            "Total Success vs Failed Launches for site KSC LC-39A"
        );
    }
}
