use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Outcome – the 0/1 `class` column
// ---------------------------------------------------------------------------

/// Landing outcome of a single launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Failed,
    Success,
}

impl Outcome {
    /// Interpret the numeric `class` column. Only 0 and 1 are valid.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failed),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// Numeric class as stored in the dataset (y axis of the scatter chart).
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failed => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failed => "Failed",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single historical launch.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

#[cfg(test)]
impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            payload_mass_kg,
            outcome,
            booster_category: booster_category.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full launch table with indices computed once at construction.
///
/// Nothing mutates a table after it is built; the dashboard swaps in a new
/// one when the user opens another file.
#[derive(Debug, Clone, Default)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    /// Distinct sites in order of first appearance.
    sites: Vec<String>,
    /// Sorted distinct booster version categories.
    booster_categories: BTreeSet<String>,
    /// Observed `[min, max]` payload mass, `None` for an empty table.
    payload_bounds: Option<PayloadRange>,
}

impl LaunchTable {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories = BTreeSet::new();
        let mut bounds: Option<(f64, f64)> = None;

        for rec in &records {
            if !sites.iter().any(|s| *s == rec.site) {
                sites.push(rec.site.clone());
            }
            booster_categories.insert(rec.booster_category.clone());

            let m = rec.payload_mass_kg;
            bounds = Some(match bounds {
                None => (m, m),
                Some((lo, hi)) => (lo.min(m), hi.max(m)),
            });
        }

        LaunchTable {
            records,
            sites,
            booster_categories,
            payload_bounds: bounds.map(|(lo, hi)| PayloadRange::new(lo, hi)),
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    pub fn booster_categories(&self) -> &BTreeSet<String> {
        &self.booster_categories
    }

    pub fn payload_bounds(&self) -> Option<PayloadRange> {
        self.payload_bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SiteSelection – dropdown value
// ---------------------------------------------------------------------------

/// Either every site, or one named launch site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Dropdown value used for the "all sites" entry.
    pub const ALL_VALUE: &'static str = "ALL";

    pub fn site(name: impl Into<String>) -> Self {
        SiteSelection::Site(name.into())
    }

    /// Whether a record at `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == site,
        }
    }

    /// Human readable label for titles and the dropdown.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(name) => name,
        }
    }
}

impl FromStr for SiteSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == Self::ALL_VALUE {
            SiteSelection::All
        } else {
            SiteSelection::Site(s.to_string())
        })
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// PayloadRange – slider value
// ---------------------------------------------------------------------------

/// Closed payload mass interval in kilograms.
///
/// `low > high` is allowed and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, mass_kg: f64) -> bool {
        self.low <= mass_kg && mass_kg <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} kg, {} kg]", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_indexes_sites_in_first_appearance_order() {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("B", 10.0, Outcome::Success, "FT"),
            LaunchRecord::new("A", 5.0, Outcome::Failed, "v1.0"),
            LaunchRecord::new("B", 700.0, Outcome::Failed, "FT"),
        ]);
        assert_eq!(table.sites(), ["B".to_string(), "A".to_string()]);
        assert_eq!(table.payload_bounds(), Some(PayloadRange::new(5.0, 700.0)));
        assert_eq!(table.booster_categories().len(), 2);
        assert!(table.has_site("A"));
        assert!(!table.has_site("C"));
    }

    #[test]
    fn empty_table_has_no_bounds() {
        let table = LaunchTable::from_records(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.payload_bounds(), None);
    }

    #[test]
    fn site_selection_parses_sentinel() {
        assert_eq!("ALL".parse::<SiteSelection>(), Ok(SiteSelection::All));
        assert_eq!(
            "KSC LC-39A".parse::<SiteSelection>(),
            Ok(SiteSelection::site("KSC LC-39A"))
        );
        assert_eq!(SiteSelection::All.to_string(), "All Sites");
    }

    #[test]
    fn payload_range_is_inclusive() {
        let r = PayloadRange::new(1000.0, 2000.0);
        assert!(r.contains(1000.0));
        assert!(r.contains(2000.0));
        assert!(!r.contains(2000.5));
        assert!(!PayloadRange::new(5.0, 1.0).contains(3.0));
    }

    #[test]
    fn outcome_class_mapping() {
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failed));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.class(), 1);
    }
}
