//! Disease selectors and dataset shapes.

use chrono::NaiveDate;

/// Disease selectable on the Dashboard and Trends pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Disease {
    #[default]
    Covid19,
    Flu,
    Monkeypox,
    Dengue,
}

impl Disease {
    /// Selector order.
    pub const ALL: [Disease; 4] = [
        Disease::Covid19,
        Disease::Flu,
        Disease::Monkeypox,
        Disease::Dengue,
    ];

    /// Short name, e.g. for chart titles.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Covid19 => "COVID-19",
            Self::Flu => "Flu",
            Self::Monkeypox => "Monkeypox",
            Self::Dengue => "Dengue",
        }
    }

    /// Label used by the map selector, which marks placeholder feeds.
    #[must_use]
    pub fn map_label(&self) -> &'static str {
        match self {
            Self::Covid19 => "COVID-19",
            Self::Flu => "Flu (Simulated)",
            Self::Monkeypox => "Monkeypox (Simulated)",
            Self::Dengue => "Dengue Fever (Simulated)",
        }
    }

    /// Whether a live statistics feed exists for this disease.
    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Covid19)
    }

    /// Next selector entry, wrapping around.
    #[must_use]
    pub fn next(&self) -> Disease {
        let i = Self::ALL.iter().position(|d| d == self).unwrap_or_default();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous selector entry, wrapping around.
    #[must_use]
    pub fn prev(&self) -> Disease {
        let len = Self::ALL.len();
        let i = Self::ALL.iter().position(|d| d == self).unwrap_or_default();
        Self::ALL[(i + len - 1) % len]
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which dataset shape a view needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataView {
    /// Per-country case counts with coordinates
    Map,
    /// Daily case counts
    Trend,
}

/// One country on the case map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub country: String,
    pub cases: u64,
    pub lat: f64,
    pub long: f64,
}

/// One day of a case time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub cases: u64,
}

/// A dataset ready for rendering. Built fresh per fetch and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum DiseaseDataset {
    Map(Vec<MapPoint>),
    Trend(Vec<TrendPoint>),
}

impl DiseaseDataset {
    /// Shape of this dataset.
    #[must_use]
    pub fn view(&self) -> DataView {
        match self {
            Self::Map(_) => DataView::Map,
            Self::Trend(_) => DataView::Trend,
        }
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Map(points) => points.len(),
            Self::Trend(points) => points.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest case count in the dataset.
    #[must_use]
    pub fn max_cases(&self) -> u64 {
        match self {
            Self::Map(points) => points.iter().map(|p| p.cases).max().unwrap_or(0),
            Self::Trend(points) => points.iter().map(|p| p.cases).max().unwrap_or(0),
        }
    }
}

/// Where a dataset came from.
///
/// Only used for logging and tests; the views render both the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Parsed from the statistics API
    Live(DiseaseDataset),
    /// Synthesized because no live feed exists or the fetch failed
    Fallback(DiseaseDataset),
}

impl FetchOutcome {
    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    #[must_use]
    pub fn into_dataset(self) -> DiseaseDataset {
        match self {
            Self::Live(d) | Self::Fallback(d) => d,
        }
    }
}
