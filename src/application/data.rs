//! Data service: Live statistics with synthetic fallback.
//!
//! Only COVID-19 has a live feed. Every other disease, and any failed live
//! fetch, gets a synthetic dataset of the same shape. Fetch failures are
//! logged and absorbed here; callers always receive something to render.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::adapters::SyntheticGenerator;
use crate::domain::{DataView, Disease, DiseaseDataset, FetchOutcome};
use crate::ports::StatsSource;

/// Service that resolves a (view, disease) pair to a dataset.
pub struct DataService<S>
where
    S: StatsSource,
{
    source: Arc<S>,
    synthetic: SyntheticGenerator,
    history_days: usize,
}

impl<S> DataService<S>
where
    S: StatsSource,
{
    /// Create a new data service.
    pub fn new(source: Arc<S>, synthetic: SyntheticGenerator, history_days: usize) -> Self {
        Self {
            source,
            synthetic,
            history_days,
        }
    }

    /// Fetch a dataset, reporting whether it is live or synthetic.
    #[must_use]
    pub fn fetch(&self, view: DataView, disease: Disease) -> FetchOutcome {
        self.fetch_on(view, disease, today())
    }

    /// Fetch a dataset for rendering.
    #[must_use]
    pub fn dataset(&self, view: DataView, disease: Disease) -> DiseaseDataset {
        self.fetch(view, disease).into_dataset()
    }

    fn fetch_on(&self, view: DataView, disease: Disease, today: NaiveDate) -> FetchOutcome {
        if !disease.is_live() {
            return FetchOutcome::Fallback(self.synthetic(view, today));
        }

        match self.fetch_live(view) {
            Ok(dataset) => {
                tracing::info!(
                    ?view,
                    %disease,
                    points = dataset.len(),
                    "Loaded live statistics"
                );
                FetchOutcome::Live(dataset)
            }
            Err(e) => {
                tracing::warn!(?view, %disease, "Live fetch failed, using simulated data: {}", e);
                FetchOutcome::Fallback(self.synthetic(view, today))
            }
        }
    }

    fn fetch_live(&self, view: DataView) -> crate::Result<DiseaseDataset> {
        let dataset = match view {
            DataView::Map => DiseaseDataset::Map(self.source.country_cases()?),
            DataView::Trend => {
                DiseaseDataset::Trend(self.source.historical_cases(self.history_days)?)
            }
        };
        Ok(dataset)
    }

    fn synthetic(&self, view: DataView, today: NaiveDate) -> DiseaseDataset {
        match view {
            DataView::Map => DiseaseDataset::Map(self.synthetic.map_points()),
            DataView::Trend => DiseaseDataset::Trend(self.synthetic.trend_points(today)),
        }
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
