//! Shared data and filter flags.

use anyhow::Context;
use clap::Args;
use sdb_core::record::load_records;
use sdb_engine::filter::{FilterState, ALL_LABEL};
use sdb_engine::selection::{ChartClick, Selection};
use sdb_engine::view::{build_view, DashboardView};
use std::fs;

#[derive(Args, Debug, Clone)]
pub struct Scope {
    /// Path to the sales records CSV
    #[arg(short = 'd', long, default_value = "fixtures/sales.csv")]
    pub data: String,

    /// Category dropdown value ("all" or a category name)
    #[arg(long, default_value = ALL_LABEL)]
    pub category: String,

    /// Region dropdown value ("all" or a region name)
    #[arg(long, default_value = ALL_LABEL)]
    pub region: String,

    /// Time period dropdown value: all, 2024, 2023, Q1..Q4
    #[arg(short = 'p', long, default_value = ALL_LABEL)]
    pub period: String,

    /// Cross-filter as if this category had been clicked
    #[arg(long)]
    pub select_category: Option<String>,

    /// Cross-filter as if this region (or a state in it) had been clicked
    #[arg(long)]
    pub select_region: Option<String>,
}

impl Scope {
    pub fn filters(&self) -> FilterState {
        FilterState::from_labels(&self.category, &self.region, &self.period)
    }

    /// The selection the flagged clicks would produce, starting from none.
    pub fn selection(&self) -> Selection {
        let click = ChartClick {
            category: self.select_category.clone(),
            region: self
                .select_region
                .as_deref()
                .map(|label| sdb_core::region::region_label_for(label).to_string()),
        };
        let mut selection = Selection::default();
        selection.apply_click(&click);
        selection
    }

    /// Load the table from `--data` and build the dashboard view.
    pub fn build_view(&self) -> anyhow::Result<DashboardView> {
        let csv_data = fs::read_to_string(&self.data)
            .with_context(|| format!("Failed to read sales data from {}", self.data))?;
        let records = load_records(&csv_data)?;
        log::info!(
            "[SDB] cmd: filters {:?}, selection {:?}",
            self.filters(),
            self.selection()
        );
        Ok(build_view(&records, &self.filters(), &self.selection()))
    }
}
