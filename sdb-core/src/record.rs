//! The sales fact row and the CSV table loader.
//!
//! # CSV Format
//!
//! Header row required; `state` and `store_count` may be empty or absent:
//!
//! ```text
//! id,date,month,quarter,year,category,region,sales,revenue,previous_year_sales,previous_year_revenue,units,customers,state,store_count
//! 2024-1-Electronics-Europe,2024-01-01,Jan,Q1,2024,Electronics,Europe,61234,58210,52011,50100,512,301,Ohio,7
//! ```

use crate::{Category, Quarter, Region};
use anyhow::{bail, Context};
use chrono::{Datelike, NaiveDate};
use sdb_utils::dates::month_abbrev;
use serde::{Deserialize, Serialize};

/// One immutable fact row keyed by (year, month, category, region).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub id: String,
    /// First day of the record's month.
    pub date: NaiveDate,
    /// Short month name ("Jan".."Dec").
    pub month: String,
    pub quarter: Quarter,
    pub year: i32,
    pub category: Category,
    pub region: Region,
    pub sales: f64,
    pub revenue: f64,
    /// Comparison measure, zero for rows without a prior-year counterpart.
    pub previous_year_sales: f64,
    /// Comparison measure, zero for rows without a prior-year counterpart.
    pub previous_year_revenue: f64,
    pub units: f64,
    pub customers: f64,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub state: Option<String>,
    #[serde(default)]
    pub store_count: Option<u32>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

impl SalesRecord {
    /// Calendar month number (1-12) taken from `date`.
    pub fn month_number(&self) -> u32 {
        self.date.month()
    }

    fn validate(&self) -> anyhow::Result<()> {
        let measures = [
            ("sales", self.sales),
            ("revenue", self.revenue),
            ("previous_year_sales", self.previous_year_sales),
            ("previous_year_revenue", self.previous_year_revenue),
            ("units", self.units),
            ("customers", self.customers),
        ];
        for (name, value) in measures {
            if !value.is_finite() || value < 0.0 {
                bail!("record {}: {} must be a non-negative number, got {}", self.id, name, value);
            }
        }
        if self.year != self.date.year() {
            bail!("record {}: year {} does not match date {}", self.id, self.year, self.date);
        }
        if month_abbrev(self.date.month()) != Some(self.month.as_str()) {
            bail!("record {}: month {:?} does not match date {}", self.id, self.month, self.date);
        }
        if Quarter::from_month(self.date.month()) != Some(self.quarter) {
            bail!(
                "record {}: quarter {} does not contain date {}",
                self.id,
                self.quarter,
                self.date
            );
        }
        Ok(())
    }
}

/// Parse the record table from CSV text.
///
/// Row order is preserved. Unknown category/region/quarter labels or
/// negative measures are an error.
///
/// # Example
///
/// ```rust
/// let csv = "id,date,month,quarter,year,category,region,sales,revenue,previous_year_sales,previous_year_revenue,units,customers,state,store_count\n\
///            a,2024-02-01,Feb,Q1,2024,Books,Africa,10,12,0,0,1,1,,\n";
/// let records = sdb_core::record::load_records(csv).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].state, None);
/// ```
pub fn load_records(csv_data: &str) -> anyhow::Result<Vec<SalesRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut records = Vec::new();
    for (line, result) in rdr.deserialize::<SalesRecord>().enumerate() {
        let record = result.with_context(|| format!("Failed to parse sales row {}", line + 1))?;
        record.validate()?;
        records.push(record);
    }
    log::info!("[SDB] loader: Loaded {} sales records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,date,month,quarter,year,category,region,sales,revenue,previous_year_sales,previous_year_revenue,units,customers,state,store_count\n";

    #[test]
    fn loads_rows_in_order() {
        let csv = format!(
            "{}{}{}",
            HEADER,
            "2023-12-Sports-Europe,2023-12-01,Dec,Q4,2023,Sports,Europe,900,1000,0,0,10,6,Ohio,4\n",
            "2024-1-Home & Garden-Asia Pacific,2024-01-01,Jan,Q1,2024,Home & Garden,Asia Pacific,1100,1200,880,990,12,8,Georgia,9\n",
        );
        let records = load_records(&csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, Category::Sports);
        assert_eq!(records[0].quarter, Quarter::Q4);
        assert_eq!(records[0].state.as_deref(), Some("Ohio"));
        assert_eq!(records[1].region, Region::AsiaPacific);
        assert_eq!(records[1].category, Category::HomeAndGarden);
        assert_eq!(records[1].month_number(), 1);
        assert_eq!(records[1].store_count, Some(9));
    }

    #[test]
    fn empty_table_is_valid() {
        let records = load_records(HEADER).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let csv = format!(
            "{}a,2024-01-01,Jan,Q1,2024,Toys,Europe,1,1,0,0,1,1,,\n",
            HEADER
        );
        assert!(load_records(&csv).is_err());
    }

    #[test]
    fn negative_measure_is_rejected() {
        let csv = format!(
            "{}a,2024-01-01,Jan,Q1,2024,Books,Europe,-1,1,0,0,1,1,,\n",
            HEADER
        );
        let err = load_records(&csv).unwrap_err();
        assert!(err.to_string().contains("sales"), "got: {}", err);
    }

    #[test]
    fn quarter_must_match_date() {
        let csv = format!(
            "{}a,2024-05-01,May,Q1,2024,Books,Europe,1,1,0,0,1,1,,\n",
            HEADER
        );
        assert!(load_records(&csv).is_err());
    }

    #[test]
    fn year_and_month_must_match_date() {
        let wrong_year = format!(
            "{}a,2023-05-01,May,Q2,2024,Books,Europe,1,1,0,0,1,1,,\n",
            HEADER
        );
        let err = load_records(&wrong_year).unwrap_err();
        assert!(format!("{:#}", err).contains("year 2024"), "{:#}", err);

        let wrong_month = format!(
            "{}a,2023-05-01,Dec,Q2,2023,Books,Europe,1,1,0,0,1,1,,\n",
            HEADER
        );
        let err = load_records(&wrong_month).unwrap_err();
        assert!(format!("{:#}", err).contains("\"Dec\""), "{:#}", err);
    }
}
