use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scale;
use crate::types::{Agency, ChangeType, Outlook, Sector};

/// One synthetic rating action. Field names serialize to the dashboard's
/// column vocabulary (Date, Company, ..., Rating_Change_Notches), which is
/// also the CSV export header, so the record is its own wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingChangeEvent {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Agency")]
    pub agency: Agency,
    #[serde(rename = "Old_Rating")]
    pub old_rating: String,
    #[serde(rename = "New_Rating")]
    pub new_rating: String,
    #[serde(rename = "Change_Type")]
    pub change_type: ChangeType,
    #[serde(rename = "Outlook")]
    pub outlook: Outlook,
    #[serde(rename = "Sector")]
    pub sector: Sector,
    /// index(new_rating) − index(old_rating) on the agency's scale.
    #[serde(rename = "Rating_Change_Notches")]
    pub notch_delta: i32,
}

impl RatingChangeEvent {
    /// True when the action moves the company across the investment-grade
    /// boundary (BBB- tier) in either direction. Returns false for labels
    /// that are not on the agency's scale; generated events never hit that
    /// case.
    pub fn crosses_investment_grade(&self) -> bool {
        match (
            self.agency.rating_index(&self.old_rating),
            self.agency.rating_index(&self.new_rating),
        ) {
            (Some(old), Some(new)) => {
                scale::is_investment_grade(old) != scale::is_investment_grade(new)
            }
            _ => false,
        }
    }
}
