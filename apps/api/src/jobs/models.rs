use serde::{Deserialize, Serialize};

pub const MISSING_TITLE: &str = "N/A";
pub const MISSING_COMPANY: &str = "Unknown";
pub const MISSING_CITY: &str = "Unknown City";
pub const MISSING_COUNTRY: &str = "Unknown Country";
pub const MISSING_LINK: &str = "#";

/// Display-ready job listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    /// "<city>, <country>"
    pub location: String,
    pub apply_link: String,
}

/// Search response body. A missing `data` array reads as no results.
#[derive(Debug, Default, Deserialize)]
pub struct JobSearchResponse {
    #[serde(default)]
    pub data: Vec<RawJob>,
}

/// One job object as returned by the search service. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct RawJob {
    pub job_title: Option<String>,
    pub employer_name: Option<String>,
    pub job_city: Option<String>,
    pub job_country: Option<String>,
    pub job_apply_link: Option<String>,
    pub job_google_link: Option<String>,
}

impl From<RawJob> for JobRecord {
    fn from(raw: RawJob) -> Self {
        let city = non_empty(raw.job_city).unwrap_or_else(|| MISSING_CITY.to_string());
        let country = non_empty(raw.job_country).unwrap_or_else(|| MISSING_COUNTRY.to_string());
        let apply_link = non_empty(raw.job_apply_link)
            .or_else(|| non_empty(raw.job_google_link))
            .unwrap_or_else(|| MISSING_LINK.to_string());

        JobRecord {
            title: raw.job_title.unwrap_or_else(|| MISSING_TITLE.to_string()),
            company: raw.employer_name.unwrap_or_else(|| MISSING_COMPANY.to_string()),
            location: format!("{city}, {country}"),
            apply_link,
        }
    }
}

/// Treats empty strings like absent values, matching how the service pads missing data.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
