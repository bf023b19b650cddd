use crate::api::{ApiError, FlightQuery};
use chrono::NaiveDate;
use leptos::*;

#[derive(Clone, Copy)]
pub struct FlightFilterState {
    pub company: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
}

impl Default for FlightFilterState {
    fn default() -> Self {
        Self {
            company: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
        }
    }
}

impl FlightFilterState {
    pub fn reset(&self) {
        self.company.set(String::new());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
    }

    pub fn to_query(self) -> Result<FlightQuery, ApiError> {
        Ok(FlightQuery {
            company: optional_string(self.company.get()),
            start_date: parse_optional_date(&self.start_date.get(), "start date")?,
            end_date: parse_optional_date(&self.end_date.get(), "end date")?,
        })
    }
}

fn optional_string(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_optional_date(value: &str, field: &str) -> Result<Option<NaiveDate>, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ApiError::validation(format!("Enter the {} as YYYY-MM-DD.", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn empty_filter_builds_empty_query() {
        with_runtime(|| {
            let filter = FlightFilterState::default();
            let query = filter.to_query().unwrap();
            assert_eq!(query, FlightQuery::default());
        });
    }

    #[test]
    fn blank_company_is_dropped() {
        with_runtime(|| {
            let filter = FlightFilterState::default();
            filter.company.set("   ".into());
            assert!(filter.to_query().unwrap().company.is_none());
        });
    }

    #[test]
    fn malformed_dates_are_rejected_locally() {
        with_runtime(|| {
            let filter = FlightFilterState::default();
            filter.start_date.set("03/01/2025".into());
            assert!(filter.to_query().unwrap_err().is_validation());
        });
    }

    #[test]
    fn iso_dates_are_parsed() {
        with_runtime(|| {
            let filter = FlightFilterState::default();
            filter.company.set("KLM".into());
            filter.start_date.set("2025-03-01".into());
            let query = filter.to_query().unwrap();
            assert_eq!(query.company.as_deref(), Some("KLM"));
            assert_eq!(query.start_date, NaiveDate::from_ymd_opt(2025, 3, 1));
        });
    }
}
