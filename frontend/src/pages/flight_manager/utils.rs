use crate::api::{ApiError, FlightRequest, FlightResponse};
use chrono::NaiveDate;
use leptos::*;

#[derive(Clone, Copy)]
pub struct FlightFormState {
    pub editing_id: RwSignal<Option<i64>>,
    pub flight_number: RwSignal<String>,
    pub company: RwSignal<String>,
    pub date: RwSignal<String>,
}

impl Default for FlightFormState {
    fn default() -> Self {
        Self {
            editing_id: create_rw_signal(None),
            flight_number: create_rw_signal(String::new()),
            company: create_rw_signal(String::new()),
            date: create_rw_signal(String::new()),
        }
    }
}

impl FlightFormState {
    pub fn reset(&self) {
        self.editing_id.set(None);
        self.flight_number.set(String::new());
        self.company.set(String::new());
        self.date.set(String::new());
    }

    pub fn load_from(&self, flight: &FlightResponse) {
        self.editing_id.set(Some(flight.id));
        self.flight_number.set(flight.flight_number.clone());
        self.company.set(flight.company.clone());
        self.date.set(flight.date.format("%Y-%m-%d").to_string());
    }

    pub fn to_payload(self) -> Result<FlightRequest, ApiError> {
        let flight_number = self.flight_number.get().trim().to_string();
        if flight_number.is_empty() {
            return Err(ApiError::validation("Enter a flight number."));
        }
        let company = self.company.get().trim().to_string();
        if company.is_empty() {
            return Err(ApiError::validation("Enter an airline name."));
        }
        let date = NaiveDate::parse_from_str(self.date.get().trim(), "%Y-%m-%d")
            .map_err(|_| ApiError::validation("Enter the flight date as YYYY-MM-DD."))?;
        Ok(FlightRequest {
            flight_number,
            company,
            date,
        })
    }
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

    fn filled_form() -> FlightFormState {
        let form = FlightFormState::default();
        form.flight_number.set("AF123".into());
        form.company.set("Air France".into());
        form.date.set("2025-03-01".into());
        form
    }

    #[test]
    fn builds_payload_from_complete_form() {
        with_runtime(|| {
            let payload = filled_form().to_payload().unwrap();
            assert_eq!(payload.flight_number, "AF123");
            assert_eq!(payload.date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        });
    }

    #[test]
    fn rejects_blank_fields_and_bad_dates() {
        with_runtime(|| {
            let form = filled_form();
            form.company.set("  ".into());
            assert!(form.to_payload().unwrap_err().is_validation());

            let form = filled_form();
            form.date.set("01/03/2025".into());
            assert!(form.to_payload().unwrap_err().is_validation());
        });
    }

    #[test]
    fn load_from_fills_the_form_for_editing() {
        with_runtime(|| {
            let form = FlightFormState::default();
            form.load_from(&FlightResponse {
                id: 9,
                flight_number: "KL456".into(),
                company: "KLM".into(),
                date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
            });
            assert_eq!(form.editing_id.get(), Some(9));
            assert_eq!(form.date.get(), "2025-04-02");

            form.reset();
            assert!(form.editing_id.get().is_none());
            assert!(form.flight_number.get().is_empty());
        });
    }
}
