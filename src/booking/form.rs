use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The fixed service catalog a consultation can be booked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "App Development")]
    AppDevelopment,
    #[serde(rename = "SaaS Solutions")]
    SaasSolutions,
    #[serde(rename = "API Integration")]
    ApiIntegration,
    #[serde(rename = "Cloud Connectivity")]
    CloudConnectivity,
    #[serde(rename = "Data Analysis")]
    DataAnalysis,
}

impl ServiceKind {
    pub fn all() -> &'static [ServiceKind] {
        &[
            ServiceKind::WebDevelopment,
            ServiceKind::AppDevelopment,
            ServiceKind::SaasSolutions,
            ServiceKind::ApiIntegration,
            ServiceKind::CloudConnectivity,
            ServiceKind::DataAnalysis,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            ServiceKind::WebDevelopment => "Web Development",
            ServiceKind::AppDevelopment => "App Development",
            ServiceKind::SaasSolutions => "SaaS Solutions",
            ServiceKind::ApiIntegration => "API Integration",
            ServiceKind::CloudConnectivity => "Cloud Connectivity",
            ServiceKind::DataAnalysis => "Data Analysis",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for ServiceKind {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::all()
            .iter()
            .copied()
            .find(|kind| kind.title() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// One of the six consultation slots offered each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSlot {
    NineAm,
    TenAm,
    ElevenAm,
    TwoPm,
    ThreePm,
    FourPm,
}

impl TimeSlot {
    pub fn all() -> &'static [TimeSlot] {
        &[
            TimeSlot::NineAm,
            TimeSlot::TenAm,
            TimeSlot::ElevenAm,
            TimeSlot::TwoPm,
            TimeSlot::ThreePm,
            TimeSlot::FourPm,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::NineAm => "9:00 AM - 10:00 AM",
            TimeSlot::TenAm => "10:00 AM - 11:00 AM",
            TimeSlot::ElevenAm => "11:00 AM - 12:00 PM",
            TimeSlot::TwoPm => "2:00 PM - 3:00 PM",
            TimeSlot::ThreePm => "3:00 PM - 4:00 PM",
            TimeSlot::FourPm => "4:00 PM - 5:00 PM",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::all()
            .iter()
            .copied()
            .find(|slot| slot.label() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown option: {0}")]
pub struct UnknownOption(pub String);

/// Parses the value of an `<input type="date">`. An empty or malformed value
/// clears the date.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Everything the visitor enters across the three wizard steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: Option<TimeSlot>,
    pub selected_services: BTreeSet<ServiceKind>,
    pub message: String,
}

impl BookingForm {
    pub fn has_contact(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    pub fn has_schedule(&self) -> bool {
        self.preferred_date.is_some() && self.preferred_time.is_some()
    }

    pub fn has_services(&self) -> bool {
        !self.selected_services.is_empty()
    }

    pub fn is_selected(&self, service: ServiceKind) -> bool {
        self.selected_services.contains(&service)
    }

    /// Adds the service if absent, removes it otherwise.
    pub fn toggle_service(&mut self, service: ServiceKind) {
        if !self.selected_services.remove(&service) {
            self.selected_services.insert(service);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_slot_labels_round_trip_through_from_str() {
        let slot: TimeSlot = "9:00 AM - 10:00 AM".parse().unwrap();
        assert_eq!(slot, TimeSlot::NineAm);
        assert_eq!(TimeSlot::all().len(), 6);
        assert!("noon".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn service_kind_parses_catalog_titles() {
        assert_eq!(
            "SaaS Solutions".parse::<ServiceKind>().unwrap(),
            ServiceKind::SaasSolutions
        );
        assert_eq!(
            "Blockchain".parse::<ServiceKind>(),
            Err(UnknownOption("Blockchain".to_string()))
        );
    }

    #[test]
    fn service_kind_deserializes_from_title() {
        let kind: ServiceKind = serde_json::from_str("\"Cloud Connectivity\"").unwrap();
        assert_eq!(kind, ServiceKind::CloudConnectivity);
    }

    #[test]
    fn date_input_parsing() {
        assert_eq!(
            parse_date_input("2025-01-10"),
            NaiveDate::from_ymd_opt(2025, 1, 10)
        );
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("10/01/2025"), None);
    }

    #[test]
    fn whitespace_only_contact_is_incomplete() {
        let form = BookingForm {
            name: "   ".to_string(),
            email: "alice@x.com".to_string(),
            ..Default::default()
        };
        assert!(!form.has_contact());
    }

    #[test]
    fn toggling_a_service_twice_deselects_it() {
        let mut form = BookingForm::default();
        form.toggle_service(ServiceKind::DataAnalysis);
        assert!(form.is_selected(ServiceKind::DataAnalysis));
        form.toggle_service(ServiceKind::DataAnalysis);
        assert!(!form.has_services());
    }
}
