use crate::model::responses::{DailyVisitTerms, VisitTerm};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One bookable appointment slot in caller-friendly form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentSlot {
    /// Visit hour as presented by the portal, e.g. `08:15`
    pub time: String,
    /// Name of the doctor taking the visit
    pub doctor_name: String,
    /// Name of the clinic hosting the visit
    pub clinic_name: String,
}

impl From<VisitTerm> for AppointmentSlot {
    fn from(term: VisitTerm) -> Self {
        AppointmentSlot {
            time: term.formatted_visit_hour,
            doctor_name: term.doctor.name,
            clinic_name: term.clinic.name,
        }
    }
}

/// All appointment slots available on one calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentDay {
    /// Calendar day the slots belong to
    pub date: NaiveDate,
    /// Slots in the order the portal returned them
    pub visits: Vec<AppointmentSlot>,
}

impl From<DailyVisitTerms> for AppointmentDay {
    fn from(day: DailyVisitTerms) -> Self {
        AppointmentDay {
            date: day.visit_date.start_date_time.date(),
            visits: day
                .available_visits_term_presentation
                .into_iter()
                .map(AppointmentSlot::from)
                .collect(),
        }
    }
}

impl fmt::Display for AppointmentDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        let mut table = Table::new();

        // Set table format
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        // Add header
        table.add_row(Row::new(vec![
            Cell::new("DATE"),
            Cell::new("TIME"),
            Cell::new("DOCTOR"),
            Cell::new("CLINIC"),
        ]));

        // Add rows in portal order
        let date = self.date.to_string();
        for slot in &self.visits {
            table.add_row(Row::new(vec![
                Cell::new(&date),
                Cell::new(&slot.time),
                Cell::new(&slot.doctor_name),
                Cell::new(&slot.clinic_name),
            ]));
        }

        write!(f, "{}", table)
    }
}
