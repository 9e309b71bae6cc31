use assert_json_diff::assert_json_eq;
use chrono::NaiveDate;
use luxmed_client::model::responses::{
    ClinicDetails, DailyVisitTerms, DoctorDetails, VisitDate, VisitTerm,
};
use luxmed_client::presentation::visits::{AppointmentDay, AppointmentSlot};
use serde_json::json;

fn term(hour: &str, doctor: &str, clinic: &str) -> VisitTerm {
    VisitTerm {
        formatted_visit_hour: hour.to_string(),
        doctor: DoctorDetails {
            name: doctor.to_string(),
        },
        clinic: ClinicDetails {
            name: clinic.to_string(),
        },
    }
}

fn day(start: &str, terms: Vec<VisitTerm>) -> DailyVisitTerms {
    DailyVisitTerms {
        visit_date: VisitDate {
            start_date_time: start.parse().unwrap(),
        },
        available_visits_term_presentation: terms,
    }
}

#[test]
fn day_conversion_takes_the_date_portion() {
    let day = AppointmentDay::from(day("2024-03-01T08:15:00", vec![]));

    assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert!(day.visits.is_empty());
}

#[test]
fn day_conversion_maps_slot_fields() {
    let day = AppointmentDay::from(day(
        "2024-03-01T08:15:00",
        vec![term("08:15", "dr Jan Nowak", "LX Centrum")],
    ));

    assert_eq!(
        day.visits,
        vec![AppointmentSlot {
            time: "08:15".to_string(),
            doctor_name: "dr Jan Nowak".to_string(),
            clinic_name: "LX Centrum".to_string(),
        }]
    );
}

#[test]
fn day_conversion_preserves_slot_order() {
    let day = AppointmentDay::from(day(
        "2024-03-01T08:15:00",
        vec![
            term("16:40", "dr C", "LX South"),
            term("08:15", "dr A", "LX North"),
            term("11:00", "dr B", "LX East"),
        ],
    ));

    let times: Vec<&str> = day.visits.iter().map(|v| v.time.as_str()).collect();
    assert_eq!(times, vec!["16:40", "08:15", "11:00"]);
}

#[test]
fn appointment_day_serializes_to_the_documented_shape() {
    let day = AppointmentDay::from(day(
        "2024-03-01T08:15:00",
        vec![term("08:15", "dr Jan Nowak", "LX Centrum")],
    ));

    assert_json_eq!(
        serde_json::to_value(&day).unwrap(),
        json!({
            "date": "2024-03-01",
            "visits": [
                {
                    "time": "08:15",
                    "doctor_name": "dr Jan Nowak",
                    "clinic_name": "LX Centrum"
                }
            ]
        })
    );
}

#[test]
fn appointment_day_display_renders_a_table() {
    let day = AppointmentDay::from(day(
        "2024-03-01T08:15:00",
        vec![term("08:15", "dr Jan Nowak", "LX Centrum")],
    ));

    let output = day.to_string();
    assert!(output.contains("DATE"));
    assert!(output.contains("TIME"));
    assert!(output.contains("DOCTOR"));
    assert!(output.contains("CLINIC"));
    assert!(output.contains("2024-03-01"));
    assert!(output.contains("dr Jan Nowak"));
    assert!(output.contains("LX Centrum"));
}
