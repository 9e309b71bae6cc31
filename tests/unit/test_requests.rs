use chrono::NaiveDate;
use luxmed_client::config::Credentials;
use luxmed_client::model::requests::{AccessTokenRequest, FilterParams, VisitSearchRequest};

fn json_value<T: serde::Serialize>(v: &T) -> serde_json::Value {
    serde_json::to_value(v).unwrap()
}

fn credentials() -> Credentials {
    Credentials {
        username: "jan.kowalski".to_string(),
        password: "secret".to_string(),
        language: "pl".to_string(),
    }
}

#[test]
fn access_token_request_carries_credentials_and_grant() {
    let req = AccessTokenRequest::new(&credentials());

    assert_eq!(req.username, "jan.kowalski");
    assert_eq!(req.password, "secret");
    assert_eq!(req.grant_type, "password");
    assert_eq!(req.account_id.len(), 35);
    assert_eq!(req.client_id.len(), 36);
}

#[test]
fn access_token_request_generates_fresh_ids() {
    let creds = credentials();
    let first = AccessTokenRequest::new(&creds);
    let second = AccessTokenRequest::new(&creds);

    assert_ne!(first.account_id, second.account_id);
    assert_ne!(first.client_id, second.client_id);
}

#[test]
fn filter_params_serde_field_names() {
    let params = FilterParams::for_city(7);
    let json = json_value(&params);

    assert_eq!(json.get("filter.cityId").unwrap(), 7);
    assert!(json.get("filter.serviceId").is_none());
    assert!(json.get("filter.clinicId").is_none());
}

#[test]
fn filter_params_default_serializes_to_nothing() {
    let json = json_value(&FilterParams::default());
    assert_eq!(json, serde_json::json!({}));
}

#[test]
fn visit_search_request_builders() {
    let req = VisitSearchRequest::new(
        1,
        4480,
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
    )
    .with_clinic(10)
    .with_doctor(99);

    assert_eq!(req.city_id, 1);
    assert_eq!(req.service_id, 4480);
    assert_eq!(req.clinic_id, Some(10));
    assert_eq!(req.doctor_id, Some(99));
}

#[test]
fn visit_search_request_serde_field_names_and_dates() {
    let req = VisitSearchRequest::new(
        1,
        4480,
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
    );
    let json = json_value(&req);

    assert_eq!(json.get("filter.cityId").unwrap(), 1);
    assert_eq!(json.get("filter.serviceId").unwrap(), 4480);
    assert_eq!(json.get("filter.fromDate").unwrap(), "2024-03-01");
    assert_eq!(json.get("filter.toDate").unwrap(), "2024-03-02");

    // Unset optional filters stay off the wire entirely
    assert!(json.get("filter.clinicId").is_none());
    assert!(json.get("filter.doctorId").is_none());
}

#[test]
fn visit_search_request_serializes_doctor_filter_when_set() {
    let req = VisitSearchRequest::new(
        3,
        7409,
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
    )
    .with_doctor(4242);
    let json = json_value(&req);

    assert_eq!(json.get("filter.doctorId").unwrap(), 4242);
    assert!(json.get("filter.clinicId").is_none());
}
