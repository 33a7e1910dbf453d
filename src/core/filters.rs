//! Record predicates for `tracker::compute_duration` and the history views.

use crate::models::{punch::PunchRecord, punch_type::PunchType};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Punches whose local calendar day is `date`.
pub fn on_day(date: NaiveDate) -> impl Fn(&PunchRecord) -> bool {
    move |p| p.date() == date
}

/// Punches whose local day falls in `from..=to`.
pub fn between(from: NaiveDate, to: NaiveDate) -> impl Fn(&PunchRecord) -> bool {
    move |p| {
        let d = p.date();
        d >= from && d <= to
    }
}

/// Punches tagged with `project_id`.
///
/// OUT punches carry the project of the session they close, so both ends
/// of a pair pass this filter.
pub fn for_project(project_id: &str) -> impl Fn(&PunchRecord) -> bool {
    let wanted = project_id.to_string();
    move |p| p.project_id.as_deref() == Some(wanted.as_str())
}

pub fn for_user(user_id: &str) -> impl Fn(&PunchRecord) -> bool {
    let wanted = user_id.to_string();
    move |p| p.user_id == wanted
}

pub fn of_kind(kind: PunchType) -> impl Fn(&PunchRecord) -> bool {
    move |p| p.kind == kind
}

/// Both predicates must hold.
pub fn and<A, B>(a: A, b: B) -> impl Fn(&PunchRecord) -> bool
where
    A: Fn(&PunchRecord) -> bool,
    B: Fn(&PunchRecord) -> bool,
{
    move |p| a(p) && b(p)
}

/// Group punches by local day; each day's punches in time order.
pub fn group_by_day(records: &[PunchRecord]) -> BTreeMap<NaiveDate, Vec<PunchRecord>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<PunchRecord>> = BTreeMap::new();
    for p in records {
        grouped.entry(p.date()).or_default().push(p.clone());
    }
    for day in grouped.values_mut() {
        day.sort_by_key(|p| p.timestamp);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::geo_point::GeoPoint;
    use chrono::{Local, TimeZone};

    fn punch(day: u32, kind: PunchType, project: Option<&str>) -> PunchRecord {
        PunchRecord {
            id: day as i64,
            user_id: "u1".into(),
            kind,
            timestamp: Local.with_ymd_and_hms(2025, 6, day, 9, 0, 0).unwrap(),
            location: GeoPoint::new(0.0, 0.0),
            project_id: project.map(String::from),
            task_id: None,
        }
    }

    #[test]
    fn combined_filters() {
        let records = vec![
            punch(2, PunchType::In, Some("A")),
            punch(3, PunchType::In, Some("B")),
            punch(3, PunchType::Out, Some("A")),
        ];
        let d3 = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();

        let f = and(on_day(d3), for_project("A"));
        let hits: Vec<_> = records.iter().filter(|p| f(*p)).collect();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].kind.is_out());

        let ins = records.iter().filter(|p| of_kind(PunchType::In)(*p)).count();
        assert_eq!(ins, 2);

        assert_eq!(records.iter().filter(|p| for_user("u1")(*p)).count(), 3);
        assert_eq!(records.iter().filter(|p| for_user("u2")(*p)).count(), 0);
    }

    #[test]
    fn grouping_by_day() {
        let records = vec![
            punch(3, PunchType::In, None),
            punch(2, PunchType::In, None),
            punch(3, PunchType::Out, None),
        ];
        let grouped = group_by_day(&records);
        assert_eq!(grouped.len(), 2);
        let from = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(records.iter().filter(|p| between(from, to)(*p)).count(), 1);
    }
}
