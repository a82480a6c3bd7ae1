//! Operator roster and grouping.
//!
//! The roster is an injected, ordered list of display names per
//! deployment. Records whose key matches no roster name are dropped
//! without comment; operators with no appointments still get an (empty)
//! group so the export and review order is always the full roster.

use crate::parser::AppointmentRecord;

/// Ordered list of recognized operator names.
#[derive(Debug, Clone)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Roster {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Appointment records grouped per roster entry, in roster order.
#[derive(Debug)]
pub struct OperatorGroups {
    entries: Vec<(String, Vec<AppointmentRecord>)>,
}

impl OperatorGroups {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AppointmentRecord])> {
        self.entries
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    pub fn get(&self, name: &str) -> Option<&[AppointmentRecord]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, records)| records.as_slice())
    }

    pub fn total_records(&self) -> usize {
        self.entries.iter().map(|(_, records)| records.len()).sum()
    }
}

/// Place each record under the first roster name that case-insensitively
/// equals its operator key, then sort every group ascending by
/// `(date, raw time token)`. The sort is stable, and the time token is
/// compared as a string: "10:00" orders before "9:00" within a day, which
/// matches the source system's export order.
pub fn group_by_operator(records: Vec<AppointmentRecord>, roster: &Roster) -> OperatorGroups {
    let mut entries: Vec<(String, Vec<AppointmentRecord>)> = roster
        .names()
        .iter()
        .map(|name| (name.clone(), Vec::new()))
        .collect();

    for record in records {
        let matched = entries
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(&record.operator_key));
        if let Some((_, group)) = matched {
            group.push(record);
        }
    }

    for (_, group) in &mut entries {
        group.sort_by(|a, b| (a.date, a.time.as_str()).cmp(&(b.date, b.time.as_str())));
    }

    OperatorGroups { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(operator: &str, date: (i32, u32, u32), time: &str, guest: &str) -> AppointmentRecord {
        AppointmentRecord {
            operator: operator.to_string(),
            operator_key: operator
                .split_whitespace()
                .next()
                .unwrap_or("")
                .to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: time.to_string(),
            service: "Facial".to_string(),
            duration: "50".to_string(),
            guest: guest.to_string(),
        }
    }

    fn roster() -> Roster {
        Roster::new(["Amber", "Megan"])
    }

    #[test]
    fn matches_roster_case_insensitively() {
        let groups = group_by_operator(
            vec![record("amber Johnson", (2024, 1, 15), "9:00", "J. Lee")],
            &roster(),
        );
        assert_eq!(groups.get("Amber").unwrap().len(), 1);
    }

    #[test]
    fn drops_records_off_the_roster() {
        let groups = group_by_operator(
            vec![record("Zoe Park", (2024, 1, 15), "9:00", "J. Lee")],
            &roster(),
        );
        assert_eq!(groups.total_records(), 0);
    }

    #[test]
    fn absent_operators_keep_empty_groups_in_roster_order() {
        let groups = group_by_operator(
            vec![record("Megan Fields", (2024, 1, 15), "9:00", "J. Lee")],
            &roster(),
        );
        let names: Vec<&str> = groups.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Amber", "Megan"]);
        assert_eq!(groups.get("Amber").unwrap().len(), 0);
    }

    #[test]
    fn exact_key_match_only() {
        // prefix/substring matches must not count
        let groups = group_by_operator(
            vec![record("Amberly Ross", (2024, 1, 15), "9:00", "J. Lee")],
            &roster(),
        );
        assert_eq!(groups.total_records(), 0);
    }

    #[test]
    fn sorts_by_date_then_time() {
        let groups = group_by_operator(
            vec![
                record("Amber Johnson", (2024, 1, 16), "8:00", "B"),
                record("Amber Johnson", (2024, 1, 15), "9:00", "A"),
            ],
            &roster(),
        );
        let times: Vec<&str> = groups.get("Amber").unwrap().iter().map(|r| r.time.as_str()).collect();
        assert_eq!(times, ["9:00", "8:00"]);
    }

    #[test]
    fn sorts_time_tokens_lexicographically() {
        // raw time tokens compare as strings: "10:00" before "9:00"
        let groups = group_by_operator(
            vec![
                record("Amber Johnson", (2024, 1, 15), "9:00", "A"),
                record("Amber Johnson", (2024, 1, 15), "10:00", "B"),
            ],
            &roster(),
        );
        let times: Vec<&str> = groups.get("Amber").unwrap().iter().map(|r| r.time.as_str()).collect();
        assert_eq!(times, ["10:00", "9:00"]);
    }

    #[test]
    fn equal_sort_keys_keep_input_order() {
        let groups = group_by_operator(
            vec![
                record("Amber Johnson", (2024, 1, 15), "9:00", "first"),
                record("Amber Johnson", (2024, 1, 15), "9:00", "second"),
            ],
            &roster(),
        );
        let guests: Vec<&str> = groups.get("Amber").unwrap().iter().map(|r| r.guest.as_str()).collect();
        assert_eq!(guests, ["first", "second"]);
    }
}
