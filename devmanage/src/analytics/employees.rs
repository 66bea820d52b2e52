//! Employee statistics, attendance and workload calculations

use crate::config::{ON_HOLD_TASKS_PER_LEAVE_DAY, WORKING_DAYS_PER_MONTH};
use crate::database::{CheckIn, Employee, EmployeeStatus};
use serde::{Deserialize, Serialize};

/// Header counts on the employees screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStats {
    pub total: usize,
    pub active: usize,
    pub on_leave: usize,
    pub busy: usize,
}

pub fn employee_stats(employees: &[Employee]) -> EmployeeStats {
    let on_duty = employees
        .iter()
        .filter(|e| e.status == EmployeeStatus::OnDuty)
        .count();

    EmployeeStats {
        total: employees.len(),
        active: on_duty,
        on_leave: employees
            .iter()
            .filter(|e| matches!(e.status, EmployeeStatus::OnLeave | EmployeeStatus::OffFromWork))
            .count(),
        busy: on_duty,
    }
}

/// Distinct role titles in first-seen order
pub fn distinct_roles(employees: &[Employee]) -> Vec<String> {
    let mut roles: Vec<String> = Vec::new();
    for employee in employees {
        if !roles.contains(&employee.role_title) {
            roles.push(employee.role_title.clone());
        }
    }
    roles
}

/// Minutes worked for one check-in; zero when check-out precedes check-in
pub fn check_in_minutes(record: &CheckIn) -> i64 {
    (record.check_out - record.check_in).num_minutes().max(0)
}

/// `"8h 30m"` style rendering of a minute count
pub fn format_duration(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

pub fn latest_check_in(employee: &Employee) -> Option<&CheckIn> {
    employee.check_ins.last()
}

/// Spread `total` over `days` slots as evenly as possible.
///
/// Earlier slots take the remainder, one unit each.
pub fn spread_evenly(total: u32, days: usize) -> Vec<u32> {
    if days == 0 {
        return Vec::new();
    }

    let base = total / days as u32;
    let mut remainder = total - base * days as u32;

    (0..days)
        .map(|_| {
            if remainder > 0 {
                remainder -= 1;
                base + 1
            } else {
                base
            }
        })
        .collect()
}

/// Split of a working month into busy, leave and idle days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceBreakdown {
    pub busy: u32,
    pub leave: u32,
    pub idle: u32,
}

pub fn attendance_breakdown(employee: &Employee) -> AttendanceBreakdown {
    let busy = employee.check_ins.len() as u32;
    let leave = employee.on_hold_this_month.max(0) as u32 / ON_HOLD_TASKS_PER_LEAVE_DAY;

    AttendanceBreakdown {
        busy,
        leave,
        idle: WORKING_DAYS_PER_MONTH.saturating_sub(busy + leave),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::employee;
    use crate::database::WorkMode;
    use chrono::{NaiveDate, NaiveTime};

    fn check_in(day: u32, start: (u32, u32), end: (u32, u32)) -> CheckIn {
        CheckIn {
            id: format!("ci-{}", day),
            employee_id: "e1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 8, day).unwrap(),
            check_in: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            check_out: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        }
    }

    #[test]
    fn test_employee_stats() {
        let mut on_leave = employee(WorkMode::Office);
        on_leave.status = EmployeeStatus::OnLeave;
        let mut off = employee(WorkMode::Remote);
        off.status = EmployeeStatus::OffFromWork;
        let mut idle = employee(WorkMode::Office);
        idle.status = EmployeeStatus::NotBusy;

        let employees = vec![employee(WorkMode::Remote), on_leave, off, idle];

        assert_eq!(
            employee_stats(&employees),
            EmployeeStats {
                total: 4,
                active: 1,
                on_leave: 2,
                busy: 1,
            }
        );
    }

    #[test]
    fn test_distinct_roles_first_seen_order() {
        let mut a = employee(WorkMode::Office);
        a.role_title = "UI/UX Designer".to_string();
        let mut b = employee(WorkMode::Office);
        b.role_title = "Project Manager".to_string();
        let mut c = employee(WorkMode::Remote);
        c.role_title = "UI/UX Designer".to_string();

        assert_eq!(
            distinct_roles(&[a, b, c]),
            vec!["UI/UX Designer".to_string(), "Project Manager".to_string()]
        );
    }

    #[test]
    fn test_check_in_minutes() {
        assert_eq!(check_in_minutes(&check_in(1, (9, 0), (17, 30))), 510);
        assert_eq!(check_in_minutes(&check_in(2, (18, 0), (9, 0))), 0);
        assert_eq!(format_duration(510), "8h 30m");
        assert_eq!(format_duration(0), "0h 0m");
    }

    #[test]
    fn test_latest_check_in_is_last() {
        let mut e = employee(WorkMode::Office);
        assert!(latest_check_in(&e).is_none());

        e.check_ins = vec![check_in(1, (9, 0), (17, 0)), check_in(2, (8, 45), (17, 15))];
        assert_eq!(latest_check_in(&e).map(|c| c.id.as_str()), Some("ci-2"));
    }

    #[test]
    fn test_spread_evenly() {
        assert_eq!(spread_evenly(8, 3), vec![3, 3, 2]);
        assert_eq!(spread_evenly(2, 4), vec![1, 1, 0, 0]);
        assert_eq!(spread_evenly(0, 2), vec![0, 0]);
        assert!(spread_evenly(5, 0).is_empty());
        assert_eq!(spread_evenly(12, 14).iter().sum::<u32>(), 12);
    }

    #[test]
    fn test_attendance_breakdown() {
        let mut e = employee(WorkMode::Office);
        e.on_hold_this_month = 7;
        e.check_ins = vec![check_in(1, (9, 0), (17, 0)), check_in(2, (9, 0), (17, 0))];

        assert_eq!(
            attendance_breakdown(&e),
            AttendanceBreakdown {
                busy: 2,
                leave: 2,
                idle: 18,
            }
        );
    }

    #[test]
    fn test_attendance_idle_never_negative() {
        let mut e = employee(WorkMode::Office);
        e.on_hold_this_month = 30;
        e.check_ins = (1..=20).map(|d| check_in(d, (9, 0), (17, 0))).collect();

        let breakdown = attendance_breakdown(&e);
        assert_eq!(breakdown.busy, 20);
        assert_eq!(breakdown.leave, 10);
        assert_eq!(breakdown.idle, 0);
    }
}
