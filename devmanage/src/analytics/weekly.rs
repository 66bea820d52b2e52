//! Weekly task distribution
//!
//! Synthesizes a Monday..Sunday series of completed/active/on-hold task
//! counts. Each day draws random base magnitudes which are then scaled by
//! multipliers derived from the whole project collection.
//!
//! The default entry point uses the thread RNG and is therefore not
//! deterministic across calls with identical input. Pass a seeded RNG to
//! [`compute_weekly_task_data_with`] for reproducible output.

use crate::config::{
    ACTIVE_MULTIPLIER_DIVISOR, ACTIVE_MULTIPLIER_FLOOR, COMPLETED_MULTIPLIER_DIVISOR,
    COMPLETED_MULTIPLIER_FLOOR, ON_HOLD_MULTIPLIER_DIVISOR, ON_HOLD_MULTIPLIER_FLOOR,
    WEEKDAYS, WEEKLY_ACTIVE_RANGE, WEEKLY_COMPLETED_RANGE, WEEKLY_ON_HOLD_RANGE,
};
use crate::database::{Project, ProjectStatus};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTaskEntry {
    pub day: String,
    pub completed: u32,
    pub active: u32,
    pub on_hold: u32,
}

/// Scaling applied to every day's base draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyMultipliers {
    pub completed: f64,
    pub active: f64,
    pub on_hold: f64,
}

impl WeeklyMultipliers {
    pub fn from_projects(projects: &[Project]) -> Self {
        let active = projects.iter().filter(|p| p.status.is_active()).count() as f64;
        let completed = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .count() as f64;
        let on_hold = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::OnHold)
            .count() as f64;

        Self {
            completed: (completed / COMPLETED_MULTIPLIER_DIVISOR).max(COMPLETED_MULTIPLIER_FLOOR),
            active: (active / ACTIVE_MULTIPLIER_DIVISOR).max(ACTIVE_MULTIPLIER_FLOOR),
            on_hold: (on_hold / ON_HOLD_MULTIPLIER_DIVISOR).max(ON_HOLD_MULTIPLIER_FLOOR),
        }
    }
}

/// Seven fresh entries drawn from the thread RNG.
pub fn compute_weekly_task_data(projects: &[Project]) -> Vec<WeeklyTaskEntry> {
    compute_weekly_task_data_with(projects, &mut rand::thread_rng())
}

/// Seven entries drawn from `rng`, one per weekday starting Monday.
pub fn compute_weekly_task_data_with<R: Rng + ?Sized>(
    projects: &[Project],
    rng: &mut R,
) -> Vec<WeeklyTaskEntry> {
    let multipliers = WeeklyMultipliers::from_projects(projects);

    tracing::trace!("Weekly task multipliers: {:?}", multipliers);

    WEEKDAYS
        .iter()
        .map(|day| {
            let base_completed = draw(rng, WEEKLY_COMPLETED_RANGE);
            let base_active = draw(rng, WEEKLY_ACTIVE_RANGE);
            let base_on_hold = draw(rng, WEEKLY_ON_HOLD_RANGE);

            WeeklyTaskEntry {
                day: (*day).to_string(),
                completed: scale(base_completed, multipliers.completed),
                active: scale(base_active, multipliers.active),
                on_hold: scale(base_on_hold, multipliers.on_hold),
            }
        })
        .collect()
}

fn draw<R: Rng + ?Sized>(rng: &mut R, (low, high): (u32, u32)) -> u32 {
    rng.gen_range(low..=high)
}

fn scale(base: u32, multiplier: f64) -> u32 {
    (base as f64 * multiplier).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::project;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn projects_with(active: usize, completed: usize, on_hold: usize) -> Vec<Project> {
        let mut projects = Vec::new();
        projects.extend((0..active).map(|_| project(1.0, 0.0, ProjectStatus::Active)));
        projects.extend((0..completed).map(|_| project(1.0, 1.0, ProjectStatus::Completed)));
        projects.extend((0..on_hold).map(|_| project(1.0, 0.0, ProjectStatus::OnHold)));
        projects
    }

    #[test]
    fn test_always_seven_days_in_order() {
        let entries = compute_weekly_task_data(&[]);

        assert_eq!(entries.len(), 7);
        let days: Vec<&str> = entries.iter().map(|e| e.day.as_str()).collect();
        assert_eq!(days, WEEKDAYS.to_vec());
    }

    #[test]
    fn test_multiplier_floors() {
        let multipliers = WeeklyMultipliers::from_projects(&[]);

        assert_eq!(multipliers.completed, 1.0);
        assert_eq!(multipliers.active, 1.0);
        assert_eq!(multipliers.on_hold, 0.5);
    }

    #[test]
    fn test_multipliers_scale_with_projects() {
        let projects = projects_with(9, 6, 5);
        let multipliers = WeeklyMultipliers::from_projects(&projects);

        assert_eq!(multipliers.active, 3.0);
        assert_eq!(multipliers.completed, 3.0);
        assert_eq!(multipliers.on_hold, 2.5);
    }

    #[test]
    fn test_started_projects_count_as_active() {
        let projects = vec![
            project(1.0, 0.0, ProjectStatus::Started),
            project(1.0, 0.0, ProjectStatus::Started),
            project(1.0, 0.0, ProjectStatus::Started),
            project(1.0, 0.0, ProjectStatus::Active),
            project(1.0, 0.0, ProjectStatus::Active),
            project(1.0, 0.0, ProjectStatus::Active),
        ];

        assert_eq!(WeeklyMultipliers::from_projects(&projects).active, 2.0);
    }

    #[test]
    fn test_values_stay_within_base_ranges_without_projects() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            for entry in compute_weekly_task_data_with(&[], &mut rng) {
                assert!((10..=58).contains(&entry.completed));
                assert!((5..=13).contains(&entry.active));
                // on-hold is halved and floored: 1..=31 -> 0..=15
                assert!(entry.on_hold <= 15);
            }
        }
    }

    #[test]
    fn test_values_stay_within_scaled_ranges() {
        let projects = projects_with(9, 6, 5);
        let mut rng = StdRng::seed_from_u64(42);

        for entry in compute_weekly_task_data_with(&projects, &mut rng) {
            assert!((30..=174).contains(&entry.completed));
            assert!((15..=39).contains(&entry.active));
            assert!((2..=77).contains(&entry.on_hold));
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let projects = projects_with(2, 1, 1);

        let first = compute_weekly_task_data_with(&projects, &mut StdRng::seed_from_u64(1234));
        let second = compute_weekly_task_data_with(&projects, &mut StdRng::seed_from_u64(1234));

        assert_eq!(first, second);
    }
}
