//! List filtering and search for the client, project and employee screens
//!
//! All matching is case-insensitive substring matching on a trimmed query;
//! an empty query matches everything.

use crate::database::{Client, Employee, Project, ProjectStatus};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Status group selectable on the projects screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectFilter {
    #[default]
    All,
    /// Active and Started projects
    Active,
    Completed,
    OnHold,
}

impl ProjectFilter {
    pub fn matches(&self, status: ProjectStatus) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Active => status.is_active(),
            ProjectFilter::Completed => status == ProjectStatus::Completed,
            ProjectFilter::OnHold => status == ProjectStatus::OnHold,
        }
    }
}

impl FromStr for ProjectFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" | "all projects" => Ok(ProjectFilter::All),
            "active" => Ok(ProjectFilter::Active),
            "completed" => Ok(ProjectFilter::Completed),
            "on hold" | "on_hold" | "onhold" => Ok(ProjectFilter::OnHold),
            other => Err(format!("Unknown project filter: {}", other)),
        }
    }
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

fn contains(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle))
}

/// Filter projects by status group, then by a query over the project name,
/// description, and the owning client's name and company.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    clients: &[Client],
    filter: ProjectFilter,
    query: &str,
) -> Vec<&'a Project> {
    let query = normalize(query);

    projects
        .iter()
        .filter(|project| filter.matches(project.status))
        .filter(|project| {
            if query.is_empty() {
                return true;
            }

            let client = clients.iter().find(|c| c.id == project.client_id);

            contains(Some(project.name.as_str()), &query)
                || contains(project.description.as_deref(), &query)
                || contains(client.map(|c| c.name.as_str()), &query)
                || contains(client.and_then(|c| c.company.as_deref()), &query)
        })
        .collect()
}

/// Match clients on name, company or email.
pub fn search_clients<'a>(clients: &'a [Client], query: &str) -> Vec<&'a Client> {
    let query = normalize(query);

    clients
        .iter()
        .filter(|client| {
            query.is_empty()
                || contains(Some(client.name.as_str()), &query)
                || contains(client.company.as_deref(), &query)
                || contains(client.email.as_deref(), &query)
        })
        .collect()
}

/// Filter employees by a role substring, then by a query over name,
/// role title and email.
pub fn filter_employees<'a>(
    employees: &'a [Employee],
    role: Option<&str>,
    query: &str,
) -> Vec<&'a Employee> {
    let role = role.map(normalize).filter(|r| !r.is_empty());
    let query = normalize(query);

    employees
        .iter()
        .filter(|employee| {
            role.as_deref()
                .map_or(true, |r| contains(Some(employee.role_title.as_str()), r))
        })
        .filter(|employee| {
            query.is_empty()
                || contains(Some(employee.full_name.as_str()), &query)
                || contains(Some(employee.role_title.as_str()), &query)
                || contains(Some(employee.email.as_str()), &query)
        })
        .collect()
}
