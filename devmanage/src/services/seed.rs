//! Demo data seeding
//!
//! Fills empty stores with a small sample business so a fresh install has
//! something to show. Stores that already hold data are left alone.
//! Demo projects reference the demo clients, so they are only written in
//! the same run that wrote those clients.

use crate::database::{
    CheckInRequest, ClientStore, CreateClientRequest, CreateEmployeeRequest, CreatePaymentRequest,
    CreateProjectRequest, EmployeeStatus, EmployeeStore, PaymentMethod, ProjectStatus,
    ProjectStore, WorkMode,
};
use crate::error::{AppError, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Number of entities written by one seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub clients: usize,
    pub projects: usize,
    pub employees: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.clients == 0 && self.projects == 0 && self.employees == 0
    }
}

struct DemoClient {
    name: &'static str,
    company: &'static str,
    email: &'static str,
    phone: &'static str,
    city: &'static str,
    country: &'static str,
    address: &'static str,
}

struct DemoProject {
    /// Index into `DEMO_CLIENTS`
    client: usize,
    name: &'static str,
    description: &'static str,
    budget: f64,
    deadline: (i32, u32, u32),
    status: ProjectStatus,
    payments: &'static [(f64, (i32, u32, u32), PaymentMethod)],
    updates: &'static [&'static str],
}

struct DemoEmployee {
    full_name: &'static str,
    role_title: &'static str,
    email: &'static str,
    years_experience: i64,
    work_mode: WorkMode,
    status: EmployeeStatus,
    completed_this_month: i64,
    on_hold_this_month: i64,
    check_ins: &'static [((i32, u32, u32), (u32, u32), (u32, u32))],
}

const DEMO_CLIENTS: [DemoClient; 4] = [
    DemoClient {
        name: "John Smith",
        company: "TechCorp Ltd",
        email: "john@techcorp.com",
        phone: "+1 555 0123",
        city: "San Francisco",
        country: "USA",
        address: "123 Tech Street",
    },
    DemoClient {
        name: "Sarah Johnson",
        company: "InnovateCo",
        email: "sarah@innovate.com",
        phone: "+1 555 0124",
        city: "New York",
        country: "USA",
        address: "456 Innovation Ave",
    },
    DemoClient {
        name: "Mike Chen",
        company: "StartupHub",
        email: "mike@startup.com",
        phone: "+1 555 0125",
        city: "Austin",
        country: "USA",
        address: "789 Startup Blvd",
    },
    DemoClient {
        name: "Emma Wilson",
        company: "DesignStudio",
        email: "emma@design.com",
        phone: "+1 555 0126",
        city: "Los Angeles",
        country: "USA",
        address: "321 Creative Way",
    },
];

const DEMO_PROJECTS: [DemoProject; 7] = [
    DemoProject {
        client: 0,
        name: "E-commerce Platform",
        description: "Full-stack e-commerce solution with React and Node.js",
        budget: 50_000.0,
        deadline: (2024, 12, 31),
        status: ProjectStatus::Started,
        payments: &[
            (15_000.0, (2024, 1, 20), PaymentMethod::BankTransfer),
            (10_000.0, (2024, 2, 15), PaymentMethod::BankTransfer),
        ],
        updates: &[
            "Initial setup completed",
            "Frontend development 60% complete",
        ],
    },
    DemoProject {
        client: 1,
        name: "Mobile App Development",
        description: "Cross-platform mobile application using React Native",
        budget: 75_000.0,
        deadline: (2024, 11, 30),
        status: ProjectStatus::Active,
        payments: &[(30_000.0, (2024, 2, 5), PaymentMethod::PayPal)],
        updates: &["Project kickoff completed"],
    },
    DemoProject {
        client: 2,
        name: "Website Redesign",
        description: "Complete website redesign with modern UI/UX",
        budget: 25_000.0,
        deadline: (2024, 10, 15),
        status: ProjectStatus::Completed,
        payments: &[
            (12_500.0, (2024, 1, 10), PaymentMethod::Check),
            (12_500.0, (2024, 2, 20), PaymentMethod::Check),
        ],
        updates: &["Design phase completed", "Development completed"],
    },
    DemoProject {
        client: 0,
        name: "API Integration",
        description: "Third-party API integration for existing system",
        budget: 15_000.0,
        deadline: (2024, 9, 30),
        status: ProjectStatus::OnHold,
        payments: &[(5_000.0, (2024, 2, 15), PaymentMethod::BankTransfer)],
        updates: &["Initial analysis completed"],
    },
    DemoProject {
        client: 3,
        name: "Brand Identity Package",
        description: "Complete brand identity design including logo, colors, typography",
        budget: 35_000.0,
        deadline: (2024, 8, 15),
        status: ProjectStatus::Started,
        payments: &[(17_500.0, (2024, 1, 25), PaymentMethod::Cash)],
        updates: &["Logo concepts presented"],
    },
    DemoProject {
        client: 1,
        name: "Data Analytics Dashboard",
        description: "Custom analytics dashboard with real-time data visualization",
        budget: 60_000.0,
        deadline: (2024, 12, 1),
        status: ProjectStatus::Started,
        payments: &[(20_000.0, (2024, 2, 10), PaymentMethod::BankTransfer)],
        updates: &["Database design completed"],
    },
    DemoProject {
        client: 2,
        name: "Security Audit",
        description: "Comprehensive security audit and penetration testing",
        budget: 20_000.0,
        deadline: (2024, 7, 30),
        status: ProjectStatus::Completed,
        payments: &[(20_000.0, (2024, 1, 30), PaymentMethod::BankTransfer)],
        updates: &["Audit completed, report delivered"],
    },
];

const DEMO_EMPLOYEES: [DemoEmployee; 3] = [
    DemoEmployee {
        full_name: "Alex Rodriguez",
        role_title: "Senior Full-Stack Developer",
        email: "alex@company.com",
        years_experience: 5,
        work_mode: WorkMode::Remote,
        status: EmployeeStatus::OnDuty,
        completed_this_month: 8,
        on_hold_this_month: 1,
        check_ins: &[
            ((2024, 8, 1), (9, 0), (17, 30)),
            ((2024, 8, 2), (8, 45), (17, 15)),
        ],
    },
    DemoEmployee {
        full_name: "Maria Garcia",
        role_title: "UI/UX Designer",
        email: "maria@company.com",
        years_experience: 3,
        work_mode: WorkMode::Office,
        status: EmployeeStatus::OnDuty,
        completed_this_month: 12,
        on_hold_this_month: 0,
        check_ins: &[
            ((2024, 8, 1), (9, 15), (17, 45)),
            ((2024, 8, 2), (9, 0), (17, 30)),
        ],
    },
    DemoEmployee {
        full_name: "David Kim",
        role_title: "Project Manager",
        email: "david@company.com",
        years_experience: 7,
        work_mode: WorkMode::Office,
        status: EmployeeStatus::OnLeave,
        completed_this_month: 6,
        on_hold_this_month: 2,
        check_ins: &[],
    },
];

fn date((year, month, day): (i32, u32, u32)) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::Generic(format!("Invalid demo date {}-{}-{}", year, month, day)))
}

fn time((hour, minute): (u32, u32)) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| AppError::Generic(format!("Invalid demo time {}:{}", hour, minute)))
}

/// Payments are recorded at noon UTC on their day
fn payment_instant(day: (i32, u32, u32)) -> Result<DateTime<Utc>> {
    Ok(date(day)?.and_time(time((12, 0))?).and_utc())
}

/// Seed every empty store with the demo data set.
///
/// The stores have no shared transaction, so a failed run deletes the
/// clients and employees it already wrote (their projects, payments,
/// updates and check-ins cascade). The stores are then empty again and the
/// next start retries the whole set.
pub async fn seed_demo_data<S>(store: &S) -> Result<SeedReport>
where
    S: ClientStore + ProjectStore + EmployeeStore,
{
    let mut report = SeedReport::default();

    let seed_clients = store.list_clients().await?.is_empty();
    let seed_projects = store.list_projects().await?.is_empty();
    let seed_employees = store.list_employees().await?.is_empty();

    if seed_clients {
        let mut client_ids = Vec::with_capacity(DEMO_CLIENTS.len());

        match seed_clients_and_projects(store, seed_projects, &mut client_ids).await {
            Ok(projects) => {
                report.clients = client_ids.len();
                report.projects = projects;
            }
            Err(e) => {
                tracing::warn!("Demo client seeding failed, rolling back: {}", e);
                for id in &client_ids {
                    if let Err(undo) = store.delete_client(id).await {
                        tracing::warn!("Failed to remove demo client {}: {}", id, undo);
                    }
                }
                return Err(e);
            }
        }
    } else if seed_projects {
        tracing::debug!("Clients already present; skipping demo projects");
    }

    if seed_employees {
        let mut employee_ids = Vec::with_capacity(DEMO_EMPLOYEES.len());

        if let Err(e) = seed_employees_into(store, &mut employee_ids).await {
            tracing::warn!("Demo employee seeding failed, rolling back: {}", e);
            for id in &employee_ids {
                if let Err(undo) = store.delete_employee(id).await {
                    tracing::warn!("Failed to remove demo employee {}: {}", id, undo);
                }
            }
            return Err(e);
        }
        report.employees = employee_ids.len();
    }

    if report.is_empty() {
        tracing::debug!("Stores already populated; no demo data seeded");
    } else {
        tracing::info!(
            "Seeded demo data: {} clients, {} projects, {} employees",
            report.clients,
            report.projects,
            report.employees
        );
    }

    Ok(report)
}

/// Write the demo clients, recording each id as soon as it exists, then
/// their projects when the project store was empty.
async fn seed_clients_and_projects<S>(
    store: &S,
    with_projects: bool,
    client_ids: &mut Vec<String>,
) -> Result<usize>
where
    S: ClientStore + ProjectStore,
{
    for demo in &DEMO_CLIENTS {
        let client = store
            .create_client(CreateClientRequest {
                name: demo.name.to_string(),
                company: Some(demo.company.to_string()),
                email: Some(demo.email.to_string()),
                phone: Some(demo.phone.to_string()),
                city: Some(demo.city.to_string()),
                country: Some(demo.country.to_string()),
                address: Some(demo.address.to_string()),
            })
            .await?;
        client_ids.push(client.id);
    }

    if with_projects {
        seed_projects_for(store, client_ids).await
    } else {
        Ok(0)
    }
}

async fn seed_employees_into<S>(store: &S, employee_ids: &mut Vec<String>) -> Result<()>
where
    S: EmployeeStore,
{
    for demo in &DEMO_EMPLOYEES {
        let employee = store
            .create_employee(CreateEmployeeRequest {
                full_name: demo.full_name.to_string(),
                role_title: demo.role_title.to_string(),
                email: demo.email.to_string(),
                years_experience: demo.years_experience,
                work_mode: demo.work_mode,
                status: demo.status,
                completed_this_month: demo.completed_this_month,
                on_hold_this_month: demo.on_hold_this_month,
            })
            .await?;
        employee_ids.push(employee.id.clone());

        for &(day, check_in, check_out) in demo.check_ins {
            store
                .record_check_in(CheckInRequest {
                    employee_id: employee.id.clone(),
                    date: date(day)?,
                    check_in: time(check_in)?,
                    check_out: time(check_out)?,
                })
                .await?;
        }
    }

    Ok(())
}

async fn seed_projects_for<S>(store: &S, client_ids: &[String]) -> Result<usize>
where
    S: ProjectStore,
{
    let mut count = 0;

    for demo in &DEMO_PROJECTS {
        let client_id = client_ids.get(demo.client).ok_or_else(|| {
            AppError::Generic(format!("Demo project {} has no client", demo.name))
        })?;

        let project = store
            .create_project(CreateProjectRequest {
                client_id: client_id.clone(),
                name: demo.name.to_string(),
                description: Some(demo.description.to_string()),
                budget: demo.budget,
                deadline: Some(date(demo.deadline)?),
                status: demo.status,
                invoice_file: None,
            })
            .await?;

        for &(amount, day, method) in demo.payments {
            store
                .add_payment(CreatePaymentRequest {
                    project_id: project.id.clone(),
                    amount,
                    date: payment_instant(day)?,
                    method,
                })
                .await?;
        }

        for content in demo.updates {
            store.add_update(&project.id, content).await?;
        }

        count += 1;
    }

    Ok(count)
}
