//! Employee command handlers.

use tabled::Tabled;

use storekeep_core::requests::{EmployeeDraft, EmployeePatch};
use storekeep_core::view::{self, EmployeeQuery};
use storekeep_core::{Dispatcher, Employee, EmployeeStatus};

use crate::cli::{EmployeesArgs, EmployeesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Employee> for EmployeeRow {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id.to_string(),
            name: e.name.clone(),
            position: e.position.clone().unwrap_or_default(),
            email: e.email.clone().unwrap_or_default(),
            status: e.status.map(|s| s.to_string()).unwrap_or_default(),
        }
    }
}

fn parse_status(raw: &str) -> Result<EmployeeStatus, CliError> {
    raw.parse().map_err(|_| CliError::Validation {
        field: "status".into(),
        reason: format!("expected 'active', 'on_leave', or 'terminated', got '{raw}'"),
    })
}

pub async fn handle(
    dispatcher: &Dispatcher,
    args: EmployeesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        EmployeesCommand::List {
            page,
            search,
            status,
        } => {
            // The status filter is local screen state, applied to the
            // fetched page -- the list endpoint only knows `search`.
            let status = status.as_deref().map(parse_status).transpose()?;

            dispatcher
                .fetch_employees(page.page, page.limit, search.as_deref())
                .await?;

            let state = dispatcher.store().employees.snapshot();
            let query = EmployeeQuery {
                search: String::new(),
                status,
            };
            let visible: Vec<Employee> = view::filter_employees(&state.items, &query)
                .into_iter()
                .cloned()
                .collect();

            let out = output::render_list(
                &global.output,
                &visible,
                |e| EmployeeRow::from(e),
                |e| e.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        EmployeesCommand::Create(create) => {
            util::validate_name(&create.name)?;
            if let Some(ref s) = create.status {
                parse_status(s)?;
            }
            let draft = EmployeeDraft {
                name: create.name,
                email: create.email,
                phone: create.phone,
                position: create.position,
                status: create.status,
            };
            let created = dispatcher.create_employee(&draft).await?;
            util::success(
                &format!("Created employee {} ({})", created.name, created.id),
                global,
            );
            Ok(())
        }

        EmployeesCommand::Update(update) => {
            if let Some(ref s) = update.status {
                parse_status(s)?;
            }
            let patch = EmployeePatch {
                name: update.name,
                email: update.email,
                phone: update.phone,
                position: update.position,
                status: update.status,
            };
            let updated = dispatcher
                .update_employee(&util::parse_id(&update.id), &patch)
                .await?;
            util::success(&format!("Updated employee {}", updated.id), global);
            Ok(())
        }

        EmployeesCommand::Delete { id } => {
            if !util::confirm(&format!("Delete employee {id}?"), global)? {
                return Ok(());
            }
            dispatcher.remove_employee(&util::parse_id(&id)).await?;
            util::success(&format!("Deleted employee {id}"), global);
            Ok(())
        }
    }
}
