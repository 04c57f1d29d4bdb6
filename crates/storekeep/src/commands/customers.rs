//! Customer command handlers.

use tabled::Tabled;

use storekeep_core::requests::CustomerDraft;
use storekeep_core::{Customer, Dispatcher};

use crate::cli::{CustomersArgs, CustomersCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Address")]
    address: String,
}

impl From<&Customer> for CustomerRow {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            email: c.email.clone().unwrap_or_default(),
            phone: c.phone.clone().unwrap_or_default(),
            address: c.address.clone().unwrap_or_default(),
        }
    }
}

pub async fn handle(
    dispatcher: &Dispatcher,
    args: CustomersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CustomersCommand::List { page, search } => {
            dispatcher
                .fetch_customers(page.page, page.limit, search.as_deref())
                .await?;

            let state = dispatcher.store().customers.snapshot();
            let out = output::render_list(
                &global.output,
                &state.items,
                |c| CustomerRow::from(c),
                |c| c.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CustomersCommand::Create(create) => {
            util::validate_name(&create.name)?;
            let draft = CustomerDraft {
                name: create.name,
                email: create.email,
                phone: create.phone,
                address: create.address,
            };
            let created = dispatcher.create_customer(&draft).await?;
            util::success(
                &format!("Created customer {} ({})", created.name, created.id),
                global,
            );
            Ok(())
        }
    }
}
