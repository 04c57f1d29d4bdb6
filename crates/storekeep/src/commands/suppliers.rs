//! Supplier command handlers.

use tabled::Tabled;

use storekeep_core::requests::SupplierDraft;
use storekeep_core::{Dispatcher, Supplier};

use crate::cli::{GlobalOpts, SuppliersArgs, SuppliersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct SupplierRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Contact")]
    contact: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
}

impl From<&Supplier> for SupplierRow {
    fn from(s: &Supplier) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name.clone(),
            contact: s.contact_name.clone().unwrap_or_default(),
            email: s.email.clone().unwrap_or_default(),
            phone: s.phone.clone().unwrap_or_default(),
        }
    }
}

fn detail(s: &Supplier) -> String {
    vec![
        format!("ID:       {}", s.id),
        format!("Name:     {}", s.name),
        format!("Contact:  {}", s.contact_name.as_deref().unwrap_or("-")),
        format!("Email:    {}", s.email.as_deref().unwrap_or("-")),
        format!("Phone:    {}", s.phone.as_deref().unwrap_or("-")),
        format!("Address:  {}", s.address.as_deref().unwrap_or("-")),
    ]
    .join("\n")
}

pub async fn handle(
    dispatcher: &Dispatcher,
    args: SuppliersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SuppliersCommand::List { page } => {
            dispatcher.fetch_suppliers(page.page, page.limit).await?;

            let state = dispatcher.store().suppliers.snapshot();
            let out = output::render_list(
                &global.output,
                &state.items,
                |s| SupplierRow::from(s),
                |s| s.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SuppliersCommand::Get { id } => {
            let supplier = dispatcher.get_supplier(&util::parse_id(&id)).await?;
            let out = output::render_single(&global.output, &supplier, detail, |s| s.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SuppliersCommand::Create(create) => {
            util::validate_name(&create.name)?;
            let draft = SupplierDraft {
                name: create.name,
                contact_name: create.contact,
                email: create.email,
                phone: create.phone,
                address: create.address,
            };
            let created = dispatcher.create_supplier(&draft).await?;
            util::success(
                &format!("Created supplier {} ({})", created.name, created.id),
                global,
            );
            Ok(())
        }
    }
}
