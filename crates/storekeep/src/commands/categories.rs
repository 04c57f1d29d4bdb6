//! Category command handlers.

use tabled::Tabled;

use storekeep_core::requests::CategoryDraft;
use storekeep_core::{Category, Dispatcher};

use crate::cli::{CategoriesArgs, CategoriesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Products")]
    products: String,
}

impl From<&Category> for CategoryRow {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            products: c.product_count.map(|n| n.to_string()).unwrap_or_default(),
        }
    }
}

pub async fn handle(
    dispatcher: &Dispatcher,
    args: CategoriesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CategoriesCommand::List => {
            dispatcher.fetch_categories().await?;

            let state = dispatcher.store().categories.snapshot();
            let out = output::render_list(
                &global.output,
                &state.items,
                |c| CategoryRow::from(c),
                |c| c.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CategoriesCommand::Create { name, description } => {
            util::validate_name(&name)?;
            let created = dispatcher
                .create_category(&CategoryDraft { name, description })
                .await?;
            util::success(
                &format!("Created category {} ({})", created.name, created.id),
                global,
            );
            Ok(())
        }
    }
}
