//! Product command handlers.

use tabled::Tabled;

use storekeep_core::requests::{ProductDraft, ProductFilter, ProductPatch, VariantDraft};
use storekeep_core::view;
use storekeep_core::{Dispatcher, Product, ProductStatus, ProductVariant};

use crate::cli::{GlobalOpts, OutputFormat, ProductsArgs, ProductsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "SKU")]
    sku: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Stock")]
    stock: i64,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            sku: p.sku.clone().unwrap_or_default(),
            category: p.category_name.clone().unwrap_or_default(),
            price: format!("{:.2}", p.price),
            stock: p.stock,
            status: p.status.map(|s| s.to_string()).unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct VariantRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Stock")]
    stock: i64,
    #[tabled(rename = "SKU")]
    sku: String,
}

impl From<&ProductVariant> for VariantRow {
    fn from(v: &ProductVariant) -> Self {
        Self {
            id: v.id.to_string(),
            size: v.size.clone().unwrap_or_default(),
            color: v.color.clone().unwrap_or_default(),
            stock: v.stock,
            sku: v.sku.clone().unwrap_or_default(),
        }
    }
}

fn detail(p: &Product) -> String {
    let mut lines = vec![
        format!("ID:          {}", p.id),
        format!("Name:        {}", p.name),
        format!("SKU:         {}", p.sku.as_deref().unwrap_or("-")),
        format!("Price:       {:.2}", p.price),
        format!("Stock:       {}", p.stock),
        format!(
            "Category:    {}",
            p.category_name.as_deref().unwrap_or("-")
        ),
        format!(
            "Status:      {}",
            p.status.map_or_else(|| "-".into(), |s| s.to_string())
        ),
    ];
    if let Some(ref desc) = p.description {
        lines.push(format!("Description: {desc}"));
    }
    if let Some(created) = p.created_at {
        lines.push(format!("Created:     {created}"));
    }
    lines.join("\n")
}

/// Validate a `--status` flag value client-side before it is sent.
fn parse_status(raw: &str) -> Result<ProductStatus, CliError> {
    raw.parse().map_err(|_| CliError::Validation {
        field: "status".into(),
        reason: format!("expected 'active', 'inactive', or 'archived', got '{raw}'"),
    })
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub async fn handle(
    dispatcher: &Dispatcher,
    args: ProductsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProductsCommand::List(list) => {
            if let Some(ref s) = list.status {
                parse_status(s)?;
            }
            util::validate_price_range(list.price_min, list.price_max)?;

            let filter = ProductFilter {
                search: list.search,
                category_id: list.category.as_deref().map(util::parse_id),
                status: list.status,
                price_min: list.price_min,
                price_max: list.price_max,
            };
            dispatcher
                .fetch_products(list.page.page, list.page.limit, &filter)
                .await?;

            let state = dispatcher.store().products.snapshot();
            let out = output::render_list(
                &global.output,
                &state.items,
                |p| ProductRow::from(p),
                |p| p.id.to_string(),
            );
            output::print_output(&out, global.quiet);

            // Table mode gets a one-line rollup of the fetched page.
            if matches!(global.output, OutputFormat::Table) && !global.quiet {
                let stats = view::product_stats(state.items.iter());
                println!(
                    "page {}/{} · {} of {} products · stock value {:.2} · {} low-stock",
                    state.pagination.page,
                    state.pagination.pages,
                    stats.count,
                    state.pagination.total,
                    stats.stock_value,
                    stats.low_stock_count,
                );
            }
            Ok(())
        }

        ProductsCommand::Get { id } => {
            let product = dispatcher.get_product(&util::parse_id(&id)).await?;
            let out = output::render_single(&global.output, &product, detail, |p| p.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::Create(create) => {
            util::validate_name(&create.name)?;
            util::validate_price(create.price)?;
            if let Some(ref s) = create.status {
                parse_status(s)?;
            }

            let draft = ProductDraft {
                name: create.name,
                price: create.price,
                sku: create.sku,
                description: create.description,
                stock: create.stock,
                category_id: create.category.as_deref().map(util::parse_id),
                status: create.status,
            };
            let created = dispatcher.create_product(&draft).await?;
            util::success(&format!("Created product {} ({})", created.name, created.id), global);
            Ok(())
        }

        ProductsCommand::Update(update) => {
            if let Some(price) = update.price {
                util::validate_price(price)?;
            }
            if let Some(ref s) = update.status {
                parse_status(s)?;
            }
            let patch = ProductPatch {
                name: update.name,
                price: update.price,
                sku: update.sku,
                description: update.description,
                stock: update.stock,
                category_id: update.category.as_deref().map(util::parse_id),
                status: update.status,
            };
            if serde_json::to_value(&patch)
                .map(|v| v.as_object().is_some_and(serde_json::Map::is_empty))
                .unwrap_or(false)
            {
                return Err(CliError::Validation {
                    field: "update".into(),
                    reason: "nothing to update -- pass at least one field flag".into(),
                });
            }

            let updated = dispatcher
                .update_product(&util::parse_id(&update.id), &patch)
                .await?;
            util::success(&format!("Updated product {}", updated.id), global);
            Ok(())
        }

        ProductsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete product {id}?"), global)? {
                return Ok(());
            }
            dispatcher.remove_product(&util::parse_id(&id)).await?;
            util::success(&format!("Deleted product {id}"), global);
            Ok(())
        }

        ProductsCommand::Variants { id } => {
            let variants = dispatcher.fetch_variants(&util::parse_id(&id)).await?;
            let out = output::render_list(
                &global.output,
                &variants,
                |v| VariantRow::from(v),
                |v| v.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::AddVariant(add) => {
            let draft = VariantDraft {
                size: add.size,
                color: add.color,
                stock: add.stock,
                sku: add.sku,
            };
            let created = dispatcher
                .create_variant(&util::parse_id(&add.id), &draft)
                .await?;
            util::success(&format!("Created variant {}", created.id), global);
            Ok(())
        }
    }
}
