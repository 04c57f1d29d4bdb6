//! Dashboard command handlers: metrics overview, sales targets,
//! recent activity.

use tabled::Tabled;

use storekeep_core::{Activity, DashboardOverview, Dispatcher, SalesTarget};

use crate::cli::{DashboardArgs, DashboardCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct TargetRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Achieved")]
    achieved: String,
    #[tabled(rename = "%")]
    pct: String,
}

impl From<&SalesTarget> for TargetRow {
    fn from(t: &SalesTarget) -> Self {
        Self {
            period: t.label.clone(),
            target: format!("{:.2}", t.target),
            achieved: format!("{:.2}", t.achieved),
            pct: format!("{:.0}%", t.pct_achieved()),
        }
    }
}

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Message")]
    message: String,
    #[tabled(rename = "By")]
    actor: String,
}

impl From<&Activity> for ActivityRow {
    fn from(a: &Activity) -> Self {
        Self {
            when: a
                .occurred_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            kind: a.kind.clone(),
            message: a.message.clone(),
            actor: a.actor.clone().unwrap_or_default(),
        }
    }
}

fn overview_detail(o: &DashboardOverview) -> String {
    vec![
        format!("Revenue:     {:.2}", o.total_revenue),
        format!("Orders:      {}", o.order_count),
        format!("Products:    {}", o.product_count),
        format!("Customers:   {}", o.customer_count),
        format!("Low stock:   {}", o.low_stock_count),
    ]
    .join("\n")
}

pub async fn handle(
    dispatcher: &Dispatcher,
    args: DashboardArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DashboardCommand::Overview => {
            dispatcher.fetch_dashboard_overview().await?;

            let state = dispatcher.store().dashboard.snapshot();
            let Some(overview) = state.overview else {
                return Err(CliError::General("dashboard returned no data".into()));
            };
            let out = output::render_single(&global.output, &overview, overview_detail, |_| {
                "dashboard".into()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DashboardCommand::Targets { period } => {
            dispatcher.fetch_sales_targets(&period).await?;

            let state = dispatcher.store().dashboard.snapshot();
            let out = output::render_list(
                &global.output,
                &state.targets,
                |t| TargetRow::from(t),
                |t| t.label.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DashboardCommand::Activity { limit, kind } => {
            dispatcher
                .fetch_recent_activity(Some(limit), kind.as_deref())
                .await?;

            let state = dispatcher.store().dashboard.snapshot();
            let out = output::render_list(
                &global.output,
                &state.activity,
                |a| ActivityRow::from(a),
                |a| a.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
