//! # Report Commands
//!
//! Text mode prints the reports exactly as rendered by the reporting
//! service. JSON mode prints the underlying data.

use serde::Serialize;

use hotel_core::report::{HistoryLine, OccupancySnapshot};
use hotel_core::Client;

use super::Context;
use crate::cli::ReportCommand;

#[derive(Debug, Serialize)]
struct OccupancyView {
    #[serde(flatten)]
    snapshot: OccupancySnapshot,
    occupied: usize,
    rate_percent: f64,
    report: String,
}

#[derive(Debug, Serialize)]
struct RevenueView {
    total_cents: i64,
    report: String,
}

#[derive(Debug, Serialize)]
struct HistoryView {
    client: Option<Client>,
    reservations: Vec<HistoryLine>,
    report: String,
}

pub async fn run(ctx: &Context, cmd: ReportCommand) -> anyhow::Result<()> {
    let reporting = ctx.services.reporting();

    match cmd {
        ReportCommand::Occupancy => {
            let snapshot = reporting.occupancy().await?;
            let view = OccupancyView {
                snapshot,
                occupied: snapshot.occupied(),
                rate_percent: snapshot.rate_percent(),
                report: reporting.occupancy_report().await?,
            };
            ctx.out.emit(&view, |v| v.report.clone())
        }

        ReportCommand::Revenue => {
            let view = RevenueView {
                total_cents: ctx.services.billing().total_revenue().await?.cents(),
                report: reporting.revenue_report().await?,
            };
            ctx.out.emit(&view, |v| v.report.clone())
        }

        ReportCommand::History { client, name } => {
            let clients = ctx.services.clients();
            let selected = match (client, name) {
                (Some(id), _) => clients.find_by_id(&id).await?,
                (None, Some(name)) => clients.find_by_name(&name).await?,
                (None, None) => None,
            };

            let reservations = match &selected {
                Some(client) => reporting.client_history(&client.id).await?,
                None => Vec::new(),
            };
            let report = reporting.client_history_report(selected.as_ref()).await?;

            let view = HistoryView {
                client: selected,
                reservations,
                report,
            };
            ctx.out.emit(&view, |v| v.report.clone())
        }
    }
}
