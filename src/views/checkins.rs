//! Check-ins and check-in details.

use futures::future::BoxFuture;
use ratatui::{text::Line, widgets::Cell};

use crate::api::models::CheckIn;
use crate::app::{View, ViewContext};
use crate::error::ClientError;
use crate::ui::theme::{COLOR_ERROR, COLOR_SUCCESS};
use crate::views::detail::{DetailSource, DetailView};
use crate::views::helpers::{cell, colored_field, field, format_minute, format_time};
use crate::views::table::{Column, TableSource, TableView};

pub fn check_ins_view(ctx: &ViewContext, project_id: String) -> Box<dyn View> {
    TableView::boxed(
        ctx,
        CheckInsSource {
            ctx: ctx.clone(),
            project_id,
        },
    )
}

pub struct CheckInsSource {
    ctx: ViewContext,
    project_id: String,
}

impl TableSource for CheckInsSource {
    type Record = CheckIn;

    fn title(&self) -> String {
        "Check-ins".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", 1),
            Column::new("NAME", 2),
            Column::new("SLUG", 2),
            Column::new("TYPE", 1),
            Column::new("SCHEDULE", 2),
            Column::new("LAST CHECK-IN", 2),
        ];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No check-ins found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<CheckIn>, ClientError>> {
        let (client, id) = (self.ctx.client.clone(), self.project_id.clone());
        Box::pin(async move { client.check_ins(&id).await })
    }

    fn row(&self, check_in: &CheckIn) -> Vec<Cell<'static>> {
        let last = match &check_in.last_check_in_at {
            Some(t) => format_minute(Some(t)),
            None => "Never".to_string(),
        };
        vec![
            cell(check_in.id.clone()),
            cell(check_in.name.clone()),
            cell(check_in.slug.clone()),
            cell(check_in.schedule_type.clone()),
            cell(check_in.schedule().to_string()),
            cell(last),
        ]
    }

    fn open(&self, check_in: &CheckIn) -> Option<Box<dyn View>> {
        Some(Box::new(DetailView::with_record(
            self.ctx.nav.clone(),
            CheckInDetails(check_in.clone()),
            check_in.clone(),
        )))
    }
}

pub struct CheckInDetails(CheckIn);

impl DetailSource for CheckInDetails {
    type Record = CheckIn;

    fn heading(&self) -> String {
        "Check-in Details".to_string()
    }

    fn fetch(&self) -> BoxFuture<'static, Result<CheckIn, ClientError>> {
        Box::pin(futures::future::ready(Ok(self.0.clone())))
    }

    fn lines(&self, ci: &CheckIn) -> Vec<Line<'static>> {
        let mut lines = vec![
            field("ID", ci.id.clone()),
            Line::default(),
            field("Name", ci.name.clone()),
            Line::default(),
            field("Slug", ci.slug.clone()),
            Line::default(),
            field("Schedule Type", ci.schedule_type.clone()),
        ];

        if let Some(period) = &ci.report_period {
            lines.push(Line::default());
            lines.push(field("Report Period", period.clone()));
        }
        if let Some(grace) = &ci.grace_period {
            lines.push(field("Grace Period", grace.clone()));
        }
        if let Some(cron) = &ci.cron_schedule {
            lines.push(Line::default());
            lines.push(field("Cron Schedule", cron.clone()));
        }
        if let Some(tz) = &ci.cron_timezone {
            lines.push(field("Cron Timezone", tz.clone()));
        }

        lines.push(Line::default());
        lines.push(field(
            "Project ID",
            ci.project_id.map_or_else(|| "-".to_string(), |id| id.to_string()),
        ));
        lines.push(field("Created", format_time(ci.created_at.as_ref())));
        lines.push(Line::default());
        lines.push(match &ci.last_check_in_at {
            Some(t) => colored_field("Last Check-in", format_time(Some(t)), COLOR_SUCCESS),
            None => colored_field("Last Check-in", "Never", COLOR_ERROR),
        });
        lines
    }
}
