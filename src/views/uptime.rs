//! Uptime sites, the per-site menu, site details, outages and checks.

use futures::future::BoxFuture;
use ratatui::{text::Line, widgets::Cell};

use crate::api::models::{Outage, Site, UptimeCheck};
use crate::app::{View, ViewContext};
use crate::error::ClientError;
use crate::ui::theme::{COLOR_ERROR, COLOR_SUCCESS};
use crate::views::detail::{DetailSource, DetailView};
use crate::views::helpers::{
    cell, colored, colored_field, field, format_minute, format_time, truncate, up_down, yes_no,
};
use crate::views::menu::{MenuItem, MenuView};
use crate::views::table::{Column, TableSource, TableView};

pub fn sites_view(ctx: &ViewContext, project_id: String) -> Box<dyn View> {
    TableView::boxed(
        ctx,
        SitesSource {
            ctx: ctx.clone(),
            project_id,
        },
    )
}

pub struct SitesSource {
    ctx: ViewContext,
    project_id: String,
}

impl TableSource for SitesSource {
    type Record = Site;

    fn title(&self) -> String {
        "Uptime Sites".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", 1),
            Column::new("NAME", 2),
            Column::new("URL", 3),
            Column::new("STATE", 1),
            Column::new("ACTIVE", 1),
            Column::new("FREQUENCY", 1),
        ];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No uptime sites found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Site>, ClientError>> {
        let (client, id) = (self.ctx.client.clone(), self.project_id.clone());
        Box::pin(async move { client.sites(&id).await })
    }

    fn row(&self, site: &Site) -> Vec<Cell<'static>> {
        vec![
            cell(site.id.clone()),
            cell(site.name.clone()),
            cell(truncate(&site.url, 40)),
            if site.is_down() {
                colored(site.state.clone(), COLOR_ERROR)
            } else {
                cell(site.state.clone())
            },
            cell(yes_no(site.active)),
            cell(format!("{}m", site.frequency)),
        ]
    }

    fn open(&self, site: &Site) -> Option<Box<dyn View>> {
        Some(site_menu(&self.ctx, &self.project_id, site))
    }
}

pub fn site_menu(ctx: &ViewContext, project_id: &str, site: &Site) -> Box<dyn View> {
    let (project_id, site_id) = (project_id.to_string(), site.id.clone());
    let items = vec![
        MenuItem::new("Details", "View site details", 'd', {
            let (ctx, project_id, site_id) = (ctx.clone(), project_id.clone(), site_id.clone());
            move || {
                DetailView::boxed(
                    &ctx,
                    SiteDetails {
                        ctx: ctx.clone(),
                        project_id: project_id.clone(),
                        site_id: site_id.clone(),
                    },
                )
            }
        }),
        MenuItem::new("Outages", "View outage history", 'o', {
            let (ctx, project_id, site_id) = (ctx.clone(), project_id.clone(), site_id.clone());
            move || {
                TableView::boxed(
                    &ctx,
                    OutagesSource {
                        ctx: ctx.clone(),
                        project_id: project_id.clone(),
                        site_id: site_id.clone(),
                    },
                )
            }
        }),
        MenuItem::new("Checks", "View uptime checks", 'c', {
            let ctx = ctx.clone();
            move || {
                TableView::boxed(
                    &ctx,
                    ChecksSource {
                        ctx: ctx.clone(),
                        project_id: project_id.clone(),
                        site_id: site_id.clone(),
                    },
                )
            }
        }),
    ];
    MenuView::boxed(ctx, site.name.clone(), items)
}

pub struct SiteDetails {
    ctx: ViewContext,
    project_id: String,
    site_id: String,
}

impl DetailSource for SiteDetails {
    type Record = Site;

    fn heading(&self) -> String {
        "Site Details".to_string()
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Site, ClientError>> {
        let client = self.ctx.client.clone();
        let (project_id, site_id) = (self.project_id.clone(), self.site_id.clone());
        Box::pin(async move { client.site(&project_id, &site_id).await })
    }

    fn lines(&self, s: &Site) -> Vec<Line<'static>> {
        let state_color = if s.is_down() { COLOR_ERROR } else { COLOR_SUCCESS };
        let mut lines = vec![
            field("Name", s.name.clone()),
            Line::default(),
            field("URL", s.url.clone()),
            Line::default(),
            colored_field("State", s.state.clone(), state_color),
            field("Active", yes_no(s.active)),
            field("Frequency", format!("{} minutes", s.frequency)),
            Line::default(),
            field("Match Type", s.match_type.clone().unwrap_or_else(|| "-".into())),
        ];
        if let Some(value) = &s.match_value {
            lines.push(field("Match", value.clone()));
        }
        if s.last_checked_at.is_some() {
            lines.push(Line::default());
            lines.push(field("Last Checked", format_time(s.last_checked_at.as_ref())));
        }
        lines
    }
}

pub struct OutagesSource {
    ctx: ViewContext,
    project_id: String,
    site_id: String,
}

impl TableSource for OutagesSource {
    type Record = Outage;

    fn title(&self) -> String {
        "Outages".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("DOWN AT", 2),
            Column::new("UP AT", 2),
            Column::new("STATUS", 1),
            Column::new("REASON", 3),
        ];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No outages found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Outage>, ClientError>> {
        let client = self.ctx.client.clone();
        let (project_id, site_id) = (self.project_id.clone(), self.site_id.clone());
        Box::pin(async move { client.outages(&project_id, &site_id).await })
    }

    fn row(&self, outage: &Outage) -> Vec<Cell<'static>> {
        let up_at = match &outage.up_at {
            Some(t) => format_minute(Some(t)),
            None => "Still down".to_string(),
        };
        vec![
            cell(format_minute(outage.down_at.as_ref())),
            cell(up_at),
            cell(outage.status.map_or_else(|| "-".to_string(), |s| s.to_string())),
            cell(truncate(&outage.reason, 40)),
        ]
    }
}

pub struct ChecksSource {
    ctx: ViewContext,
    project_id: String,
    site_id: String,
}

impl TableSource for ChecksSource {
    type Record = UptimeCheck;

    fn title(&self) -> String {
        "Checks".to_string()
    }

    fn heading(&self) -> String {
        "Uptime Checks".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("CREATED", 2),
            Column::new("LOCATION", 2),
            Column::new("UP", 1),
            Column::new("DURATION", 1),
        ];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No uptime checks found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<UptimeCheck>, ClientError>> {
        let client = self.ctx.client.clone();
        let (project_id, site_id) = (self.project_id.clone(), self.site_id.clone());
        Box::pin(async move { client.uptime_checks(&project_id, &site_id).await })
    }

    fn row(&self, check: &UptimeCheck) -> Vec<Cell<'static>> {
        vec![
            cell(format_minute(check.created_at.as_ref())),
            cell(check.location.clone()),
            up_down(check.up),
            cell(format!("{}ms", check.duration)),
        ]
    }
}
