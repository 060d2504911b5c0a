//! Projects and the per-project menu.

use futures::future::BoxFuture;
use ratatui::widgets::Cell;

use crate::api::models::{Integration, Project};
use crate::app::{View, ViewContext};
use crate::error::ClientError;
use crate::ui::theme::COLOR_ERROR;
use crate::views::helpers::{cell, colored, yes_no};
use crate::views::menu::{MenuItem, MenuView};
use crate::views::table::{Column, TableSource, TableView};
use crate::views::{checkins, deployments, faults, uptime};

/// Projects, scoped to an account when one is given.
pub fn projects_view(ctx: &ViewContext, account_id: Option<String>) -> Box<dyn View> {
    TableView::boxed(
        ctx,
        ProjectsSource {
            ctx: ctx.clone(),
            account_id,
        },
    )
}

pub struct ProjectsSource {
    ctx: ViewContext,
    account_id: Option<String>,
}

impl TableSource for ProjectsSource {
    type Record = Project;

    fn title(&self) -> String {
        "Projects".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", 1),
            Column::new("NAME", 3),
            Column::new("ACTIVE", 1),
            Column::new("FAULTS", 1),
            Column::new("UNRESOLVED", 1),
        ];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No projects found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Project>, ClientError>> {
        let (client, account_id) = (self.ctx.client.clone(), self.account_id.clone());
        Box::pin(async move { client.projects(account_id.as_deref()).await })
    }

    fn row(&self, project: &Project) -> Vec<Cell<'static>> {
        let unresolved = project.unresolved_fault_count.to_string();
        vec![
            cell(project.id.clone()),
            cell(project.name.clone()),
            cell(yes_no(project.active)),
            cell(project.fault_count.to_string()),
            if project.unresolved_fault_count > 0 {
                colored(unresolved, COLOR_ERROR)
            } else {
                cell(unresolved)
            },
        ]
    }

    fn open(&self, project: &Project) -> Option<Box<dyn View>> {
        Some(project_menu(&self.ctx, project))
    }
}

pub fn project_menu(ctx: &ViewContext, project: &Project) -> Box<dyn View> {
    let id = project.id.clone();
    let items = vec![
        MenuItem::new(
            "Faults",
            format!("View faults ({} unresolved)", project.unresolved_fault_count),
            'f',
            {
                let (ctx, id) = (ctx.clone(), id.clone());
                move || faults::faults_view(&ctx, id.clone())
            },
        ),
        MenuItem::new("Deployments", "View deployment history", 'd', {
            let (ctx, id) = (ctx.clone(), id.clone());
            move || deployments::deployments_view(&ctx, id.clone())
        }),
        MenuItem::new("Uptime Sites", "View uptime monitoring", 'u', {
            let (ctx, id) = (ctx.clone(), id.clone());
            move || uptime::sites_view(&ctx, id.clone())
        }),
        MenuItem::new("Check-ins", "View check-ins", 'c', {
            let (ctx, id) = (ctx.clone(), id.clone());
            move || checkins::check_ins_view(&ctx, id.clone())
        }),
        MenuItem::new("Integrations", "View integrations", 'i', {
            let ctx = ctx.clone();
            move || {
                TableView::boxed(
                    &ctx,
                    IntegrationsSource {
                        ctx: ctx.clone(),
                        project_id: id.clone(),
                    },
                )
            }
        }),
    ];
    MenuView::boxed(ctx, project.name.clone(), items)
}

pub struct IntegrationsSource {
    ctx: ViewContext,
    project_id: String,
}

impl TableSource for IntegrationsSource {
    type Record = Integration;

    fn title(&self) -> String {
        "Integrations".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", 1),
            Column::new("TYPE", 2),
            Column::new("ACTIVE", 1),
            Column::new("EVENTS", 3),
        ];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No integrations found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Integration>, ClientError>> {
        let (client, id) = (self.ctx.client.clone(), self.project_id.clone());
        Box::pin(async move { client.integrations(&id).await })
    }

    fn row(&self, integration: &Integration) -> Vec<Cell<'static>> {
        vec![
            cell(integration.id.clone()),
            cell(integration.kind.clone()),
            cell(yes_no(integration.active)),
            cell(integration.events.join(", ")),
        ]
    }
}
