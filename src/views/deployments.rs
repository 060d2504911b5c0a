//! Deployment history and deployment details.

use futures::future::BoxFuture;
use ratatui::{text::Line, widgets::Cell};

use crate::api::models::Deployment;
use crate::app::{View, ViewContext};
use crate::error::ClientError;
use crate::views::detail::{DetailSource, DetailView};
use crate::views::helpers::{cell, field, format_time, truncate};
use crate::views::table::{Column, TableSource, TableView};

pub fn deployments_view(ctx: &ViewContext, project_id: String) -> Box<dyn View> {
    TableView::boxed(
        ctx,
        DeploymentsSource {
            ctx: ctx.clone(),
            project_id,
        },
    )
}

fn or_dash(s: &str) -> String {
    if s.is_empty() {
        "-".to_string()
    } else {
        s.to_string()
    }
}

pub struct DeploymentsSource {
    ctx: ViewContext,
    project_id: String,
}

impl TableSource for DeploymentsSource {
    type Record = Deployment;

    fn title(&self) -> String {
        "Deployments".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", 1),
            Column::new("ENVIRONMENT", 1),
            Column::new("REVISION", 1),
            Column::new("USER", 1),
            Column::new("REPOSITORY", 2),
            Column::new("CREATED", 2),
        ];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No deployments found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Deployment>, ClientError>> {
        let (client, id) = (self.ctx.client.clone(), self.project_id.clone());
        Box::pin(async move { client.deployments(&id).await })
    }

    fn row(&self, deployment: &Deployment) -> Vec<Cell<'static>> {
        vec![
            cell(deployment.id.clone()),
            cell(deployment.environment.clone()),
            cell(truncate(&deployment.revision, 12)),
            cell(or_dash(&deployment.local_username)),
            cell(truncate(&or_dash(&deployment.repository), 30)),
            cell(format_time(deployment.created_at.as_ref())),
        ]
    }

    fn open(&self, deployment: &Deployment) -> Option<Box<dyn View>> {
        Some(Box::new(DetailView::with_record(
            self.ctx.nav.clone(),
            DeploymentDetails(deployment.clone()),
            deployment.clone(),
        )))
    }
}

/// Details of a deployment already loaded by the list. Refreshing re-renders
/// the same record; there is no single-deployment endpoint to call.
pub struct DeploymentDetails(Deployment);

impl DetailSource for DeploymentDetails {
    type Record = Deployment;

    fn heading(&self) -> String {
        "Deployment Details".to_string()
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Deployment, ClientError>> {
        Box::pin(futures::future::ready(Ok(self.0.clone())))
    }

    fn lines(&self, d: &Deployment) -> Vec<Line<'static>> {
        vec![
            field("ID", d.id.clone()),
            Line::default(),
            field("Environment", d.environment.clone()),
            Line::default(),
            field("Revision", or_dash(&d.revision)),
            Line::default(),
            field("Repository", or_dash(&d.repository)),
            Line::default(),
            field("Local Username", or_dash(&d.local_username)),
            Line::default(),
            field(
                "Project ID",
                d.project_id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            ),
            Line::default(),
            field("Created", format_time(d.created_at.as_ref())),
        ]
    }
}
