//! Faults, the per-fault menu, fault details, notices and affected users.

use futures::future::BoxFuture;
use ratatui::{style::Color, text::Line, widgets::Cell};

use crate::api::models::{AffectedUser, Fault, Notice};
use crate::app::{View, ViewContext};
use crate::error::ClientError;
use crate::ui::theme::{COLOR_ERROR, COLOR_SUCCESS, COLOR_WARNING};
use crate::views::detail::{DetailSource, DetailView};
use crate::views::helpers::{cell, colored, colored_field, field, format_time, truncate};
use crate::views::menu::{MenuItem, MenuView};
use crate::views::table::{Column, TableSource, TableView};

pub fn faults_view(ctx: &ViewContext, project_id: String) -> Box<dyn View> {
    TableView::boxed(
        ctx,
        FaultsSource {
            ctx: ctx.clone(),
            project_id,
        },
    )
}

/// Display status and its color. Resolved takes precedence over ignored.
pub fn fault_status(fault: &Fault) -> (&'static str, Color) {
    if fault.resolved {
        ("Resolved", COLOR_SUCCESS)
    } else if fault.ignored {
        ("Ignored", COLOR_WARNING)
    } else {
        ("Active", COLOR_ERROR)
    }
}

pub struct FaultsSource {
    ctx: ViewContext,
    project_id: String,
}

impl TableSource for FaultsSource {
    type Record = Fault;

    fn title(&self) -> String {
        "Faults".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", 1),
            Column::new("CLASS", 2),
            Column::new("MESSAGE", 4),
            Column::new("ENV", 1),
            Column::new("NOTICES", 1),
            Column::new("STATUS", 1),
            Column::new("LAST SEEN", 2),
        ];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No faults found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Fault>, ClientError>> {
        let (client, id) = (self.ctx.client.clone(), self.project_id.clone());
        Box::pin(async move { client.faults(&id).await })
    }

    fn row(&self, fault: &Fault) -> Vec<Cell<'static>> {
        let (status, color) = fault_status(fault);
        vec![
            cell(fault.id.clone()),
            cell(fault.klass.clone()),
            cell(truncate(&fault.message, 40)),
            cell(fault.environment.clone()),
            cell(fault.notices_count.to_string()),
            colored(status, color),
            cell(format_time(fault.last_notice_at.as_ref())),
        ]
    }

    fn open(&self, fault: &Fault) -> Option<Box<dyn View>> {
        Some(fault_menu(&self.ctx, &self.project_id, fault))
    }
}

pub fn fault_menu(ctx: &ViewContext, project_id: &str, fault: &Fault) -> Box<dyn View> {
    let (project_id, fault_id) = (project_id.to_string(), fault.id.clone());
    let items = vec![
        MenuItem::new("Details", "View fault details", 'd', {
            let (ctx, project_id, fault_id) = (ctx.clone(), project_id.clone(), fault_id.clone());
            move || {
                DetailView::boxed(
                    &ctx,
                    FaultDetails {
                        ctx: ctx.clone(),
                        project_id: project_id.clone(),
                        fault_id: fault_id.clone(),
                    },
                )
            }
        }),
        MenuItem::new(
            "Notices",
            format!("View notices ({} total)", fault.notices_count),
            'n',
            {
                let (ctx, project_id, fault_id) =
                    (ctx.clone(), project_id.clone(), fault_id.clone());
                move || {
                    TableView::boxed(
                        &ctx,
                        NoticesSource {
                            ctx: ctx.clone(),
                            project_id: project_id.clone(),
                            fault_id: fault_id.clone(),
                        },
                    )
                }
            },
        ),
        MenuItem::new("Affected Users", "View affected users", 'u', {
            let ctx = ctx.clone();
            move || {
                TableView::boxed(
                    &ctx,
                    AffectedUsersSource {
                        ctx: ctx.clone(),
                        project_id: project_id.clone(),
                        fault_id: fault_id.clone(),
                    },
                )
            }
        }),
    ];
    MenuView::boxed(ctx, truncate(&fault.klass, 30), items)
}

pub struct FaultDetails {
    ctx: ViewContext,
    project_id: String,
    fault_id: String,
}

impl DetailSource for FaultDetails {
    type Record = Fault;

    fn heading(&self) -> String {
        "Fault Details".to_string()
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Fault, ClientError>> {
        let client = self.ctx.client.clone();
        let (project_id, fault_id) = (self.project_id.clone(), self.fault_id.clone());
        Box::pin(async move { client.fault(&project_id, &fault_id).await })
    }

    fn lines(&self, fault: &Fault) -> Vec<Line<'static>> {
        let (status, color) = fault_status(fault);
        let mut lines = vec![
            field("Class", fault.klass.clone()),
            field("Message", fault.message.clone()),
            field("Environment", fault.environment.clone()),
            field("Component", fault.component.clone().unwrap_or_else(|| "-".into())),
            field("Action", fault.action.clone().unwrap_or_else(|| "-".into())),
            Line::default(),
            field("Created", format_time(fault.created_at.as_ref())),
            field("Last Notice", format_time(fault.last_notice_at.as_ref())),
            field("Notices", fault.notices_count.to_string()),
            colored_field("Status", status, color),
        ];
        if let Some(assignee) = &fault.assignee {
            lines.push(field(
                "Assignee",
                format!("{} <{}>", assignee.name, assignee.email),
            ));
        }
        if !fault.tags.is_empty() {
            lines.push(field("Tags", fault.tags.join(", ")));
        }
        if !fault.url.is_empty() {
            lines.push(Line::default());
            lines.push(field("URL", fault.url.clone()));
        }
        lines
    }
}

pub struct NoticesSource {
    ctx: ViewContext,
    project_id: String,
    fault_id: String,
}

impl TableSource for NoticesSource {
    type Record = Notice;

    fn title(&self) -> String {
        "Notices".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", 2),
            Column::new("MESSAGE", 4),
            Column::new("ENVIRONMENT", 1),
            Column::new("HOSTNAME", 2),
            Column::new("CREATED", 2),
        ];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No notices found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Notice>, ClientError>> {
        let client = self.ctx.client.clone();
        let (project_id, fault_id) = (self.project_id.clone(), self.fault_id.clone());
        Box::pin(async move { client.notices(&project_id, &fault_id).await })
    }

    fn row(&self, notice: &Notice) -> Vec<Cell<'static>> {
        vec![
            cell(truncate(&notice.id, 15)),
            cell(truncate(&notice.message, 50)),
            cell(notice.environment_name.clone()),
            cell(notice.environment.hostname.clone().unwrap_or_else(|| "-".into())),
            cell(format_time(notice.created_at.as_ref())),
        ]
    }
}

pub struct AffectedUsersSource {
    ctx: ViewContext,
    project_id: String,
    fault_id: String,
}

impl TableSource for AffectedUsersSource {
    type Record = AffectedUser;

    fn title(&self) -> String {
        "Affected Users".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[Column::new("USER", 3), Column::new("OCCURRENCES", 1)];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No affected users found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<AffectedUser>, ClientError>> {
        let client = self.ctx.client.clone();
        let (project_id, fault_id) = (self.project_id.clone(), self.fault_id.clone());
        Box::pin(async move { client.affected_users(&project_id, &fault_id).await })
    }

    fn row(&self, user: &AffectedUser) -> Vec<Cell<'static>> {
        vec![cell(user.user.clone()), cell(user.count.to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fault(resolved: bool, ignored: bool) -> Fault {
        Fault {
            resolved,
            ignored,
            ..Fault::default()
        }
    }

    #[test]
    fn test_fault_status() {
        assert_eq!(fault_status(&fault(false, false)).0, "Active");
        assert_eq!(fault_status(&fault(true, false)).0, "Resolved");
        assert_eq!(fault_status(&fault(false, true)).0, "Ignored");
        assert_eq!(fault_status(&fault(true, true)).0, "Resolved");
    }
}
