//! Teams, the per-team menu, members and invitations.

use futures::future::BoxFuture;
use ratatui::widgets::Cell;

use crate::api::models::{Team, TeamInvitation, TeamMember};
use crate::app::{View, ViewContext};
use crate::error::ClientError;
use crate::views::helpers::{cell, format_date_or, format_minute, yes_no};
use crate::views::menu::{MenuItem, MenuView};
use crate::views::table::{Column, TableSource, TableView};

pub fn teams_view(ctx: &ViewContext, account_id: String) -> Box<dyn View> {
    TableView::boxed(
        ctx,
        TeamsSource {
            ctx: ctx.clone(),
            account_id,
        },
    )
}

pub struct TeamsSource {
    ctx: ViewContext,
    account_id: String,
}

impl TableSource for TeamsSource {
    type Record = Team;

    fn title(&self) -> String {
        "Teams".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", 1),
            Column::new("NAME", 3),
            Column::new("CREATED", 2),
        ];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No teams found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Team>, ClientError>> {
        let (client, id) = (self.ctx.client.clone(), self.account_id.clone());
        Box::pin(async move { client.teams(&id).await })
    }

    fn row(&self, team: &Team) -> Vec<Cell<'static>> {
        vec![
            cell(team.id.clone()),
            cell(team.name.clone()),
            cell(format_minute(team.created_at.as_ref())),
        ]
    }

    fn open(&self, team: &Team) -> Option<Box<dyn View>> {
        Some(team_menu(&self.ctx, team))
    }
}

pub fn team_menu(ctx: &ViewContext, team: &Team) -> Box<dyn View> {
    let id = team.id.clone();
    let items = vec![
        MenuItem::new("Members", "View team members", 'm', {
            let (ctx, id) = (ctx.clone(), id.clone());
            move || {
                TableView::boxed(
                    &ctx,
                    TeamMembersSource {
                        ctx: ctx.clone(),
                        team_id: id.clone(),
                    },
                )
            }
        }),
        MenuItem::new("Invitations", "View pending invitations", 'i', {
            let ctx = ctx.clone();
            move || {
                TableView::boxed(
                    &ctx,
                    TeamInvitationsSource {
                        ctx: ctx.clone(),
                        team_id: id.clone(),
                    },
                )
            }
        }),
    ];
    MenuView::boxed(ctx, team.name.clone(), items)
}

pub struct TeamMembersSource {
    ctx: ViewContext,
    team_id: String,
}

impl TableSource for TeamMembersSource {
    type Record = TeamMember;

    fn title(&self) -> String {
        "Members".to_string()
    }

    fn heading(&self) -> String {
        "Team Members".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", 1),
            Column::new("NAME", 2),
            Column::new("EMAIL", 2),
            Column::new("ADMIN", 1),
        ];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No team members found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<TeamMember>, ClientError>> {
        let (client, id) = (self.ctx.client.clone(), self.team_id.clone());
        Box::pin(async move { client.team_members(&id).await })
    }

    fn row(&self, member: &TeamMember) -> Vec<Cell<'static>> {
        vec![
            cell(member.id.clone()),
            cell(member.name.clone()),
            cell(member.email.clone()),
            cell(yes_no(member.admin)),
        ]
    }
}

pub struct TeamInvitationsSource {
    ctx: ViewContext,
    team_id: String,
}

impl TableSource for TeamInvitationsSource {
    type Record = TeamInvitation;

    fn title(&self) -> String {
        "Invitations".to_string()
    }

    fn heading(&self) -> String {
        "Team Invitations".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", 1),
            Column::new("EMAIL", 2),
            Column::new("ADMIN", 1),
            Column::new("CREATED", 2),
            Column::new("ACCEPTED", 1),
        ];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No invitations found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<TeamInvitation>, ClientError>> {
        let (client, id) = (self.ctx.client.clone(), self.team_id.clone());
        Box::pin(async move { client.team_invitations(&id).await })
    }

    fn row(&self, inv: &TeamInvitation) -> Vec<Cell<'static>> {
        vec![
            cell(inv.id.clone()),
            cell(inv.email.clone()),
            cell(yes_no(inv.admin)),
            cell(format_minute(inv.created_at.as_ref())),
            cell(format_date_or(inv.accepted_at.as_ref(), "No")),
        ]
    }
}
