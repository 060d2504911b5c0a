//! Accounts: the root screen, the per-account menu, users and invitations.

use futures::future::BoxFuture;
use ratatui::widgets::Cell;

use crate::api::models::{Account, AccountInvitation, AccountUser};
use crate::app::{View, ViewContext};
use crate::error::ClientError;
use crate::views::helpers::{cell, format_date_or, format_minute, yes_no};
use crate::views::menu::{MenuItem, MenuView};
use crate::views::table::{Column, TableSource, TableView};
use crate::views::{projects, statuspages, teams};

/// The root of the hierarchy.
pub fn accounts_view(ctx: &ViewContext) -> Box<dyn View> {
    TableView::boxed(ctx, AccountsSource { ctx: ctx.clone() })
}

pub struct AccountsSource {
    ctx: ViewContext,
}

impl TableSource for AccountsSource {
    type Record = Account;

    fn title(&self) -> String {
        "Accounts".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", 1),
            Column::new("NAME", 2),
            Column::new("EMAIL", 2),
            Column::new("ACTIVE", 1),
        ];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No accounts found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Account>, ClientError>> {
        let client = self.ctx.client.clone();
        Box::pin(async move { client.accounts().await })
    }

    fn row(&self, account: &Account) -> Vec<Cell<'static>> {
        vec![
            cell(account.id.clone()),
            cell(account.name.clone()),
            cell(account.email.clone()),
            cell(yes_no(account.active)),
        ]
    }

    fn open(&self, account: &Account) -> Option<Box<dyn View>> {
        Some(account_menu(&self.ctx, account))
    }
}

pub fn account_menu(ctx: &ViewContext, account: &Account) -> Box<dyn View> {
    let id = account.id.clone();
    let items = vec![
        MenuItem::new("Projects", "View projects", 'p', {
            let (ctx, id) = (ctx.clone(), id.clone());
            move || projects::projects_view(&ctx, Some(id.clone()))
        }),
        MenuItem::new("Teams", "View teams", 't', {
            let (ctx, id) = (ctx.clone(), id.clone());
            move || teams::teams_view(&ctx, id.clone())
        }),
        MenuItem::new("Users", "View account users", 'u', {
            let (ctx, id) = (ctx.clone(), id.clone());
            move || {
                TableView::boxed(
                    &ctx,
                    AccountUsersSource {
                        ctx: ctx.clone(),
                        account_id: id.clone(),
                    },
                )
            }
        }),
        MenuItem::new("Invitations", "View pending invitations", 'i', {
            let (ctx, id) = (ctx.clone(), id.clone());
            move || {
                TableView::boxed(
                    &ctx,
                    AccountInvitationsSource {
                        ctx: ctx.clone(),
                        account_id: id.clone(),
                    },
                )
            }
        }),
        MenuItem::new("Status Pages", "View status pages", 's', {
            let ctx = ctx.clone();
            move || statuspages::status_pages_view(&ctx, id.clone())
        }),
    ];
    MenuView::boxed(ctx, account.name.clone(), items)
}

pub struct AccountUsersSource {
    ctx: ViewContext,
    account_id: String,
}

impl TableSource for AccountUsersSource {
    type Record = AccountUser;

    fn title(&self) -> String {
        "Users".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", 1),
            Column::new("NAME", 2),
            Column::new("EMAIL", 2),
            Column::new("ROLE", 1),
        ];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No users found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<AccountUser>, ClientError>> {
        let (client, id) = (self.ctx.client.clone(), self.account_id.clone());
        Box::pin(async move { client.account_users(&id).await })
    }

    fn row(&self, user: &AccountUser) -> Vec<Cell<'static>> {
        vec![
            cell(user.id.clone()),
            cell(user.name.clone()),
            cell(user.email.clone()),
            cell(user.role.clone()),
        ]
    }
}

pub struct AccountInvitationsSource {
    ctx: ViewContext,
    account_id: String,
}

impl TableSource for AccountInvitationsSource {
    type Record = AccountInvitation;

    fn title(&self) -> String {
        "Invitations".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", 1),
            Column::new("EMAIL", 2),
            Column::new("ROLE", 1),
            Column::new("CREATED", 2),
            Column::new("ACCEPTED", 1),
        ];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No invitations found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<AccountInvitation>, ClientError>> {
        let (client, id) = (self.ctx.client.clone(), self.account_id.clone());
        Box::pin(async move { client.account_invitations(&id).await })
    }

    fn row(&self, inv: &AccountInvitation) -> Vec<Cell<'static>> {
        vec![
            cell(inv.id.clone()),
            cell(inv.email.clone()),
            cell(inv.role.clone()),
            cell(format_minute(inv.created_at.as_ref())),
            cell(format_date_or(inv.accepted_at.as_ref(), "No")),
        ]
    }
}
