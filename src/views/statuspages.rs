use futures::future::BoxFuture;
use ratatui::widgets::Cell;

use crate::api::models::StatusPage;
use crate::app::{View, ViewContext};
use crate::error::ClientError;
use crate::views::helpers::cell;
use crate::views::table::{Column, TableSource, TableView};

pub fn status_pages_view(ctx: &ViewContext, account_id: String) -> Box<dyn View> {
    TableView::boxed(
        ctx,
        StatusPagesSource {
            ctx: ctx.clone(),
            account_id,
        },
    )
}

pub struct StatusPagesSource {
    ctx: ViewContext,
    account_id: String,
}

impl TableSource for StatusPagesSource {
    type Record = StatusPage;

    fn title(&self) -> String {
        "Status Pages".to_string()
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", 1),
            Column::new("NAME", 2),
            Column::new("URL", 3),
            Column::new("SITES", 1),
            Column::new("CHECK-INS", 1),
        ];
        COLUMNS
    }

    fn empty_message(&self) -> &'static str {
        "No status pages found"
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<StatusPage>, ClientError>> {
        let (client, id) = (self.ctx.client.clone(), self.account_id.clone());
        Box::pin(async move { client.status_pages(&id).await })
    }

    fn row(&self, page: &StatusPage) -> Vec<Cell<'static>> {
        vec![
            cell(page.id.clone()),
            cell(page.name.clone()),
            cell(page.url.clone()),
            cell(page.sites.len().to_string()),
            cell(page.check_ins.len().to_string()),
        ]
    }
}
