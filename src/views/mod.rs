//! Concrete screens.
//!
//! Every screen is one of three shapes: a [`TableView`] over a
//! [`TableSource`], a [`MenuView`] of child screens, or a [`DetailView`]
//! over a [`DetailSource`]. The hierarchy is
//! Accounts → account menu → Projects/Teams/Users/Invitations/Status Pages,
//! and Projects → project menu → Faults/Deployments/Uptime/Check-ins/Integrations.

pub mod accounts;
pub mod checkins;
pub mod deployments;
pub mod detail;
pub mod faults;
pub mod helpers;
pub mod menu;
pub mod projects;
pub mod statuspages;
pub mod table;
pub mod teams;
pub mod uptime;

pub use detail::{DetailSource, DetailView, DETAILS_NAME};
pub use menu::{MenuItem, MenuView};
pub use table::{Column, TableSource, TableView};

use crate::app::{View, ViewContext};

/// The screen the browser starts on.
pub fn root_view(ctx: &ViewContext) -> Box<dyn View> {
    accounts::accounts_view(ctx)
}
