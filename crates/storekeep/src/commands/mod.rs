//! Command handler modules, one per resource.

pub mod auth_cmd;
pub mod categories;
pub mod config_cmd;
pub mod customers;
pub mod dashboard;
pub mod employees;
pub mod products;
pub mod suppliers;
pub mod util;

use storekeep_core::Dispatcher;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Route a parsed command to its handler. `Config`, `Completions`, and
/// `Logout` are handled in `main` before a dispatcher exists.
pub async fn dispatch(
    cmd: Command,
    dispatcher: &Dispatcher,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Login(args) => auth_cmd::login(dispatcher, args, global).await,
        Command::Products(args) => products::handle(dispatcher, args, global).await,
        Command::Categories(args) => categories::handle(dispatcher, args, global).await,
        Command::Customers(args) => customers::handle(dispatcher, args, global).await,
        Command::Employees(args) => employees::handle(dispatcher, args, global).await,
        Command::Suppliers(args) => suppliers::handle(dispatcher, args, global).await,
        Command::Dashboard(args) => dashboard::handle(dispatcher, args, global).await,
        Command::Logout | Command::Config(_) | Command::Completions(_) => {
            unreachable!("handled before dispatch")
        }
    }
}
