//! One module per subcommand, each exposing an `execute` function.

pub mod add;
pub mod completions;
pub mod delete;
pub mod generate;
pub mod list;
pub mod lock;
pub mod unlock;
