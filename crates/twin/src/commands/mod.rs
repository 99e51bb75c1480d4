//! Command handlers, one module per subcommand.

pub mod categories;
pub mod completion;
pub mod menu;
pub mod order;
pub mod profile;
pub mod quote;
pub mod version;
