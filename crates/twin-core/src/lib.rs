//! Core types for the twin ordering front-end.
//!
//! The catalog is read-only input. A [`wizard::WizardSession`] walks one
//! menu item through the steps its category requires and emits a priced
//! [`cart::CartLine`], which the [`cart::Cart`] aggregates.

pub mod cart;
pub mod catalog;
pub mod category;
pub mod idgen;
pub mod item;
pub mod money;
pub mod options;
pub mod profile;
pub mod validation;
pub mod wizard;
