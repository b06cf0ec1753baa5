//! "Add news" wizard
//!
//! - wizard.rs: step state machine, validation and markdown helpers
//! - view_model.rs: signals and the async save command
//! - view.rs, steps.rs: Leptos components

mod steps;
mod view;
mod view_model;
pub mod wizard;

pub use view::NewsWizardModal;
pub use view_model::{NewsWizardViewModel, SaveFn};
