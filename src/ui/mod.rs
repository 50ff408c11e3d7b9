pub mod footer;
pub mod help;
pub mod layout;
pub mod wizard_ui;
