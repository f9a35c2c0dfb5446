pub mod handlers;
pub mod shell;
pub mod views;

pub use handlers::{configure, SiteState};
pub use shell::{render_document, render_section, render_stack, Shell};
