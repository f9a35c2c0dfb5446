pub mod legal;

pub use legal::{format_date, LegalBody, LegalCollection, LegalDocument};
