mod resource;
mod validation;

pub use resource::{Resource, ResourceConfig, SortDirection, SortSpec, Stored, UniqueConstraint};
pub use validation::{optional_text, parse_date, text_list, FieldErrors};
