pub mod load;
pub mod types;

pub use load::{load_records, parse_records};
pub use types::{render_value, ProjectRecord};
