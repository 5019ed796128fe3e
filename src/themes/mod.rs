pub mod flatten;
pub mod lookup;
pub mod normalize;

pub use flatten::{flatten_themes, ThemeRow};
pub use lookup::{CodeNameTable, MAJOR_THEMES};
pub use normalize::normalize_names;
