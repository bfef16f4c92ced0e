pub mod builder;
pub mod defaults;

pub use builder::build_hint;
