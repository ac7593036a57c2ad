pub mod dates;
pub mod registry;
pub mod rule;
pub mod status;
