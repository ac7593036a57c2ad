pub mod model;
pub mod oid;
pub mod read;
