pub mod common;
pub mod find;
pub mod sql;

pub use common::*;
pub use find::*;
pub use sql::*;
