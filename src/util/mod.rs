pub mod fmt;
pub mod hash;
