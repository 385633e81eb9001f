pub mod convert;
pub mod seed;
pub mod split;
