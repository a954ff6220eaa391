pub mod computer;
pub mod filter;
