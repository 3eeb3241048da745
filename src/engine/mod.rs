pub mod filter;
pub mod parser;
pub mod record;
