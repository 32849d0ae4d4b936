pub mod embed;
pub mod query;
pub mod score;
