pub mod decimal;
pub mod validate;
