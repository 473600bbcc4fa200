pub mod check;
pub mod matrix;
pub mod resolve;
pub mod version;
