pub mod devtool;
pub mod mode;
