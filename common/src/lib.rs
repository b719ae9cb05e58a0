pub mod constants;
pub mod maze;
