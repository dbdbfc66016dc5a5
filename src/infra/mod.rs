pub mod acli;
pub mod process;
