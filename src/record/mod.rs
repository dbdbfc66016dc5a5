pub mod batch;
pub mod transform;
pub mod validate;
pub mod value;

pub use batch::process_batch;
pub use transform::process;
pub use value::Value;
