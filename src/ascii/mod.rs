pub mod number;

pub use number::{digit, integer, natural};
