pub mod char;
pub mod letter;

pub use char::{char, is_char, one_of};
pub use letter::letter;
