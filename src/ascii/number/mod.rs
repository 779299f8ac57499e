pub mod digit;
pub mod integer;
pub mod natural;

pub use digit::digit;
pub use integer::integer;
pub use natural::natural;
