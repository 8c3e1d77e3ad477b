pub mod boards;

pub use boards::*;
