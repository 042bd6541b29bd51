mod core;
mod declaration;
mod parsed;

pub use self::core::*;
pub use declaration::*;
pub use parsed::*;
