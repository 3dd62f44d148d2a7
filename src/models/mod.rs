mod batch;
mod contact;
mod phone;

pub use batch::*;
pub use contact::*;
pub use phone::*;
