mod file_kind;
mod question;
mod upload;

pub use file_kind::*;
pub use question::*;
pub use upload::*;
