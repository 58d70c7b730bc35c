pub mod layout;
pub mod show;
pub mod spec;
pub mod util;

pub use layout::*;
pub use show::*;
pub use spec::*;
pub use util::*;
