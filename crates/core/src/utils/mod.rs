pub mod path;

pub use path::{absolutize, expand_home, relative_to};
