mod io;

pub use io::{atomic_write_creating_dirs, atomic_write_str};
