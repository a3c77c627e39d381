//! Marks files as modified without changing their contents.

pub mod error;
pub mod touch;
pub mod utils;

pub use error::{ TouchError, TouchResult };
pub use touch::{ touch_file, touch_file_with, TouchOutcome, TouchStrategy };
pub use utils::is_file;
