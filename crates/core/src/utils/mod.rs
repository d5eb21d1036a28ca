pub mod id_utils;
pub mod time_utils;

pub use id_utils::{IdGenerator, UuidGenerator};
pub use time_utils::{Clock, SystemClock};
