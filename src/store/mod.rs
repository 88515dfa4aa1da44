pub mod value;

pub use value::{CacheValue, ValueType};
