pub mod dates;
pub mod debounce;
pub mod paths;
