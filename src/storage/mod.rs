pub mod file;

pub use file::{StoreData, load_store, save_store};
