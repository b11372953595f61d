pub mod args;
pub mod error;
pub mod model;
pub mod storage;
pub mod controller {
    pub mod history;
    pub mod request;
    pub mod round;
}
pub mod view {
    pub mod history;
    pub mod index;
    pub mod round;
}

pub mod mvu {
    pub mod round;
    pub mod runtime;
}

pub use controller::round::{SharedRound, routes};
pub use storage::{LogStore, StorageError, store_from_args};
