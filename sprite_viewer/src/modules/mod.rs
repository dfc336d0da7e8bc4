pub mod collection;
pub mod export;
pub mod frame;
pub mod viewer;
