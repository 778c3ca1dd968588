pub mod document;
pub mod frame;
pub mod storage;
