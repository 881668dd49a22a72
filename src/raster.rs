pub mod merge;
pub mod ops;
pub mod scale;
