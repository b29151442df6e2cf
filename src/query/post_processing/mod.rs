//! 结果后处理模块
//!
//! 查询构建时记录的排序、截取操作，在远端结果物化后依次重放

pub mod action;
pub mod pipeline;
pub mod traits;

pub use action::{PostProcessingAction, SortOrder};
pub use pipeline::PostProcessingPipeline;
pub use traits::TabularFrame;
