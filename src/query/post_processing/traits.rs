//! 后处理动作依赖的表格能力
//!
//! 动作本身不实现排序和切片，全部委托给实现了 `TabularFrame` 的表

use crate::core::error::FrameResult;
use crate::core::DataFrame;

/// 表格能力接口
pub trait TabularFrame: Sized {
    /// 按行索引升序排序
    fn sort_index(&self) -> Self;

    /// 取前 `n` 行
    fn head(&self, n: usize) -> Self;

    /// 取后 `n` 行，保持原有相对顺序
    fn tail(&self, n: usize) -> Self;

    /// 按列排序
    fn sort_values(&self, field: &str, ascending: bool) -> FrameResult<Self>;

    fn row_count(&self) -> usize;
}

impl TabularFrame for DataFrame {
    fn sort_index(&self) -> Self {
        DataFrame::sort_index(self)
    }

    fn head(&self, n: usize) -> Self {
        DataFrame::head(self, n)
    }

    fn tail(&self, n: usize) -> Self {
        DataFrame::tail(self, n)
    }

    fn sort_values(&self, field: &str, ascending: bool) -> FrameResult<Self> {
        DataFrame::sort_values(self, field, ascending)
    }

    fn row_count(&self) -> usize {
        self.len()
    }
}
