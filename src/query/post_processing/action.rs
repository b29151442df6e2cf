//! 后处理动作
//!
//! 查询构建阶段记录的结果整形操作，在数据物化后按顺序重放。
//! 动作构造后不可变，可对任意物化结果重复应用。

use std::fmt;

use log::debug;

use super::traits::TabularFrame;
use crate::core::error::{FrameError, FrameResult};

/// 排序顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// 解析 `asc` / `desc`，忽略大小写和首尾空白
    pub fn from_string(order: &str) -> FrameResult<Self> {
        match order.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(FrameError::invalid_argument(format!(
                "Expected sort order 'asc' or 'desc'. Got '{}'",
                order
            ))),
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortOrder::Asc)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// 后处理动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostProcessingAction {
    SortIndex,
    Head { count: usize },
    Tail { count: usize },
    SortField { field: String, order: SortOrder },
}

impl PostProcessingAction {
    pub fn sort_index() -> Self {
        PostProcessingAction::SortIndex
    }

    pub fn head(count: usize) -> Self {
        PostProcessingAction::Head { count }
    }

    pub fn tail(count: usize) -> Self {
        PostProcessingAction::Tail { count }
    }

    /// 从 `field:order` 形式的排序串构造，例如 `_doc:desc`
    ///
    /// 参数缺失、不是恰好两段、字段为空或顺序无法识别时返回 `InvalidArgument`。
    /// 空字段名（如 `:asc`）有意拒绝，空列名在物化结果中不可能存在
    pub fn sort_field(sort_params: Option<&str>) -> FrameResult<Self> {
        let sort_params =
            sort_params.ok_or_else(|| FrameError::invalid_argument("Expected valid string"))?;

        let parts: Vec<&str> = sort_params.split(':').collect();
        let (field, order) = match parts.as_slice() {
            [field, order] if !field.is_empty() => (*field, *order),
            _ => {
                return Err(FrameError::invalid_argument(format!(
                    "Expected ES sort params string (e.g. _doc:desc). Got '{}'",
                    sort_params
                )))
            }
        };

        Ok(PostProcessingAction::SortField {
            field: field.to_string(),
            order: SortOrder::from_string(order)?,
        })
    }

    /// 动作类型标签
    pub fn kind(&self) -> &'static str {
        match self {
            PostProcessingAction::SortIndex => "sort_index",
            PostProcessingAction::Head { .. } => "head",
            PostProcessingAction::Tail { .. } => "tail",
            PostProcessingAction::SortField { .. } => "sort_field",
        }
    }

    /// 对物化结果应用动作，返回新表
    pub fn resolve<F: TabularFrame>(&self, frame: &F) -> FrameResult<F> {
        debug!("应用后处理动作 {} ({} 行)", self, frame.row_count());
        match self {
            PostProcessingAction::SortIndex => Ok(frame.sort_index()),
            PostProcessingAction::Head { count } => Ok(frame.head(*count)),
            PostProcessingAction::Tail { count } => Ok(frame.tail(*count)),
            PostProcessingAction::SortField { field, order } => {
                frame.sort_values(field, order.is_ascending())
            }
        }
    }
}

impl fmt::Display for PostProcessingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostProcessingAction::SortIndex => write!(f, "('{}')", self.kind()),
            PostProcessingAction::Head { count } | PostProcessingAction::Tail { count } => {
                write!(f, "('{}': ('count': {}))", self.kind(), count)
            }
            PostProcessingAction::SortField { field, order } => write!(
                f,
                "('{}': ('sort_field': '{}', 'sort_order': {}))",
                self.kind(),
                field,
                order
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DataFrame, Value};

    fn frame() -> DataFrame {
        DataFrame::with_index(
            vec![3, 1, 2, 0],
            vec!["a".to_string()],
            vec![
                vec![Value::Int(30)],
                vec![Value::Int(10)],
                vec![Value::Int(20)],
                vec![Value::Int(0)],
            ],
        )
        .expect("构造测试数据失败")
    }

    #[test]
    fn test_sort_order_from_string() {
        assert_eq!(SortOrder::from_string("asc"), Ok(SortOrder::Asc));
        assert_eq!(SortOrder::from_string(" DESC "), Ok(SortOrder::Desc));
        assert!(SortOrder::from_string("up").is_err());
    }

    #[test]
    fn test_sort_field_parsing() {
        let action = PostProcessingAction::sort_field(Some("a:asc")).expect("应构造成功");
        assert_eq!(
            action,
            PostProcessingAction::SortField {
                field: "a".to_string(),
                order: SortOrder::Asc,
            }
        );

        for bad in [Some("a"), Some("a:b:c"), Some("a:sideways"), Some(":asc"), None] {
            let result = PostProcessingAction::sort_field(bad);
            assert!(
                matches!(result, Err(FrameError::InvalidArgument(_))),
                "{:?} 应被拒绝",
                bad
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(PostProcessingAction::sort_index().to_string(), "('sort_index')");
        assert_eq!(PostProcessingAction::head(5).to_string(), "('head': ('count': 5))");
        assert_eq!(PostProcessingAction::tail(2).to_string(), "('tail': ('count': 2))");
        let sort = PostProcessingAction::sort_field(Some("_doc:desc")).expect("应构造成功");
        assert_eq!(
            sort.to_string(),
            "('sort_field': ('sort_field': '_doc', 'sort_order': desc))"
        );
    }

    #[test]
    fn test_resolve_variants() {
        let df = frame();

        let sorted = PostProcessingAction::sort_index().resolve(&df).expect("排序失败");
        assert_eq!(sorted.index(), &[0, 1, 2, 3]);

        let head = PostProcessingAction::head(2).resolve(&df).expect("head 失败");
        assert_eq!(head.index(), &[3, 1]);

        let tail = PostProcessingAction::tail(2).resolve(&df).expect("tail 失败");
        assert_eq!(tail.index(), &[2, 0]);

        let desc = PostProcessingAction::sort_field(Some("a:desc"))
            .and_then(|a| a.resolve(&df))
            .expect("字段排序失败");
        assert_eq!(desc.index(), &[3, 2, 1, 0]);
    }

    #[test]
    fn test_resolve_leaves_input_untouched() {
        let df = frame();
        let _ = PostProcessingAction::sort_index().resolve(&df).expect("排序失败");
        assert_eq!(df, frame());
    }
}
