use std::fmt;

use log::debug;

use super::action::PostProcessingAction;
use super::traits::TabularFrame;
use crate::core::error::FrameResult;

/// 有序的后处理动作列表
///
/// 按加入顺序依次应用，任一动作失败即中止并返回错误
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostProcessingPipeline {
    actions: Vec<PostProcessingAction>,
}

impl PostProcessingPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: PostProcessingAction) {
        self.actions.push(action);
    }

    pub fn with(mut self, action: PostProcessingAction) -> Self {
        self.push(action);
        self
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PostProcessingAction> {
        self.actions.iter()
    }

    pub fn resolve<F: TabularFrame>(&self, frame: F) -> FrameResult<F> {
        debug!("执行后处理管道 {}", self);
        self.actions
            .iter()
            .try_fold(frame, |current, action| action.resolve(&current))
    }
}

impl FromIterator<PostProcessingAction> for PostProcessingPipeline {
    fn from_iter<I: IntoIterator<Item = PostProcessingAction>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PostProcessingPipeline {
    type Item = &'a PostProcessingAction;
    type IntoIter = std::slice::Iter<'a, PostProcessingAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PostProcessingPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.actions.iter().map(|a| a.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::FrameError;
    use crate::core::{DataFrame, Value};

    fn frame() -> DataFrame {
        let rows = [5, 3, 9, 1, 7]
            .into_iter()
            .map(|v| vec![Value::Int(v)])
            .collect();
        DataFrame::from_rows(vec!["v".to_string()], rows).expect("构造测试数据失败")
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = PostProcessingPipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.resolve(frame()), Ok(frame()));
    }

    #[test]
    fn test_actions_apply_in_order() {
        let sort_then_head: PostProcessingPipeline = [
            PostProcessingAction::sort_field(Some("v:desc")).expect("应构造成功"),
            PostProcessingAction::head(2),
        ]
        .into_iter()
        .collect();
        let top = sort_then_head.resolve(frame()).expect("管道执行失败");
        assert_eq!(top.rows(), &[vec![Value::Int(9)], vec![Value::Int(7)]]);

        let head_then_sort = PostProcessingPipeline::new()
            .with(PostProcessingAction::head(2))
            .with(PostProcessingAction::sort_field(Some("v:desc")).expect("应构造成功"));
        let top = head_then_sort.resolve(frame()).expect("管道执行失败");
        assert_eq!(top.rows(), &[vec![Value::Int(5)], vec![Value::Int(3)]]);
    }

    #[test]
    fn test_error_aborts_pipeline() {
        let pipeline = PostProcessingPipeline::new()
            .with(PostProcessingAction::head(3))
            .with(PostProcessingAction::sort_field(Some("missing:asc")).expect("应构造成功"));
        assert_eq!(
            pipeline.resolve(frame()),
            Err(FrameError::ColumnNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_display() {
        let pipeline = PostProcessingPipeline::new()
            .with(PostProcessingAction::sort_index())
            .with(PostProcessingAction::tail(1));
        assert_eq!(pipeline.to_string(), "[('sort_index'), ('tail': ('count': 1))]");
        assert_eq!(pipeline.len(), 2);
    }
}
