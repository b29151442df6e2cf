pub mod post_processing;

pub use post_processing::{PostProcessingAction, PostProcessingPipeline, SortOrder, TabularFrame};
