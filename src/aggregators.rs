use crate::{expressions::Literal, TransformResult};

mod avg_agg;
mod count_agg;
mod max_agg;
mod median_agg;
mod min_agg;
mod sum_agg;
mod unique_agg;
pub use avg_agg::AvgAgg;
pub use count_agg::CountAgg;
pub use max_agg::MaxAgg;
pub use median_agg::MedianAgg;
pub use min_agg::MinAgg;
pub use sum_agg::SumAgg;
pub use unique_agg::UniqueAgg;

/// Reduces the values of one column (within one scope) to a single literal.
pub trait Aggregator {
    /// fold one input value into the running state, nulls included
    fn process(&mut self, input: &Literal) -> TransformResult<()>;

    /// calculate result based on the state folded so far
    fn result(&self) -> TransformResult<Literal>;
}
