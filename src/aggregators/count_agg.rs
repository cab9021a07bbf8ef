use crate::{expressions::Literal, TransformResult};

use super::Aggregator;

/// Counts non-null values. `count(*)` is answered by the scope row count instead.
#[derive(Debug, Default)]
pub struct CountAgg {
    count: u64,
}

impl CountAgg {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Aggregator for CountAgg {
    fn process(&mut self, input: &Literal) -> TransformResult<()> {
        if !input.is_null() {
            self.count += 1;
        }
        Ok(())
    }

    fn result(&self) -> TransformResult<Literal> {
        Ok(Literal::Number(self.count as f64))
    }
}
