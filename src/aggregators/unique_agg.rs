use std::collections::HashSet;

use crate::{expressions::Literal, TransformResult};

use super::Aggregator;

/// Number of distinct non-null values.
#[derive(Debug, Default)]
pub struct UniqueAgg {
    seen: HashSet<Literal>,
}

impl UniqueAgg {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Aggregator for UniqueAgg {
    fn process(&mut self, input: &Literal) -> TransformResult<()> {
        if !input.is_null() && !self.seen.contains(input) {
            self.seen.insert(input.clone());
        }
        Ok(())
    }

    fn result(&self) -> TransformResult<Literal> {
        Ok(Literal::Number(self.seen.len() as f64))
    }
}
