use crate::{expressions::Literal, interpreter::cmp_impl, TransformResult};

use super::Aggregator;

#[derive(Debug, Default)]
pub struct MaxAgg {
    max: Option<Literal>,
}

impl MaxAgg {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Aggregator for MaxAgg {
    fn process(&mut self, input: &Literal) -> TransformResult<()> {
        if input.is_null() {
            return Ok(());
        }
        let replace = match &self.max {
            Some(max) => cmp_impl(input, max)?.is_gt(),
            None => true,
        };
        if replace {
            self.max = Some(input.clone());
        }
        Ok(())
    }

    fn result(&self) -> TransformResult<Literal> {
        Ok(self.max.clone().unwrap_or(Literal::Null))
    }
}
