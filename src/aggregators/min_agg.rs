use crate::{expressions::Literal, interpreter::cmp_impl, TransformResult};

use super::Aggregator;

#[derive(Debug, Default)]
pub struct MinAgg {
    min: Option<Literal>,
}

impl MinAgg {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Aggregator for MinAgg {
    fn process(&mut self, input: &Literal) -> TransformResult<()> {
        if input.is_null() {
            return Ok(());
        }
        let replace = match &self.min {
            Some(min) => cmp_impl(input, min)?.is_lt(),
            None => true,
        };
        if replace {
            self.min = Some(input.clone());
        }
        Ok(())
    }

    fn result(&self) -> TransformResult<Literal> {
        Ok(self.min.clone().unwrap_or(Literal::Null))
    }
}
