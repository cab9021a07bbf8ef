use crate::{expressions::Literal, TransformError, TransformResult};

use super::Aggregator;

#[derive(Debug, Default)]
pub struct SumAgg {
    sum: f64,
}

impl SumAgg {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Aggregator for SumAgg {
    fn process(&mut self, input: &Literal) -> TransformResult<()> {
        match input {
            Literal::Null => Ok(()),
            Literal::Number(v) => {
                self.sum += v;
                Ok(())
            }
            _ => Err(TransformError::InterpretingError(format!(
                "sum not supported for {input:?}"
            ))),
        }
    }

    fn result(&self) -> TransformResult<Literal> {
        Ok(Literal::Number(self.sum))
    }
}
