use crate::{expressions::Literal, TransformError, TransformResult};

use super::Aggregator;

#[derive(Debug, Default)]
pub struct AvgAgg {
    sum: f64,
    count: u64,
}

impl AvgAgg {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Aggregator for AvgAgg {
    fn process(&mut self, input: &Literal) -> TransformResult<()> {
        match input {
            Literal::Null => Ok(()),
            Literal::Number(v) => {
                self.sum += v;
                self.count += 1;
                Ok(())
            }
            _ => Err(TransformError::InterpretingError(format!(
                "mean not supported for {input:?}"
            ))),
        }
    }

    fn result(&self) -> TransformResult<Literal> {
        if self.count == 0 {
            Ok(Literal::Null)
        } else {
            Ok(Literal::Number(self.sum / (self.count as f64)))
        }
    }
}
