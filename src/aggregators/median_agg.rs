use crate::{expressions::Literal, TransformError, TransformResult};

use super::Aggregator;

#[derive(Debug, Default)]
pub struct MedianAgg {
    values: Vec<f64>,
}

impl MedianAgg {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Aggregator for MedianAgg {
    fn process(&mut self, input: &Literal) -> TransformResult<()> {
        match input {
            Literal::Null => Ok(()),
            Literal::Number(v) => {
                self.values.push(*v);
                Ok(())
            }
            _ => Err(TransformError::InterpretingError(format!(
                "median not supported for {input:?}"
            ))),
        }
    }

    fn result(&self) -> TransformResult<Literal> {
        if self.values.is_empty() {
            return Ok(Literal::Null);
        }
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };
        Ok(Literal::Number(median))
    }
}
