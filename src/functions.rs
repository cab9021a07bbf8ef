use std::collections::HashMap;

use crate::{
    aggregators::{
        Aggregator, AvgAgg, CountAgg, MaxAgg, MedianAgg, MinAgg, SumAgg, UniqueAgg,
    },
    expressions::Literal,
    interpreter::{
        abs_impl, ceil_impl, divide_impl, floor_impl, minus_impl, multiply_impl, plus_impl,
        round_impl, sqrt_impl,
    },
    TransformResult,
};

pub type AggregatorBuilder = fn() -> Box<dyn Aggregator>;

#[derive(Debug, Clone, Copy)]
pub enum Function {
    /// reduces its single argument to one value
    Aggregate(AggregatorBuilder),
    /// applied to every value of its single argument
    Map(fn(Literal) -> TransformResult<Literal>),
    /// applied pairwise to its two arguments
    Zip(fn(Literal, Literal) -> TransformResult<Literal>),
}

/// Functions callable from role expressions, looked up case-insensitively.
#[derive(Debug, Clone)]
pub struct FunctionsRegistry {
    functions: HashMap<String, Function>,
}

impl Default for FunctionsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionsRegistry {
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("sum", Function::Aggregate(|| Box::new(SumAgg::new())));
        registry.register("mean", Function::Aggregate(|| Box::new(AvgAgg::new())));
        registry.register("avg", Function::Aggregate(|| Box::new(AvgAgg::new())));
        registry.register("median", Function::Aggregate(|| Box::new(MedianAgg::new())));
        registry.register("min", Function::Aggregate(|| Box::new(MinAgg::new())));
        registry.register("max", Function::Aggregate(|| Box::new(MaxAgg::new())));
        registry.register("count", Function::Aggregate(|| Box::new(CountAgg::new())));
        registry.register("unique", Function::Aggregate(|| Box::new(UniqueAgg::new())));

        registry.register("abs", Function::Map(abs_impl));
        registry.register("round", Function::Map(round_impl));
        registry.register("floor", Function::Map(floor_impl));
        registry.register("ceil", Function::Map(ceil_impl));
        registry.register("sqrt", Function::Map(sqrt_impl));

        registry.register("add", Function::Zip(plus_impl));
        registry.register("subtract", Function::Zip(minus_impl));
        registry.register("multiply", Function::Zip(multiply_impl));
        registry.register("divide", Function::Zip(divide_impl));
        registry
    }

    pub fn empty() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &str, function: Function) {
        self.functions.insert(name.to_lowercase(), function);
    }

    pub fn get_function(&self, name: &str) -> Option<Function> {
        self.functions.get(&name.to_lowercase()).copied()
    }
}
