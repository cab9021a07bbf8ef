use sqlparser::{
    ast::{
        BinaryOperator, Expr, Function, FunctionArg, FunctionArgExpr, Ident, UnaryOperator,
        Value,
    },
    dialect::GenericDialect,
    parser::Parser,
    tokenizer::Token,
};

use crate::{
    expressions::{BinaryOp, Expression, Literal, UnaryOp},
    TransformError, TransformResult,
};

/// Parse a single role expression such as `sum(profit)` or `country`.
///
/// Bare and backtick-quoted identifiers are column references; single- or
/// double-quoted text is a string constant. Column names that collide with
/// SQL keywords (`interval`, `case`, ...) need backticks.
pub fn parse_expression(text: &str) -> TransformResult<Expression> {
    let dialect = GenericDialect {};
    let mut parser = Parser::new(&dialect).try_with_sql(text)?;
    let expr = parser.parse_expr()?;
    let next = parser.peek_token();
    if next.token != Token::EOF {
        return Err(TransformError::ParserError(format!(
            "unexpected `{}` after expression in `{text}`",
            next.token
        )));
    }
    ast_expr_to_expression(&expr)
}

fn ast_ident_to_expression(ident: &Ident) -> Expression {
    match ident.quote_style {
        Some('"') | Some('\'') => Expression::Literal(Literal::String(ident.value.clone())),
        _ => Expression::FieldRef(ident.value.clone()),
    }
}

fn ast_value_to_literal(value: &Value) -> TransformResult<Literal> {
    match value {
        Value::Number(v, _) => v.parse::<f64>().map(Literal::Number).map_err(|e| {
            TransformError::ParserError(format!("invalid number `{v}`: {e}"))
        }),
        Value::SingleQuotedString(v) | Value::DoubleQuotedString(v) => {
            Ok(Literal::String(v.to_string()))
        }
        Value::Boolean(v) => Ok(Literal::Bool(*v)),
        Value::Null => Ok(Literal::Null),
        _ => Err(TransformError::ParserError(format!(
            "unsupported constant: {value}"
        ))),
    }
}

fn ast_binary_op_to_binary_op(op: &BinaryOperator) -> TransformResult<BinaryOp> {
    match op {
        BinaryOperator::Plus => Ok(BinaryOp::Plus),
        BinaryOperator::Minus => Ok(BinaryOp::Minus),
        BinaryOperator::Multiply => Ok(BinaryOp::Multiply),
        BinaryOperator::Divide => Ok(BinaryOp::Divide),
        BinaryOperator::Modulo => Ok(BinaryOp::Modulo),
        _ => Err(TransformError::ParserError(format!(
            "unsupported operator: {op}"
        ))),
    }
}

pub(crate) fn ast_expr_to_expression(expr: &Expr) -> TransformResult<Expression> {
    match expr {
        Expr::Identifier(ident) => Ok(ast_ident_to_expression(ident)),
        Expr::Value(v) => ast_value_to_literal(v).map(Expression::Literal),
        Expr::Nested(inner) => {
            ast_expr_to_expression(inner).map(|inner| Expression::Nested(Box::new(inner)))
        }
        Expr::BinaryOp { left, op, right } => {
            let (left, op, right) = (
                ast_expr_to_expression(left)?,
                ast_binary_op_to_binary_op(op)?,
                ast_expr_to_expression(right)?,
            );
            Ok(Expression::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            })
        }
        Expr::UnaryOp { op, expr } => match op {
            UnaryOperator::Minus => Ok(Expression::UnaryOp {
                op: UnaryOp::Neg,
                input: Box::new(ast_expr_to_expression(expr)?),
            }),
            UnaryOperator::Plus => ast_expr_to_expression(expr),
            _ => Err(TransformError::ParserError(format!(
                "unsupported operator: {op}"
            ))),
        },
        // keywords such as `user` or `current_date` come back as argument-less
        // special functions; as role expressions they name columns
        Expr::Function(Function { name, special: true, .. }) => {
            Ok(Expression::FieldRef(name.to_string()))
        }
        Expr::Function(Function {
            name,
            args,
            over,
            distinct,
            order_by,
            ..
        }) => {
            if *distinct || over.is_some() || !order_by.is_empty() {
                return Err(TransformError::ParserError(format!(
                    "DISTINCT, OVER and ORDER BY are not supported in function calls: {expr}"
                )));
            }
            let args = args
                .iter()
                .map(|arg| match arg {
                    FunctionArg::Named { arg, .. } => ast_function_arg_to_expression(arg),
                    FunctionArg::Unnamed(arg) => ast_function_arg_to_expression(arg),
                })
                .collect::<TransformResult<Vec<_>>>()?;
            Ok(Expression::Function {
                name: name.to_string(),
                args,
            })
        }
        _ => Err(TransformError::ParserError(format!(
            "unsupported expression: {expr}"
        ))),
    }
}

fn ast_function_arg_to_expression(arg: &FunctionArgExpr) -> TransformResult<Expression> {
    match arg {
        FunctionArgExpr::Expr(expr) => ast_expr_to_expression(expr),
        FunctionArgExpr::Wildcard => Ok(Expression::Wildcard),
        FunctionArgExpr::QualifiedWildcard(name) => Err(TransformError::ParserError(
            format!("unsupported argument: {name}.*"),
        )),
    }
}
