use pointseries::{
    data_types::{parse_timestamp_millis, DataType},
    expressions::{BinaryOp, Expression, Literal},
    parser::parse_expression,
    TransformError,
};

fn field(name: &str) -> Expression {
    Expression::FieldRef(name.to_owned())
}

#[test]
fn parse_role_expressions() {
    assert_eq!(parse_expression("country"), Ok(field("country")));
    assert_eq!(parse_expression("`unit price`"), Ok(field("unit price")));
    assert_eq!(
        parse_expression("sum(profit)"),
        Ok(Expression::Function {
            name: "sum".to_owned(),
            args: vec![field("profit")],
        })
    );
    assert_eq!(
        parse_expression("count(*)"),
        Ok(Expression::Function {
            name: "count".to_owned(),
            args: vec![Expression::Wildcard],
        })
    );
    assert_eq!(
        parse_expression("5"),
        Ok(Expression::Literal(Literal::Number(5.0)))
    );
    assert_eq!(
        parse_expression("'US'"),
        Ok(Expression::Literal(Literal::String("US".to_owned())))
    );
    assert_eq!(
        parse_expression("\"US\""),
        Ok(Expression::Literal(Literal::String("US".to_owned())))
    );
    assert_eq!(
        parse_expression("profit + 1"),
        Ok(Expression::BinaryOp {
            op: BinaryOp::Plus,
            left: Box::new(field("profit")),
            right: Box::new(Expression::Literal(Literal::Number(1.0))),
        })
    );
}

#[test]
fn parse_errors() {
    assert!(matches!(
        parse_expression("profit +"),
        Err(TransformError::ParserError(_))
    ));
    assert!(matches!(
        parse_expression("profit profit"),
        Err(TransformError::ParserError(_))
    ));
    assert!(matches!(
        parse_expression("profit > 1"),
        Err(TransformError::ParserError(_))
    ));
    assert!(matches!(
        parse_expression("sum(distinct profit)"),
        Err(TransformError::ParserError(_))
    ));
    assert!(matches!(
        parse_expression("sum(profit) over (partition by country)"),
        Err(TransformError::ParserError(_))
    ));
}

#[test]
fn keyword_column_names() {
    assert_eq!(parse_expression("user"), Ok(field("user")));
    assert_eq!(parse_expression("current_date"), Ok(field("current_date")));
    for name in ["interval", "case", "not", "cast", "extract", "position", "exists"] {
        assert_eq!(parse_expression(&format!("`{name}`")), Ok(field(name)));
    }
    assert_eq!(
        parse_expression("sum(`interval`)"),
        Ok(Expression::Function {
            name: "sum".to_owned(),
            args: vec![field("interval")],
        })
    );
}

#[test]
fn expression_display() {
    let expression = parse_expression("sum(profit) - 20").unwrap();
    assert_eq!(expression.to_string(), "sum(profit) - 20");
    let expression = parse_expression("max(\"US\", (cost))").unwrap();
    assert_eq!(expression.to_string(), "max('US', (cost))");
}

#[test]
fn symbols_skip_function_names_and_duplicates() {
    let expression = parse_expression("add(profit, sum(profit), cost)").unwrap();
    assert_eq!(expression.symbols(), vec!["profit", "cost"]);
    assert!(parse_expression("count(*)").unwrap().symbols().is_empty());
    assert!(parse_expression("5").unwrap().symbols().is_empty());
}

#[test]
fn literal_equality() {
    assert_eq!(Literal::Number(0.0), Literal::Number(-0.0));
    assert_eq!(Literal::Number(f64::NAN), Literal::Number(f64::NAN));
    assert_ne!(Literal::Number(1.0), Literal::String("1".to_owned()));
    assert_ne!(Literal::Null, Literal::String("null".to_owned()));
}

#[test]
fn literal_display() {
    assert_eq!(Literal::Number(30.0).to_string(), "30");
    assert_eq!(Literal::Number(2.5).to_string(), "2.5");
    assert_eq!(Literal::Bool(true).to_string(), "true");
    assert_eq!(Literal::Null.to_string(), "null");
    assert_eq!(Literal::Number(-0.0).to_string(), "0");
    assert_eq!(Literal::Number(0.000001).to_string(), "0.000001");
    assert_eq!(Literal::Number(1e20).to_string(), "100000000000000000000");
    assert_eq!(Literal::Number(1e21).to_string(), "1e+21");
    assert_eq!(Literal::Number(1.23e32).to_string(), "1.23e+32");
    assert_eq!(Literal::Number(1e-7).to_string(), "1e-7");
    assert_eq!(Literal::Number(-1.5e-7).to_string(), "-1.5e-7");
}

#[test]
fn text_to_number_coercion() {
    let number = |text: &str| DataType::Number.normalize(Literal::String(text.to_owned()));
    assert_eq!(number(" 12 "), Literal::Number(12.0));
    assert_eq!(number("1e3"), Literal::Number(1000.0));
    assert_eq!(number(""), Literal::Number(0.0));
    assert_eq!(number("Infinity"), Literal::Number(f64::INFINITY));
    assert_eq!(number("-Infinity"), Literal::Number(f64::NEG_INFINITY));
    assert_eq!(number("inf"), Literal::Number(f64::NAN));
    assert_eq!(number("infinity"), Literal::Number(f64::NAN));
    assert_eq!(number("NaN"), Literal::Number(f64::NAN));
    assert_eq!(
        DataType::String.normalize(Literal::Number(1e21)),
        Literal::String("1e+21".to_owned())
    );
}

#[test]
fn normalize_values() {
    assert_eq!(
        DataType::String.normalize(Literal::Number(30.0)),
        Literal::String("30".to_owned())
    );
    assert_eq!(
        DataType::Number.normalize(Literal::String("12".to_owned())),
        Literal::Number(12.0)
    );
    assert_eq!(
        DataType::Date.normalize(Literal::String("2018-01-01".to_owned())),
        Literal::Number(1514764800000.0)
    );
    assert_eq!(
        DataType::Date.normalize(Literal::Number(1000.0)),
        Literal::Number(1000.0)
    );
    assert_eq!(
        DataType::Date.normalize(Literal::String("someday".to_owned())),
        Literal::Number(f64::NAN)
    );
    assert_eq!(DataType::Null.normalize(Literal::Bool(true)), Literal::Bool(true));
}

#[test]
fn parse_timestamps() {
    assert_eq!(
        parse_timestamp_millis("2018-01-01T00:00:00+01:00"),
        Some(1514761200000)
    );
    assert_eq!(
        parse_timestamp_millis("2018-01-01 00:00:00.250"),
        Some(1514764800250)
    );
    assert_eq!(
        parse_timestamp_millis("Mon, 01 Jan 2018 00:00:00 +0000"),
        Some(1514764800000)
    );
    assert_eq!(parse_timestamp_millis("2018-13-01"), None);
}
