use std::fs::File;

use pointseries::{
    data_types::DataType,
    datatable::{csv::read_csv, Column, RowId},
    expressions::Literal,
    pointseries, PointSeriesArgs, Role, TransformError,
};

#[test]
fn infers_column_types_from_records() {
    let datatable = read_csv(File::open("tests/assets/sales.csv").unwrap()).unwrap();
    assert_eq!(
        datatable.columns,
        vec![
            Column::new("country", DataType::String),
            Column::new("profit", DataType::Number),
            Column::new("time", DataType::Date),
        ]
    );
    assert_eq!(datatable.rows.len(), 4);
    assert_eq!(datatable.rows[0].row_id, RowId::Index(0));
    assert_eq!(datatable.rows[1].get("profit"), &Literal::Number(20.0));
    assert_eq!(datatable.rows[3].get("profit"), &Literal::Null);
    assert_eq!(
        datatable.rows[3].get("time"),
        &Literal::String("2018-01-03".to_owned())
    );
}

#[test]
fn pointseries_from_csv() {
    let datatable = read_csv(File::open("tests/assets/sales.csv").unwrap()).unwrap();
    let args = PointSeriesArgs::new().x("time").y("sum(profit)");
    let model = pointseries(&datatable, &args).unwrap();
    let points: Vec<(&Literal, &Literal)> = model
        .rows
        .iter()
        .map(|point| (&point[&Role::X], &point[&Role::Y]))
        .collect();
    assert_eq!(
        points,
        vec![
            (&Literal::Number(1514764800000.0), &Literal::Number(15.0)),
            (&Literal::Number(1514851200000.0), &Literal::Number(20.0)),
            (&Literal::Number(1514937600000.0), &Literal::Number(0.0)),
        ]
    );
}

#[test]
fn mixed_columns_fall_back_to_string() {
    let input = "id,code,when\n1,7,2020-05-01\n2,x,3\n";
    let datatable = read_csv(input.as_bytes()).unwrap();
    assert_eq!(
        datatable.columns,
        vec![
            Column::new("id", DataType::Number),
            Column::new("code", DataType::String),
            Column::new("when", DataType::String),
        ]
    );
    assert_eq!(datatable.rows[0].get("code"), &Literal::String("7".to_owned()));
}

#[test]
fn quoted_fields_and_missing_trailing_newline() {
    let input = "city,population\n\"Paris, FR\",2100000\n\"Lyon\",516000";
    let datatable = read_csv(input.as_bytes()).unwrap();
    assert_eq!(datatable.rows.len(), 2);
    assert_eq!(
        datatable.rows[0].get("city"),
        &Literal::String("Paris, FR".to_owned())
    );
    assert_eq!(
        datatable.rows[1].get("population"),
        &Literal::Number(516000.0)
    );
}

#[test]
fn columns_without_values_are_strings() {
    let datatable = read_csv("a,b\n,1\n".as_bytes()).unwrap();
    assert_eq!(datatable.columns[0], Column::new("a", DataType::String));
    assert_eq!(datatable.rows[0].get("a"), &Literal::Null);
}

#[test]
fn rejects_malformed_input() {
    assert!(matches!(
        read_csv("".as_bytes()),
        Err(TransformError::LoadError(_))
    ));
    assert!(matches!(
        read_csv("a,b\n1,2,3\n".as_bytes()),
        Err(TransformError::LoadError(_))
    ));
}
