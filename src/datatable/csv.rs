use std::io::Read;

use csv_core::{ReadRecordResult, Reader, ReaderBuilder};
use log::debug;

use crate::{
    data_types::{parse_timestamp_millis, DataType},
    expressions::Literal,
    TransformError, TransformResult,
};

use super::{Column, Datatable, Row, RowId};

const NUM_RECORDS_TO_INFER_SCHEMA: usize = 10;

/// Load a datatable from csv text. The first record holds the column names;
/// column types are inferred from the records that follow.
///
/// Empty cells read as null. Row ids are zero-based record indices.
pub fn read_csv<R: Read>(mut reader: R) -> TransformResult<Datatable> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    let mut records = CsvRecordReader::new(&input);

    let headers = records.try_read_next()?.ok_or(TransformError::LoadError(
        "Provided csv input is empty.".to_owned(),
    ))?;
    let mut body = Vec::new();
    while let Some(record) = records.try_read_next()? {
        if record.len() != headers.len() {
            return Err(TransformError::LoadError(format!(
                "Csv record {} has {} fields but there are {} headers.",
                body.len() + 1,
                record.len(),
                headers.len()
            )));
        }
        body.push(record);
    }

    let mut data_types: Vec<Option<DataType>> = vec![None; headers.len()];
    for record in body.iter().take(NUM_RECORDS_TO_INFER_SCHEMA) {
        for (idx, field) in record.iter().enumerate() {
            if !field.is_empty() {
                data_types[idx] = Some(determine_data_type(field, data_types[idx]));
            }
        }
    }
    let columns: Vec<Column> = Iterator::zip(headers.into_iter(), data_types.into_iter())
        .map(|(name, data_type)| Column::new(name, data_type.unwrap_or(DataType::String)))
        .collect();

    let rows = body
        .into_iter()
        .enumerate()
        .map(|(idx, record)| Row {
            row_id: RowId::Index(idx as u64),
            values: Iterator::zip(columns.iter(), record.into_iter())
                .map(|(column, field)| {
                    (column.name.clone(), convert_field(field, column.data_type))
                })
                .collect(),
        })
        .collect::<Vec<_>>();

    debug!(
        "loaded csv datatable with {} columns and {} rows",
        columns.len(),
        rows.len()
    );
    Ok(Datatable::new(columns, rows))
}

fn convert_field(field: String, data_type: DataType) -> Literal {
    if field.is_empty() {
        return Literal::Null;
    }
    match data_type {
        DataType::Number => DataType::Number.normalize(Literal::String(field)),
        _ => Literal::String(field),
    }
}

fn looks_like_number(field: &str) -> bool {
    let trimmed = field.trim();
    trimmed.bytes().any(|b| b.is_ascii_digit()) && trimmed.parse::<f64>().is_ok()
}

fn determine_data_type(field: &str, type_hint: Option<DataType>) -> DataType {
    let data_type = if looks_like_number(field) {
        DataType::Number
    } else if parse_timestamp_millis(field).is_some() {
        DataType::Date
    } else {
        DataType::String
    };
    match type_hint {
        None => data_type,
        Some(hint) if hint == data_type => data_type,
        Some(hint) => match data_type_generality(&data_type).cmp(&data_type_generality(&hint)) {
            std::cmp::Ordering::Less => hint,
            std::cmp::Ordering::Equal => DataType::String,
            std::cmp::Ordering::Greater => data_type,
        },
    }
}

/// a data type with higher generality wins when reconciling two data types
fn data_type_generality(data_type: &DataType) -> u8 {
    match data_type {
        // numbers and dates do not mix, they fall back to string
        DataType::Number => 1,
        DataType::Date => 1,
        // everything in a csv can be read as a string
        DataType::String => u8::MAX,
        DataType::Null => 0,
    }
}

struct CsvRecordReader<'a> {
    input: &'a [u8],
    outputs_buf: Vec<u8>,
    field_ends: Vec<usize>,
    csv_reader: Reader,
}

impl<'a> CsvRecordReader<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            outputs_buf: vec![0; 4096],
            field_ends: vec![0; 256],
            csv_reader: ReaderBuilder::new().build(),
        }
    }

    fn try_read_next(&mut self) -> TransformResult<Option<Vec<String>>> {
        let mut output_len = 0;
        let mut ends_len = 0;
        loop {
            let input = self.input;
            let (result, num_read, num_written, num_ends) = self.csv_reader.read_record(
                input,
                &mut self.outputs_buf[output_len..],
                &mut self.field_ends[ends_len..],
            );
            self.input = &input[num_read..];
            output_len += num_written;
            ends_len += num_ends;
            match result {
                // the next call sees empty input, which csv_core reads as end of input
                ReadRecordResult::InputEmpty => continue,
                ReadRecordResult::OutputFull => {
                    let len = self.outputs_buf.len();
                    self.outputs_buf.resize(len * 2, 0);
                }
                ReadRecordResult::OutputEndsFull => {
                    let len = self.field_ends.len();
                    self.field_ends.resize(len * 2, 0);
                }
                ReadRecordResult::Record => {
                    let mut offset = 0;
                    let record = self.field_ends[..ends_len]
                        .iter()
                        .map(|&end| {
                            // from_utf8_lossy will check the UTF-8 validity against the bytes
                            let v = String::from_utf8_lossy(&self.outputs_buf[offset..end]);
                            offset = end;
                            v.to_string()
                        })
                        .collect();
                    return Ok(Some(record));
                }
                ReadRecordResult::End => return Ok(None),
            }
        }
    }
}
