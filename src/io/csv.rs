//! CSV round-trip for sample collections.
//!
//! The format is deliberately plain: a header row of field names in fixed
//! declaration order, then one comma-joined row per sample. Values are
//! numeric or short category labels, so no quoting or delimiter escaping is
//! supported (accepted limitation of the upload contract).

use crate::core::errors::CsvError;
use crate::core::{FishParameter, FishSample, FreshnessCategory, Parameter};
use crate::scoring::calculate_freshness;

/// Emit samples as CSV. The optional `fishName` column is included only when
/// the first sample carries a name, mirroring header-from-first-record
/// emission.
pub fn generate_csv(samples: &[FishSample]) -> String {
    let with_name = samples.first().is_some_and(|s| s.fish_name.is_some());

    let mut columns: Vec<&str> = Parameter::ALL.iter().map(|p| p.field_name()).collect();
    columns.push("Skor");
    columns.push("Kategori");
    if with_name {
        columns.push("fishName");
    }

    let mut out = columns.join(",");
    out.push('\n');

    for sample in samples {
        let mut cells: Vec<String> = Parameter::ALL
            .iter()
            .map(|p| {
                sample
                    .parameters
                    .get(*p)
                    .map(|v| v.to_string())
                    .unwrap_or_default()
            })
            .collect();
        cells.push(sample.skor.to_string());
        cells.push(sample.kategori.to_string());
        if with_name {
            cells.push(sample.fish_name.clone().unwrap_or_default());
        }
        out.push_str(&cells.join(","));
        out.push('\n');
    }

    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Parameter(Parameter),
    Skor,
    Kategori,
    FishName,
    // Identity metadata is regenerated on parse, never read back.
    Ignored,
}

fn resolve_column(name: &str) -> Result<Column, CsvError> {
    if let Ok(parameter) = name.parse::<Parameter>() {
        return Ok(Column::Parameter(parameter));
    }
    match name {
        "Skor" | "skor" => Ok(Column::Skor),
        "Kategori" | "kategori" => Ok(Column::Kategori),
        "fishName" | "fishname" => Ok(Column::FishName),
        "id" | "timestamp" => Ok(Column::Ignored),
        _ => Err(CsvError::UnknownColumn {
            name: name.to_string(),
        }),
    }
}

/// Parse CSV text back into samples.
///
/// Header cells map values by position. Skor and Kategori cells are
/// validated when present but the derived fields are always recomputed from
/// the parameter values, and each parsed sample gets a fresh id and
/// timestamp. Malformed rows are hard errors rather than NaN-filled samples.
pub fn parse_csv(text: &str) -> Result<Vec<FishSample>, CsvError> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header_line) = lines.next().ok_or(CsvError::Empty)?;
    let columns: Vec<Column> = header_line
        .split(',')
        .map(|cell| resolve_column(cell.trim()))
        .collect::<Result<_, _>>()?;

    if !columns
        .iter()
        .any(|c| matches!(c, Column::Parameter(_)))
    {
        return Err(CsvError::NoParameterColumns);
    }

    let mut samples = Vec::new();
    for (index, line) in lines {
        let line_no = index + 1;
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        if cells.len() != columns.len() {
            return Err(CsvError::ColumnCount {
                line: line_no,
                expected: columns.len(),
                found: cells.len(),
            });
        }

        let mut params = FishParameter::default();
        let mut fish_name = None;

        for (column, cell) in columns.iter().zip(&cells) {
            match column {
                Column::Parameter(parameter) => {
                    if cell.is_empty() {
                        continue;
                    }
                    let value = cell.parse::<u8>().map_err(|_| CsvError::InvalidNumber {
                        line: line_no,
                        column: parameter.field_name().to_string(),
                        value: cell.to_string(),
                    })?;
                    params.set(*parameter, Some(value));
                }
                Column::Skor => {
                    if !cell.is_empty() && cell.parse::<f64>().is_err() {
                        return Err(CsvError::InvalidNumber {
                            line: line_no,
                            column: "Skor".to_string(),
                            value: cell.to_string(),
                        });
                    }
                }
                Column::Kategori => {
                    if !cell.is_empty() && cell.parse::<FreshnessCategory>().is_err() {
                        return Err(CsvError::InvalidCategory {
                            line: line_no,
                            value: cell.to_string(),
                        });
                    }
                }
                Column::FishName => {
                    if !cell.is_empty() {
                        fish_name = Some(cell.to_string());
                    }
                }
                Column::Ignored => {}
            }
        }

        let mut sample = calculate_freshness(&params);
        sample.fish_name = fish_name;
        samples.push(sample);
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_params() -> FishParameter {
        FishParameter {
            mata: Some(8),
            insang: Some(7),
            lendir: Some(9),
            daging: Some(8),
            bau: Some(7),
            tekstur: Some(8),
        }
    }

    #[test]
    fn header_uses_fixed_field_order() {
        let csv = generate_csv(&[calculate_freshness(&full_params())]);
        let header = csv.lines().next().unwrap();
        assert_eq!(header, "Mata,Insang,Lendir,Daging,Bau,Tekstur,Skor,Kategori");
    }

    #[test]
    fn round_trip_reproduces_values_and_derived_fields() {
        let original = calculate_freshness(&full_params());
        let parsed = parse_csv(&generate_csv(&[original.clone()])).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].parameters, original.parameters);
        assert_eq!(parsed[0].skor, original.skor);
        assert_eq!(parsed[0].kategori, original.kategori);
        // Identity is regenerated on parse.
        assert_ne!(parsed[0].id, original.id);
    }

    #[test]
    fn derived_fields_recomputed_when_absent() {
        let csv = "Mata,Insang,Lendir,Daging,Bau,Tekstur\n8,7,9,8,7,8\n";
        let parsed = parse_csv(csv).unwrap();
        assert_eq!(parsed[0].skor, 7.83);
        assert_eq!(parsed[0].kategori, FreshnessCategory::Sedang);
    }

    #[test]
    fn fish_name_survives_round_trip() {
        let mut sample = calculate_freshness(&full_params());
        sample.fish_name = Some("Tongkol".to_string());
        let parsed = parse_csv(&generate_csv(&[sample])).unwrap();
        assert_eq!(parsed[0].fish_name.as_deref(), Some("Tongkol"));
    }

    #[test]
    fn empty_parameter_cells_parse_as_unset() {
        let csv = "Mata,Insang,Lendir,Daging,Bau,Tekstur\n8,,9,,7,\n";
        let parsed = parse_csv(csv).unwrap();
        assert_eq!(parsed[0].parameters.insang, None);
        assert_eq!(parsed[0].skor, 8.0);
    }

    #[test]
    fn rejects_unknown_column() {
        let err = parse_csv("Mata,Sirip\n8,7\n").unwrap_err();
        assert_eq!(
            err,
            CsvError::UnknownColumn {
                name: "Sirip".to_string()
            }
        );
    }

    #[test]
    fn rejects_arity_mismatch() {
        let err = parse_csv("Mata,Insang\n8\n").unwrap_err();
        assert_eq!(
            err,
            CsvError::ColumnCount {
                line: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn rejects_non_numeric_parameter_cell() {
        let err = parse_csv("Mata,Insang\n8,bagus\n").unwrap_err();
        assert_eq!(
            err,
            CsvError::InvalidNumber {
                line: 2,
                column: "Insang".to_string(),
                value: "bagus".to_string()
            }
        );
    }

    #[test]
    fn rejects_unknown_category_label() {
        let err = parse_csv("Mata,Kategori\n8,Istimewa\n").unwrap_err();
        assert_eq!(
            err,
            CsvError::InvalidCategory {
                line: 2,
                value: "Istimewa".to_string()
            }
        );
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(parse_csv(""), Err(CsvError::Empty));
        assert_eq!(parse_csv("\n\n"), Err(CsvError::Empty));
    }
}
