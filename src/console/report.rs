use std::io::Write;

use serde::Serialize;

use crate::comparison::comparisonrow::ComparisonRow;
use crate::quadratureerror::QuadratureError;

const RULE: &str = "==============================================================";

pub fn write_banner<W>(output: &mut W, integrand_description: &str) -> Result<(), QuadratureError> where
    W: Write {
    writeln!(output, "{}", RULE)?;
    writeln!(output, "   TRAPEZOIDAL VS ROMBERG INTEGRATION")?;
    writeln!(output, "{}", RULE)?;
    writeln!(output, "Integrand: {}", integrand_description)?;
    writeln!(output, "Note: the trapezoidal rule needs many subintervals to become accurate.")?;
    writeln!(output, "--------------------------------------------------------------")?;
    Ok(())
}

/// Renders the convergence table followed by the reference value. Rows are
/// written as they arrive, so a lazy row iterator streams to `output`.
pub fn write_table<W, I>(output: &mut W, rows: I, reference: f64, decimals: usize) -> Result<(), QuadratureError> where
    W: Write,
    I: IntoIterator<Item = ComparisonRow> {
    writeln!(output)?;
    writeln!(output, "{}", RULE)?;
    writeln!(output, "{:>3}  {:>16}  {:>16}  {:>16}  {:>16}", "n", "Trapezoidal", "Er(%)", "Romberg", "Er(%)")?;
    writeln!(output, "{}", RULE)?;
    for row in rows {
        writeln!(
            output,
            "{:>3}  {:>16.*}  {:>16.*}  {:>16.*}  {:>16.*}",
            row.n(),
            decimals, row.trapezoid(),
            decimals, row.trapezoid_error(),
            decimals, row.romberg(),
            decimals, row.romberg_error()
        )?;
    }
    writeln!(output, "{}", RULE)?;
    writeln!(output, "Reference value (high-level Romberg): {:.*}", decimals, reference)?;
    writeln!(output, "Note: Romberg reaches high accuracy with far fewer subintervals than the trapezoidal rule.")?;
    Ok(())
}

#[derive(Serialize)]
struct ComparisonReport<'a> {
    lower: f64,
    upper: f64,
    reference: f64,
    rows: &'a [ComparisonRow]
}

pub fn write_json<W>(output: &mut W, lower: f64, upper: f64, reference: f64, rows: &[ComparisonRow]) -> Result<(), QuadratureError> where
    W: Write {
    let report = ComparisonReport { lower, upper, reference, rows };
    serde_json::to_writer_pretty(&mut *output, &report)?;
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_uses_fixed_decimals() {
        let rows = vec![
            ComparisonRow::new(0, 0.5, 0.5, 0.25),
            ComparisonRow::new(1, 0.25, 0.25, 0.25)
        ];
        let mut output = Vec::new();
        write_table(&mut output, rows, 0.25, 4).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("  1            0.5000          100.0000            0.5000          100.0000"));
        assert!(text.contains("  2            0.2500            0.0000"));
        assert!(text.contains("Reference value (high-level Romberg): 0.2500"));
    }

    #[test]
    fn infinite_error_renders_as_inf() {
        let mut output = Vec::new();
        write_table(&mut output, vec![ComparisonRow::new(0, 1.0, 1.0, 0.0)], 0.0, 2).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("inf"));
    }

    #[test]
    fn json_report_holds_rows() {
        let rows = [ComparisonRow::new(0, 0.5, 0.5, 0.5)];
        let mut output = Vec::new();
        write_json(&mut output, 0.0, 1.0, 0.5, &rows).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["reference"], 0.5);
        assert_eq!(value["rows"].as_array().unwrap().len(), 1);
        assert_eq!(value["upper"], 1.0);
    }
}
