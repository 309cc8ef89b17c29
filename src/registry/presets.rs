//! Tabular display presets
//!
//! The commonly configured options of the tabular-data library, with their
//! stock defaults and validators.

use crate::error::OptionError;
use crate::literal::Literal;
use crate::registry::validators::{
    is_bool, is_float, is_int, is_nonnegative_int, is_one_of, is_optional, is_text,
};
use crate::registry::{OptionTable, Validator};

fn text(values: &[&str]) -> Vec<Literal> {
    values.iter().map(|v| Literal::from(*v)).collect()
}

/// Build an [`OptionTable`] holding the standard `display`, `mode` and
/// `compute` options
pub fn tabular_options() -> Result<OptionTable, OptionError> {
    let definitions: Vec<(&str, Literal, &str, Validator)> = vec![
        (
            "display.precision",
            Literal::Int(6),
            "Floating point output precision in decimal places",
            is_nonnegative_int(),
        ),
        (
            "display.max_rows",
            Literal::Int(60),
            "Rows printed before the output is truncated",
            is_nonnegative_int(),
        ),
        (
            "display.min_rows",
            Literal::Int(10),
            "Rows printed when the output is truncated",
            is_nonnegative_int(),
        ),
        (
            "display.max_columns",
            Literal::Int(20),
            "Columns printed before the output is truncated",
            is_nonnegative_int(),
        ),
        (
            "display.max_colwidth",
            Literal::Int(50),
            "Characters printed per column",
            is_nonnegative_int(),
        ),
        (
            "display.max_seq_items",
            Literal::Int(100),
            "Items printed for long sequences",
            is_nonnegative_int(),
        ),
        (
            "display.max_categories",
            Literal::Int(8),
            "Categories printed for categorical series",
            is_int(),
        ),
        (
            "display.max_info_columns",
            Literal::Int(100),
            "Columns listed by info()",
            is_int(),
        ),
        (
            "display.max_info_rows",
            Literal::Int(1_690_785),
            "Row limit for null counting in info()",
            is_int(),
        ),
        (
            "display.width",
            Literal::Int(80),
            "Width of the display in characters",
            is_int(),
        ),
        (
            "display.large_repr",
            Literal::from("truncate"),
            "Representation of frames exceeding max_rows/max_columns",
            is_one_of(text(&["truncate", "info"])),
        ),
        (
            "display.colheader_justify",
            Literal::from("right"),
            "Justification of column headers",
            is_text(),
        ),
        (
            "display.chop_threshold",
            Literal::None,
            "Values below this threshold print as zero",
            is_optional(is_float()),
        ),
        (
            "display.show_dimensions",
            Literal::from("truncate"),
            "Print the frame dimensions after the frame",
            is_one_of(vec![
                Literal::Bool(true),
                Literal::Bool(false),
                Literal::from("truncate"),
            ]),
        ),
        (
            "display.memory_usage",
            Literal::Bool(true),
            "Report memory usage in info()",
            is_one_of(vec![
                Literal::None,
                Literal::Bool(true),
                Literal::Bool(false),
                Literal::from("deep"),
            ]),
        ),
        (
            "display.encoding",
            Literal::from("utf-8"),
            "Encoding used for console output",
            is_text(),
        ),
        (
            "display.expand_frame_repr",
            Literal::Bool(true),
            "Wrap wide frames across multiple lines",
            is_bool(),
        ),
        (
            "display.multi_sparse",
            Literal::Bool(true),
            "Sparsify hierarchical indexes",
            is_bool(),
        ),
        (
            "display.notebook_repr_html",
            Literal::Bool(true),
            "Use HTML representation in notebooks",
            is_bool(),
        ),
        (
            "display.date_dayfirst",
            Literal::Bool(false),
            "Parse dates with the day first",
            is_bool(),
        ),
        (
            "display.date_yearfirst",
            Literal::Bool(false),
            "Parse dates with the year first",
            is_bool(),
        ),
        (
            "display.html.border",
            Literal::Int(1),
            "Border attribute of rendered HTML tables",
            is_int(),
        ),
        (
            "display.html.table_schema",
            Literal::Bool(false),
            "Publish a table schema representation",
            is_bool(),
        ),
        (
            "display.html.use_mathjax",
            Literal::Bool(true),
            "Render dollar signs with MathJax",
            is_bool(),
        ),
        (
            "mode.chained_assignment",
            Literal::from("warn"),
            "Behavior on chained assignment",
            is_one_of(vec![Literal::None, Literal::from("warn"), Literal::from("raise")]),
        ),
        (
            "mode.copy_on_write",
            Literal::Bool(false),
            "Enable copy-on-write semantics",
            is_one_of(vec![
                Literal::Bool(true),
                Literal::Bool(false),
                Literal::from("warn"),
            ]),
        ),
        (
            "compute.use_bottleneck",
            Literal::Bool(true),
            "Accelerate reductions with bottleneck",
            is_bool(),
        ),
        (
            "compute.use_numexpr",
            Literal::Bool(true),
            "Accelerate expressions with numexpr",
            is_bool(),
        ),
    ];

    let mut table = OptionTable::new();
    for (key, default, doc, validator) in definitions {
        table.register(key, default, doc, Some(validator))?;
    }
    Ok(table)
}
