// src/codegen/svm.rs

//! Linear SVM classifier weights from a LIBLINEAR model file
//!
//! A model is a header of `key value...` lines terminated by a lone `w`,
//! followed by one weight per line:
//!
//! ```text
//! solver_type L2R_L2LOSS_SVC_DUAL
//! nr_class 2
//! label 1 -1
//! nr_feature 3
//! bias -1
//! w
//! 0.5
//! 0
//! -0.25
//! ```
//!
//! The n-th weight line (1-based) is the weight of feature n. Zero weights are
//! left out of the generated table, which is sparse.

use super::{TableRow, TableSpec, write_header, write_table_body};
use crate::error::{Error, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const SPEC: TableSpec<'static> = TableSpec {
    generator: "gen-svm-classifier",
    element_type: "SvmFeatureWeight",
    struct_decl: Some("struct SvmFeatureWeight {\n  int index;\n  double weight;\n};"),
    name: "SvmFeatureWeights",
    sentinel: "{0, 0.0}",
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureWeight {
    pub index: usize,
    pub weight: f64,
}

impl TableRow for FeatureWeight {
    fn initializer(&self) -> String {
        format!("{{{}, {:?}}}", self.index, self.weight)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvmModel {
    pub solver_type: Option<String>,
    pub nr_class: usize,
    pub labels: Vec<i64>,
    pub nr_feature: Option<usize>,
    pub bias: f64,
    /// Total number of weight lines, including zero and unreadable ones
    pub weight_lines: usize,
    pub weights: Vec<FeatureWeight>,
}

impl Default for SvmModel {
    fn default() -> Self {
        Self {
            solver_type: None,
            nr_class: 2,
            labels: Vec::new(),
            nr_feature: None,
            bias: -1.0,
            weight_lines: 0,
            weights: Vec::new(),
        }
    }
}

impl SvmModel {
    pub fn num_features(&self) -> usize {
        self.nr_feature.unwrap_or(self.weight_lines)
    }

    /// Label whose decision value is positive
    pub fn positive_label(&self) -> i64 {
        self.labels.first().copied().unwrap_or(1)
    }
}

fn header_value<T: std::str::FromStr>(line_no: usize, key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::Malformed {
        line: line_no,
        reason: format!("invalid {} value '{}'", key, value.trim()),
    })
}

pub fn parse<R: BufRead>(reader: R) -> Result<SvmModel> {
    let mut model = SvmModel::default();
    let mut in_weights = false;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let line = line.trim();

        if !in_weights {
            if line.is_empty() {
                continue;
            }
            if line == "w" {
                in_weights = true;
                continue;
            }

            let (key, value) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
            match key {
                "solver_type" => model.solver_type = Some(value.trim().to_string()),
                "nr_class" => {
                    model.nr_class = header_value(line_no, key, value)?;
                    if model.nr_class > 2 {
                        return Err(Error::Malformed {
                            line: line_no,
                            reason: format!(
                                "only binary models are supported, got nr_class {}",
                                model.nr_class
                            ),
                        });
                    }
                }
                "label" => {
                    model.labels = value
                        .split_whitespace()
                        .map(|label| header_value(line_no, key, label))
                        .collect::<Result<_>>()?;
                }
                "nr_feature" => model.nr_feature = Some(header_value(line_no, key, value)?),
                "bias" => model.bias = header_value(line_no, key, value)?,
                _ => debug!("Ignoring model header line {}: {}", line_no, line),
            }
            continue;
        }

        if line.is_empty() {
            continue;
        }
        model.weight_lines += 1;
        let index = model.weight_lines;

        let first = line.split_whitespace().next().unwrap_or_default();
        match first.parse::<f64>() {
            Ok(weight) if weight.is_finite() => {
                if weight != 0.0 {
                    model.weights.push(FeatureWeight { index, weight });
                }
            }
            _ => warn!("Skipping unreadable weight for feature {} (line {}): {}", index, line_no, line),
        }
    }

    if !in_weights {
        return Err(Error::Malformed {
            line: 0,
            reason: "model has no weight section ('w' line)".to_string(),
        });
    }
    if let Some(expected) = model.nr_feature {
        if expected != model.weight_lines {
            warn!(
                "Model declares {} features but has {} weight lines",
                expected, model.weight_lines
            );
        }
    }
    Ok(model)
}

pub fn write<W: Write>(out: &mut W, model: &SvmModel) -> Result<()> {
    write_header(out, SPEC.generator)?;
    if let Some(solver) = &model.solver_type {
        writeln!(out, "// Solver: {}", solver)?;
        writeln!(out)?;
    }
    writeln!(out, "const double kSvmBias = {:?};", model.bias)?;
    writeln!(out, "const int kSvmNumFeatures = {};", model.num_features())?;
    writeln!(out, "const int kSvmPositiveLabel = {};", model.positive_label())?;
    writeln!(out)?;
    write_table_body(out, &SPEC, &model.weights)?;
    Ok(())
}

pub fn generate<R: BufRead, W: Write>(reader: R, out: &mut W) -> Result<usize> {
    let model = parse(reader)?;
    write(out, &model)?;
    Ok(model.weights.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = "solver_type L2R_L2LOSS_SVC_DUAL\n\
                         nr_class 2\n\
                         label 1 -1\n\
                         nr_feature 4\n\
                         bias -1\n\
                         w\n\
                         0.5 \n\
                         0\n\
                         garbage\n\
                         -0.25\n";

    #[test]
    fn test_parse_model() {
        let model = parse(MODEL.as_bytes()).unwrap();
        assert_eq!(model.solver_type.as_deref(), Some("L2R_L2LOSS_SVC_DUAL"));
        assert_eq!(model.labels, vec![1, -1]);
        assert_eq!(model.num_features(), 4);
        assert_eq!(model.bias, -1.0);
        assert_eq!(model.weight_lines, 4);
        assert_eq!(
            model.weights,
            vec![
                FeatureWeight { index: 1, weight: 0.5 },
                FeatureWeight { index: 4, weight: -0.25 },
            ]
        );
    }

    #[test]
    fn test_generate() {
        let mut out = Vec::new();
        assert_eq!(generate(MODEL.as_bytes(), &mut out).unwrap(), 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("const double kSvmBias = -1.0;\n"));
        assert!(text.contains("const int kSvmNumFeatures = 4;\n"));
        assert!(text.contains("const int kSvmPositiveLabel = 1;\n"));
        assert!(text.contains("const size_t kSvmFeatureWeightsSize = 2;\n"));
        assert!(text.ends_with("  {1, 0.5},\n  {4, -0.25},\n  {0, 0.0},\n};\n"));
    }

    #[test]
    fn test_all_zero_weights_still_terminated() {
        let mut out = Vec::new();
        assert_eq!(generate("w\n0\n0\n".as_bytes(), &mut out).unwrap(), 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("const int kSvmNumFeatures = 2;"));
        assert!(text.ends_with("const SvmFeatureWeight kSvmFeatureWeights[] = {\n  {0, 0.0},\n};\n"));
    }

    #[test]
    fn test_multiclass_rejected() {
        let err = parse("nr_class 3\nw\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_missing_weight_section() {
        assert!(parse("nr_class 2\nbias 1\n".as_bytes()).is_err());
    }
}
