//! HTML pages.
//!
//! Pages are plain strings built with `format!`; every value that did not
//! originate in this module goes through [`escape`].

use std::fmt::Write as _;

use ckd_common::format_numeric;
use ckd_ingest::flag_choices;
use ckd_model::{
    Assessment, BatchResult, ClinicalField, DatasetSummary, FieldKind, REQUIRED_COLUMNS,
};
use ckd_predict::BatchError;

const STYLE: &str = "\
body { font-family: Arial, sans-serif; background: #f5f5f5; color: #333; margin: 0; }
nav { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 1rem 2rem; }
nav a { color: white; margin-right: 1.5rem; text-decoration: none; font-weight: bold; }
main { max-width: 960px; margin: 2rem auto; background: white; padding: 2rem; border-radius: 8px; }
.result { padding: 1rem; border-radius: 6px; margin-top: 1.5rem; }
.result-success { background: #d4edda; color: #155724; }
.result-danger { background: #f8d7da; color: #721c24; }
.result-warning { background: #fff3cd; color: #856404; }
.notice { background: #fff3cd; padding: 0.75rem; border-radius: 6px; }
table { border-collapse: collapse; width: 100%; margin-top: 1rem; }
th, td { border: 1px solid #ddd; padding: 0.4rem 0.6rem; text-align: left; }
label { display: block; margin-top: 0.8rem; }
";

const DISCLAIMER: &str = "<p><strong>Advertencia:</strong> Esta herramienta es solo informativa \
y no sustituye un diagnóstico médico profesional.</p>";

/// Escapes text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} - ERC</title>
<style>{STYLE}</style>
</head>
<body>
<nav>
<a href="/">INICIO</a>
<a href="/evaluar">EVALUACIÓN</a>
<a href="/dataset-info">DATASET</a>
<a href="/subir-csv">EVALUAR CSV</a>
</nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn landing() -> String {
    layout(
        "Inicio",
        "<h1>Diagnóstico de la enfermedad renal crónica utilizando machine learning</h1>
<p>Estimación temprana del riesgo de enfermedad renal crónica (ERC) a partir de 17 medidas \
clínicas y de laboratorio.</p>
<p><a href=\"/evaluar\">Evaluar un paciente</a> · <a href=\"/subir-csv\">Evaluar un archivo CSV</a> · \
<a href=\"/dataset-info\">Ver el dataset de referencia</a></p>",
    )
}

fn select(field: ClinicalField, options: &[(&str, &str)]) -> String {
    let mut out = format!(r#"<select id="{0}" name="{0}">"#, field.name());
    for (idx, (value, label)) in options.iter().enumerate() {
        let selected = if idx == 0 { " selected" } else { "" };
        let _ = write!(out, r#"<option value="{value}"{selected}>{label}</option>"#);
    }
    out.push_str("</select>");
    out
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn field_input(field: ClinicalField) -> String {
    match field {
        ClinicalField::Sg => select(
            field,
            &[
                ("1.010", "1.010"),
                ("1.005", "1.005"),
                ("1.015", "1.015"),
                ("1.020", "1.020"),
                ("1.025", "1.025"),
            ],
        ),
        ClinicalField::Al | ClinicalField::Su => select(
            field,
            &[("0", "0"), ("1", "1"), ("2", "2"), ("3", "3"), ("4", "4"), ("5", "5")],
        ),
        _ => match field.kind() {
            FieldKind::Flag => {
                let (yes, no) = flag_choices(field);
                let (yes, no) = (yes[0], no[0]);
                let (yes_label, no_label) = (capitalize(yes), capitalize(no));
                select(field, &[(no, no_label.as_str()), (yes, yes_label.as_str())])
            }
            FieldKind::Integer => format!(
                r#"<input type="number" id="{0}" name="{0}" step="1" required>"#,
                field.name()
            ),
            FieldKind::Float => format!(
                r#"<input type="number" id="{0}" name="{0}" step="any" required>"#,
                field.name()
            ),
        },
    }
}

fn assessment_block(assessment: &Assessment) -> String {
    let mut out = format!(
        r#"<div class="result result-{}"><h3>Resultado de la evaluación</h3><p><strong>{}</strong></p>"#,
        assessment.style(),
        escape(&assessment.message()),
    );
    if let Assessment::Scored { result } = assessment {
        let _ = write!(
            out,
            "<p><strong>Probabilidad:</strong> {}%</p>\
<p><em>Nota: Este resultado no constituye un diagnóstico médico. Consulte a un profesional de la salud.</em></p>",
            result.confidence
        );
    }
    out.push_str("</div>");
    out
}

/// Evaluation form, followed by the outcome of the last submission if any.
pub fn evaluation(assessment: Option<&Assessment>) -> String {
    let mut body = String::from(
        "<h1>Predicción de la enfermedad renal crónica basada en medidas diagnósticas</h1>",
    );
    body.push_str(DISCLAIMER);
    body.push_str(r#"<form method="post" action="/procesar_evaluacion">"#);
    for field in ClinicalField::ALL {
        let _ = write!(
            body,
            r#"<label for="{}">{}</label>{}"#,
            field.name(),
            field.prompt(),
            field_input(field)
        );
    }
    body.push_str(r#"<p><button type="submit">EVALUAR RIESGO</button></p></form>"#);
    if let Some(assessment) = assessment {
        body.push_str(&assessment_block(assessment));
    }
    layout("Evaluación", &body)
}

fn stat(value: Option<f64>) -> String {
    value.map(format_numeric).unwrap_or_else(|| "-".to_string())
}

pub fn dataset(summary: &DatasetSummary) -> String {
    let mut body = format!(
        "<h1>Información del dataset</h1>\
<p>Filas: <strong>{}</strong> · Columnas: <strong>{}</strong> · Valores nulos: <strong>{}</strong></p>",
        summary.row_count,
        summary.column_count,
        summary.total_nulls()
    );

    if let Some(dist) = &summary.class_distribution {
        let _ = write!(
            body,
            "<h2>Distribución de clases ({})</h2><table><tr><th>Clase</th><th>Casos</th></tr>",
            escape(&dist.column)
        );
        for (value, count) in &dist.counts {
            let _ = write!(body, "<tr><td>{}</td><td>{count}</td></tr>", escape(value));
        }
        body.push_str("</table>");
    }

    body.push_str(
        "<h2>Columnas</h2><table><tr><th>Columna</th><th>Tipo</th><th>Nulos</th></tr>",
    );
    for column in &summary.columns {
        let _ = write!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&column.name),
            escape(&column.dtype),
            column.null_count
        );
    }
    body.push_str("</table>");

    if !summary.numeric.is_empty() {
        body.push_str(
            "<h2>Estadísticas numéricas</h2><table><tr><th>Columna</th><th>N</th><th>Media</th>\
<th>Desv. est.</th><th>Mín</th><th>25%</th><th>50%</th><th>75%</th><th>Máx</th></tr>",
        );
        for stats in &summary.numeric {
            let _ = write!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
<td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&stats.name),
                stats.count,
                stat(stats.mean.map(round2)),
                stat(stats.std.map(round2)),
                stat(stats.min),
                stat(stats.p25.map(round2)),
                stat(stats.median.map(round2)),
                stat(stats.p75.map(round2)),
                stat(stats.max),
            );
        }
        body.push_str("</table>");
    }
    layout("Dataset", &body)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn dataset_unavailable() -> String {
    layout(
        "Dataset",
        "<h1>Error: Dataset no disponible</h1><p><a href=\"/\">Volver al inicio</a></p>",
    )
}

/// Upload form, with an optional notice from a rejected submission.
pub fn upload(notice: Option<&str>) -> String {
    let mut body = String::from("<h1>Evaluación de archivos CSV</h1>");
    body.push_str(DISCLAIMER);
    if let Some(notice) = notice {
        let _ = write!(body, r#"<p class="notice">{}</p>"#, escape(notice));
    }
    let _ = write!(
        body,
        "<h3>Formato del archivo CSV requerido</h3>\
<p>El archivo debe contener las siguientes columnas:</p><p><strong>{}</strong></p>\
<p>Los valores categóricos deben estar codificados como 0/1 \
(dm, htn, ane: 1 = sí; appet: 1 = pobre; rbc, pc: 1 = anormal).</p>\
<form method=\"post\" action=\"/procesar-csv\" enctype=\"multipart/form-data\">\
<input type=\"file\" name=\"file\" accept=\".csv\" required>\
<p><button type=\"submit\">EVALUAR ARCHIVO CSV</button></p></form>",
        REQUIRED_COLUMNS.join(", ")
    );
    layout("Evaluar CSV", &body)
}

/// Batch results, or the single error that aborted the batch.
pub fn batch(outcome: Result<&BatchResult, &BatchError>) -> String {
    let mut body = String::from(
        "<p><a href=\"/subir-csv\">← Volver a subir CSV</a></p><h1>Resultados de evaluación CSV</h1>",
    );
    match outcome {
        Err(err) => {
            let _ = write!(
                body,
                r#"<div class="result result-danger"><h3>Error</h3><p>{}</p><p>Filas procesadas: {}</p></div>"#,
                escape(&err.to_string()),
                err.processed_rows()
            );
        }
        Ok(result) => {
            let _ = write!(
                body,
                "<h3>Resumen de resultados</h3><table>\
<tr><th>Total de pacientes</th><th>Sin indicios de ERC</th><th>Alto riesgo de ERC</th></tr>\
<tr><td>{}</td><td>{}</td><td>{}</td></tr></table>\
<h3>Resultados detallados</h3><table><tr><th>Fila</th><th>Predicción</th><th>Probabilidad</th></tr>",
                result.total_rows, result.negative_count, result.positive_count
            );
            for entry in &result.entries {
                let label = entry.result.label;
                let _ = write!(
                    body,
                    r#"<tr class="result-{}"><td>{}</td><td>{}</td><td>{}%</td></tr>"#,
                    label.style(),
                    entry.row,
                    label.text(),
                    entry.result.confidence
                );
            }
            body.push_str("</table>");
        }
    }
    layout("Resultados CSV", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    use ckd_model::{BatchEntry, PredictionResult, RiskLabel};

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b a="x">&'"#),
            "&lt;b a=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn form_lists_every_field() {
        let page = evaluation(None);
        for name in REQUIRED_COLUMNS {
            assert!(page.contains(&format!(r#"name="{name}""#)), "missing {name}");
        }
        assert!(page.contains(r#"<option value="Sí">Sí</option>"#));
        assert!(page.contains(r#"<option value="bueno" selected>Bueno</option>"#));
        assert!(page.contains(r#"<option value="normal" selected>Normal</option>"#));
    }

    #[test]
    fn assessment_fragment() {
        let scored = Assessment::Scored {
            result: PredictionResult::new(RiskLabel::Positive, 0.91),
        };
        insta::assert_snapshot!(assessment_block(&scored), @r#"<div class="result result-danger"><h3>Resultado de la evaluación</h3><p><strong>Alto riesgo de ERC</strong></p><p><strong>Probabilidad:</strong> 91%</p><p><em>Nota: Este resultado no constituye un diagnóstico médico. Consulte a un profesional de la salud.</em></p></div>"#);
    }

    #[test]
    fn invalid_assessment_is_warning_styled() {
        let invalid = Assessment::Invalid {
            issues: vec!["sc: valor 25 fuera del rango válido (0.1-20)".to_string()],
        };
        let block = assessment_block(&invalid);
        assert!(block.starts_with(r#"<div class="result result-warning">"#));
        assert!(block.contains("Datos fuera de rango: sc: valor 25"));
        assert!(!block.contains("Probabilidad"));
    }

    #[test]
    fn batch_error_reports_zero_rows() {
        let err = BatchError::MissingColumns(vec!["hemo".to_string(), "pc".to_string()]);
        let page = batch(Err(&err));
        assert!(page.contains("Columnas faltantes: hemo, pc"));
        assert!(page.contains("Filas procesadas: 0"));
    }

    #[test]
    fn batch_rows_are_listed_in_order() {
        let result = BatchResult::from_entries(vec![
            BatchEntry {
                row: 1,
                result: PredictionResult::new(RiskLabel::Negative, 0.8),
            },
            BatchEntry {
                row: 2,
                result: PredictionResult::new(RiskLabel::Positive, 0.6),
            },
        ]);
        let page = batch(Ok(&result));
        let first = page.find("<td>1</td><td>Sin indicios de ERC</td><td>80%</td>").unwrap();
        let second = page.find("<td>2</td><td>Alto riesgo de ERC</td><td>60%</td>").unwrap();
        assert!(first < second);
    }
}
