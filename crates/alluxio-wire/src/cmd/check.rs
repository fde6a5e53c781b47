use alluxio_wire::codec::{
    check_round_trip, DocumentConfig, DocumentLoader, EntityKind, RoundTripReport, WireEntity,
};
use serde::Serialize;
use tracing::warn;

use crate::cmd::CheckArgs;
use crate::exit::{document_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckOutcome {
    index: usize,
    entity: EntityKind,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<RoundTripReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn run(args: CheckArgs, format: OutputFormat, config: DocumentConfig) -> CliResult<i32> {
    let context = args.path.display().to_string();
    let entities = DocumentLoader::with_config(config)
        .load_file(&args.path)
        .map_err(|err| document_error(&context, err))?;

    let outcomes: Vec<CheckOutcome> = entities
        .into_iter()
        .enumerate()
        .map(|(index, wire)| check_entity(index, wire))
        .collect();

    match format {
        OutputFormat::Json | OutputFormat::Pretty => print_json(&outcomes, format)?,
        OutputFormat::Table => {
            let rows = outcomes.iter().map(table_row).collect();
            print_table(&["#", "ENTITY", "RESULT", "DETAIL"], rows);
        }
    }

    if outcomes.iter().all(|outcome| outcome.passed) {
        Ok(SUCCESS)
    } else {
        Ok(DATA_INVALID)
    }
}

fn check_entity(index: usize, wire: WireEntity) -> CheckOutcome {
    let entity = wire.kind();
    match check_round_trip(wire) {
        Ok(report) => CheckOutcome::from_report(index, report),
        Err(err) => {
            warn!(index, %entity, error = %err, "entity failed to decode");
            CheckOutcome {
                index,
                entity,
                passed: false,
                report: None,
                error: Some(err.to_string()),
            }
        }
    }
}

impl CheckOutcome {
    fn from_report(index: usize, report: RoundTripReport) -> Self {
        if !report.unexpected_fields.is_empty() {
            warn!(
                index,
                entity = %report.entity,
                fields = ?report.unexpected_fields,
                "round trip changed wire fields unexpectedly"
            );
        }
        Self {
            index,
            entity: report.entity,
            passed: report.is_clean(),
            report: Some(report),
            error: None,
        }
    }
}

fn table_row(outcome: &CheckOutcome) -> Vec<String> {
    let (result, detail) = match (&outcome.report, &outcome.error) {
        (_, Some(error)) => ("malformed", error.clone()),
        (Some(report), None) => report_summary(report),
        (None, None) => ("unknown", String::new()),
    };
    vec![
        outcome.index.to_string(),
        outcome.entity.to_string(),
        result.to_string(),
        detail,
    ]
}

fn report_summary(report: &RoundTripReport) -> (&'static str, String) {
    let mut parts = Vec::new();
    if !report.normalized_fields.is_empty() {
        let fields = report.normalized_fields.join(", ");
        parts.push(format!("normalized: {fields}"));
    }
    if !report.unexpected_fields.is_empty() {
        let fields = report.unexpected_fields.join(", ");
        parts.push(format!("unexpected: {fields}"));
    }
    let result = if !report.domain_stable {
        "unstable"
    } else if !report.unexpected_fields.is_empty() {
        "unexpected"
    } else if report.wire_identical {
        "identical"
    } else {
        "normalized"
    };
    (result, parts.join("; "))
}
