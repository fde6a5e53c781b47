use alluxio_wire::codec::EntityKind;
use alluxio_wire::thrift::TTtlAction;
use serde::Serialize;

use crate::cmd::EntitiesArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntityRow {
    name: EntityKind,
    wire_name: &'static str,
}

#[derive(Serialize)]
struct TtlActionRow {
    code: i32,
    name: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntitiesOutput {
    entities: Vec<EntityRow>,
    ttl_actions: Vec<TtlActionRow>,
}

pub fn run(_args: EntitiesArgs, format: OutputFormat) -> CliResult<i32> {
    let output = EntitiesOutput {
        entities: EntityKind::ALL
            .into_iter()
            .map(|kind| EntityRow {
                name: kind,
                wire_name: kind.wire_name(),
            })
            .collect(),
        ttl_actions: TTtlAction::ALL
            .into_iter()
            .map(|action| TtlActionRow {
                code: action.0,
                name: action.name().unwrap_or_default(),
            })
            .collect(),
    };

    match format {
        OutputFormat::Json | OutputFormat::Pretty => print_json(&output, format)?,
        OutputFormat::Table => {
            print_table(
                &["ENTITY", "WIRE NAME"],
                output
                    .entities
                    .iter()
                    .map(|row| vec![row.name.to_string(), row.wire_name.to_string()])
                    .collect(),
            );
            print_table(
                &["TTL ACTION", "CODE"],
                output
                    .ttl_actions
                    .iter()
                    .map(|row| vec![row.name.to_string(), row.code.to_string()])
                    .collect(),
            );
        }
    }
    Ok(SUCCESS)
}
