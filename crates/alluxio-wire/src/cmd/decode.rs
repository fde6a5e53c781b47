use alluxio_wire::codec::{DocumentConfig, DocumentLoader};
use tracing::info;

use crate::cmd::DecodeArgs;
use crate::exit::{document_error, json_error, CliResult, SUCCESS};
use crate::output::{cell, print_json, print_table, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat, config: DocumentConfig) -> CliResult<i32> {
    let context = args.path.display().to_string();
    let entities = DocumentLoader::with_config(config)
        .decode_file(&args.path)
        .map_err(|err| document_error(&context, err))?;
    info!(path = %context, entities = entities.len(), "decoded wire document");

    match format {
        OutputFormat::Json | OutputFormat::Pretty => print_json(&entities, format)?,
        OutputFormat::Table => {
            let rows = entities
                .iter()
                .enumerate()
                .map(|(index, entity)| -> CliResult<Vec<String>> {
                    let value = serde_json::to_value(entity).map_err(json_error)?;
                    Ok(vec![
                        index.to_string(),
                        entity.kind().to_string(),
                        cell(&value["value"])?,
                    ])
                })
                .collect::<CliResult<Vec<_>>>()?;
            print_table(&["#", "ENTITY", "VALUE"], rows);
        }
    }
    Ok(SUCCESS)
}
