use alluxio_wire::codec::EntityKind;
use serde::Serialize;

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

const UNKNOWN: &str = "unknown";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    build: Option<BuildInfo>,
}

/// Build provenance shown by `version --extended`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BuildInfo {
    target: &'static str,
    profile: &'static str,
    rustc: &'static str,
    git_hash: &'static str,
    entity_kinds: usize,
}

impl BuildInfo {
    fn current() -> Self {
        Self {
            target: option_env!("ALLUXIO_WIRE_BUILD_TARGET").unwrap_or(UNKNOWN),
            profile: option_env!("ALLUXIO_WIRE_BUILD_PROFILE").unwrap_or(UNKNOWN),
            rustc: option_env!("RUSTC_VERSION").unwrap_or(UNKNOWN),
            git_hash: option_env!("GIT_HASH").unwrap_or(UNKNOWN),
            entity_kinds: EntityKind::ALL.len(),
        }
    }
}

fn version_info(args: &VersionArgs) -> VersionInfo {
    VersionInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        build: args.extended.then(BuildInfo::current),
    }
}

pub fn run(args: VersionArgs, format: OutputFormat) -> CliResult<i32> {
    let info = version_info(&args);
    match format {
        OutputFormat::Json | OutputFormat::Pretty => print_json(&info, format)?,
        OutputFormat::Table => {
            let mut rows = vec![
                vec!["name".to_string(), info.name.to_string()],
                vec!["version".to_string(), info.version.to_string()],
            ];
            if let Some(build) = &info.build {
                rows.extend(build_rows(build));
            }
            print_table(&["FIELD", "VALUE"], rows);
        }
    }
    Ok(SUCCESS)
}

fn build_rows(build: &BuildInfo) -> Vec<Vec<String>> {
    [
        ("target", build.target.to_string()),
        ("profile", build.profile.to_string()),
        ("target_os", std::env::consts::OS.to_string()),
        ("target_arch", std::env::consts::ARCH.to_string()),
        ("rustc", build.rustc.to_string()),
        ("git_hash", build.git_hash.to_string()),
        ("entity_kinds", build.entity_kinds.to_string()),
    ]
    .into_iter()
    .map(|(field, value)| vec![field.to_string(), value])
    .collect()
}
