use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use doorconv_sql::{ConvertOptions, ConvertReport, DumpRecord, GfxEntry, SpawnEntry, convert_dump};

use crate::error::CliError;

/// Source dump and destination catalog for each door table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tables<'a> {
    pub(crate) gfx: (&'a Path, &'a Path),
    pub(crate) spawn: (&'a Path, &'a Path),
}

/// Convert both door tables.
///
/// The tables are independent: a failure in one is reported and the other
/// still runs.
pub(crate) fn run_convert(tables: &Tables<'_>, options: &ConvertOptions) -> Result<(), CliError> {
    let results = [
        convert_table::<GfxEntry>(tables.gfx, options),
        convert_table::<SpawnEntry>(tables.spawn, options),
    ];

    let mut failed = 0;
    for result in results {
        match result {
            Ok(report) => {
                println!("{report}");
                if report.skipped > 0 {
                    log::debug!("  {} malformed rows skipped", report.skipped);
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!(
                    "{} {}",
                    "\u{2718}".if_supports_color(Stderr, |t| t.red()),
                    e,
                );
            }
        }
    }

    if failed > 0 {
        Err(CliError::PipelineFailed(failed))
    } else {
        Ok(())
    }
}

fn convert_table<R: DumpRecord>(
    (source, dest): (&Path, &Path),
    options: &ConvertOptions,
) -> Result<ConvertReport, CliError> {
    log::debug!("Converting `{}` from {}", R::TABLE, source.display());
    Ok(convert_dump::<R>(source, dest, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SPAWN_ROW: &str = "INSERT INTO `spawnlist_door` VALUES ('1', 'Talking Island', '92', '32568', '32800', '4', '0', '0', '1');\n";
    const GFX_ROW: &str = "INSERT INTO `door_gfxs` VALUES ('92', 'Talking Island', '0', '0', '0');\n";

    #[test]
    fn failed_table_does_not_stop_the_other() {
        let tmp = TempDir::new().unwrap();
        let gfx_sql = tmp.path().join("door_gfxs.sql");
        let gfx_yaml = tmp.path().join("door_gfx.yaml");
        let spawn_sql = tmp.path().join("spawnlist_door.sql");
        let spawn_yaml = tmp.path().join("door_spawn.yaml");
        fs::write(&spawn_sql, SPAWN_ROW).unwrap();

        let tables = Tables {
            gfx: (gfx_sql.as_path(), gfx_yaml.as_path()),
            spawn: (spawn_sql.as_path(), spawn_yaml.as_path()),
        };
        let err = run_convert(&tables, &ConvertOptions::default()).unwrap_err();

        assert!(matches!(err, CliError::PipelineFailed(1)));
        assert!(!gfx_yaml.exists());
        let doc = fs::read_to_string(&spawn_yaml).unwrap();
        assert!(doc.starts_with("doors:\n  - id: 1\n"));
        assert!(doc.ends_with("    is_opening: true\n"));
    }

    #[test]
    fn both_tables_succeed() {
        let tmp = TempDir::new().unwrap();
        let gfx_sql = tmp.path().join("door_gfxs.sql");
        let gfx_yaml = tmp.path().join("door_gfx.yaml");
        let spawn_sql = tmp.path().join("spawnlist_door.sql");
        let spawn_yaml = tmp.path().join("door_spawn.yaml");
        fs::write(&gfx_sql, GFX_ROW).unwrap();
        fs::write(&spawn_sql, SPAWN_ROW).unwrap();

        let tables = Tables {
            gfx: (gfx_sql.as_path(), gfx_yaml.as_path()),
            spawn: (spawn_sql.as_path(), spawn_yaml.as_path()),
        };
        run_convert(&tables, &ConvertOptions::default()).unwrap();

        assert!(gfx_yaml.exists());
        assert!(spawn_yaml.exists());
    }

    #[test]
    fn both_tables_failing_counts_two() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.sql");
        let out = tmp.path().join("out.yaml");

        let tables = Tables {
            gfx: (missing.as_path(), out.as_path()),
            spawn: (missing.as_path(), out.as_path()),
        };
        let err = run_convert(&tables, &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, CliError::PipelineFailed(2)));
    }
}
