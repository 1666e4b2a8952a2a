use schemars::schema_for;
use syl_core::entities::LessonScript;

/// Handle `syl schema`. Always JSON, whatever `--format` says.
pub fn handle() -> anyhow::Result<()> {
    let schema = schema_for!(LessonScript);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
