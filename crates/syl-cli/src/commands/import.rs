use std::path::Path;

use chrono::Utc;
use syl_core::entities::LessonScript;
use syl_core::enums::CompletionState;
use syl_core::errors::CoreError;
use syl_core::responses::{ImportResponse, SkippedImport};
use syl_parser::ScriptHeader;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::commands::shared::parse::{parse_state, required_text};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `syl import`.
pub fn handle(args: &ImportArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run(args, ctx)?;
    output(&response, flags.format)
}

/// Values applied to every script of one import run.
struct ImportDefaults {
    topic: String,
    state: CompletionState,
    model: Option<String>,
}

/// Add one record per discovered script. Scripts whose id is already in the
/// catalog, or whose header cannot be parsed, are reported as skipped.
pub fn run(args: &ImportArgs, ctx: &mut AppContext) -> anyhow::Result<ImportResponse> {
    let defaults = ImportDefaults {
        topic: match args.topic.as_deref() {
            Some(topic) => required_text(topic, "topic")?,
            None => ctx.config.import.default_topic.clone(),
        },
        state: parse_state(args.state.as_deref())?.unwrap_or(ctx.config.import.default_state),
        model: args.model.as_deref().map(str::trim).map(String::from),
    };

    let files = syl_parser::discover(&args.paths)?;
    let progress = Progress::bar(files.len() as u64, "importing lesson scripts");
    let mut response = ImportResponse::default();

    for path in &files {
        progress.set_message(&path.display().to_string());
        match import_one(path, &defaults, ctx) {
            Ok(lesson) => response.imported.push(lesson),
            Err(reason) => {
                tracing::warn!(path = %path.display(), %reason, "skipping lesson script");
                response.skipped.push(SkippedImport {
                    path: path.display().to_string(),
                    reason,
                });
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(response)
}

fn import_one(
    path: &Path,
    defaults: &ImportDefaults,
    ctx: &mut AppContext,
) -> Result<LessonScript, String> {
    let id = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| String::from("file has no name"))?;
    if ctx.store.contains(&id) {
        return Err(CoreError::DuplicateId { id }.to_string());
    }

    let header = syl_parser::parse_file(path).map_err(|e| e.to_string())?;
    let lesson = lesson_from_header(id, header, path, defaults, &ctx.config.general.default_model);
    ctx.store.add(lesson).map(Clone::clone).map_err(|e| e.to_string())
}

fn lesson_from_header(
    id: String,
    header: ScriptHeader,
    path: &Path,
    defaults: &ImportDefaults,
    fallback_model: &str,
) -> LessonScript {
    let created_at = header.date.unwrap_or_else(Utc::now);
    let origin_model = defaults
        .model
        .clone()
        .or(header.author)
        .unwrap_or_else(|| fallback_model.to_string());

    LessonScript {
        id,
        title: header.title,
        topic: defaults.topic.clone(),
        origin_model,
        completion_state: defaults.state,
        created_at,
        updated_at: created_at,
        summary: header.summary,
        source_path: Some(path.display().to_string()),
        sections: header.sections,
    }
}
