use anyhow::{Context, Result};
use linkage_cli::document::CompositionDocument;
use linkage_cli::summary::{dialects_table, levels_table};
use linkage_model::SqlDialect;
use tracing::info_span;

use crate::cli::{ComposeArgs, OutputFormatArg};

pub fn run_compose(args: &ComposeArgs) -> Result<()> {
    let dialect = args
        .dialect
        .as_deref()
        .map(SqlDialect::new)
        .transpose()
        .context("parse --dialect")?;
    let span = info_span!(
        "document",
        path = %args.input.display(),
        dialect = dialect.as_ref().map(SqlDialect::as_str)
    );
    let _guard = span.enter();

    let document = CompositionDocument::read(&args.input)?;
    let composed = document.evaluate(dialect.as_ref())?;

    match args.format {
        OutputFormatArg::Json => println!("{}", composed.to_json()?),
        OutputFormatArg::Table => println!("{}", levels_table(composed.levels())),
    }
    Ok(())
}

pub fn run_dialects() -> Result<()> {
    println!("{}", dialects_table());
    Ok(())
}
