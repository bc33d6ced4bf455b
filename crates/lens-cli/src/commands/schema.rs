use anyhow::Context;
use lens_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output;

/// Handle `lens schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let name = args.name.registry_name();
    let schema = registry
        .get(name)
        .with_context(|| format!("schema '{name}' is not registered"))?;
    output::output(schema, flags.format, true)
}
