use crate::cli::RenderArgs;
use crate::config::builder::build_config;
use crate::data::builtin_mechanisms;
use crate::error::Result;
use crate::render::render_diagram;
use rxnprofile::workflows::diagram;
use tracing::info;

pub fn run(args: &RenderArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_config(args)?;
    info!(
        "Figure resolved to {}x{} px, output {:?}.",
        config.figure.width, config.figure.height, config.output
    );

    let mechanisms = builtin_mechanisms(&config.styles);

    println!("Assembling potential energy diagram...");
    info!("Invoking the core diagram workflow...");
    let diagram = diagram::run(&mechanisms, &config.assembly)?;

    render_diagram(&diagram, &config)?;

    println!("✓ Figure written to: {}", config.output.display());
    Ok(())
}
