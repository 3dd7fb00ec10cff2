use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileMechanismStyle};
use super::models::{AppConfig, FigureConfig, MechanismStyle};
use crate::cli::RenderArgs;
use crate::error::{CliError, Result};
use rxnprofile::core::models::style::Color;
use rxnprofile::engine::config::AssemblyConfigBuilder;

/// Merges the three configuration layers into the final `AppConfig`.
///
/// Precedence, highest first: CLI arguments, the optional TOML file, the
/// embedded defaults.
pub fn build_config(args: &RenderArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let figure_file = file_config.figure.unwrap_or_default();
    let width = args.width.or(figure_file.width).unwrap_or(defaults.width);
    let height = args
        .height
        .or(figure_file.height)
        .unwrap_or(defaults.height);
    if width == 0 || height == 0 {
        return Err(CliError::Argument(format!(
            "Figure dimensions must be non-zero, got {}x{}",
            width, height
        )));
    }

    let y_min = figure_file.y_min.unwrap_or(defaults.y_min);
    let y_max = figure_file.y_max.unwrap_or(defaults.y_max);
    if !(y_min < y_max) {
        return Err(CliError::Config(format!(
            "y-min ({}) must lie below y-max ({})",
            y_min, y_max
        )));
    }

    let figure = FigureConfig {
        width,
        height,
        y_min,
        y_max,
        x_label: figure_file.x_label.unwrap_or(defaults.x_label),
        y_label: figure_file.y_label.unwrap_or(defaults.y_label),
    };

    let style_file = file_config.style.unwrap_or_default();
    let assembly = AssemblyConfigBuilder::new()
        .marker_width(
            args.marker_width
                .or(style_file.marker_width)
                .unwrap_or(defaults.marker_width),
        )
        .samples_per_segment(
            args.samples_per_segment
                .or(style_file.samples_per_segment)
                .unwrap_or(defaults.samples_per_segment),
        )
        .build()?;

    let styles = [
        merge_style(
            file_config.mechanism_1,
            defaults.primary_label,
            defaults.primary_color,
        ),
        merge_style(
            file_config.mechanism_2,
            defaults.secondary_label,
            defaults.secondary_color,
        ),
    ];

    Ok(AppConfig {
        output: args.output.clone(),
        figure,
        assembly,
        styles,
    })
}

fn merge_style(
    file: Option<FileMechanismStyle>,
    default_label: String,
    default_color: Color,
) -> MechanismStyle {
    let file = file.unwrap_or_default();
    MechanismStyle {
        label: file.label.unwrap_or(default_label),
        color: file.color.unwrap_or(default_color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: RenderArgs,
    }

    fn parse_args(extra: &[&str]) -> RenderArgs {
        let mut argv = vec!["harness"];
        argv.extend_from_slice(extra);
        Harness::parse_from(argv).args
    }

    fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_apply_without_file_or_overrides() {
        let config = build_config(&parse_args(&[])).unwrap();

        assert_eq!(config.figure.width, 800);
        assert_eq!(config.figure.height, 300);
        assert_eq!(config.figure.y_min, -0.5);
        assert_eq!(config.figure.y_max, 0.75);
        assert_eq!(config.figure.x_label, "Reaction coordinate");
        assert_eq!(config.figure.y_label, "∆G [eV]");
        assert_eq!(config.assembly.marker_width, 0.6);
        assert_eq!(config.assembly.samples_per_segment, 50);
        assert_eq!(config.styles[0].label, "Mechanism 1");
        assert_eq!(config.styles[0].color, Color::BLACK);
        assert_eq!(config.styles[1].label, "Mechanism 2");
        assert_eq!(config.styles[1].color, Color::GRAY);
    }

    #[test]
    fn file_settings_override_defaults() {
        let (_dir, path) = write_config(
            r##"
[figure]
width = 1200
y-max = 1.0

[style]
marker-width = 0.4

[mechanism-2]
label = "Alternative route"
color = "#112233"
"##,
        );
        let args = parse_args(&["--config", path.to_str().unwrap()]);
        let config = build_config(&args).unwrap();

        assert_eq!(config.figure.width, 1200);
        assert_eq!(config.figure.height, 300);
        assert_eq!(config.figure.y_max, 1.0);
        assert_eq!(config.assembly.marker_width, 0.4);
        assert_eq!(config.styles[1].label, "Alternative route");
        assert_eq!(config.styles[1].color, Color::new(0x11, 0x22, 0x33));
        // Untouched mechanism keeps its defaults.
        assert_eq!(config.styles[0].label, "Mechanism 1");
    }

    #[test]
    fn cli_overrides_beat_the_file() {
        let (_dir, path) = write_config("[figure]\nwidth = 1200\n\n[style]\nmarker-width = 0.4\n");
        let args = parse_args(&[
            "--config",
            path.to_str().unwrap(),
            "--width",
            "640",
            "--marker-width",
            "0.2",
        ]);
        let config = build_config(&args).unwrap();

        assert_eq!(config.figure.width, 640);
        assert_eq!(config.assembly.marker_width, 0.2);
    }

    #[test]
    fn inverted_y_range_is_rejected() {
        let (_dir, path) = write_config("[figure]\ny-min = 1.0\ny-max = -1.0\n");
        let args = parse_args(&["--config", path.to_str().unwrap()]);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn zero_figure_dimension_is_rejected() {
        let args = parse_args(&["--width", "0"]);
        assert!(matches!(build_config(&args), Err(CliError::Argument(_))));
    }

    #[test]
    fn invalid_marker_width_surfaces_the_core_error() {
        let args = parse_args(&["--marker-width=-1.0"]);
        assert!(matches!(
            build_config(&args),
            Err(CliError::AssemblyConfig(_))
        ));
    }

    #[test]
    fn output_path_is_carried_through() {
        let args = parse_args(&["-o", "out/figure.svg"]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.output, std::path::PathBuf::from("out/figure.svg"));
    }
}
