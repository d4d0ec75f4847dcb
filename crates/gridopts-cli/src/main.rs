//! gridopts-cli - decode option strings from the command line.
//!
//! Applies each option string to a fresh state, in order, and prints the
//! resulting configuration with its derived measurements.
//!
//! ```text
//! $ gridopts-cli @1.5C80D --view 20x15
//! $ gridopts-cli @QPK @H30 --output json
//! $ gridopts-cli @D --tones tones.yaml --output yaml
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use console::Style;
use gridopts::{OptionsState, Palette, Snapshot, Tones, ViewRect};
use tracing_subscriber::EnvFilter;

/// How the resulting configuration is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    /// Aligned `label value` lines.
    Text,
    /// Pretty-printed JSON.
    Json,
    /// YAML document.
    Yaml,
}

/// Decode grid view option strings
#[derive(Debug, Parser)]
#[command(name = "gridopts-cli", version)]
struct Cli {
    /// Option strings, applied in order (e.g. @1.5C80D)
    #[arg(required = true)]
    options: Vec<String>,

    /// View size and pan: WxH or WxH+X+Y
    #[arg(long, default_value = "10x10")]
    view: ViewRect,

    /// YAML file with `light` and `dark` tone colours
    #[arg(long)]
    tones: Option<PathBuf>,

    /// Background image reference to attach
    #[arg(long)]
    image: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputMode::Text)]
    output: OutputMode,

    /// Fail on arguments that are not option strings instead of ignoring them
    #[arg(long)]
    strict: bool,

    /// Log skipped tokens and other parse details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = run(&cli)?;
    io::stdout()
        .write_all(output.as_bytes())
        .context("writing output")?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "gridopts=debug,gridopts_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let tones = match &cli.tones {
        Some(path) => Tones::from_file(path)
            .with_context(|| format!("loading tones from {}", path.display()))?,
        None => Tones::default(),
    };

    let mut state = OptionsState::with_parts(tones, Palette);
    state.set_view(cli.view);
    if cli.image.is_some() {
        state.set_background_image(cli.image.clone());
    }

    for raw in &cli.options {
        let report = state.apply_with_report(raw);
        if !report.applied() {
            if cli.strict {
                bail!("not an option string: {:?}", raw);
            }
            tracing::warn!(input = %raw, "ignoring argument that is not an option string");
        } else if report.tokens_skipped > 0 {
            tracing::info!(
                input = %raw,
                skipped = report.tokens_skipped,
                "some tokens were not applied"
            );
        }
    }

    render(&state.snapshot(), cli.output)
}

fn render(snapshot: &Snapshot, mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Text => Ok(render_text(snapshot)),
        OutputMode::Json => {
            let mut json = serde_json::to_string_pretty(snapshot)?;
            json.push('\n');
            Ok(json)
        }
        OutputMode::Yaml => Ok(serde_yaml::to_string(snapshot)?),
    }
}

fn render_text(s: &Snapshot) -> String {
    let label = Style::new().bold();
    let user = |flag: bool| if flag { " (user)" } else { "" };
    let image = s.background.image.as_deref().unwrap_or("-");

    let rows: Vec<(&str, String)> = vec![
        ("view", s.view.to_string()),
        ("zoom", s.zoom.to_string()),
        ("cell size", s.cell_size.to_string()),
        ("dark mode", s.dark_mode.to_string()),
        ("grid opacity", s.grid_opacity.to_string()),
        (
            "grid colour",
            format!("{}{}", s.grid_colour, user(s.is_grid_user_colour)),
        ),
        ("edge opacity", s.edge_opacity.to_string()),
        (
            "background",
            format!("{}{}", s.background_colour, user(s.is_background_user_colour)),
        ),
        ("font", s.font.clone()),
        ("scale", s.scale.clone()),
        ("image", image.to_string()),
        (
            "image offset",
            format!("{}:{}", s.background.offset_x, s.background.offset_y),
        ),
        ("image zoom", s.background.zoom.to_string()),
        ("cell size px", s.cell_size_px.to_string()),
        ("size px", format!("{}x{}", s.width_px, s.height_px)),
        ("canvas", format!("{}x{}", s.canvas_width, s.canvas_height)),
        ("fg", s.fg.to_string()),
        ("bg", s.bg.to_string()),
    ];

    let mut out = String::new();
    for (name, value) in rows {
        out.push_str(&format!("{} {}\n", label.apply_to(format!("{:<13}", name)), value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["gridopts-cli"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn run_json(args: &[&str]) -> Value {
        let mut argv = args.to_vec();
        argv.extend_from_slice(&["--output", "json"]);
        let output = run(&parse(&argv)).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_requires_an_option_string() {
        assert!(Cli::try_parse_from(["gridopts-cli"]).is_err());
    }

    #[test]
    fn test_parses_view() {
        let cli = parse(&["@D", "--view", "20x15+5+0"]);
        assert_eq!(cli.view, ViewRect::new(20, 15, 5, 0));
        assert_eq!(cli.output, OutputMode::Text);
    }

    #[test]
    fn test_rejects_bad_view() {
        assert!(Cli::try_parse_from(["gridopts-cli", "@D", "--view", "wide"]).is_err());
    }

    #[test]
    fn test_json_output() {
        let value = run_json(&["@1.5C80D"]);
        assert_eq!(value["zoom"], 1.5);
        assert_eq!(value["cell_size"], 80);
        assert_eq!(value["dark_mode"], true);
        assert_eq!(value["cell_size_px"], 120.0);
        assert_eq!(value["fg"], "#f4f6ff");
    }

    #[test]
    fn test_strings_apply_in_order() {
        let value = run_json(&["@N", "@H50"]);
        assert_eq!(value["grid_opacity"], 0.5);
    }

    #[test]
    fn test_view_is_clamped() {
        let value = run_json(&["@D", "--view", "40x10+90+0"]);
        assert_eq!(value["view"]["pan_x"], 60);
    }

    #[test]
    fn test_image_attached() {
        let value = run_json(&["@B2", "--image", "maps/keep.png"]);
        assert_eq!(value["background"]["image"], "maps/keep.png");
        assert_eq!(value["background"]["zoom"], 2.0);
    }

    #[test]
    fn test_non_option_string_ignored() {
        let value = run_json(&["hello", "@C60"]);
        assert_eq!(value["cell_size"], 60);
    }

    #[test]
    fn test_strict_rejects_non_option_string() {
        let cli = parse(&["hello", "--strict"]);
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("not an option string"));
    }

    #[test]
    fn test_yaml_output() {
        let output = run(&parse(&["@C80", "--output", "yaml"])).unwrap();
        assert!(output.contains("cell_size: 80"));
        assert!(output.contains("font: AzoSans"));
    }

    #[test]
    fn test_text_output() {
        let output = run(&parse(&["@2QPK"])).unwrap();
        assert!(output.contains("cell size px"));
        assert!(output.contains("80"));
        assert!(output.contains("#fabed4 (user)"));
        assert!(output.contains("960x960"));
    }

    #[test]
    fn test_tones_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tones.yaml");
        std::fs::write(&path, "light: '#ffffff'\ndark: '#000000'\n").unwrap();

        let value = run_json(&["@D", "--tones", path.to_str().unwrap()]);
        assert_eq!(value["fg"], "#ffffff");
        assert_eq!(value["bg"], "#000000");
    }

    #[test]
    fn test_missing_tones_file() {
        let cli = parse(&["@D", "--tones", "/no/such/tones.yaml"]);
        let err = run(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("loading tones"));
    }
}
