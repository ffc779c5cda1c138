mod canvas;
mod core;
mod protocol;
mod renderer;
mod shared;
mod utils;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::launcher::{self, CanvasArgs, CanvasRequest};
use crate::renderer::{format_grid, FormatStyle};
use crate::shared::constants;
use crate::utils::config::FileConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write error.log and debug.log into this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the composited canvas as an array literal (default)
    Render {
        #[command(flatten)]
        canvas: CanvasArgs,
        #[arg(long, value_enum)]
        style: Option<FormatStyle>,
    },
    /// Draw the canvas in the terminal with truecolor half blocks
    Preview {
        #[command(flatten)]
        canvas: CanvasArgs,
    },
    /// Print the checksummed quarter-row packets for the matrix, one per line
    Packets {
        #[command(flatten)]
        canvas: CanvasArgs,
    },
    /// Check packet checksums and print the pixels they carry
    Verify {
        #[arg(required = true)]
        packets: Vec<String>,
    },
    /// List the named colors
    Colors {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(dir) = &cli.log_dir {
        crate::utils::logger::init(dir);
    }

    let config_path = Path::new(constants::PIXELGRID_CONFIG_FILE);
    let result = run(cli.command, config_path, &mut std::io::stdout().lock());

    if let Err(err) = &result {
        crate::utils::logger::error(&format!("{:#}", err));
    }
    crate::utils::logger::shutdown();
    result
}

/// Run one command. Only explicit canvas subcommands read the config file, so
/// the bare invocation always prints the fixed 16x16 snake.
fn run<W: Write>(command: Option<Commands>, config_path: &Path, out: &mut W) -> Result<()> {
    let Some(command) = command else {
        let text = launcher::render(&CanvasRequest::default(), FormatStyle::default())?;
        writeln!(out, "{}", text)?;
        return Ok(());
    };

    match command {
        Commands::Render { canvas, style } => {
            let config = FileConfig::load(config_path)?;
            let request = CanvasRequest::resolve(&canvas, &config);
            let style = style.or(config.style).unwrap_or_default();
            let text = launcher::render(&request, style)?;
            writeln!(out, "{}", text)?;
        }
        Commands::Preview { canvas } => {
            let config = FileConfig::load(config_path)?;
            let request = CanvasRequest::resolve(&canvas, &config);
            let grid = launcher::build_canvas(&request)?;
            crate::renderer::render_preview(&grid, &mut *out)?;
        }
        Commands::Packets { canvas } => {
            let config = FileConfig::load(config_path)?;
            let request = CanvasRequest::resolve(&canvas, &config);
            let grid = launcher::build_canvas(&request)?;
            let packets = crate::protocol::encode_grid(&grid)?;

            for packet in packets {
                writeln!(out, "{}", packet)?;
            }
        }
        Commands::Verify { packets } => {
            // Decode everything first so a bad packet produces no partial output
            let mut decoded = Vec::with_capacity(packets.len());
            for (index, packet) in packets.iter().enumerate() {
                let pixels = crate::protocol::decode_packet(packet)
                    .with_context(|| format!("packet {} ({})", index, packet))?;
                decoded.push(pixels);
            }
            let grid = crate::protocol::assemble_grid(decoded.iter().flatten().copied())?;

            for pixels in &decoded {
                let line: Vec<String> = pixels
                    .iter()
                    .map(|p| format!("({}, {}) {}", p.row, p.col, p.color))
                    .collect();
                writeln!(out, "ok {}", line.join(" | "))?;
            }
            writeln!(out, "{}", format_grid(&grid, FormatStyle::Bracket))?;
        }
        Commands::Colors { json } => {
            let palette = crate::canvas::color::palette();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&palette)?)?;
            } else {
                for entry in palette {
                    writeln!(out, "{:<6} {}", entry.name, entry.hex)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn run_to_string(command: Option<Commands>, config_path: &Path) -> Result<String> {
        let mut out = Vec::new();
        run(command, config_path, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_bare_run_ignores_config() {
        let path = write_config("pixelgrid_bare_run.config", "size = 4\nfill = Red\nstyle = c\n");

        let text = run_to_string(None, &path).unwrap();
        let expected = launcher::render(&CanvasRequest::default(), FormatStyle::Bracket).unwrap();
        assert_eq!(text, format!("{}\n", expected));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_render_subcommand_applies_config() {
        let path = write_config("pixelgrid_render_cmd.config", "size = 9\nstyle = c\n");
        let command = Commands::Render {
            canvas: CanvasArgs::default(),
            style: None,
        };

        let text = run_to_string(Some(command), &path).unwrap();
        assert!(text.starts_with("{{0x000000, 0x008000"));
        assert!(text.ends_with("};\n"));
        assert_eq!(text.lines().count(), 9);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_colors_and_verify_skip_broken_config() {
        let path = write_config("pixelgrid_broken.config", "fill = mauve\n");

        let colors = run_to_string(Some(Commands::Colors { json: false }), &path).unwrap();
        assert!(colors.starts_with("Black  0x000000"));

        let grid = launcher::build_canvas(&CanvasRequest::default()).unwrap();
        let packets = crate::protocol::encode_grid(&grid).unwrap();
        let verified = run_to_string(Some(Commands::Verify { packets }), &path).unwrap();
        assert!(verified.ends_with(&format!("{}\n", format_grid(&grid, FormatStyle::Bracket))));

        let render = Commands::Render {
            canvas: CanvasArgs::default(),
            style: None,
        };
        assert!(run_to_string(Some(render), &path).is_err());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_verify_rejects_bad_packet_without_output() {
        let mut out = Vec::new();
        let command = Commands::Verify {
            packets: vec!["0000000000".to_string()],
        };
        assert!(run(Some(command), Path::new("unused.config"), &mut out).is_err());
        assert!(out.is_empty());
    }
}
