//! Interactive mesh projector for the terminal.
//!
//! Usage:
//!   meshview --vertices face-vertices.data --faces face-index.txt
//!            [--mode points|wireframe] [--config render.json]
//!
//! With no mesh arguments a built-in cube is shown.
//! Controls: arrows/WASD rotate, Z/X roll, mouse wheel zooms, Q/Esc quits.

use std::env;
use std::fs;

use anyhow::Context;
use meshview_core::{loader, Mesh, RenderConfig};
use meshview_terminal::TerminalApp;
use tracing::info;

#[derive(Default)]
struct Args {
    vertices: Option<String>,
    faces: Option<String>,
    mode: Option<String>,
    config: Option<String>,
}

fn parse_args() -> Args {
    let mut parsed = Args::default();
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--vertices" if i + 1 < args.len() => {
                parsed.vertices = Some(args[i + 1].clone());
                i += 2;
            }
            "--faces" if i + 1 < args.len() => {
                parsed.faces = Some(args[i + 1].clone());
                i += 2;
            }
            "--mode" if i + 1 < args.len() => {
                parsed.mode = Some(args[i + 1].clone());
                i += 2;
            }
            "--config" if i + 1 < args.len() => {
                parsed.config = Some(args[i + 1].clone());
                i += 2;
            }
            _ => i += 1,
        }
    }
    parsed
}

fn main() -> anyhow::Result<()> {
    // Log to stderr so the alternate screen stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();

    let mut config = match &args.config {
        Some(path) => {
            let text =
                fs::read_to_string(path).with_context(|| format!("read config {path}"))?;
            RenderConfig::from_json_str(&text).with_context(|| format!("parse config {path}"))?
        }
        None => RenderConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.mode = mode;
    }

    let mesh = match (&args.vertices, &args.faces) {
        (Some(vertices_path), Some(faces_path)) => {
            let vertices = fs::read_to_string(vertices_path)
                .with_context(|| format!("read vertices {vertices_path}"))?;
            let faces = fs::read_to_string(faces_path)
                .with_context(|| format!("read faces {faces_path}"))?;
            loader::load_mesh(&vertices, &faces).context("load mesh")?
        }
        (None, None) => {
            info!("no mesh files given, using the built-in cube");
            Mesh::cube(2.0)
        }
        _ => anyhow::bail!("--vertices and --faces must be given together"),
    };

    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        mode = %config.mode,
        "mesh loaded"
    );

    let mut app = TerminalApp::new(mesh, &config)?;
    app.run()?;
    Ok(())
}
