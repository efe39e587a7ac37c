use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use cubemesh::{by_id, Appearance, Cube, Face, FaceAppearanceMap};
use glam::Vec3;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meshtool")]
#[command(about = "Cube surface mesh generation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print mesh statistics for a cube
    Info {
        #[command(flatten)]
        cube: CubeArgs,
    },

    /// Export the cube mesh buffers as JSON
    Export {
        #[command(flatten)]
        cube: CubeArgs,

        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct CubeArgs {
    /// Minimum corner of the cube as "x,y,z"
    #[arg(long, default_value = "0,0,0", value_parser = parse_vec3)]
    origin: Vec3,

    /// Edge length
    #[arg(long, default_value_t = 1.0)]
    edge: f32,

    /// Appearance for faces without an explicit assignment
    #[arg(long, default_value = "black")]
    default_appearance: String,

    /// Per-face appearance assignment, e.g. "front=red" (repeatable)
    #[arg(long = "face", value_name = "FACE=APPEARANCE")]
    faces: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { cube } => {
            let cube = build_cube(&cube)?;
            let mesh = cube.mesh();
            let data = mesh.to_mesh_data();
            let min = cube.origin();
            let max = cube.origin() + Vec3::splat(cube.edge_length());

            println!("origin:    {}", cube.origin());
            println!("edge:      {}", cube.edge_length());
            println!("bounds:    {} .. {}", min, max);
            println!("triangles: {}", mesh.triangle_count());
            println!("vertices:  {}", data.vertices.len() / 3);
            println!("indices:   {}", data.indices.len());
        }
        Commands::Export { cube, output } => {
            let cube = build_cube(&cube)?;
            let data = cube.mesh().to_mesh_data();
            let json = serde_json::to_string_pretty(&data)?;

            match output {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Wrote mesh to {}", path.display());
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}

fn build_cube(args: &CubeArgs) -> Result<Cube> {
    let default_appearance = lookup_appearance(&args.default_appearance)?;

    let mut appearances = FaceAppearanceMap::new();
    for entry in &args.faces {
        let (face, id) = entry
            .split_once('=')
            .with_context(|| format!("invalid face assignment \"{entry}\", expected FACE=APPEARANCE"))?;
        appearances.insert(parse_face(face)?, lookup_appearance(id)?);
    }

    let cube = Cube::with_appearances(args.origin, args.edge, appearances, default_appearance)
        .context("failed to build cube")?;

    tracing::debug!(
        "built cube at {} with {} triangles",
        cube.origin(),
        cube.mesh().triangle_count()
    );
    Ok(cube)
}

fn lookup_appearance(id: &str) -> Result<Appearance> {
    by_id(id).with_context(|| format!("unknown appearance \"{id}\""))
}

fn parse_face(name: &str) -> Result<Face> {
    let face = match name.to_ascii_lowercase().as_str() {
        "front" => Face::Front,
        "right" => Face::Right,
        "back" => Face::Back,
        "left" => Face::Left,
        "up" => Face::Up,
        "down" => Face::Down,
        _ => bail!("unknown face \"{name}\""),
    };
    Ok(face)
}

fn parse_vec3(s: &str) -> std::result::Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected \"x,y,z\", got \"{s}\""));
    }
    let mut coords = [0.0f32; 3];
    for (coord, part) in coords.iter_mut().zip(&parts) {
        *coord = part
            .trim()
            .parse()
            .map_err(|e| format!("invalid coordinate \"{part}\": {e}"))?;
    }
    Ok(Vec3::from_array(coords))
}
