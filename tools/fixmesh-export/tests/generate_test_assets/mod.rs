//! OBJ generators for integration tests

use std::io::Write;
use std::path::Path;

/// Unit cube as six quads, the way Blender exports it (forward +Y, up +Z)
pub fn generate_cube_obj(path: &Path) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "# Blender v2.93.1 OBJ File: ''")?;
    writeln!(file, "# www.blender.org")?;
    writeln!(file, "mtllib cube.mtl")?;
    writeln!(file, "o Cube")?;
    for (x, y, z) in [
        (1.0, 1.0, 1.0),
        (1.0, 1.0, -1.0),
        (1.0, -1.0, 1.0),
        (1.0, -1.0, -1.0),
        (-1.0, 1.0, 1.0),
        (-1.0, 1.0, -1.0),
        (-1.0, -1.0, 1.0),
        (-1.0, -1.0, -1.0),
    ] {
        writeln!(file, "v {x:.6} {y:.6} {z:.6}")?;
    }
    writeln!(file, "usemtl Material")?;
    writeln!(file, "s off")?;
    for [a, b, c, d] in [
        [1, 5, 7, 3],
        [4, 3, 7, 8],
        [8, 7, 5, 6],
        [6, 2, 4, 8],
        [2, 1, 3, 4],
        [6, 5, 1, 2],
    ] {
        writeln!(file, "f {a} {b} {c} {d}")?;
    }
    Ok(())
}

/// Two vertices and one degenerate quad: the smallest valid input
pub fn generate_minimal_obj(path: &Path) -> std::io::Result<()> {
    std::fs::write(path, "v 0 0 0\nv 1 0 0\nf 1 1 2 2\n")
}

/// Vertices only, no faces
pub fn generate_point_cloud_obj(path: &Path) -> std::io::Result<()> {
    std::fs::write(path, "o Points\nv 0 0 0\nv 1 0 0\nv 0 1 0\n")
}
