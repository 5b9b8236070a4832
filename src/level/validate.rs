//! Level Validator (§4.B).
//!
//! Enforces directive completeness, grid normalization, the character set,
//! uniqueness of spawn, and grid enclosure. The enclosure check is the
//! strict local 4-neighbor rule from §4.B — not the column-then-row sweep
//! the original C implementation used, which can accept certain diagonal
//! leaks (REDESIGN FLAG in spec.md §9).

use super::error::LevelValidationError;
use super::raw::RawDescriptor;
use crate::world::grid::{CellKind, Grid};
use crate::world::player::SpawnDir;

/// A fully validated, rectangular grid plus the located spawn, ready for
/// [`crate::world::World`] assembly. Texture paths and colors are carried
/// through unchanged from the raw descriptor.
pub struct ValidatedLevel {
    pub grid: Grid,
    pub spawn_row: usize,
    pub spawn_col: usize,
    pub spawn_dir: SpawnDir,
    pub tex_no: String,
    pub tex_so: String,
    pub tex_we: String,
    pub tex_ea: String,
    pub ceiling: [u8; 3],
    pub floor: [u8; 3],
}

/// Runs the full validation pipeline over a tokenized descriptor.
pub fn validate(raw: RawDescriptor) -> Result<ValidatedLevel, LevelValidationError> {
    let tex_no = raw
        .tex_no
        .ok_or(LevelValidationError::MissingDirective("NO"))?;
    let tex_so = raw
        .tex_so
        .ok_or(LevelValidationError::MissingDirective("SO"))?;
    let tex_we = raw
        .tex_we
        .ok_or(LevelValidationError::MissingDirective("WE"))?;
    let tex_ea = raw
        .tex_ea
        .ok_or(LevelValidationError::MissingDirective("EA"))?;
    let ceiling = raw
        .ceiling
        .ok_or(LevelValidationError::MissingDirective("C"))?;
    let floor = raw
        .floor
        .ok_or(LevelValidationError::MissingDirective("F"))?;

    let width = raw.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let height = raw.rows.len();

    let mut cells = vec![CellKind::Void; width * height];
    for (y, row) in raw.rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            cells[y * width + x] = classify(ch, x, y)?;
        }
        // Rows shorter than `width` stay VOID-padded: `cells` was
        // pre-filled with CellKind::Void.
    }

    let mut spawn: Option<(usize, usize, SpawnDir)> = None;
    for y in 0..height {
        for x in 0..width {
            if let CellKind::Spawn(dir) = cells[y * width + x] {
                if spawn.is_some() {
                    return Err(LevelValidationError::MultipleSpawns);
                }
                spawn = Some((x, y, dir));
            }
        }
    }
    let (spawn_col, spawn_row, spawn_dir) = spawn.ok_or(LevelValidationError::NoSpawn)?;

    let grid = Grid::new(width, height, cells);
    check_enclosure(&grid)?;

    Ok(ValidatedLevel {
        grid,
        spawn_row,
        spawn_col,
        spawn_dir,
        tex_no,
        tex_so,
        tex_we,
        tex_ea,
        ceiling,
        floor,
    })
}

fn classify(ch: char, x: usize, y: usize) -> Result<CellKind, LevelValidationError> {
    match ch {
        '1' => Ok(CellKind::Wall),
        '0' => Ok(CellKind::Open),
        ' ' => Ok(CellKind::Void),
        'N' => Ok(CellKind::Spawn(SpawnDir::North)),
        'S' => Ok(CellKind::Spawn(SpawnDir::South)),
        'E' => Ok(CellKind::Spawn(SpawnDir::East)),
        'W' => Ok(CellKind::Spawn(SpawnDir::West)),
        other => Err(LevelValidationError::InvalidCharInGrid(other, x, y)),
    }
}

/// Every OPEN/SPAWN cell's four orthogonal neighbors must exist and be
/// non-VOID (§4.B). No flood fill is needed: the invariant is local.
fn check_enclosure(grid: &Grid) -> Result<(), LevelValidationError> {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let walkable = matches!(
                grid.get(x, y),
                Some(CellKind::Open) | Some(CellKind::Spawn(_))
            );
            if !walkable {
                continue;
            }
            let neighbors = [
                x.checked_sub(1).map(|nx| (nx, y)),
                Some((x + 1, y)),
                y.checked_sub(1).map(|ny| (x, ny)),
                Some((x, y + 1)),
            ];
            for n in neighbors {
                let enclosed = match n {
                    Some((nx, ny)) => !matches!(grid.get(nx, ny), None | Some(CellKind::Void)),
                    None => false,
                };
                if !enclosed {
                    return Err(LevelValidationError::GridNotEnclosed(x, y));
                }
            }
        }
    }
    Ok(())
}
