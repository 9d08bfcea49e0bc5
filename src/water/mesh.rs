//! Water grid mesh displaced by the wave field every frame.

use bytemuck::{Pod, Zeroable};
use rayon::prelude::*;

use super::waves::WaveField;
use crate::params::WaveParams;

/// Vertex data for the water mesh (y holds the current elevation)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Square plane in XZ, centered on the origin, subdivided into quads
pub struct WaterGrid {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    field: WaveField,
    subdivisions: usize,
    size: f32,
}

impl WaterGrid {
    /// Create a flat `size` x `size` grid with `subdivisions` quads per side
    pub fn new(size: f32, subdivisions: usize) -> Self {
        let subdivisions = subdivisions.max(1);
        let spacing = size / subdivisions as f32;
        let half_size = size / 2.0;

        let mut vertices = Vec::with_capacity((subdivisions + 1).pow(2));
        let mut indices = Vec::with_capacity(subdivisions.pow(2) * 6);

        for z in 0..=subdivisions {
            for x in 0..=subdivisions {
                vertices.push(Vertex {
                    position: [
                        x as f32 * spacing - half_size,
                        0.0,
                        z as f32 * spacing - half_size,
                    ],
                });
            }
        }

        // Counter-clockwise seen from +Y
        for z in 0..subdivisions {
            for x in 0..subdivisions {
                let top_left = (z * (subdivisions + 1) + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((z + 1) * (subdivisions + 1) + x) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self {
            vertices,
            indices,
            field: WaveField::default(),
            subdivisions,
            size,
        }
    }

    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Displace every vertex for `time_s`
    ///
    /// XZ never changes; y is overwritten, so no state carries between frames.
    pub fn update(&mut self, time_s: f32, waves: &WaveParams) {
        let field = &self.field;
        self.vertices.par_iter_mut().for_each(|vertex| {
            let [x, _, z] = vertex.position;
            vertex.position[1] = field.elevation(x, z, time_s, waves);
        });
    }

    /// Elevation of an arbitrary surface point (does not need to be a vertex)
    pub fn elevation_at(&self, x: f32, z: f32, time_s: f32, waves: &WaveParams) -> f32 {
        self.field.elevation(x, z, time_s, waves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_grid_creation() {
        let grid = WaterGrid::new(2.0, 16);

        // (n + 1)^2 vertices, n^2 quads of 2 triangles
        assert_eq!(grid.vertices.len(), 17 * 17);
        assert_eq!(grid.indices.len(), 16 * 16 * 6);
        assert!(grid.indices.iter().all(|&i| (i as usize) < grid.vertices.len()));
    }

    #[test]
    fn test_grid_spans_plane() {
        let grid = WaterGrid::new(2.0, 8);
        let first = grid.vertices[0].position;
        let last = grid.vertices[grid.vertices.len() - 1].position;

        assert_eq!(first, [-1.0, 0.0, -1.0]);
        assert_eq!(last, [1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_zero_subdivisions_is_single_quad() {
        let grid = WaterGrid::new(2.0, 0);
        assert_eq!(grid.subdivisions(), 1);
        assert_eq!(grid.vertices.len(), 4);
        assert_eq!(grid.indices.len(), 6);
    }

    #[test]
    fn test_update_writes_field_elevation() {
        let mut grid = WaterGrid::new(2.0, 8);
        let waves = WaveParams::default();
        grid.update(1.75, &waves);

        for vertex in &grid.vertices {
            let [x, y, z] = vertex.position;
            assert_eq!(y, grid.elevation_at(x, z, 1.75, &waves));
        }
    }

    #[test]
    fn test_update_keeps_no_history() {
        let waves = WaveParams::default();

        let mut a = WaterGrid::new(2.0, 8);
        a.update(3.0, &waves);

        let mut b = WaterGrid::new(2.0, 8);
        b.update(0.5, &waves);
        b.update(9.0, &waves);
        b.update(3.0, &waves);

        for (va, vb) in a.vertices.iter().zip(&b.vertices) {
            assert_eq!(va.position, vb.position);
        }
    }
}
