//! Triangulation of shadow paths for hosts whose rasterizer only consumes triangles.

use crate::ShadowError;
use lyon::math::{Box2D, Point};
use lyon::path::{FillRule, Path};
use lyon::tessellation::{BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers};

/// Triangles covering a filled path, in the path's local coordinate frame.
#[derive(Debug, Clone)]
pub struct TessellatedFill {
    pub buffers: VertexBuffers<Point, u16>,
}

impl TessellatedFill {
    pub fn triangle_count(&self) -> usize {
        self.buffers.indices.len() / 3
    }

    /// Total covered area.
    pub fn area(&self) -> f32 {
        self.buffers
            .indices
            .chunks_exact(3)
            .map(|triangle| {
                let a = self.buffers.vertices[triangle[0] as usize];
                let b = self.buffers.vertices[triangle[1] as usize];
                let c = self.buffers.vertices[triangle[2] as usize];
                ((b - a).cross(c - a) * 0.5).abs()
            })
            .sum()
    }

    pub fn bounds(&self) -> Option<Box2D> {
        if self.buffers.vertices.is_empty() {
            return None;
        }
        Some(Box2D::from_points(self.buffers.vertices.iter()))
    }
}

/// Fills `path` with `fill_rule`, flattening curves to within `tolerance`.
pub fn tessellate_fill(
    path: &Path,
    fill_rule: FillRule,
    tolerance: f32,
) -> Result<TessellatedFill, ShadowError> {
    let options = FillOptions::default()
        .with_fill_rule(fill_rule)
        .with_tolerance(tolerance);

    let mut buffers: VertexBuffers<Point, u16> = VertexBuffers::new();
    let mut tessellator = FillTessellator::new();
    tessellator
        .tessellate_path(
            path,
            &options,
            &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| vertex.position()),
        )
        .map_err(|error| ShadowError::Tessellation(format!("{error:?}")))?;

    Ok(TessellatedFill { buffers })
}
