//! Renderer-agnostic 3D scene graph.
//!
//! The layout core produces plain numbers; this module is where those numbers become
//! something a renderer can draw:
//! - Named nodes carry an optional triangle mesh, a fill color and a local transform.
//! - Transforms are `glam::Mat4`, composed as `world_from_local = parent * local`.
//! - `flatten()` emits a list of draw items with fully composed transforms.
//!
//! This module does not depend on any GPU API. `Vertex3D` is `bytemuck::Pod` so an
//! external renderer can upload `Mesh3D::vertex_bytes()` directly.

use std::collections::BTreeMap;

use glam::{Mat4, Vec3};

use crate::mesh::MeshError;

/// Axis-aligned bounding box in scene units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb3 {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Default for Aabb3 {
    fn default() -> Self {
        Self::empty()
    }
}

impl Aabb3 {
    #[inline]
    pub fn from_min_max(min: [f32; 3], max: [f32; 3]) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn empty() -> Self {
        Self {
            min: [f32::INFINITY; 3],
            max: [f32::NEG_INFINITY; 3],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        (0..3).any(|i| self.min[i] > self.max[i])
    }

    #[inline]
    pub fn include_point(&mut self, p: [f32; 3]) {
        for i in 0..3 {
            self.min[i] = self.min[i].min(p[i]);
            self.max[i] = self.max[i].max(p[i]);
        }
    }

    pub fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        let mut out = self;
        out.include_point(other.min);
        out.include_point(other.max);
        out
    }

    #[inline]
    pub fn center(&self) -> [f32; 3] {
        std::array::from_fn(|i| (self.min[i] + self.max[i]) * 0.5)
    }

    #[inline]
    pub fn size(&self) -> [f32; 3] {
        std::array::from_fn(|i| self.max[i] - self.min[i])
    }

    /// The 8 corners, used to transform a box conservatively.
    fn corners(&self) -> [[f32; 3]; 8] {
        let (a, b) = (self.min, self.max);
        [
            [a[0], a[1], a[2]],
            [b[0], a[1], a[2]],
            [a[0], b[1], a[2]],
            [b[0], b[1], a[2]],
            [a[0], a[1], b[2]],
            [b[0], a[1], b[2]],
            [a[0], b[1], b[2]],
            [b[0], b[1], b[2]],
        ]
    }
}

/// Simple RGBA color (linear space assumed).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    // Palette used by the scene builders.
    pub const CURVE: Self = Self::rgb(0.45, 0.65, 0.95);
    pub const AREA: Self = Self::rgb(0.35, 0.85, 0.45);
    pub const NEGATIVE_AREA: Self = Self::rgb(0.90, 0.40, 0.35);
    pub const NODE: Self = Self::rgb(0.90, 0.55, 0.25);
    pub const EDGE: Self = Self {
        r: 0.70,
        g: 0.70,
        b: 0.75,
        a: 0.5,
    };

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// A 3D vertex with position only.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    pub position: [f32; 3],
}

/// CPU-side triangle mesh with `u16` indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh3D {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
}

impl Mesh3D {
    #[inline]
    pub fn with_capacity(v: usize, i: usize) -> Self {
        Self {
            positions: Vec::with_capacity(v),
            indices: Vec::with_capacity(i),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append `other`, offsetting its indices.
    ///
    /// Fails (leaving `self` untouched) if the combined vertex count no longer fits `u16`.
    pub fn append(&mut self, other: &Mesh3D) -> Result<(), MeshError> {
        let base = self.positions.len();
        let total = base + other.positions.len();
        if total > u16::MAX as usize {
            return Err(MeshError::IndexOverflow { vertices: total });
        }

        self.positions.extend_from_slice(&other.positions);
        let base = base as u16;
        self.indices
            .extend(other.indices.iter().copied().map(|idx| base + idx));
        Ok(())
    }

    pub fn bounds(&self) -> Aabb3 {
        let mut b = Aabb3::empty();
        for &p in &self.positions {
            b.include_point(p);
        }
        b
    }

    pub fn vertices(&self) -> Vec<Vertex3D> {
        self.positions
            .iter()
            .map(|&position| Vertex3D { position })
            .collect()
    }

    /// Raw vertex bytes, ready for a vertex buffer.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw index bytes, ready for an index buffer.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// A draw item produced by flattening the scene graph.
#[derive(Debug, Clone)]
pub struct DrawItem {
    pub name: String,
    pub mesh: Mesh3D,
    pub fill: Rgba,
    pub world_from_local: Mat4,
}

/// A node in the scene graph.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub local_from_parent: Mat4,
    pub fill: Rgba,
    pub mesh: Option<Mesh3D>,
    pub children: Vec<SceneNode>,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            name: "node".to_string(),
            local_from_parent: Mat4::IDENTITY,
            fill: Rgba::WHITE,
            mesh: None,
            children: Vec::new(),
        }
    }
}

impl SceneNode {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn with_mesh(mut self, mesh: Mesh3D) -> Self {
        self.mesh = Some(mesh);
        self
    }

    #[inline]
    pub fn with_fill(mut self, fill: Rgba) -> Self {
        self.fill = fill;
        self
    }

    #[inline]
    pub fn with_transform(mut self, local_from_parent: Mat4) -> Self {
        self.local_from_parent = local_from_parent;
        self
    }

    #[inline]
    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Bounds of the mesh and all children, in this node's local space.
    ///
    /// Child bounds are mapped through the child transform by transforming all 8 corners.
    pub fn compute_local_bounds(&self) -> Aabb3 {
        let mut bounds = self.mesh.as_ref().map(Mesh3D::bounds).unwrap_or_default();

        for child in &self.children {
            let child_bounds = child.compute_local_bounds();
            if child_bounds.is_empty() {
                continue;
            }
            for c in child_bounds.corners() {
                let p = child.local_from_parent.transform_point3(Vec3::from_array(c));
                bounds.include_point(p.to_array());
            }
        }

        bounds
    }

    /// Flatten this subtree into draw items, composing transforms.
    pub fn flatten(&self, world_from_parent: Mat4, out: &mut Vec<DrawItem>) {
        let world_from_local = world_from_parent * self.local_from_parent;

        if let Some(mesh) = &self.mesh {
            out.push(DrawItem {
                name: self.name.clone(),
                mesh: mesh.clone(),
                fill: self.fill,
                world_from_local,
            });
        }

        for child in &self.children {
            child.flatten(world_from_local, out);
        }
    }
}

/// A top-level scene holding named root nodes.
#[derive(Debug, Default)]
pub struct Scene {
    pub roots: Vec<SceneNode>,
    pub index: BTreeMap<String, usize>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root node. A root with an existing name replaces the old one in place.
    pub fn add_root(&mut self, node: SceneNode) {
        if let Some(&idx) = self.index.get(&node.name) {
            self.roots[idx] = node;
            return;
        }
        let idx = self.roots.len();
        self.index.insert(node.name.clone(), idx);
        self.roots.push(node);
    }

    pub fn get(&self, name: &str) -> Option<&SceneNode> {
        self.index.get(name).and_then(|&i| self.roots.get(i))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SceneNode> {
        let i = *self.index.get(name)?;
        self.roots.get_mut(i)
    }

    /// World-space bounds of every root.
    pub fn bounds(&self) -> Aabb3 {
        self.roots.iter().fold(Aabb3::empty(), |acc, root| {
            let local = root.compute_local_bounds();
            if local.is_empty() {
                return acc;
            }
            let mut world = Aabb3::empty();
            for c in local.corners() {
                let p = root.local_from_parent.transform_point3(Vec3::from_array(c));
                world.include_point(p.to_array());
            }
            acc.union(world)
        })
    }

    /// Flatten the full scene into draw items, in root insertion order.
    pub fn flatten(&self) -> Vec<DrawItem> {
        let mut items = Vec::new();
        for root in &self.roots {
            root.flatten(Mat4::IDENTITY, &mut items);
        }
        items
    }
}
