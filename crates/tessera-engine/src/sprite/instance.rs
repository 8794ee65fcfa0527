use std::cell::RefCell;
use std::rc::Rc;

use bytemuck::{Pod, Zeroable};

use crate::coords::{ColorRgba, Transform2, Vec2};

use super::{TemplateId, UvRect};

/// Shared handle to an instance owned by a [`SpriteBatch`](super::SpriteBatch).
pub type SpriteHandle = Rc<RefCell<SpriteInstance>>;

/// One drawable quad.
///
/// `position` is the top-left corner of the quad and the pivot of `rotation`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteInstance {
    pub template: TemplateId,
    pub position: Vec2,
    pub size: Vec2,
    /// Radians, clockwise on screen.
    pub rotation: f32,
    pub color: ColorRgba,
    pub uv: UvRect,
    /// Hidden instances are skipped when the batch stages its buffer.
    pub visible: bool,
}

impl SpriteInstance {
    pub(crate) fn new(template: TemplateId, uv: UvRect, size: Vec2) -> Self {
        Self {
            template,
            position: Vec2::zero(),
            size,
            rotation: 0.0,
            color: ColorRgba::white(),
            uv,
            visible: false,
        }
    }

    /// Places the quad so its local origin follows `t`.
    ///
    /// `base_size` is scaled by the transform's axis lengths.
    pub fn apply_transform(&mut self, t: &Transform2, base_size: Vec2) {
        self.position = t.origin();
        self.rotation = t.angle();
        self.size = base_size.scale(t.axis_scale());
    }

    pub(crate) fn to_gpu(&self) -> GpuSprite {
        GpuSprite {
            position: [self.position.x, self.position.y],
            size: [self.size.x, self.size.y],
            uv_min: [self.uv.u0, self.uv.v0],
            uv_max: [self.uv.u1, self.uv.v1],
            color: self.color.to_array(),
            rotation: self.rotation,
        }
    }
}

/// Per-instance vertex data as laid out in the instance buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuSprite {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
    pub color: [f32; 4],
    pub rotation: f32,
}

impl GpuSprite {
    const ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        1 => Float32x2, // position
        2 => Float32x2, // size
        3 => Float32x2, // uv_min
        4 => Float32x2, // uv_max
        5 => Float32x4, // color
        6 => Float32    // rotation
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuSprite>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
