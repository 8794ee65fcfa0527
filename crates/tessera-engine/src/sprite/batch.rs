use std::cell::RefCell;
use std::rc::Rc;

use wgpu::util::{DeviceExt, StagingBelt};

use crate::coords::{Vec2, Viewport};
use crate::texture::SpriteTexture;

use super::pipeline::SpriteUniform;
use super::{BatchError, GpuSprite, SpriteHandle, SpriteInstance, SpritePipeline, TemplateId, UvRect};

/// Default template capacity of a batch.
pub const MAX_TEMPLATES: usize = 64;

/// Default instance capacity of a batch.
pub const MAX_INSTANCES: usize = 256;

/// Staging belt chunk size that fits one full batch upload.
pub const STAGING_CHUNK_SIZE: wgpu::BufferAddress =
    (MAX_INSTANCES * 2 * std::mem::size_of::<GpuSprite>()) as wgpu::BufferAddress;

struct BatchGpu {
    // Kept alive for the bind group.
    _uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_vbo: wgpu::Buffer,
}

/// Templates and instances sharing one texture, drawn with one instanced call.
///
/// The CPU side (templates, instances, staging) works without a device so it
/// can be built and inspected before [`init`](Self::init) attaches GPU
/// resources.
pub struct SpriteBatch {
    label: String,
    texture_size: (u32, u32),

    templates: Vec<UvRect>,
    instances: Vec<SpriteHandle>,
    max_templates: usize,
    max_instances: usize,

    staged: Vec<GpuSprite>,
    flushed: u32,

    gpu: Option<BatchGpu>,
}

impl SpriteBatch {
    pub fn new(label: impl Into<String>, texture_size: (u32, u32), max_templates: usize, max_instances: usize) -> Self {
        Self {
            label: label.into(),
            texture_size,
            templates: Vec::new(),
            instances: Vec::new(),
            max_templates,
            max_instances,
            staged: Vec::with_capacity(max_instances),
            flushed: 0,
            gpu: None,
        }
    }

    /// Allocates the uniform, bind group and instance buffer for `texture`.
    pub fn init(
        &mut self,
        device: &wgpu::Device,
        pipeline: &SpritePipeline,
        texture: &SpriteTexture,
        viewport: Viewport,
    ) {
        let uniform_data = SpriteUniform {
            viewport: [viewport.width.max(1.0), viewport.height.max(1.0)],
            single_channel: if texture.format().is_single_channel() { 1.0 } else { 0.0 },
            _pad: 0.0,
        };

        let uniform = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} ubo", self.label)),
            contents: bytemuck::bytes_of(&uniform_data),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} bind group", self.label)),
            layout: pipeline.bind_group_layout(),
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: uniform.as_entire_binding() },
                wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::TextureView(texture.view()) },
                wgpu::BindGroupEntry { binding: 2, resource: wgpu::BindingResource::Sampler(texture.sampler()) },
            ],
        });

        let instance_vbo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{} instance vbo", self.label)),
            size: self.instance_buffer_size(),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        self.texture_size = texture.size();
        self.gpu = Some(BatchGpu { _uniform: uniform, bind_group, instance_vbo });
    }

    pub fn is_initialized(&self) -> bool {
        self.gpu.is_some()
    }

    /// Registers a uv region and returns its id.
    pub fn create_template(&mut self, uv: UvRect) -> Result<TemplateId, BatchError> {
        if self.templates.len() >= self.max_templates {
            return Err(BatchError::TemplateCapacity { max: self.max_templates });
        }
        self.templates.push(uv);
        Ok(TemplateId(self.templates.len() - 1))
    }

    pub fn template_uv(&self, id: TemplateId) -> Option<UvRect> {
        self.templates.get(id.0).copied()
    }

    /// Texel size of a template's region.
    pub fn template_size(&self, id: TemplateId) -> Option<Vec2> {
        self.template_uv(id).map(|uv| uv.pixel_size(self.texture_size))
    }

    /// Creates a hidden instance of `template` at its native size.
    pub fn add_instance(&mut self, template: TemplateId) -> Result<SpriteHandle, BatchError> {
        let uv = self.template_uv(template).ok_or(BatchError::UnknownTemplate(template))?;
        if self.instances.len() >= self.max_instances {
            return Err(BatchError::InstanceCapacity { max: self.max_instances });
        }

        let inst = SpriteInstance::new(template, uv, uv.pixel_size(self.texture_size));
        let handle = Rc::new(RefCell::new(inst));
        self.instances.push(Rc::clone(&handle));
        Ok(handle)
    }

    pub fn update_instance(&self, handle: &SpriteHandle, position: Vec2, size: Vec2, rotation: f32) {
        let mut inst = handle.borrow_mut();
        inst.position = position;
        inst.size = size;
        inst.rotation = rotation;
    }

    /// Packs visible instances, in creation order, into the staging buffer.
    pub fn stage(&mut self) -> &[GpuSprite] {
        self.staged.clear();
        self.staged.extend(
            self.instances
                .iter()
                .map(|h| h.borrow())
                .filter(|inst| inst.visible)
                .map(|inst| inst.to_gpu()),
        );
        &self.staged
    }

    /// Stages instances and records their copy into the instance buffer.
    ///
    /// The copy is written through `belt` and recorded on `encoder`, so a
    /// later flush in the same frame does not overwrite what an earlier draw
    /// reads. The caller finishes and recalls the belt around submission.
    /// Returns the number of instances the next [`draw`](Self::draw) will
    /// render.
    pub fn flush_buffers(&mut self, belt: &mut StagingBelt, encoder: &mut wgpu::CommandEncoder) -> u32 {
        self.stage();
        self.flushed = 0;

        let Some(gpu) = self.gpu.as_ref() else { return 0 };
        let bytes = self.staged_bytes();
        let Some(size) = wgpu::BufferSize::new(bytes.len() as u64) else { return 0 };

        belt.write_buffer(encoder, &gpu.instance_vbo, 0, size).copy_from_slice(bytes);

        self.flushed = self.staged.len() as u32;
        self.flushed
    }

    /// Bytes of the last [`stage`](Self::stage).
    fn staged_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.staged)
    }

    /// Draws the instances of the last flush on top of `view`.
    pub fn draw(&self, pipeline: &SpritePipeline, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let Some(gpu) = self.gpu.as_ref() else { return };
        if self.flushed == 0 {
            return;
        }

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(&self.label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        pipeline.bind(&mut pass);
        pass.set_bind_group(0, &gpu.bind_group, &[]);
        pass.set_vertex_buffer(1, gpu.instance_vbo.slice(..));
        pass.draw_indexed(0..6, 0, 0..self.flushed);
    }

    pub fn instances(&self) -> &[SpriteHandle] {
        &self.instances
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    pub fn max_instances(&self) -> usize {
        self.max_instances
    }

    pub fn texture_size(&self) -> (u32, u32) {
        self.texture_size
    }

    fn instance_buffer_size(&self) -> u64 {
        (self.max_instances.max(1) * std::mem::size_of::<GpuSprite>()) as u64
    }
}
