/// One acquired and cleared surface frame.
///
/// Holding the surface texture blocks acquisition of the next frame, so the
/// frame goes back to [`Gpu::present`](super::Gpu::present) within the same
/// loop iteration.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
