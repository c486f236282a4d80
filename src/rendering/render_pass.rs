/// Creates a render pass that clears the target to a specific color
pub(super) fn create_background_render_pass<'a>(
    encoder: &'a mut wgpu::CommandEncoder,
    label: &str,
    texture_view: &'a wgpu::TextureView,
    color: wgpu::Color,
) -> wgpu::RenderPass<'a> {
    create_render_pass(encoder, label, texture_view, wgpu::LoadOp::Clear(color))
}

/// Creates a render pass that draws on top of the target's existing contents
pub(super) fn create_overlay_render_pass<'a>(
    encoder: &'a mut wgpu::CommandEncoder,
    label: &str,
    texture_view: &'a wgpu::TextureView,
) -> wgpu::RenderPass<'a> {
    create_render_pass(encoder, label, texture_view, wgpu::LoadOp::Load)
}

fn create_render_pass<'a>(
    encoder: &'a mut wgpu::CommandEncoder,
    label: &str,
    texture_view: &'a wgpu::TextureView,
    load: wgpu::LoadOp<wgpu::Color>,
) -> wgpu::RenderPass<'a> {
    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: texture_view,
            resolve_target: None,
            ops: wgpu::Operations {
                load,
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        occlusion_query_set: None,
        timestamp_writes: None,
    })
}
