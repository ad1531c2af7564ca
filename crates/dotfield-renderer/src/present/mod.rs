//! GPU presentation of the software-rasterized field.

mod blit;
mod gpu;
mod types;

pub use blit::BlitPipeline;
pub use gpu::GpuContext;
pub use types::{PhysicalSize, RendererError};

use std::sync::Arc;

use dotfield_common::Color;
use winit::window::Window;

use crate::canvas::PixelCanvas;

/// GPU context plus blit pipeline: everything needed to show a [`PixelCanvas`].
pub struct Presenter {
    pub gpu: GpuContext,
    blit: BlitPipeline,
    scratch: Vec<u8>,
    first_frame_logged: bool,
}

impl Presenter {
    pub async fn new(window: Arc<Window>) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let blit = BlitPipeline::new(&gpu.device, gpu.format());
        Ok(Self {
            gpu,
            blit,
            scratch: Vec::new(),
            first_frame_logged: false,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Upload `canvas` and present it over `background`.
    ///
    /// A lost or outdated surface is reconfigured and the frame dropped.
    pub fn present(&mut self, canvas: &PixelCanvas, background: Color) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        canvas.write_rgba8(&mut self.scratch);
        self.blit.upload(
            &self.gpu.device,
            &self.gpu.queue,
            &self.scratch,
            canvas.width(),
            canvas.height(),
        );

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("dotfield frame encoder"),
            });
        self.blit.render(
            &mut encoder,
            &view,
            clear_color(background, self.gpu.format().is_srgb()),
        );
        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        if !self.first_frame_logged {
            self.first_frame_logged = true;
            tracing::info!(
                width = self.gpu.size.width,
                height = self.gpu.size.height,
                format = ?self.gpu.format(),
                "first frame presented"
            );
        }
        Ok(())
    }
}

/// Convert a 0-255 background color into a render pass clear color.
///
/// sRGB surfaces expect linear clear values.
pub fn clear_color(color: Color, srgb_target: bool) -> wgpu::Color {
    let channel = |c: f32| {
        let v = (c / 255.0).clamp(0.0, 1.0) as f64;
        if srgb_target {
            srgb_to_linear(v)
        } else {
            v
        }
    };
    wgpu::Color {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
        a: color.a.clamp(0.0, 1.0) as f64,
    }
}

fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn clear_color_scales_channels() {
        let c = clear_color(Color::rgb(255.0, 0.0, 51.0), false);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn clear_color_linearizes_for_srgb_targets() {
        let c = clear_color(Color::rgb(128.0, 255.0, 0.0), true);
        assert!((c.r - 0.2158).abs() < 1e-3);
        assert!((c.g - 1.0).abs() < 1e-9);
        assert_eq!(c.b, 0.0);
    }
}
