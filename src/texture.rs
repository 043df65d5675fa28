use bevy::asset::RenderAssetUsages;
use bevy::image::{ImageAddressMode, ImageFilterMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const TEX_SIZE: usize = 256;

/// Grayscale asphalt: per-texel noise around a mid-dark base, with faint
/// diagonal streaks imitating worn tarmac. Seeded so tests can pin the
/// output; the app feeds it fresh entropy each run.
pub fn generate_asphalt(seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut buf = Vec::with_capacity(TEX_SIZE * TEX_SIZE * 4);

    for y in 0..TEX_SIZE {
        for x in 0..TEX_SIZE {
            let base = 40 + rng.random_range(0..40i32);
            let noise = rng.random_range(0..40i32) - 20;
            let streak = if (x + y) % 37 < 8 {
                8 * rng.random_range(0..10i32) / 10
            } else {
                0
            };
            let v = (base + noise + streak).clamp(0, 255) as u8;
            buf.extend_from_slice(&[v, v, v, 255]);
        }
    }

    buf
}

/// Wrap the generated texels in a repeating, linearly filtered GPU texture.
/// RENDER_WORLD-only usage lets Bevy drop the host copy after upload.
pub fn asphalt_image(seed: u64) -> Image {
    let mut image = Image::new(
        Extent3d {
            width: TEX_SIZE as u32,
            height: TEX_SIZE as u32,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        generate_asphalt(seed),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    );
    image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        mag_filter: ImageFilterMode::Linear,
        min_filter: ImageFilterMode::Linear,
        ..default()
    });
    image
}
