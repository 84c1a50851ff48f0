use std::fs;
use std::path::{Path, PathBuf};

use bevy::image::{ImageFilterMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use tl_core::MapBounds;

/// Error type for map loading.
#[derive(Debug)]
pub enum MapLoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl std::fmt::Display for MapLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {}", path.display(), source),
            Self::Decode { path, source } => {
                write!(f, "cannot decode {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for MapLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

/// A decoded map image together with its size in map space.
pub struct LoadedMap {
    pub image: Image,
    pub bounds: MapBounds,
}

/// Read and decode a map image from disk.
///
/// The format is sniffed from the file contents, so anything the `image`
/// crate was built with is accepted (PNG in this workspace).
pub fn load_map_image(path: &Path) -> Result<LoadedMap, MapLoadError> {
    let bytes = fs::read(path).map_err(|source| MapLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = image::load_from_memory(&bytes)
        .map_err(|source| MapLoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (width, height) = decoded.dimensions();
    Ok(LoadedMap {
        image: create_image(width, height, decoded.into_raw()),
        bounds: MapBounds::new(width as f32, height as f32),
    })
}

/// Wrap raw RGBA8 pixels in a Bevy image.
pub fn create_image(width: u32, height: u32, data: Vec<u8>) -> Image {
    let mut image = Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        default(),
    );

    // Nearest-neighbor keeps map pixels crisp
    image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        mag_filter: ImageFilterMode::Nearest,
        min_filter: ImageFilterMode::Nearest,
        ..default()
    });

    image
}
