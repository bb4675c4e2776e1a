// Annotation session state and the operations the UI maps input events onto.
//
// Two parallel label rasters are kept in sync:
// - `original_mask` is the source of truth at the image's native resolution
//   and is the only thing ever persisted.
// - `display_mask` is a nearest-neighbor resample of it at the current zoom.
//   It is mutated directly while painting and recomputed in full whenever the
//   zoom changes.
//
// Painting writes both rasters synchronously, so a zoom-triggered refresh can
// always rebuild `display_mask` from `original_mask` without losing strokes.
// The display-space stamp and the original-space stamp round their radii
// independently, so at non-integer zoom the two are approximate duals. That
// matches the persisted-mask semantics this tool has always had.

use crate::error::{Error, Result};
use crate::im::{MaskIm, RGBAIm};
use log::info;
use std::path::{Path, PathBuf};

pub const BRUSH_RADIUS: i64 = 6;
pub const ZOOM_STEP: f32 = 0.1;

// Unbounded zoom degenerates: a tiny factor collapses the display buffers to
// nothing and a huge one allocates absurd rasters. Clamp to a generous range.
pub const ZOOM_MIN: f32 = 0.05;
pub const ZOOM_MAX: f32 = 20.0;

const DEFAULT_CLASS: u8 = 1;

/// Everything that only exists once an image has been opened.
struct Loaded {
    image_path: PathBuf,
    original_image: RGBAIm,
    original_mask: MaskIm,
    display_image: RGBAIm,
    display_mask: MaskIm,
    zoom: f32,
}

pub struct Annotator {
    loaded: Option<Loaded>,
    current_class: u8,
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator {
    pub fn new() -> Self {
        Self {
            loaded: None,
            current_class: DEFAULT_CLASS,
        }
    }

    // Loading
    // -------------------------------------------------------------------------

    /// Decode an image file and start a fresh session over it: blank mask at
    /// the image's native resolution, zoom reset to 1.0. Any unsaved mask
    /// from a previous image is discarded. On decode failure the previous
    /// session state is left untouched.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let image = RGBAIm::load(path).map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_decoded(path.to_path_buf(), image);
        Ok(())
    }

    /// Start a session over an already-decoded raster. `load` is this plus
    /// the file decode; tests drive the session through here.
    pub fn load_decoded(&mut self, image_path: PathBuf, image: RGBAIm) {
        let w = image.w;
        let h = image.h;
        info!("loaded {:?} ({w}x{h})", image_path);

        let mut loaded = Loaded {
            image_path,
            original_mask: MaskIm::new(w, h),
            display_image: RGBAIm::new(1, 1),
            display_mask: MaskIm::new(1, 1),
            original_image: image,
            zoom: 1.0,
        };
        refresh(&mut loaded);
        self.loaded = Some(loaded);
    }

    // View
    // -------------------------------------------------------------------------

    /// Recompute `display_image` and `display_mask` from the originals at the
    /// current zoom. Full recompute, never incremental: any stroke must
    /// already be in `original_mask` by the time this runs.
    pub fn refresh_view(&mut self) {
        if let Some(loaded) = &mut self.loaded {
            refresh(loaded);
        }
    }

    pub fn zoom_in(&mut self) {
        self.apply_zoom(|z| z * (1.0 + ZOOM_STEP));
    }

    pub fn zoom_out(&mut self) {
        self.apply_zoom(|z| z / (1.0 + ZOOM_STEP));
    }

    fn apply_zoom(&mut self, f: impl Fn(f32) -> f32) {
        if let Some(loaded) = &mut self.loaded {
            loaded.zoom = f(loaded.zoom).clamp(ZOOM_MIN, ZOOM_MAX);
            refresh(loaded);
        }
    }

    // Painting
    // -------------------------------------------------------------------------

    /// Stamp the brush at display-mask coordinates (1:1 with the canvas).
    /// Writes the display-resolution stamp and the inverse-scaled
    /// original-resolution stamp in the same call.
    pub fn paint(&mut self, x: i64, y: i64) {
        let Some(loaded) = &mut self.loaded else {
            return;
        };

        let class = self.current_class;
        loaded.display_mask.stamp_circle(x, y, BRUSH_RADIUS, class);

        let scale = 1.0 / loaded.zoom;
        let orig_x = (x as f32 * scale).floor() as i64;
        let orig_y = (y as f32 * scale).floor() as i64;
        let orig_r = ((BRUSH_RADIUS as f32 * scale).floor() as i64).max(1);
        loaded
            .original_mask
            .stamp_circle(orig_x, orig_y, orig_r, class);
    }

    /// Select the paint class from a pressed key. Only decimal digits are
    /// accepted; 0 selects background, which erases when painted.
    pub fn set_class(&mut self, ch: char) {
        if let Some(d) = ch.to_digit(10) {
            self.current_class = d as u8;
            info!("switched to class {d}");
        }
    }

    // Saving
    // -------------------------------------------------------------------------

    /// Write the full-resolution mask into `dir` as
    /// `mask_<basename of the loaded image>`, raw class ids as pixel bytes.
    /// Returns the written path, or `None` when no image was ever loaded.
    pub fn save_mask(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let Some(loaded) = &self.loaded else {
            return Ok(None);
        };

        let basename = loaded
            .image_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "mask.png".to_owned());
        let out_path = dir.join(format!("mask_{basename}"));

        loaded
            .original_mask
            .save(&out_path)
            .map_err(|source| Error::Encode {
                path: out_path.clone(),
                source,
            })?;

        info!("saved mask to {:?}", out_path);
        Ok(Some(out_path))
    }

    // Accessors
    // -------------------------------------------------------------------------

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn current_class(&self) -> u8 {
        self.current_class
    }

    pub fn zoom(&self) -> f32 {
        self.loaded.as_ref().map_or(1.0, |l| l.zoom)
    }

    pub fn image_path(&self) -> Option<&Path> {
        self.loaded.as_ref().map(|l| l.image_path.as_path())
    }

    pub fn display_image(&self) -> Option<&RGBAIm> {
        self.loaded.as_ref().map(|l| &l.display_image)
    }

    pub fn display_mask(&self) -> Option<&MaskIm> {
        self.loaded.as_ref().map(|l| &l.display_mask)
    }

    pub fn original_mask(&self) -> Option<&MaskIm> {
        self.loaded.as_ref().map(|l| &l.original_mask)
    }
}

fn refresh(loaded: &mut Loaded) {
    let dst_w = ((loaded.original_image.w as f32 * loaded.zoom) as usize).max(1);
    let dst_h = ((loaded.original_image.h as f32 * loaded.zoom) as usize).max(1);
    loaded.display_image = loaded.original_image.resize_nearest(dst_w, dst_h);
    loaded.display_mask = loaded.original_mask.resize_nearest(dst_w, dst_h);
}

// Tests
// =============================================================================
