use super::core::{Im, RGBAIm};

// Nearest-neighbor resize.
//
// Nearest is the only correct choice for label rasters: every output pixel is
// a copy of some input pixel, so no new class ids can appear.
// -----------------------------------------------------------------------------

#[inline(always)]
fn src_index(dst: usize, dst_dim: usize, src_dim: usize) -> usize {
    // dst_dim >= 1 is guaranteed by the callers.
    (dst * src_dim / dst_dim).min(src_dim - 1)
}

impl<T: Copy + Default> Im<T, 1> {
    pub fn resize_nearest(&self, dst_w: usize, dst_h: usize) -> Self {
        assert!(dst_w > 0 && dst_h > 0, "resize target must be non-empty");
        assert!(self.w > 0 && self.h > 0, "resize source must be non-empty");

        let mut dst = Im::<T, 1>::new(dst_w, dst_h);
        for y in 0..dst_h {
            let sy = src_index(y, dst_h, self.h);
            let src_row = sy * self.s;
            let dst_row = y * dst.s;
            for x in 0..dst_w {
                let sx = src_index(x, dst_w, self.w);
                dst.arr[dst_row + x] = self.arr[src_row + sx];
            }
        }
        dst
    }
}

impl RGBAIm {
    pub fn resize_nearest(&self, dst_w: usize, dst_h: usize) -> Self {
        assert!(dst_w > 0 && dst_h > 0, "resize target must be non-empty");
        assert!(self.w > 0 && self.h > 0, "resize source must be non-empty");

        let mut dst = RGBAIm::new(dst_w, dst_h);
        for y in 0..dst_h {
            let sy = src_index(y, dst_h, self.h);
            for x in 0..dst_w {
                let sx = src_index(x, dst_w, self.w);
                for ch in 0..4 {
                    unsafe {
                        *dst.get_unchecked_mut(x, y, ch) = *self.get_unchecked(sx, sy, ch);
                    }
                }
            }
        }
        dst
    }
}

// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::im::MaskIm;
    use crate::test_helpers::{mask_im_from_ascii, mask_im_to_ascii};

    #[test]
    fn upscale_2x_duplicates_pixels() {
        let src = mask_im_from_ascii(
            "
            12
            03
            ",
        );

        let dst = src.resize_nearest(4, 4);
        assert_eq!(
            mask_im_to_ascii(&dst),
            "1122\n1122\n0033\n0033\n",
        );
    }

    #[test]
    fn downscale_picks_existing_values_only() {
        let src = mask_im_from_ascii(
            "
            1234
            5678
            1234
            5678
            ",
        );

        let dst = src.resize_nearest(2, 2);
        let src_vals: Vec<u8> = src.arr.clone();
        assert!(dst.arr.iter().all(|v| src_vals.contains(v)));
    }

    #[test]
    fn identity_resize_is_bitwise_equal() {
        let src = mask_im_from_ascii(
            "
            102
            340
            ",
        );
        let dst = src.resize_nearest(3, 2);
        assert_eq!(dst, src);
    }

    #[test]
    fn resize_is_deterministic() {
        let mut src = MaskIm::new(7, 5);
        src.put(3, 2, 4);
        src.put(6, 4, 2);

        let a = src.resize_nearest(11, 9);
        let b = src.resize_nearest(11, 9);
        assert_eq!(a, b);
    }
}
