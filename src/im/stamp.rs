use super::core::Im;

// Filled-circle stamping.
// -----------------------------------------------------------------------------

impl<T: Copy> Im<T, 1> {
    /// Set every pixel with `dx*dx + dy*dy <= r*r` around (cx, cy) to `v`.
    /// The radius is inclusive and the stamp is clipped at the image borders.
    /// Centers outside the image are fine; only the in-bounds part is written.
    pub fn stamp_circle(&mut self, cx: i64, cy: i64, r: i64, v: T) {
        if self.w == 0 || self.h == 0 || r < 0 {
            return;
        }

        let y0 = (cy - r).max(0);
        let y1 = (cy + r).min(self.h as i64 - 1);
        let x0 = (cx - r).max(0);
        let x1 = (cx + r).min(self.w as i64 - 1);
        let r_sq = r * r;

        for y in y0..=y1 {
            let dy = y - cy;
            let row = (y as usize) * self.s;
            for x in x0..=x1 {
                let dx = x - cx;
                if dx * dx + dy * dy <= r_sq {
                    self.arr[row + x as usize] = v;
                }
            }
        }
    }
}

// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::im::MaskIm;
    use crate::test_helpers::mask_im_to_ascii;

    #[test]
    fn radius_zero_stamps_single_pixel() {
        let mut im = MaskIm::new(3, 3);
        im.stamp_circle(1, 1, 0, 5);
        assert_eq!(mask_im_to_ascii(&im), "000\n050\n000\n");
    }

    #[test]
    fn radius_is_inclusive() {
        let mut im = MaskIm::new(5, 5);
        im.stamp_circle(2, 2, 2, 1);

        // Axis-aligned pixels at exactly distance 2 are inside.
        assert_eq!(im.get(0, 2), 1);
        assert_eq!(im.get(4, 2), 1);
        assert_eq!(im.get(2, 0), 1);
        assert_eq!(im.get(2, 4), 1);

        // Corners are at distance sqrt(8) > 2, outside.
        assert_eq!(im.get(0, 0), 0);
        assert_eq!(im.get(4, 4), 0);
    }

    #[test]
    fn stamp_clips_at_borders() {
        let mut im = MaskIm::new(4, 4);
        im.stamp_circle(0, 0, 2, 3);

        assert_eq!(im.get(0, 0), 3);
        assert_eq!(im.get(2, 0), 3);
        assert_eq!(im.get(0, 2), 3);
        assert_eq!(im.get(3, 3), 0);
    }

    #[test]
    fn center_outside_image_writes_only_overlap() {
        let mut im = MaskIm::new(3, 3);
        im.stamp_circle(-1, 1, 1, 2);

        assert_eq!(im.get(0, 1), 2);
        assert_eq!(im.get(1, 1), 0);

        // Entirely off-image stamp is a no-op.
        let before = im.clone();
        im.stamp_circle(100, 100, 3, 9);
        assert_eq!(im, before);
    }

    #[test]
    fn restamping_with_background_erases() {
        let mut im = MaskIm::new(7, 7);
        im.stamp_circle(3, 3, 2, 4);
        im.stamp_circle(3, 3, 2, 0);
        assert!(im.arr.iter().all(|&v| v == 0));
    }
}
