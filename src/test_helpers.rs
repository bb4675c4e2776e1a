use crate::im::{MaskIm, RGBAIm};

/// Build a mask from an ascii grid, one digit per pixel. Leading/trailing
/// whitespace per line is trimmed so grids can be indented in test source.
pub fn mask_im_from_ascii(grid: &str) -> MaskIm {
    let rows: Vec<&str> = grid
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    let h = rows.len();
    assert!(h > 0, "grid must have at least one non-empty row");
    let w = rows[0].len();
    assert!(w > 0, "grid rows must be non-empty");
    for r in &rows {
        assert_eq!(r.len(), w, "all rows must have equal length");
    }

    let mut im = MaskIm::new(w, h);
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let v = ch
                .to_digit(10)
                .unwrap_or_else(|| panic!("invalid class char '{ch}', expected digit"))
                as u8;
            im.arr[y * im.s + x] = v;
        }
    }
    im
}

/// Dump a mask as one ascii row per line: digits for 0..=9, letters for
/// 10..=35, '*' beyond that.
pub fn mask_im_to_ascii(im: &MaskIm) -> String {
    let mut out = String::new();
    for y in 0..im.h {
        for x in 0..im.w {
            let v = im.arr[y * im.s + x];
            let ch = match v {
                0..=9 => (b'0' + v) as char,
                10..=35 => (b'A' + (v - 10)) as char,
                _ => '*',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Opaque mid-gray RGBA raster, stand-in for a decoded photo.
pub fn blank_rgba_im(w: usize, h: usize) -> RGBAIm {
    let mut im = RGBAIm::new(w, h);
    for px in im.arr.chunks_exact_mut(4) {
        px.copy_from_slice(&[128, 128, 128, 255]);
    }
    im
}
