// Class-id display colors.
//
// Only the ids are persisted; these colors exist purely for on-screen
// feedback. Ids without a palette entry still paint and save normally, they
// just all share the fallback color.

pub const BACKGROUND_CLASS: u8 = 0;

const COLOR_CLASS_1: [u8; 3] = [255, 0, 0]; // red
const COLOR_CLASS_2: [u8; 3] = [0, 200, 0]; // green
const COLOR_CLASS_3: [u8; 3] = [0, 64, 255]; // blue
const COLOR_CLASS_4: [u8; 3] = [255, 220, 0]; // yellow
const COLOR_CLASS_5: [u8; 3] = [255, 0, 255]; // magenta

/// RGB color for a class id. Class 0 is background and has no color of its
/// own; callers render it fully transparent. Ids past the palette fall back
/// to the class-1 color.
pub fn class_rgb(class: u8) -> [u8; 3] {
    match class {
        2 => COLOR_CLASS_2,
        3 => COLOR_CLASS_3,
        4 => COLOR_CLASS_4,
        5 => COLOR_CLASS_5,
        _ => COLOR_CLASS_1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_classes_are_distinct() {
        let colors: Vec<[u8; 3]> = (1..=5).map(class_rgb).collect();
        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                assert_ne!(colors[i], colors[j]);
            }
        }
    }

    #[test]
    fn out_of_palette_ids_use_fallback() {
        assert_eq!(class_rgb(6), class_rgb(1));
        assert_eq!(class_rgb(255), class_rgb(1));
    }
}
