#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Im<T, const N_CH: usize> {
    pub w: usize,
    pub h: usize,
    pub s: usize, // stride in elements (w * N_CH)
    pub arr: Vec<T>,
}

// Constructor
// -----------------------------------------------------------------------------
impl<T: Copy + Default, const N_CH: usize> Im<T, N_CH> {
    pub fn new(w: usize, h: usize) -> Self {
        let s = w * N_CH;
        let arr = vec![T::default(); s * h];
        Self { w, h, s, arr }
    }

    pub fn fill(&mut self, v: T) {
        self.arr.fill(v);
    }
}

impl<T, const N_CH: usize> Im<T, N_CH> {
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, x: usize, y: usize, ch: usize) -> &T {
        unsafe { self.arr.get_unchecked(y * self.s + x * N_CH + ch) }
    }

    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, x: usize, y: usize, ch: usize) -> &mut T {
        unsafe { self.arr.get_unchecked_mut(y * self.s + x * N_CH + ch) }
    }
}

// Single-channel accessors. Deliberately bounds-checked: mask edits arrive
// from UI coordinates, so a wrong bounds assumption should panic clearly
// rather than be UB.
// -----------------------------------------------------------------------------
impl<T: Copy> Im<T, 1> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.arr[y * self.s + x]
    }

    #[inline]
    pub fn put(&mut self, x: usize, y: usize, v: T) {
        self.arr[y * self.s + x] = v;
    }
}

pub type MaskIm = Im<u8, 1>;
pub type RGBAIm = Im<u8, 4>;
