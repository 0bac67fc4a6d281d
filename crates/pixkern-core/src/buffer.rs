use crate::{error::CoreError, size::ImageSize};

/// Read-only row-major view over a caller-owned slice.
///
/// Acts as the accessor side of a kernel: `|x, y| buffer.get(x, y)`.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a, S> {
    data: &'a [S],
    size: ImageSize,
}

impl<'a, S: Copy> PixelBuffer<'a, S> {
    /// Wrap `data`, which must hold exactly `size.width * size.height` samples.
    pub fn new(size: ImageSize, data: &'a [S]) -> Result<Self, CoreError> {
        if data.len() != size.area() {
            return Err(CoreError::InvalidBufferLength(data.len(), size.area()));
        }
        Ok(Self { data, size })
    }

    /// The grid size.
    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Read the sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid. The kernels only ever
    /// request in-range coordinates.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> S {
        self.data[y * self.size.width + x]
    }

    /// The underlying slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [S] {
        self.data
    }
}

/// Mutable row-major view over a caller-owned slice.
///
/// Acts as the writer side of a kernel. [`PixelBufferMut::set`] drops writes
/// that fall outside the grid, which is the clipping the rasterizer expects
/// from its writer.
#[derive(Debug)]
pub struct PixelBufferMut<'a, S> {
    data: &'a mut [S],
    size: ImageSize,
}

impl<'a, S: Copy> PixelBufferMut<'a, S> {
    /// Wrap `data`, which must hold exactly `size.width * size.height` samples.
    pub fn new(size: ImageSize, data: &'a mut [S]) -> Result<Self, CoreError> {
        if data.len() != size.area() {
            return Err(CoreError::InvalidBufferLength(data.len(), size.area()));
        }
        Ok(Self { data, size })
    }

    /// The grid size.
    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Write `value` at `(x, y)`, ignoring coordinates outside the grid.
    ///
    /// Returns whether the write landed.
    #[inline]
    pub fn set(&mut self, x: i64, y: i64, value: S) -> bool {
        if !self.size.contains(x, y) {
            return false;
        }
        self.data[y as usize * self.size.width + x as usize] = value;
        true
    }

    /// Read the sample at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<S> {
        if !self.size.contains(x, y) {
            return None;
        }
        Some(self.data[y as usize * self.size.width + x as usize])
    }

    /// The underlying slice.
    #[inline]
    pub fn as_slice(&self) -> &[S] {
        &*self.data
    }

    /// The underlying mutable slice.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [S] {
        &mut *self.data
    }
}
