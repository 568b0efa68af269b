use std::ops::Range;

use rayon::prelude::*;
use tracing::debug;

use crate::{
    error::Result,
    texture::{PLANES, PixelSource, Texture},
    transform::traits::ColorTransform,
};

/// How the rows of a texture are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Every row on the calling thread, top to bottom.
    Seq,
    /// One rayon work item per row, joined before returning.
    #[default]
    Par,
}

impl Strategy {
    /// Allocate a sink matching `source` and fill it with the transformed colors.
    ///
    /// The sink is only returned once every row has been written. A source
    /// that cannot answer a coordinate inside its own bounds panics, and the
    /// panic is carried over to the caller.
    pub fn apply<S, T>(&self, source: &S, transform: &T) -> Result<Texture<u8>>
    where
        S: PixelSource + ?Sized,
        T: ColorTransform + ?Sized,
    {
        let bounds = source.bounds();
        let mut sink = Texture::<u8>::try_new(bounds)?;

        debug!(
            width = bounds.width(),
            height = bounds.height(),
            strategy = ?self,
            "applying color transform"
        );

        if bounds.is_empty() {
            return Ok(sink);
        }

        let columns = bounds.min_x..bounds.max_x;
        let rows = bounds.min_y..bounds.max_y;
        let row_len = sink.row_len();

        match self {
            Strategy::Seq => sink.rows_mut().zip(rows).for_each(|(row, y)| {
                transform_row(source, transform, columns.clone(), y, row);
            }),
            Strategy::Par => sink
                .as_mut()
                .par_chunks_exact_mut(row_len)
                .zip(rows.into_par_iter())
                .for_each(|(row, y)| {
                    transform_row(source, transform, columns.clone(), y, row);
                }),
        }

        Ok(sink)
    }
}

/// Row parallel application of `transform` over `source`.
#[inline]
pub fn apply<S, T>(source: &S, transform: &T) -> Result<Texture<u8>>
where
    S: PixelSource + ?Sized,
    T: ColorTransform + ?Sized,
{
    Strategy::Par.apply(source, transform)
}

#[inline(always)]
fn transform_row<S, T>(source: &S, transform: &T, columns: Range<i32>, y: i32, row: &mut [u8])
where
    S: PixelSource + ?Sized,
    T: ColorTransform + ?Sized,
{
    debug_assert_eq!(row.len(), columns.len() * PLANES);
    for (x, pixel) in columns.zip(row.chunks_exact_mut(PLANES)) {
        let color = transform.transform(source.color_at(x, y));
        pixel.copy_from_slice(&color.0);
    }
}
