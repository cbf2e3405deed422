use std::ops::Range;

use crate::error::{KMeansError, Result};

/// Split `len` items into at most `mappers` contiguous, non-empty ranges.
///
/// Every range holds `ceil(len / mappers)` items except possibly the last,
/// which may be smaller. Fewer than `mappers` ranges come back when there
/// are not enough items to go around.
pub fn split_chunks(len: usize, mappers: usize) -> Result<Vec<Range<usize>>> {
    if mappers == 0 {
        return Err(KMeansError::InvalidMapperCount);
    }
    if len == 0 {
        return Ok(vec![]);
    }

    let size = len.div_ceil(mappers);
    Ok((0..len)
        .step_by(size)
        .map(|start| start..(start + size).min(len))
        .collect())
}
