// partition.rs - Splitting grid rows into per-worker bands

use std::ops::Range;

/// Contiguous rows `[first_row, last_row)` owned by one worker for one round.
pub type Band = Range<usize>;

/// Splits `[0, size)` into `workers` contiguous bands of `size / workers` rows.
/// The last band absorbs the remainder, so every row lands in exactly one band.
/// With more workers than rows the leading bands are empty.
pub fn partition_rows(size: usize, workers: usize) -> Vec<Band> {
    let workers = workers.max(1);
    let rows_per_worker = size / workers;
    (0..workers)
        .map(|i| {
            let first_row = i * rows_per_worker;
            let last_row = if i + 1 == workers { size } else { first_row + rows_per_worker };
            first_row..last_row
        })
        .collect()
}

/// `None` or an empty range stands for the whole grid.
pub fn resolve_rows(size: usize, rows: Option<Band>) -> Band {
    match rows {
        Some(rows) if !rows.is_empty() => rows.start.min(size)..rows.end.min(size),
        _ => 0..size,
    }
}

/// Hands out one disjoint mutable slice per band. `bands` must come from
/// [`partition_rows`] (ordered, contiguous, starting at row 0).
pub fn split_rows_mut<'a, T>(cells: &'a mut [T], width: usize, bands: &[Band]) -> Vec<&'a mut [T]> {
    let mut rest = cells;
    let mut slices = Vec::with_capacity(bands.len());
    for band in bands {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(band.len() * width);
        slices.push(head);
        rest = tail;
    }
    slices
}
