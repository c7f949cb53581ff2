use crate::core::models::lattice::Point;

/// Draws a walk as rows of characters.
///
/// The grid spans the bounding box of the walk. Each residue's label is written at its
/// offset from the minimum corner and every other cell is blank. Row `0` holds the
/// smallest `y`.
pub fn render(points: &[Point]) -> Vec<String> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let width = (max_x - min_x + 1) as usize;
    let height = (max_y - min_y + 1) as usize;
    let mut grid = vec![vec![' '; width]; height];
    for p in points {
        grid[(p.y - min_y) as usize][(p.x - min_x) as usize] = p.residue.to_char();
    }

    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}

/// Lays out several rendered grids next to each other, separated by `gap` spaces.
///
/// Grids shorter than the tallest one are padded with blank rows of their own width.
pub fn render_side_by_side(grids: &[Vec<String>], gap: usize) -> Vec<String> {
    let height = grids.iter().map(Vec::len).max().unwrap_or(0);
    let separator = " ".repeat(gap);

    (0..height)
        .map(|row| {
            grids
                .iter()
                .map(|grid| match grid.get(row) {
                    Some(line) => line.clone(),
                    None => " ".repeat(grid.first().map_or(0, |l| l.chars().count())),
                })
                .collect::<Vec<_>>()
                .join(&separator)
        })
        .collect()
}
