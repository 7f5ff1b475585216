use crate::image::GrayImage;

/// Render a checkerboard with `rows x cols` interior corners.
///
/// The board has `(rows + 1) x (cols + 1)` squares of `square_px` pixels
/// each; the top-left square is white. Interior corner `(r, c)` sits at
/// pixel `((c + 1) * square_px, (r + 1) * square_px)`.
pub fn render_checkerboard(rows: usize, cols: usize, square_px: usize) -> GrayImage {
    let board_rows = rows + 1;
    let board_cols = cols + 1;
    let mut img = GrayImage::new(board_cols * square_px, board_rows * square_px);
    for i in 0..board_rows {
        for j in 0..board_cols {
            if (i + j) % 2 == 0 {
                img.fill_rect(j * square_px, i * square_px, square_px, square_px, 255);
            }
        }
    }
    img
}
