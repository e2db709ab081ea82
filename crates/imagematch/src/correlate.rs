use image::GrayImage;
use rayon::prelude::*;

/// Pixel statistics of the reference, computed once per match.
///
/// All sums are exact integers so flat-window detection does not depend on
/// floating point rounding.
pub(crate) struct Template<'a> {
    image: &'a GrayImage,
    n: i128,
    sum: i128,
    /// `n * Σt² - (Σt)²`, i.e. `n` times the sum of squared deviations.
    spread: i128,
}

impl<'a> Template<'a> {
    pub(crate) fn new(image: &'a GrayImage) -> Self {
        let (sum, sum_sq) = image
            .as_raw()
            .iter()
            .fold((0i128, 0i128), |(s, s2), &px| {
                let v = i128::from(px);
                (s + v, s2 + v * v)
            });
        let n = i128::from(image.width()) * i128::from(image.height());
        Self {
            image,
            n,
            sum,
            spread: n * sum_sq - sum * sum,
        }
    }

    /// Normalized correlation coefficient of the window of `search` whose
    /// top-left corner is at (`x`, `y`).
    pub(crate) fn coefficient_at(&self, search: &GrayImage, x: u32, y: u32) -> f64 {
        let (tw, th) = self.image.dimensions();
        let stride = search.width() as usize;
        let pixels = search.as_raw();
        let tpl = self.image.as_raw();

        let mut sum = 0i128;
        let mut sum_sq = 0i128;
        let mut cross = 0i128;
        for row in 0..th as usize {
            let window_row = (y as usize + row) * stride + x as usize;
            let window = &pixels[window_row..window_row + tw as usize];
            let reference = &tpl[row * tw as usize..(row + 1) * tw as usize];
            for (&w, &t) in window.iter().zip(reference) {
                let w = i128::from(w);
                sum += w;
                sum_sq += w * w;
                cross += w * i128::from(t);
            }
        }

        let window_spread = self.n * sum_sq - sum * sum;
        match (self.spread == 0, window_spread == 0) {
            // Two uniform patches match only if they have the same level.
            (true, true) => {
                if sum == self.sum {
                    1.0
                } else {
                    0.0
                }
            }
            (true, false) | (false, true) => 0.0,
            (false, false) => {
                let numerator = (self.n * cross - sum * self.sum) as f64;
                let denominator = (window_spread as f64).sqrt() * (self.spread as f64).sqrt();
                (numerator / denominator).clamp(-1.0, 1.0)
            }
        }
    }
}

/// Best window in `search` as (coefficient, x, y).
///
/// Ties resolve to the first window in row-major order, in both the
/// sequential and the parallel scan.
pub(crate) fn best_window(tpl: &Template<'_>, search: &GrayImage, parallel: bool) -> (f64, u32, u32) {
    let (tw, th) = tpl.image.dimensions();
    let max_x = search.width() - tw;
    let max_y = search.height() - th;

    let scan_row = |y: u32| -> (f64, u32, u32) {
        (0..=max_x)
            .map(|x| (tpl.coefficient_at(search, x, y), x, y))
            .fold((f64::NEG_INFINITY, 0, y), prefer)
    };

    if parallel {
        (0..=max_y)
            .into_par_iter()
            .map(scan_row)
            .reduce(|| (f64::NEG_INFINITY, u32::MAX, u32::MAX), prefer)
    } else {
        (0..=max_y)
            .map(scan_row)
            .fold((f64::NEG_INFINITY, u32::MAX, u32::MAX), prefer)
    }
}

fn prefer(a: (f64, u32, u32), b: (f64, u32, u32)) -> (f64, u32, u32) {
    if b.0 > a.0 || (b.0 == a.0 && (b.2, b.1) < (a.2, a.1)) {
        b
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn noise(width: u32, height: u32, seed: u32) -> GrayImage {
        let mut state = seed;
        GrayImage::from_fn(width, height, |_, _| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            Luma([(state >> 16) as u8])
        })
    }

    #[test]
    fn identical_patch_scores_one() {
        let img = noise(16, 12, 7);
        let tpl = Template::new(&img);
        assert!((tpl.coefficient_at(&img, 0, 0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn affine_brightness_change_keeps_full_correlation() {
        let img = GrayImage::from_fn(10, 10, |x, y| Luma([(x * 10 + y) as u8]));
        let brighter = GrayImage::from_fn(10, 10, |x, y| Luma([(x * 20 + y * 2 + 5) as u8]));
        let tpl = Template::new(&img);
        assert!((tpl.coefficient_at(&brighter, 0, 0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn flat_patches() {
        let grey = GrayImage::from_pixel(4, 4, Luma([128]));
        let dark = GrayImage::from_pixel(4, 4, Luma([10]));
        let textured = noise(4, 4, 3);

        let tpl = Template::new(&grey);
        assert_eq!(tpl.coefficient_at(&grey, 0, 0), 1.0);
        assert_eq!(tpl.coefficient_at(&dark, 0, 0), 0.0);
        assert_eq!(tpl.coefficient_at(&textured, 0, 0), 0.0);
        assert_eq!(Template::new(&textured).coefficient_at(&grey, 0, 0), 0.0);
    }

    #[test]
    fn sliding_search_finds_embedded_patch() {
        let search = noise(40, 30, 99);
        let patch = image::imageops::crop_imm(&search, 11, 6, 12, 9).to_image();
        let tpl = Template::new(&patch);

        let sequential = best_window(&tpl, &search, false);
        let parallel = best_window(&tpl, &search, true);
        assert_eq!((sequential.1, sequential.2), (11, 6));
        assert!((sequential.0 - 1.0).abs() < 1e-12);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn ties_resolve_to_first_window() {
        let search = GrayImage::from_pixel(6, 5, Luma([40]));
        let patch = GrayImage::from_pixel(2, 2, Luma([40]));
        let tpl = Template::new(&patch);
        assert_eq!(best_window(&tpl, &search, false), (1.0, 0, 0));
        assert_eq!(best_window(&tpl, &search, true), (1.0, 0, 0));
    }
}
