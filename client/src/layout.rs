//! Word placement
//!
//! `LayoutEngine` is the seam for packing libraries. `RowLayout` is the
//! built-in engine: largest words first, greedy rows centered on the canvas.
//! Words that cannot fit are dropped.

use crate::cloud::{Rgba, WordInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 300,
            height: 275,
        }
    }
}

/// A word with its position relative to the canvas center
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub size: f64,
    pub color: Rgba,
    pub x: f64,
    pub y: f64,
    /// Degrees
    pub rotate: i32,
}

pub trait LayoutEngine: Send + Sync {
    fn layout(&self, words: &[WordInfo], canvas: Canvas) -> Vec<PlacedWord>;
}

#[derive(Debug, Clone, Copy)]
pub struct RowLayout {
    /// Space around each word, in pixels
    pub padding: f64,
    /// Estimated glyph width as a fraction of font size (Impact is narrow)
    pub glyph_width: f64,
    /// Baseline offset from the row top as a fraction of row height
    pub ascent: f64,
}

impl Default for RowLayout {
    fn default() -> Self {
        Self {
            padding: 1.0,
            glyph_width: 0.55,
            ascent: 0.8,
        }
    }
}

struct Row<'a> {
    words: Vec<(&'a WordInfo, f64)>,
    width: f64,
    height: f64,
}

impl RowLayout {
    fn box_width(&self, word: &WordInfo) -> f64 {
        word.text.chars().count() as f64 * word.size * self.glyph_width + 2.0 * self.padding
    }

    fn box_height(&self, word: &WordInfo) -> f64 {
        word.size + 2.0 * self.padding
    }
}

impl LayoutEngine for RowLayout {
    fn layout(&self, words: &[WordInfo], canvas: Canvas) -> Vec<PlacedWord> {
        let max_width = f64::from(canvas.width);
        let max_height = f64::from(canvas.height);

        let mut ordered: Vec<&WordInfo> = words.iter().collect();
        ordered.sort_by(|a, b| b.size.total_cmp(&a.size));

        // Fill rows greedily; a word too wide for an empty row never fits.
        let mut rows: Vec<Row> = Vec::new();
        let mut used_height = 0.0;
        for word in ordered {
            let width = self.box_width(word);
            let height = self.box_height(word);
            if width > max_width {
                continue;
            }
            match rows.last_mut() {
                Some(row) if row.width + width <= max_width => {
                    row.words.push((word, width));
                    row.width += width;
                }
                _ => {
                    if used_height + height > max_height {
                        continue;
                    }
                    used_height += height;
                    rows.push(Row {
                        words: vec![(word, width)],
                        width,
                        height,
                    });
                }
            }
        }

        let mut placed = Vec::new();
        let mut top = -used_height / 2.0;
        for row in rows {
            let baseline = top + row.height * self.ascent;
            let mut left = -row.width / 2.0;
            for (word, width) in row.words {
                placed.push(PlacedWord {
                    text: word.text.clone(),
                    size: word.size,
                    color: word.color,
                    x: left + width / 2.0,
                    y: baseline,
                    rotate: 0,
                });
                left += width;
            }
            top += row.height;
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, size: f64) -> WordInfo {
        WordInfo {
            text: text.to_string(),
            size,
            color: Rgba::new(0, 0, 0, 255),
        }
    }

    fn fits(layout: &RowLayout, p: &PlacedWord, canvas: Canvas) -> bool {
        let w = p.text.chars().count() as f64 * p.size * layout.glyph_width + 2.0 * layout.padding;
        let half_w = f64::from(canvas.width) / 2.0;
        let half_h = f64::from(canvas.height) / 2.0;
        p.x - w / 2.0 >= -half_w - 1e-9 && p.x + w / 2.0 <= half_w + 1e-9 && p.y.abs() <= half_h
    }

    #[test]
    fn empty_input_places_nothing() {
        assert!(RowLayout::default().layout(&[], Canvas::default()).is_empty());
    }

    #[test]
    fn largest_word_is_placed_first() {
        let words = vec![word("small", 10.0), word("big", 40.0), word("mid", 20.0)];

        let placed = RowLayout::default().layout(&words, Canvas::default());

        let texts: Vec<_> = placed.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["big", "mid", "small"]);
    }

    #[test]
    fn placements_stay_inside_canvas() {
        let canvas = Canvas {
            width: 200,
            height: 120,
        };
        let layout = RowLayout::default();
        let words: Vec<_> = (0..60)
            .map(|i| word(&format!("word{}", i), 10.0 + (i % 7) as f64 * 5.0))
            .collect();

        let placed = layout.layout(&words, canvas);

        assert!(!placed.is_empty());
        assert!(placed.len() < words.len());
        assert!(placed.iter().all(|p| fits(&layout, p, canvas)));
    }

    #[test]
    fn too_wide_word_is_dropped() {
        let canvas = Canvas {
            width: 100,
            height: 100,
        };
        let words = vec![word("extraordinarily", 40.0), word("ok", 10.0)];

        let placed = RowLayout::default().layout(&words, canvas);

        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].text, "ok");
    }

    #[test]
    fn single_word_is_centered_horizontally() {
        let placed = RowLayout::default().layout(&[word("news", 20.0)], Canvas::default());
        assert_eq!(placed.len(), 1);
        assert!(placed[0].x.abs() < 1e-9);
        assert_eq!(placed[0].rotate, 0);
    }

    #[test]
    fn layout_is_deterministic() {
        let words = vec![word("a", 12.0), word("b", 30.0), word("c", 30.0)];
        let layout = RowLayout::default();
        assert_eq!(
            layout.layout(&words, Canvas::default()),
            layout.layout(&words, Canvas::default())
        );
    }
}
