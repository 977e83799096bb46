//! SVG renderer
//!
//! Draws placed words into an SVG document the size of the canvas, with a
//! group translated to the center so placements can use center-relative
//! coordinates.

use crate::layout::{Canvas, PlacedWord};

const FONT_FAMILY: &str = "Impact";

/// Render placements to an SVG document
pub fn render_svg(words: &[PlacedWord], canvas: Canvas) -> String {
    let mut buf = String::new();

    buf.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
        canvas.width, canvas.height
    ));
    buf.push_str(&format!(
        "<g transform=\"translate({},{})\">\n",
        num(f64::from(canvas.width) / 2.0),
        num(f64::from(canvas.height) / 2.0)
    ));

    for word in words {
        buf.push_str(&render_word(word));
        buf.push('\n');
    }

    buf.push_str("</g>\n</svg>\n");
    buf
}

fn render_word(word: &PlacedWord) -> String {
    format!(
        "<text style=\"font-size: {}px; font-family: {}; fill: {};\" text-anchor=\"middle\" transform=\"translate({},{})rotate({})\">{}</text>",
        num(word.size),
        FONT_FAMILY,
        word.color.to_css(),
        num(word.x),
        num(word.y),
        word.rotate,
        escape(&word.text)
    )
}

/// Two decimal places at most, no trailing zeros
fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // avoid "-0"
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::Rgba;

    fn placed(text: &str) -> PlacedWord {
        PlacedWord {
            text: text.to_string(),
            size: 23.333333,
            color: Rgba::new(0, 255, 0, 255),
            x: -12.5,
            y: 8.0,
            rotate: 90,
        }
    }

    #[test]
    fn empty_cloud_is_valid_svg() {
        let svg = render_svg(&[], Canvas::default());
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"300\" height=\"275\">"));
        assert!(svg.contains("<g transform=\"translate(150,137.5)\">"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn renders_one_text_per_word() {
        let svg = render_svg(&[placed("Good"), placed("news")], Canvas::default());
        assert_eq!(svg.matches("<text ").count(), 2);
    }

    #[test]
    fn text_carries_style_and_transform() {
        let svg = render_svg(&[placed("Good")], Canvas::default());
        assert!(svg.contains(
            "<text style=\"font-size: 23.33px; font-family: Impact; fill: rgba(0, 255, 0, 1);\" text-anchor=\"middle\" transform=\"translate(-12.5,8)rotate(90)\">Good</text>"
        ));
    }

    #[test]
    fn text_is_escaped() {
        let svg = render_svg(&[placed("AT&T <Corp>")], Canvas::default());
        assert!(svg.contains(">AT&amp;T &lt;Corp&gt;</text>"));
    }

    #[test]
    fn num_formats_compactly() {
        assert_eq!(num(40.0), "40");
        assert_eq!(num(17.5), "17.5");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(1.0 / 3.0), "0.33");
    }
}
