//! Interactive-region report encoding
//!
//! A report is a concatenation of `[left,top,width,height]` integer tuples
//! with no separator, e.g. `[10,20,100,40][150,20,80,40]`.

use std::fmt::Write;

use crate::math::Rect;

/// Round to nearest, halves toward positive infinity
#[inline]
fn round_half_up(v: f32) -> i64 {
    (v + 0.5).floor() as i64
}

/// Encode `regions` as a report string, skipping rectangles with no area
pub fn format_region_report(regions: &[Rect]) -> String {
    let mut out = String::new();
    for rect in regions.iter().filter(|r| r.width > 0.0 && r.height > 0.0) {
        // Writing to a String cannot fail
        let _ = write!(
            out,
            "[{},{},{},{}]",
            round_half_up(rect.x),
            round_half_up(rect.y),
            round_half_up(rect.width),
            round_half_up(rect.height)
        );
    }
    out
}

/// Decode a report string back into rectangles
///
/// Mirrors the host reader: every `[a,b,c,d]` group of unsigned integers is
/// taken, anything else is skipped.
pub fn parse_region_report(report: &str) -> Vec<Rect> {
    let mut rects = Vec::new();
    let mut rest = report;

    while let Some(open) = rest.find('[') {
        rest = &rest[open + 1..];
        let Some(close) = rest.find(']') else {
            break;
        };
        let body = &rest[..close];
        if let Some(rect) = parse_tuple(body) {
            rects.push(rect);
            rest = &rest[close + 1..];
        }
    }
    rects
}

fn parse_tuple(body: &str) -> Option<Rect> {
    let mut values = [0.0f32; 4];
    let mut parts = body.split(',');
    for slot in values.iter_mut() {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = part.parse::<u32>().ok()? as f32;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Rect::new(values[0], values[1], values[2], values[3]))
}
