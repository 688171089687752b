//! Color mapping for mood visualization.
//!
//! Colors are (r, g, b) tuples in [0.0, 1.0] or hex strings "#RRGGBB"
//! for direct HTML/CSS embedding.

use emomind_core::Mood;

/// Map a mood to its display color.
pub fn mood_color(mood: Mood) -> (f32, f32, f32) {
    match mood {
        Mood::Neutral => (0.6, 0.6, 0.6),   // gray
        Mood::Happy => (1.0, 0.85, 0.0),    // gold
        Mood::Sad => (0.25, 0.4, 0.8),      // blue
        Mood::Angry => (0.9, 0.2, 0.15),    // red
        Mood::Surprised => (1.0, 0.55, 0.0), // orange
        Mood::Fearful => (0.55, 0.25, 0.75), // purple
        Mood::Curious => (0.0, 0.75, 0.5),  // teal
    }
}

/// Convert (r, g, b) in [0,1] to a CSS hex color string "#RRGGBB".
pub fn rgb_to_hex(r: f32, g: f32, b: f32) -> String {
    let ri = (r.clamp(0.0, 1.0) * 255.0) as u8;
    let gi = (g.clamp(0.0, 1.0) * 255.0) as u8;
    let bi = (b.clamp(0.0, 1.0) * 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", ri, gi, bi)
}

/// Hex display color for a mood.
pub fn mood_hex(mood: Mood) -> String {
    let (r, g, b) = mood_color(mood);
    rgb_to_hex(r, g, b)
}
