use super::SCROLL_EPSILON;

pub fn thumb_extent_for_state(
    track_extent: f32,
    viewport_extent: f32,
    content_extent: f32,
    min_thumb_extent: f32,
) -> f32 {
    let track_extent = track_extent.max(1.0);
    if content_extent <= SCROLL_EPSILON {
        return track_extent;
    }
    let ratio = (viewport_extent / content_extent).clamp(0.0, 1.0);
    (track_extent * ratio).clamp(min_thumb_extent.max(1.0).min(track_extent), track_extent)
}

/// Top edge of the thumb for a given offset, in the same space as `track_top`.
pub fn thumb_top_for_offset(
    track_top: f32,
    track_extent: f32,
    thumb_extent: f32,
    offset: f32,
    max_offset: f32,
) -> f32 {
    let track_extent = track_extent.max(1.0);
    let thumb_extent = thumb_extent.clamp(1.0, track_extent);
    let travel = (track_extent - thumb_extent).max(0.0);
    if travel <= SCROLL_EPSILON || max_offset <= SCROLL_EPSILON {
        return track_top;
    }
    let normalized = (offset / max_offset).clamp(0.0, 1.0);
    track_top + normalized * travel
}

/// Inverse of [`thumb_top_for_offset`], clamped to `[0, max_offset]`.
pub fn offset_from_thumb_top(
    track_top: f32,
    track_extent: f32,
    thumb_extent: f32,
    thumb_top: f32,
    max_offset: f32,
) -> f32 {
    if max_offset <= SCROLL_EPSILON {
        return 0.0;
    }
    let track_extent = track_extent.max(1.0);
    let thumb_extent = thumb_extent.clamp(1.0, track_extent);
    let travel = (track_extent - thumb_extent).max(0.0);
    if travel <= SCROLL_EPSILON {
        return 0.0;
    }

    let normalized = ((thumb_top - track_top) / travel).clamp(0.0, 1.0);
    normalized * max_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumb_extent_is_viewport_squared_over_content() {
        // 680 * 680 / 1380
        let extent = thumb_extent_for_state(680.0, 680.0, 1380.0, 30.0);
        assert!((extent - 335.072_46).abs() < 0.01);
    }

    #[test]
    fn thumb_extent_respects_minimum() {
        let extent = thumb_extent_for_state(200.0, 200.0, 100_000.0, 30.0);
        assert_eq!(extent, 30.0);
    }

    #[test]
    fn thumb_extent_never_exceeds_track() {
        assert_eq!(thumb_extent_for_state(200.0, 200.0, 50.0, 30.0), 200.0);
        assert_eq!(thumb_extent_for_state(20.0, 20.0, 400.0, 30.0), 20.0);
    }

    #[test]
    fn thumb_travels_from_track_top_to_track_bottom() {
        let top = thumb_top_for_offset(120.0, 400.0, 100.0, 0.0, 600.0);
        let bottom = thumb_top_for_offset(120.0, 400.0, 100.0, 600.0, 600.0);
        let middle = thumb_top_for_offset(120.0, 400.0, 100.0, 300.0, 600.0);
        assert_eq!(top, 120.0);
        assert_eq!(bottom, 420.0);
        assert_eq!(middle, 270.0);
    }

    #[test]
    fn offset_from_thumb_top_inverts_thumb_position() {
        for offset in [0.0, 75.0, 300.0, 512.5, 600.0] {
            let top = thumb_top_for_offset(120.0, 400.0, 100.0, offset, 600.0);
            let back = offset_from_thumb_top(120.0, 400.0, 100.0, top, 600.0);
            assert!((back - offset).abs() < 0.001, "offset {offset} came back as {back}");
        }
    }

    #[test]
    fn offset_from_thumb_top_clamps_outside_track() {
        assert_eq!(offset_from_thumb_top(120.0, 400.0, 100.0, -50.0, 600.0), 0.0);
        assert_eq!(offset_from_thumb_top(120.0, 400.0, 100.0, 9_000.0, 600.0), 600.0);
        assert_eq!(offset_from_thumb_top(120.0, 400.0, 100.0, 300.0, 0.0), 0.0);
    }
}
