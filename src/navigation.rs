//! Scroll geometry for the fixed navigation bar.

use crate::config;

/// Anchors the navbar tracks. The footer carries the `contact` anchor.
pub const TRACKED_SECTIONS: &str = "section[id], footer[id]";

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section under the probe line just below the navbar. Later sections win
/// when bounds overlap; `home` when nothing matches.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> &str {
    let probe = scroll_y + config::NAV_SECTION_PROBE;
    sections
        .iter()
        .rev()
        .find(|section| probe >= section.top && probe < section.top + section.height)
        .map_or("home", |section| section.id.as_str())
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLLED_THRESHOLD
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > config::BACK_TO_TOP_THRESHOLD
}

/// Where to scroll so the section starts just below the fixed navbar.
pub fn scroll_target(section_top: f64) -> f64 {
    (section_top - config::NAV_HEIGHT_OFFSET).max(0.0)
}

/// Body `overflow` while the mobile menu is open or closed.
pub fn body_overflow(menu_open: bool) -> &'static str {
    if menu_open {
        "hidden"
    } else {
        "unset"
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An upward or rightward swipe longer than the threshold closes the mobile menu.
pub fn swipe_closes_menu(start: Point, end: Point) -> bool {
    let dx = start.x - end.x;
    let dy = start.y - end.y;
    let upward = dy.abs() > dx.abs() && dy > config::SWIPE_CLOSE_DISTANCE;
    let rightward = dx.abs() > dy.abs() && dx < -config::SWIPE_CLOSE_DISTANCE;
    upward || rightward
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        [("home", 0.0, 800.0), ("features", 800.0, 600.0), ("services", 1400.0, 1200.0)]
            .into_iter()
            .map(|(id, top, height)| SectionBounds {
                id: id.to_string(),
                top,
                height,
            })
            .collect()
    }

    #[test]
    fn active_section_uses_the_probe_offset() {
        let sections = page();
        assert_eq!(active_section(&sections, 0.0), "home");
        assert_eq!(active_section(&sections, 699.0), "home");
        assert_eq!(active_section(&sections, 700.0), "features");
        assert_eq!(active_section(&sections, 1350.0), "services");
    }

    #[test]
    fn past_the_last_section_falls_back_to_home() {
        assert_eq!(active_section(&page(), 5_000.0), "home");
        assert_eq!(active_section(&[], 200.0), "home");
    }

    #[test]
    fn footer_anchor_becomes_active_at_the_bottom() {
        let mut sections = page();
        sections.push(SectionBounds {
            id: "contact".to_string(),
            top: 2600.0,
            height: 500.0,
        });
        assert_eq!(active_section(&sections, 2550.0), "contact");
    }

    #[test]
    fn scroll_thresholds() {
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(301.0));
    }

    #[test]
    fn scroll_target_accounts_for_the_navbar() {
        assert_eq!(scroll_target(800.0), 720.0);
        assert_eq!(scroll_target(20.0), 0.0);
    }

    #[test]
    fn open_menu_locks_page_scroll() {
        assert_eq!(body_overflow(true), "hidden");
        assert_eq!(body_overflow(false), "unset");
    }

    #[test]
    fn swipes() {
        let origin = Point { x: 200.0, y: 400.0 };
        assert!(swipe_closes_menu(origin, Point { x: 190.0, y: 300.0 }));
        assert!(swipe_closes_menu(origin, Point { x: 300.0, y: 390.0 }));
        // Downward and leftward swipes leave the menu open.
        assert!(!swipe_closes_menu(origin, Point { x: 200.0, y: 500.0 }));
        assert!(!swipe_closes_menu(origin, Point { x: 100.0, y: 400.0 }));
        // Too short.
        assert!(!swipe_closes_menu(origin, Point { x: 200.0, y: 360.0 }));
    }
}
