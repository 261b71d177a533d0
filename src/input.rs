//! Translates key presses and pointer clicks inside the carousel into
//! carousel commands.

use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, Node};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselCommand {
    Next,
    Previous,
    GoTo(usize),
}

/// Maps a `KeyboardEvent::key` value to a command for a carousel of `len`
/// slides. Digits are one-based and only count when that slide exists.
pub fn command_for_key(key: &str, len: usize) -> Option<CarouselCommand> {
    if len == 0 {
        return None;
    }
    match key {
        "ArrowRight" => Some(CarouselCommand::Next),
        "ArrowLeft" => Some(CarouselCommand::Previous),
        "Home" => Some(CarouselCommand::GoTo(0)),
        "End" => Some(CarouselCommand::GoTo(len - 1)),
        other => {
            let mut chars = other.chars();
            let position = match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
                (Some(digit @ 1..=9), None) => digit as usize,
                _ => return None,
            };
            (position <= len).then(|| CarouselCommand::GoTo(position - 1))
        }
    }
}

/// Keyboard handler for the carousel region. Ignores chorded keys and events
/// whose target lies outside `region`.
pub fn keyboard_command(event: &KeyboardEvent, region: &Element, len: usize) -> Option<CarouselCommand> {
    let key = event.key();
    let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
    let press = KeyPress {
        key: &key,
        chorded: event.ctrl_key() || event.alt_key() || event.meta_key(),
        inside_region: target.is_some() && region.contains(target.as_ref()),
    };
    command_for_press(&press, len)
}

/// A key event reduced to what the carousel cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub chorded: bool,
    pub inside_region: bool,
}

pub fn command_for_press(press: &KeyPress<'_>, len: usize) -> Option<CarouselCommand> {
    if press.chorded || !press.inside_region {
        return None;
    }
    command_for_key(press.key, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_step_through_slides() {
        assert_eq!(command_for_key("ArrowRight", 8), Some(CarouselCommand::Next));
        assert_eq!(command_for_key("ArrowLeft", 8), Some(CarouselCommand::Previous));
    }

    #[test]
    fn home_and_end_jump_to_the_edges() {
        assert_eq!(command_for_key("Home", 8), Some(CarouselCommand::GoTo(0)));
        assert_eq!(command_for_key("End", 8), Some(CarouselCommand::GoTo(7)));
    }

    #[test]
    fn digits_are_one_based_and_bounded() {
        assert_eq!(command_for_key("1", 8), Some(CarouselCommand::GoTo(0)));
        assert_eq!(command_for_key("8", 8), Some(CarouselCommand::GoTo(7)));
        assert_eq!(command_for_key("9", 8), None);
        assert_eq!(command_for_key("0", 8), None);
        assert_eq!(command_for_key("12", 20), None);
        assert_eq!(command_for_key("+1", 8), None);
    }

    fn press(key: &str, chorded: bool, inside_region: bool) -> KeyPress<'_> {
        KeyPress {
            key,
            chorded,
            inside_region,
        }
    }

    #[test]
    fn keys_aimed_outside_the_carousel_are_ignored() {
        assert_eq!(command_for_press(&press("ArrowRight", false, false), 8), None);
        assert_eq!(command_for_press(&press("3", false, false), 8), None);
        assert_eq!(
            command_for_press(&press("ArrowRight", false, true), 8),
            Some(CarouselCommand::Next)
        );
    }

    #[test]
    fn chorded_keys_are_left_to_the_browser() {
        assert_eq!(command_for_press(&press("ArrowLeft", true, true), 8), None);
        assert_eq!(command_for_press(&press("Home", true, true), 8), None);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(command_for_key("Enter", 8), None);
        assert_eq!(command_for_key("a", 8), None);
        assert_eq!(command_for_key("ArrowRight", 0), None);
    }
}
