use tintlog::fmt::{Color, colorize, wrap};

#[test]
fn colorize_wraps_with_foreground_reset() {
    assert_eq!(colorize("hi", Color::Red), "\x1b[31mhi\x1b[39m");
    assert_eq!(colorize("hi", Color::Cyan), "\x1b[36mhi\x1b[39m");
    assert_eq!(colorize("hi", Color::Gray), "\x1b[90mhi\x1b[39m");
}

#[test]
fn wrap_by_name() {
    assert_eq!(wrap("14:07:43.041", "yellow"), "\x1b[33m14:07:43.041\x1b[39m");
    assert_eq!(wrap("x", "grey"), wrap("x", "gray"));
}

#[test]
fn wrap_unknown_name_is_identity() {
    assert_eq!(wrap("text", "chartreuse"), "text");
    assert_eq!(wrap("text", ""), "text");
    assert_eq!(wrap("text", "Red"), "text");
}

#[test]
fn names_round_trip_through_from_str() {
    for color in Color::all() {
        assert_eq!(color.name().parse::<Color>().unwrap(), color);
        assert_eq!(color.to_string(), color.name());
    }
}

#[test]
fn colorize_keeps_text_intact() {
    let styled = colorize("[error]", Color::Red);
    let stripped = styled
        .trim_start_matches(&Color::Red.open())
        .trim_end_matches(Color::CLOSE);
    assert_eq!(stripped, "[error]");
}
