//! Layout and rendering properties over every screen the game shows.

use tui_barista::core::{Achievement, Customer, DayReport, DisplaySink, Order, Player};
use tui_barista::engine::screens;
use tui_barista::term::{text_width, wrap, FrameView, TerminalRenderer};
use tui_barista::types::{Frame, FRAME_HEIGHT, FRAME_WIDTH, INPUT_CUE};

fn all_screens() -> Vec<Frame> {
    let vip = Customer::new("Zoe", true, Order::new("Brown Sugar Boba"));
    let mut report = DayReport::new(3);
    report.orders_made = 4;
    report.orders_missed = 1;
    report.score = 650;
    let mut player = Player::new("ava");
    player.add_score(1200);

    vec![
        screens::intro(),
        screens::main_menu(),
        screens::profile_menu(),
        screens::text_prompt("New Username:"),
        screens::message("Profile created!"),
        screens::game_start("ava", 7),
        screens::day_transition(3),
        screens::customer_arrival(&vip),
        screens::order(&vip),
        screens::order_result(true, 225),
        screens::order_result(false, 0),
        screens::happy_customer(),
        screens::unhappy_customer(),
        screens::day_summary(&report, &[Achievement::HighRoller]),
        screens::ending(4),
        screens::statistics(&player),
        screens::tutorial(),
        screens::leaderboard(&[("ava", 1200), ("kai", 300)]),
        screens::achievements(&Achievement::ALL),
        screens::credits(),
        screens::exit_message(),
    ]
}

#[test]
fn test_every_screen_fills_the_box_exactly() {
    let view = FrameView::default();
    for frame in all_screens() {
        let rows = view.render(&frame);
        let box_rows = &rows[..FRAME_HEIGHT];
        for row in box_rows {
            assert_eq!(text_width(row), FRAME_WIDTH, "row {row:?}");
        }
        assert!(box_rows[0].starts_with('╔'));
        assert!(box_rows[FRAME_HEIGHT - 1].starts_with('╚'));

        match frame.prompt() {
            Some(prompt) => {
                assert_eq!(rows.len(), FRAME_HEIGHT + 2);
                assert_eq!(rows[FRAME_HEIGHT], prompt);
                assert_eq!(rows[FRAME_HEIGHT + 1], INPUT_CUE);
            }
            None => assert_eq!(rows.len(), FRAME_HEIGHT),
        }
    }
}

#[test]
fn test_content_is_centered_vertically() {
    let view = FrameView::default();
    let rows = view.render(&Frame::new(["a", "b", "c"]));
    // 28 interior rows, 3 used: 12 above, 13 below.
    let first = rows.iter().position(|r| r.contains('a')).unwrap();
    assert_eq!(first, 1 + 12);
    assert_eq!(rows.len() - 1 - (first + 3), 13);
}

#[test]
fn test_long_lines_wrap_inside_the_border() {
    let long = "steep the tea ".repeat(20);
    let view = FrameView::default();
    let rows = view.render(&Frame::new([long.as_str()]));

    let content: Vec<&String> = rows
        .iter()
        .filter(|r| r.contains("steep"))
        .collect();
    assert!(content.len() > 1);
    for row in &rows {
        assert_eq!(text_width(row), FRAME_WIDTH);
    }
}

#[test]
fn test_wrap_preserves_words_and_respects_width() {
    let texts = [
        "Type ingredients separated by commas then press Enter",
        "   leading and   trailing   ",
        "a bb ccc dddd eeeee ffffff",
        "Supercalifragilistic tapioca",
    ];
    for text in texts {
        for width in [4, 7, 12, 30] {
            let lines = wrap(text, width);
            for line in &lines {
                let fits = text_width(line) <= width;
                let lone_long_word = !line.contains(' ');
                assert!(fits || lone_long_word, "{line:?} at width {width}");
                assert_eq!(line.trim(), line);
            }
            let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
            let words: Vec<&str> = text.split_whitespace().collect();
            assert_eq!(rejoined, words);
        }
    }
    assert!(wrap("   ", 10).is_empty());
}

#[test]
fn test_renderer_writes_full_redraw_with_cue_last() {
    let mut term = TerminalRenderer::with_writer(Vec::new(), FrameView::default());
    term.present(&screens::message("Profile created!"));
    let first = term.writer().clone();

    let text = String::from_utf8_lossy(&first);
    assert!(text.contains("Profile created!"));
    assert!(text.contains("Press Enter..."));
    assert!(text.ends_with(INPUT_CUE));

    term.present(&screens::message("Profile created!"));
    assert_eq!(&term.writer()[first.len()..], &first[..]);
}
