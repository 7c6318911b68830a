//! Fixed screen content.
//!
//! Every function here builds a [`Frame`]; none of them perform I/O.

use crate::core::{Achievement, Customer, DayReport, Player};
use crate::types::{Frame, MenuChoice};

pub const PRESS_ENTER: &str = "Press Enter...";
pub const PRESS_ENTER_CONTINUE: &str = "Press Enter to continue...";
pub const PRESS_ENTER_NEXT_DAY: &str = "Press Enter for next day...";
pub const PRESS_ENTER_OPEN_SHOP: &str = "Press Enter to open shop...";
pub const ORDER_PROMPT: &str = "Type ingredients (comma separated):";

pub fn intro() -> Frame {
    Frame::new([
        "   ___           _     _         ",
        "  | _ ) __ _ _ _(_)__| |_ __ _   ",
        "  | _ \\/ _` | '_| (_-<  _/ _` |  ",
        "  |___/\\__,_|_| |_/__/\\__\\__,_|  ",
        "",
        "The Ultimate Barista Simulator",
        "",
        "Loading...",
    ])
}

pub fn main_menu() -> Frame {
    let mut lines = vec![String::new(), "BARISTA SIMULATOR".to_string(), String::new()];
    lines.extend(
        MenuChoice::ALL
            .iter()
            .map(|c| format!("{}. {}", c.index(), c.label())),
    );
    lines.push(String::new());
    Frame::new(lines).with_prompt(format!("Select an option [1-{}]", MenuChoice::ALL.len()))
}

pub fn profile_menu() -> Frame {
    Frame::new(["", "USER PROFILE", "", "1. Login", "2. Register", ""])
        .with_prompt("Select Option [1-2]")
}

/// An empty box with just a prompt underneath.
pub fn text_prompt(prompt: &str) -> Frame {
    Frame::new([""]).with_prompt(prompt)
}

pub fn message(msg: &str) -> Frame {
    Frame::new(["", msg, ""]).with_prompt(PRESS_ENTER)
}

pub fn game_start(username: &str, days: u32) -> Frame {
    Frame::new([
        format!("Welcome, {username}."),
        "You have just opened your first shop.".to_string(),
        format!("The rent is due in {days} days."),
        "Make the best tea in the city.".to_string(),
        String::new(),
    ])
    .with_prompt(PRESS_ENTER_OPEN_SHOP)
}

pub fn day_transition(day: u32) -> Frame {
    let title = format!("DAY {day}");
    Frame::new(["", "", title.as_str(), "", "The sun rises..."])
}

pub fn customer_arrival(customer: &Customer) -> Frame {
    Frame::new([
        "The door opens...".to_string(),
        String::new(),
        "      ( ^_^ )      ".to_string(),
        "       / | \\       ".to_string(),
        "        / \\        ".to_string(),
        String::new(),
        format!("{} walks in.", customer.name()),
    ])
}

pub fn order(customer: &Customer) -> Frame {
    let order = customer.order();
    Frame::new([
        "NEW CUSTOMER ARRIVED!".to_string(),
        String::new(),
        format!("Name: {}", customer.display_name()),
        format!("Greeting: \"{}\"", customer.greeting()),
        String::new(),
        format!("ORDER: {}", order.drink_name()),
        format!("RECIPE: {}", order.recipe()),
        String::new(),
    ])
    .with_prompt(ORDER_PROMPT)
}

pub fn order_result(success: bool, points: u32) -> Frame {
    let lines = if success {
        vec![
            "ORDER SUCCESS!".to_string(),
            String::new(),
            format!("Score Earned: {points}"),
            "Customer is happy!".to_string(),
            String::new(),
        ]
    } else {
        vec![
            "ORDER FAILED!".to_string(),
            String::new(),
            "You missed an ingredient.".to_string(),
            "Customer left angry.".to_string(),
            String::new(),
        ]
    };
    Frame::new(lines).with_prompt(PRESS_ENTER_CONTINUE)
}

pub fn happy_customer() -> Frame {
    Frame::new(["", "   \\(^o^)/   ", "Thank you!!", ""])
}

pub fn unhappy_customer() -> Frame {
    Frame::new(["", "   (>_<)   ", "This isn't what I ordered!", ""])
}

/// End-of-day tally, plus any achievements the day unlocked.
pub fn day_summary(report: &DayReport, unlocked: &[Achievement]) -> Frame {
    let mut lines = vec![
        format!("DAY {} COMPLETE", report.day),
        String::new(),
        format!("Orders Made: {}", report.orders_made),
        format!("Orders Missed: {}", report.orders_missed),
        format!("Total Score: {}", report.score),
        String::new(),
    ];
    if !unlocked.is_empty() {
        lines.push("ACHIEVEMENT UNLOCKED!".to_string());
        lines.extend(unlocked.iter().map(|a| format!("* {}", a.title())));
        lines.push(String::new());
    }
    Frame::new(lines).with_prompt(PRESS_ENTER_NEXT_DAY)
}

pub fn ending(stars: u8) -> Frame {
    Frame::new([
        "GAME OVER".to_string(),
        String::new(),
        format!("Rating: {stars} Stars"),
        String::new(),
        "Thank you for playing!".to_string(),
    ])
}

pub fn statistics(player: &Player) -> Frame {
    Frame::new([
        "PLAYER STATS".to_string(),
        format!("Name: {}", player.username()),
        format!("Score: {}", player.total_score()),
        format!("Days Played: {}", player.days_played()),
        format!("Games Played: {}", player.games_played()),
        format!("Rating: {} Stars", player.rating()),
        String::new(),
    ])
    .with_prompt(PRESS_ENTER)
}

pub fn tutorial() -> Frame {
    Frame::new([
        "TUTORIAL",
        "1. Read Order",
        "2. Type ingredients separated by commas",
        "3. Press Enter",
        "",
        "Answer in under 5 seconds for 150 points, otherwise 100.",
        "VIP customers pay one and a half times. Type 'exit' to close early.",
        "",
    ])
    .with_prompt(PRESS_ENTER)
}

pub fn leaderboard(entries: &[(&str, u32)]) -> Frame {
    let mut lines = vec!["LEADERBOARD".to_string(), String::new()];
    lines.extend(
        entries
            .iter()
            .map(|(name, score)| format!("{name} : {score}")),
    );
    lines.push(String::new());
    Frame::new(lines).with_prompt(PRESS_ENTER)
}

pub fn achievements(list: &[Achievement]) -> Frame {
    let mut lines = vec!["ACHIEVEMENTS".to_string()];
    lines.extend(list.iter().map(|a| format!("* {}", a.title())));
    lines.push(String::new());
    Frame::new(lines).with_prompt(PRESS_ENTER)
}

pub fn credits() -> Frame {
    message("Created by the Barista Team.")
}

pub fn exit_message() -> Frame {
    message("Thanks for playing!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Order;

    #[test]
    fn main_menu_lists_all_eight_entries() {
        let frame = main_menu();
        assert!(frame.lines().iter().any(|l| l == "1. Start New Game"));
        assert!(frame.lines().iter().any(|l| l == "8. Exit"));
        assert_eq!(frame.prompt(), Some("Select an option [1-8]"));
    }

    #[test]
    fn order_screen_shows_vip_tag_and_recipe() {
        let c = Customer::new("Zoe", true, Order::new("Brown Sugar Boba"));
        let frame = order(&c);
        assert!(frame.lines().iter().any(|l| l == "Name: Zoe [VIP]"));
        assert!(frame
            .lines()
            .iter()
            .any(|l| l == "RECIPE: Tea, Milk, Brown Sugar, Tapioca"));
        assert_eq!(frame.prompt(), Some(ORDER_PROMPT));
    }

    #[test]
    fn day_summary_lists_unlocks() {
        let report = DayReport {
            day: 2,
            orders_made: 5,
            orders_missed: 0,
            score: 750,
            aborted: false,
        };
        let frame = day_summary(&report, &[Achievement::PerfectDay]);
        assert_eq!(frame.lines()[0], "DAY 2 COMPLETE");
        assert!(frame.lines().iter().any(|l| l == "Total Score: 750"));
        assert!(frame.lines().iter().any(|l| l == "* Perfect Day"));

        let plain = day_summary(&report, &[]);
        assert!(!plain.lines().iter().any(|l| l.contains("ACHIEVEMENT")));
    }

    #[test]
    fn cutscenes_have_no_prompt() {
        assert_eq!(intro().prompt(), None);
        assert_eq!(day_transition(3).prompt(), None);
        assert_eq!(ending(4).prompt(), None);
        assert_eq!(happy_customer().prompt(), None);
    }
}
