use super::{Todo, TodoId};
use chrono::{NaiveDate, NaiveDateTime};

const SEED: [(TodoId, &str, &str); 5] = [
    (
        1700445601,
        "Grocery Shopping",
        "Pick up milk, eggs, cheese, and fresh produce from the market.",
    ),
    (
        1700445602,
        "Pay Utility Bills",
        "Ensure electricity and internet bills are paid before the due date (Friday).",
    ),
    (
        1700445603,
        "Call Mom",
        "Check in and finalize plans for the upcoming holiday weekend.",
    ),
    (
        1700445604,
        "Car Wash",
        "Take the car to the wash and check the tire pressure.",
    ),
    (
        1700445605,
        "Book Appointment",
        "Schedule the annual physical check-up with Dr. Peterson.",
    ),
];

fn seed_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 11, 20)
        .and_then(|date| date.and_hms_opt(21, 23, 0))
        .unwrap_or_default()
}

/// Returns the list every session starts from.
///
pub fn initial_todos() -> Vec<Todo> {
    let date = seed_date();
    SEED.iter()
        .map(|(id, title, description)| Todo::new(*id, title, description, date))
        .collect()
}
