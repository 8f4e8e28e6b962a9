use crate::domain::request::{Priority, Status};
use maud::{html, Markup};

pub mod error;

pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn status_badge(status: Status) -> Markup {
    let (bg, fg) = match status {
        Status::Pending => ("#fef3c7", "#92400e"),
        Status::Approved => ("#d1fae5", "#065f46"),
        Status::Rejected => ("#fee2e2", "#991b1b"),
    };
    html! {
        span style=(format!("background: {bg}; color: {fg}; padding: 2px 6px; border-radius: 4px; font-size: 0.85em; font-weight: 500;")) {
            (status.as_str())
        }
    }
}

pub fn priority_badge(priority: Priority) -> Markup {
    html! {
        @match priority {
            Priority::Urgent => span style="color: #dc2626; font-weight: bold;" { "Urgent" },
            Priority::Normal => span style="color: #6b7280;" { "Normal" },
        }
    }
}
