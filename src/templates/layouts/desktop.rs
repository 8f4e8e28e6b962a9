use maud::{html, Markup, DOCTYPE};

/// Page shell for the admin screens. `dark_mode` comes from the stored theme preference.
pub fn desktop_layout(title: &str, dark_mode: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html data-theme=(if dark_mode { "dark" } else { "light" }) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Hostel Desk" }
                link rel="stylesheet" href="/static/main.css";
            }
            body class=[dark_mode.then_some("dark")] {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  h3 { "Hostel Desk" }
                  nav {
                      ul {
                          li { a href="/admin/roomchange" { "Room changes" } }
                      }
                  }
              }
                (content)
            }
        }
    }
}
