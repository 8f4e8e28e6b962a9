use crate::domain::filter::{RequestFilter, RequestSummary};
use crate::domain::request::{Priority, RequesterKind, RoomChangeRequest, Status};
use crate::templates::components::{card, priority_badge, status_badge};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ReviewVm {
    pub requests: Vec<RoomChangeRequest>,
    pub filter: RequestFilter,
    pub summary: RequestSummary,
    pub dark_mode: bool,
}

const TH: &str = "padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;";
const TD: &str = "padding: 8px; border-bottom: 1px solid #f3f4f6;";

fn summary_card(summary: &RequestSummary) -> Markup {
    card(
        "Overview",
        html! {
            ul style="display: flex; gap: 2rem; list-style: none; padding: 0;" {
                li { "Total: " strong { (summary.total) } }
                li { "Pending: " strong { (summary.pending) } }
                li { "Approved: " strong { (summary.approved) } }
                li { "Rejected: " strong { (summary.rejected) } }
                li { "Urgent: " strong { (summary.urgent) } }
            }
        },
    )
}

fn filter_form(filter: &RequestFilter) -> Markup {
    html! {
        form action="/admin/roomchange" method="get" style="display: flex; gap: 10px; align-items: center; margin-bottom: 1rem;" {
            input type="search" name="search" value=(filter.search) placeholder="Name, registration no, NIC or email" style="padding: 8px; min-width: 280px;";
            select name="category" style="padding: 8px;" {
                option value="" { "All requesters" }
                @for kind in RequesterKind::ALL {
                    option value=(kind.as_str()) selected[filter.category == Some(kind)] { (kind.label()) }
                }
            }
            select name="priority" style="padding: 8px;" {
                option value="" { "Any priority" }
                @for p in [Priority::Normal, Priority::Urgent] {
                    option value=(p.as_str()) selected[filter.priority == Some(p)] { (p.as_str()) }
                }
            }
            select name="status" style="padding: 8px;" {
                option value="" { "Any status" }
                @for s in [Status::Pending, Status::Approved, Status::Rejected] {
                    option value=(s.as_str()) selected[filter.status == Some(s)] { (s.as_str()) }
                }
            }
            button type="submit" style="padding: 8px 16px;" { "Filter" }
            a href=(format!("/admin/roomchange/export?{}", filter.to_query())) { "Export to Excel" }
        }
    }
}

fn request_row(r: &RoomChangeRequest) -> Markup {
    html! {
        tr id=(format!("request-{}", r.id)) {
            td style=(TD) { (r.request_code) }
            td style=(TD) {
                (r.identity.full_name) br;
                span style="color: #6b7280; font-size: 0.85em;" {
                    (r.identity.registration_or_staff_id) " · " (r.identity.email)
                }
            }
            td style=(TD) { (r.requester.kind().label()) }
            td style=(TD) {
                (r.current_room.hostel_name) " / " (r.current_room.room_number)
            }
            td style=(TD) {
                (r.requested_room.hostel_name)
                @if let Some(room) = &r.requested_room.room_number {
                    " / " (room)
                }
                @if let Some(t) = r.requested_room.room_type {
                    " (" (t.as_str()) ")"
                }
            }
            td style=(TD) {
                (r.reason.as_str())
                @if let Some(text) = &r.other_reason_text {
                    br; span style="font-size: 0.85em; color: #666;" { (text) }
                }
            }
            td style=(TD) { (priority_badge(r.priority)) }
            td style=(TD) {
                (status_badge(r.status))
                @if let Some(reason) = &r.rejection_reason {
                    br; span style="font-size: 0.8em; color: #666;" { (reason) }
                }
            }
            td style=(TD) { (r.comments.len()) }
            td style=(TD) { (r.created_at.format("%Y-%m-%d %H:%M").to_string()) }
        }
    }
}

pub fn review_page(vm: &ReviewVm) -> Markup {
    desktop_layout(
        "Room change requests",
        vm.dark_mode,
        html! {
            main class="container" {
                h1 { "Room change requests" }

                (summary_card(&vm.summary))

                div class="card" {
                    (filter_form(&vm.filter))

                    @if vm.requests.is_empty() {
                        p style="color: #6b7280; font-style: italic;" { "No requests match the current filters." }
                    } @else {
                        div style="overflow-x: auto;" {
                            table style="width: 100%; border-collapse: collapse; margin-top: 1rem;" {
                                thead {
                                    tr {
                                        @for h in ["Code", "Requester", "Type", "Current", "Requested", "Reason", "Priority", "Status", "Comments", "Submitted"] {
                                            th style=(TH) { (h) }
                                        }
                                    }
                                }
                                tbody {
                                    @for r in &vm.requests {
                                        (request_row(r))
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
