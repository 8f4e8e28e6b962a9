// src/domain/filter.rs

use crate::domain::request::{Priority, RequesterKind, RoomChangeRequest, Status};
use std::collections::HashMap;

/// Dashboard search and filters. Pure predicates over loaded requests;
/// nothing here touches the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    /// Case-insensitive match over name, registration/staff id, national id
    /// and email. Blank matches everything.
    pub search: String,
    pub category: Option<RequesterKind>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl RequestFilter {
    /// Read `search`, `category`, `priority` and `status` query parameters.
    /// Empty, `all` or unknown values leave that filter off.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        fn pick<T: std::str::FromStr>(params: &HashMap<String, String>, key: &str) -> Option<T> {
            params.get(key).and_then(|v| v.trim().parse().ok())
        }

        Self {
            search: params
                .get("search")
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            category: pick(params, "category"),
            priority: pick(params, "priority"),
            status: pick(params, "status"),
        }
    }

    /// Inverse of `from_query`, for links that must keep the current filters.
    pub fn to_query(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        if !self.search.is_empty() {
            query.append_pair("search", &self.search);
        }
        if let Some(category) = self.category {
            query.append_pair("category", category.as_str());
        }
        if let Some(priority) = self.priority {
            query.append_pair("priority", priority.as_str());
        }
        if let Some(status) = self.status {
            query.append_pair("status", status.as_str());
        }
        query.finish()
    }

    fn matches_search(&self, request: &RoomChangeRequest) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        let id = &request.identity;
        [
            &id.full_name,
            &id.registration_or_staff_id,
            &id.national_id,
            &id.email,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn matches(&self, request: &RoomChangeRequest) -> bool {
        self.matches_search(request)
            && self.category.map_or(true, |c| request.requester.kind() == c)
            && self.priority.map_or(true, |p| request.priority == p)
            && self.status.map_or(true, |s| request.status == s)
    }

    pub fn apply<'a>(&self, requests: &'a [RoomChangeRequest]) -> Vec<&'a RoomChangeRequest> {
        requests.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Header counts for the review dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub urgent: usize,
}

impl RequestSummary {
    pub fn from_requests<'a>(requests: impl IntoIterator<Item = &'a RoomChangeRequest>) -> Self {
        let mut summary = Self::default();
        for r in requests {
            summary.total += 1;
            match r.status {
                Status::Pending => summary.pending += 1,
                Status::Approved => summary.approved += 1,
                Status::Rejected => summary.rejected += 1,
            }
            if r.priority == Priority::Urgent {
                summary.urgent += 1;
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::{
        CurrentRoom, Gender, Identity, Reason, RequestedRoom, RequesterType, RoomType,
    };
    use chrono::Utc;

    fn request(
        id: i64,
        name: &str,
        requester: RequesterType,
        priority: Priority,
        status: Status,
    ) -> RoomChangeRequest {
        RoomChangeRequest {
            id,
            request_code: format!("SMB-M-{id:06}"),
            requester,
            identity: Identity {
                registration_or_staff_id: format!("2023/CS/{id:03}"),
                full_name: name.to_string(),
                national_id: format!("NIC{id}"),
                contact: "0770000000".into(),
                email: format!("{}@uni.lk", name.split(' ').next().unwrap_or("x").to_lowercase()),
            },
            staff_details: None,
            current_room: CurrentRoom {
                hostel_name: "Block A".into(),
                room_number: "101".into(),
                room_type: Some(RoomType::Shared),
            },
            requested_room: RequestedRoom {
                hostel_name: "Block B".into(),
                room_number: None,
                room_type: Some(RoomType::Single),
            },
            reason: Reason::NoiseIssues,
            other_reason_text: None,
            priority,
            agreement_accepted: true,
            status,
            decision_message: None,
            rejection_reason: None,
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn sample() -> Vec<RoomChangeRequest> {
        vec![
            request(
                1,
                "Saman Perera",
                RequesterType::StudentMale,
                Priority::Normal,
                Status::Pending,
            ),
            request(
                2,
                "Nimali Silva",
                RequesterType::StudentFemale,
                Priority::Urgent,
                Status::Approved,
            ),
            request(
                3,
                "Kamal Fernando",
                RequesterType::Staff { gender: Some(Gender::Male) },
                Priority::Urgent,
                Status::Pending,
            ),
        ]
    }

    #[test]
    fn default_filter_keeps_everything() {
        let requests = sample();
        assert_eq!(RequestFilter::default().apply(&requests).len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_over_identity_fields() {
        let requests = sample();
        let by = |search: &str| {
            RequestFilter {
                search: search.into(),
                ..RequestFilter::default()
            }
            .apply(&requests)
            .iter()
            .map(|r| r.id)
            .collect::<Vec<_>>()
        };

        assert_eq!(by("saman"), vec![1]);
        assert_eq!(by("CS/002"), vec![2]);
        assert_eq!(by("nic3"), vec![3]);
        assert_eq!(by("@uni.lk"), vec![1, 2, 3]);
        assert!(by("nobody").is_empty());
    }

    #[test]
    fn equality_filters_compose() {
        let requests = sample();
        let filter = RequestFilter {
            priority: Some(Priority::Urgent),
            status: Some(Status::Pending),
            ..RequestFilter::default()
        };
        let ids: Vec<i64> = filter.apply(&requests).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3]);

        let filter = RequestFilter {
            category: Some(RequesterKind::StudentFemale),
            ..RequestFilter::default()
        };
        assert_eq!(filter.apply(&requests).len(), 1);
    }

    #[test]
    fn query_round_trip_ignores_unknown_values() {
        let mut params = HashMap::new();
        params.insert("search".to_string(), " perera ".to_string());
        params.insert("category".to_string(), "staff".to_string());
        params.insert("priority".to_string(), "all".to_string());
        params.insert("status".to_string(), "Rejected".to_string());

        let filter = RequestFilter::from_query(&params);
        assert_eq!(filter.search, "perera");
        assert_eq!(filter.category, Some(RequesterKind::Staff));
        assert_eq!(filter.priority, None);
        assert_eq!(filter.status, Some(Status::Rejected));
        assert_eq!(filter.to_query(), "search=perera&category=staff&status=Rejected");
    }

    #[test]
    fn summary_counts_by_status_and_urgency() {
        let requests = sample();
        let summary = RequestSummary::from_requests(&requests);
        assert_eq!(
            summary,
            RequestSummary {
                total: 3,
                pending: 2,
                approved: 1,
                rejected: 0,
                urgent: 2,
            }
        );
    }
}
