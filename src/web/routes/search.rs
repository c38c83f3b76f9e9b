use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::search_service;
use crate::store::Catalog;

// Both search endpoints return at most this many matches.
const SEARCH_LIMIT: usize = 5;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ActivityMatch {
    pub activity_name: String,
    pub score: u32,
}

#[derive(Debug, Serialize)]
pub struct ParticipantMatch {
    pub email: String,
    pub score: u32,
}

pub async fn search_activities_handler(
    State(catalog): State<Arc<Catalog>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<ActivityMatch>> {
    let names = catalog.activity_names().await;
    let matches = search_service::search(&query.query, names, SEARCH_LIMIT);

    Json(
        matches
            .into_iter()
            .map(|m| ActivityMatch {
                activity_name: m.candidate,
                score: m.score,
            })
            .collect(),
    )
}

pub async fn search_participants_handler(
    State(catalog): State<Arc<Catalog>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<ParticipantMatch>> {
    let emails = catalog.participant_emails().await;
    let matches = search_service::search(&query.query, emails, SEARCH_LIMIT);

    Json(
        matches
            .into_iter()
            .map(|m| ParticipantMatch {
                email: m.candidate,
                score: m.score,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Arc<Catalog> {
        Arc::new(Catalog::with_seed_data())
    }

    #[tokio::test]
    async fn activity_search_ranks_chess_club_first() {
        let Json(matches) = search_activities_handler(
            State(seeded()),
            Query(SearchQuery {
                query: "chess".to_string(),
            }),
        )
        .await;

        assert!(matches.len() <= SEARCH_LIMIT);
        assert_eq!(matches[0].activity_name, "Chess Club");
    }

    #[tokio::test]
    async fn participant_search_ranks_michael_first() {
        let Json(matches) = search_participants_handler(
            State(seeded()),
            Query(SearchQuery {
                query: "michael".to_string(),
            }),
        )
        .await;

        assert_eq!(matches[0].email, "michael@mergington.edu");
        assert!(matches[0].score > matches[1].score);
    }

    #[tokio::test]
    async fn participant_search_covers_all_activities() {
        let catalog = seeded();
        catalog
            .signup("Drama Club", "william@mergington.edu")
            .await
            .unwrap();

        let Json(matches) = search_participants_handler(
            State(catalog),
            Query(SearchQuery {
                query: "william".to_string(),
            }),
        )
        .await;

        assert_eq!(matches[0].email, "william@mergington.edu");
    }

    #[tokio::test]
    async fn blank_query_returns_empty_list() {
        let Json(matches) = search_activities_handler(
            State(seeded()),
            Query(SearchQuery {
                query: "  ".to_string(),
            }),
        )
        .await;

        assert!(matches.is_empty());
    }
}
