use crate::route::Route;
use crate::CatalogError;
use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use swifta_core::SeatLayout;
use uuid::Uuid;

/// One scheduled departure on a route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journey {
    pub id: Uuid,
    pub route: Route,
    pub operator: String,
    pub departure: DateTime<Utc>,
    pub layout: SeatLayout,
    /// Uniform per-seat fare for this departure, in naira
    pub fare_naira: i64,
}

impl Journey {
    pub fn arrival(&self) -> DateTime<Utc> {
        self.departure + Duration::minutes(i64::from(self.route.duration_minutes))
    }
}

#[derive(Debug, Deserialize)]
pub struct JourneySearchRequest {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub passenger_count: u32,
}

/// A journey as presented in search results
#[derive(Debug, Clone, Serialize)]
pub struct JourneyOption {
    pub journey_id: Uuid,
    pub operator: String,
    pub origin: String,
    pub destination: String,
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    pub fare_naira: i64,
    pub seat_capacity: u32,
}

#[derive(Debug, Serialize)]
pub struct JourneySearchResult {
    pub options: Vec<JourneyOption>,
}

/// Read access to the journey catalog
#[async_trait]
pub trait JourneyRepository: Send + Sync {
    /// Journeys matching the city pair and travel date, departing
    /// earliest first. Unknown pairs yield an empty list, not an error.
    async fn search(&self, req: &JourneySearchRequest) -> Result<Vec<JourneyOption>, CatalogError>;

    async fn get(&self, journey_id: Uuid) -> Result<Option<Journey>, CatalogError>;
}

/// Catalog held entirely in memory, seeded at startup
pub struct InMemoryJourneyRepository {
    journeys: HashMap<Uuid, Journey>,
}

impl InMemoryJourneyRepository {
    pub fn new(journeys: Vec<Journey>) -> Self {
        Self {
            journeys: journeys.into_iter().map(|j| (j.id, j)).collect(),
        }
    }

    /// Fixture catalog: the operator's main intercity corridors, with
    /// departures over the next few days so a fresh instance has
    /// searchable inventory.
    pub fn with_seed_data() -> Self {
        let corridors = [
            ("Lagos", "Abuja", 540, 14_850),
            ("Lagos", "Benin City", 330, 9_500),
            ("Lagos", "Port Harcourt", 600, 16_200),
            ("Abuja", "Kaduna", 180, 6_400),
            ("Abuja", "Lagos", 540, 14_850),
            ("Benin City", "Lagos", 330, 9_500),
        ];

        let today = Utc::now().date_naive();
        let mut journeys = Vec::new();
        for (origin, destination, minutes, fare) in corridors {
            let route = Route::new(origin, destination, minutes);
            for day in 0..3 {
                for hour in [6, 9, 13] {
                    let date = today + Duration::days(day);
                    let departure = date
                        .and_hms_opt(hour, 30, 0)
                        .map(|dt| dt.and_utc())
                        .unwrap_or_else(Utc::now);
                    journeys.push(Journey {
                        id: Uuid::new_v4(),
                        route: route.clone(),
                        operator: "Swifta Express".to_string(),
                        departure,
                        layout: SeatLayout::with_aisle(10, 5, 3),
                        fare_naira: fare,
                    });
                }
            }
        }
        Self::new(journeys)
    }
}

#[async_trait]
impl JourneyRepository for InMemoryJourneyRepository {
    async fn search(&self, req: &JourneySearchRequest) -> Result<Vec<JourneyOption>, CatalogError> {
        if req.passenger_count == 0 {
            return Err(CatalogError::InvalidSearch(
                "passenger_count must be at least 1".to_string(),
            ));
        }

        let mut options: Vec<JourneyOption> = self
            .journeys
            .values()
            .filter(|j| j.route.connects(&req.origin, &req.destination))
            .filter(|j| j.departure.date_naive() == req.date)
            .filter(|j| j.layout.capacity() >= req.passenger_count)
            .map(|j| JourneyOption {
                journey_id: j.id,
                operator: j.operator.clone(),
                origin: j.route.origin.clone(),
                destination: j.route.destination.clone(),
                departure: j.departure,
                arrival: j.arrival(),
                fare_naira: j.fare_naira,
                seat_capacity: j.layout.capacity(),
            })
            .collect();

        options.sort_by_key(|o| o.departure);
        Ok(options)
    }

    async fn get(&self, journey_id: Uuid) -> Result<Option<Journey>, CatalogError> {
        Ok(self.journeys.get(&journey_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journey(origin: &str, destination: &str, departure: DateTime<Utc>) -> Journey {
        Journey {
            id: Uuid::new_v4(),
            route: Route::new(origin, destination, 540),
            operator: "Swifta Express".to_string(),
            departure,
            layout: SeatLayout::with_aisle(10, 5, 3),
            fare_naira: 14_850,
        }
    }

    fn request(origin: &str, destination: &str, date: NaiveDate) -> JourneySearchRequest {
        JourneySearchRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
            date,
            passenger_count: 2,
        }
    }

    #[tokio::test]
    async fn test_search_matches_pair_and_date() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let morning = date.and_hms_opt(6, 30, 0).unwrap().and_utc();
        let midday = date.and_hms_opt(13, 0, 0).unwrap().and_utc();
        let next_day = morning + Duration::days(1);

        let repo = InMemoryJourneyRepository::new(vec![
            journey("Lagos", "Abuja", midday),
            journey("Lagos", "Abuja", morning),
            journey("Lagos", "Abuja", next_day),
            journey("Lagos", "Benin City", morning),
        ]);

        let options = repo.search(&request("lagos", "ABUJA", date)).await.unwrap();
        assert_eq!(options.len(), 2);
        // Earliest departure first
        assert_eq!(options[0].departure, morning);
        assert_eq!(options[1].departure, midday);
    }

    #[tokio::test]
    async fn test_search_unknown_pair_is_empty_not_error() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let repo = InMemoryJourneyRepository::new(vec![journey(
            "Lagos",
            "Abuja",
            date.and_hms_opt(6, 30, 0).unwrap().and_utc(),
        )]);

        let options = repo.search(&request("Kano", "Jos", date)).await.unwrap();
        assert!(options.is_empty());
    }

    #[tokio::test]
    async fn test_search_rejects_zero_passengers() {
        let repo = InMemoryJourneyRepository::new(vec![]);
        let mut req = request("Lagos", "Abuja", NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
        req.passenger_count = 0;
        assert!(matches!(
            repo.search(&req).await,
            Err(CatalogError::InvalidSearch(_))
        ));
    }

    #[tokio::test]
    async fn test_get_returns_seeded_journey() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let j = journey("Lagos", "Abuja", date.and_hms_opt(6, 30, 0).unwrap().and_utc());
        let id = j.id;
        let repo = InMemoryJourneyRepository::new(vec![j]);

        let found = repo.get(id).await.unwrap().unwrap();
        assert_eq!(found.route.origin, "Lagos");
        assert!(repo.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[test]
    fn test_arrival_adds_route_duration() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let j = journey("Lagos", "Abuja", date.and_hms_opt(6, 30, 0).unwrap().and_utc());
        assert_eq!(j.arrival() - j.departure, Duration::minutes(540));
    }
}
