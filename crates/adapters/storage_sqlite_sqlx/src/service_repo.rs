//! `SQLite` implementation of [`ServiceRecordRepository`].

use std::future::Future;

use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use carservice_app::ports::ServiceRecordRepository;
use carservice_domain::error::CarServiceError;
use carservice_domain::id::ServiceId;
use carservice_domain::service_record::{NewServiceRecord, ServiceDetails, ServiceRecord};
use carservice_domain::time::Timestamp;

use crate::error::{StorageError, map_car_constraint};

/// Text layout of the `date_time` column.
const STORED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn encode_timestamp(value: &Timestamp) -> String {
    value.format(STORED_FORMAT).to_string()
}

fn decode_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    NaiveDateTime::parse_from_str(value, STORED_FORMAT)
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// Wrapper for converting joined rows into domain [`ServiceDetails`].
struct Wrapper(ServiceDetails);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<ServiceDetails> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let car_model: String = row.try_get("model")?;
        let car_owner: String = row.try_get("owner")?;
        let service_type: String = row.try_get("service_type")?;
        let date_time: String = row.try_get("date_time")?;

        Ok(Self(ServiceDetails {
            id: ServiceId::new(id),
            car_model,
            car_owner,
            service_type,
            scheduled_at: decode_timestamp(&date_time)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO services (car_id, service_type, date_time) VALUES (?, ?, ?)";

const SELECT_DETAILS_BY_ID: &str = r"
    SELECT s.id, c.model, c.owner, s.service_type, s.date_time
    FROM services s
    JOIN cars c ON s.car_id = c.id
    WHERE s.id = ?
";

const SELECT_ALL_DETAILS: &str = r"
    SELECT s.id, c.model, c.owner, s.service_type, s.date_time
    FROM services s
    JOIN cars c ON s.car_id = c.id
    ORDER BY s.id ASC
";

/// `SQLite`-backed service record repository.
#[derive(Clone)]
pub struct SqliteServiceRecordRepository {
    pool: SqlitePool,
}

impl SqliteServiceRecordRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ServiceRecordRepository for SqliteServiceRecordRepository {
    fn create(
        &self,
        record: NewServiceRecord,
    ) -> impl Future<Output = Result<ServiceRecord, CarServiceError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(record.car_id.get())
                .bind(&record.service_type)
                .bind(encode_timestamp(&record.scheduled_at))
                .execute(&pool)
                .await
                .map_err(|err| map_car_constraint(err, record.car_id))?;

            Ok(record.into_record(ServiceId::new(result.last_insert_rowid())))
        }
    }

    fn get_details(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<ServiceDetails>, CarServiceError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_DETAILS_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn list_details(
        &self,
    ) -> impl Future<Output = Result<Vec<ServiceDetails>, CarServiceError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL_DETAILS)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::car_repo::SqliteCarRepository;
    use crate::pool::Config;
    use carservice_app::ports::CarRepository;
    use carservice_domain::car::Car;
    use carservice_domain::error::IntegrityError;
    use carservice_domain::id::CarId;
    use carservice_domain::time;

    async fn setup() -> (SqliteCarRepository, SqliteServiceRecordRepository) {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let cars = SqliteCarRepository::new(db.pool().clone());
        for (id, model, owner) in [(1, "Corolla", "Alice"), (2, "Civic", "Bob")] {
            let car = Car::builder()
                .id(CarId::new(id))
                .model(model)
                .owner(owner)
                .build()
                .unwrap();
            cars.create(car).await.unwrap();
        }
        (cars, SqliteServiceRecordRepository::new(db.pool().clone()))
    }

    fn pending(car_id: i64, service_type: &str, at: &str) -> NewServiceRecord {
        NewServiceRecord::new(
            CarId::new(car_id),
            service_type,
            time::parse_input(at).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_assign_increasing_ids_on_insert() {
        let (_, repo) = setup().await;
        let first = repo
            .create(pending(1, "Oil change", "2030-01-15 09:30"))
            .await
            .unwrap();
        let second = repo
            .create(pending(2, "Brakes", "2030-01-16 10:00"))
            .await
            .unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.service_type, "Oil change");
    }

    #[tokio::test]
    async fn should_join_car_fields_into_details() {
        let (_, repo) = setup().await;
        let stored = repo
            .create(pending(2, "Brakes", "2030-01-16 10:00"))
            .await
            .unwrap();

        let details = repo.get_details(stored.id).await.unwrap().unwrap();
        assert_eq!(details.id, stored.id);
        assert_eq!(details.car_model, "Civic");
        assert_eq!(details.car_owner, "Bob");
        assert_eq!(details.service_type, "Brakes");
        assert_eq!(
            details.scheduled_at,
            time::parse_input("2030-01-16 10:00").unwrap()
        );
    }

    #[tokio::test]
    async fn should_return_none_when_service_not_found() {
        let (_, repo) = setup().await;
        assert!(repo.get_details(ServiceId::new(404)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_list_nothing_when_empty() {
        let (_, repo) = setup().await;
        assert!(repo.list_details().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_list_all_services_in_id_order() {
        let (_, repo) = setup().await;
        repo.create(pending(2, "Brakes", "2031-06-01 08:00"))
            .await
            .unwrap();
        repo.create(pending(1, "Oil change", "2030-01-15 09:30"))
            .await
            .unwrap();
        repo.create(pending(1, "Inspection", "2030-03-01 14:45"))
            .await
            .unwrap();

        let all = repo.list_details().await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));
        let types: Vec<&str> = all.iter().map(|d| d.service_type.as_str()).collect();
        assert_eq!(types, vec!["Brakes", "Oil change", "Inspection"]);
    }

    #[tokio::test]
    async fn should_report_unknown_car_when_foreign_key_fails() {
        let (_, repo) = setup().await;
        let result = repo.create(pending(77, "Oil change", "2030-01-15 09:30")).await;
        assert!(matches!(
            result,
            Err(CarServiceError::Integrity(IntegrityError::UnknownCar(id))) if id == CarId::new(77)
        ));
        assert!(repo.list_details().await.unwrap().is_empty());
    }

    #[test]
    fn should_roundtrip_stored_timestamp_text() {
        let at = time::parse_input("2030-01-15 09:30").unwrap();
        let text = encode_timestamp(&at);
        assert_eq!(text, "2030-01-15 09:30:00");
        assert_eq!(decode_timestamp(&text).unwrap(), at);
    }
}
