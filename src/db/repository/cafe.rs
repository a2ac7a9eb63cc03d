//! Cafe Repository

use super::RepoResult;
use crate::db::models::{Cafe, CafeCreate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, map_url, img_url, location, seats, \
     has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";

pub async fn insert(pool: &SqlitePool, data: CafeCreate) -> RepoResult<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO cafe (name, map_url, img_url, location, seats, \
         has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.map_url)
    .bind(&data.img_url)
    .bind(&data.location)
    .bind(&data.seats)
    .bind(data.has_toilet)
    .bind(data.has_wifi)
    .bind(data.has_sockets)
    .bind(data.can_take_calls)
    .bind(&data.coffee_price)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Cafe>> {
    let sql = format!("SELECT {COLUMNS} FROM cafe WHERE id = ?");
    let cafe = sqlx::query_as::<_, Cafe>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(cafe)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Cafe>> {
    let sql = format!("SELECT {COLUMNS} FROM cafe ORDER BY id");
    let cafes = sqlx::query_as::<_, Cafe>(&sql).fetch_all(pool).await?;
    Ok(cafes)
}

/// Exact, case-sensitive match on location.
pub async fn find_by_location(pool: &SqlitePool, location: &str) -> RepoResult<Vec<Cafe>> {
    let sql = format!("SELECT {COLUMNS} FROM cafe WHERE location = ? ORDER BY id");
    let cafes = sqlx::query_as::<_, Cafe>(&sql)
        .bind(location)
        .fetch_all(pool)
        .await?;
    Ok(cafes)
}

pub async fn find_by_name_and_location(
    pool: &SqlitePool,
    name: &str,
    location: &str,
) -> RepoResult<Vec<Cafe>> {
    let sql = format!("SELECT {COLUMNS} FROM cafe WHERE name = ? AND location = ? ORDER BY id");
    let cafes = sqlx::query_as::<_, Cafe>(&sql)
        .bind(name)
        .bind(location)
        .fetch_all(pool)
        .await?;
    Ok(cafes)
}

/// Set coffee_price (NULL when `price` is None). Returns false if no such id.
pub async fn update_price(pool: &SqlitePool, id: i64, price: Option<&str>) -> RepoResult<bool> {
    let result = sqlx::query("UPDATE cafe SET coffee_price = ? WHERE id = ?")
        .bind(price)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Returns false if no such id.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM cafe WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn sample(name: &str, location: &str) -> CafeCreate {
        CafeCreate {
            name: name.to_string(),
            map_url: "https://maps.example.com/1".to_string(),
            img_url: "https://img.example.com/1.jpg".to_string(),
            location: location.to_string(),
            seats: "20-30".to_string(),
            has_toilet: true,
            has_wifi: false,
            has_sockets: true,
            can_take_calls: false,
            coffee_price: Some("£2.50".to_string()),
        }
    }

    #[tokio::test]
    async fn insert_and_find_round_trip() {
        let db = DbService::in_memory().await.unwrap();
        let id = insert(&db.pool, sample("Bean There", "Peckham"))
            .await
            .unwrap();

        let cafe = find_by_id(&db.pool, id).await.unwrap().unwrap();
        assert_eq!(cafe.name, "Bean There");
        assert_eq!(cafe.location, "Peckham");
        assert!(cafe.has_toilet);
        assert!(!cafe.has_wifi);
        assert!(cafe.has_sockets);
        assert!(!cafe.can_take_calls);
        assert_eq!(cafe.coffee_price.as_deref(), Some("£2.50"));
    }

    #[tokio::test]
    async fn find_by_location_is_exact_and_case_sensitive() {
        let db = DbService::in_memory().await.unwrap();
        insert(&db.pool, sample("A", "Peckham")).await.unwrap();
        insert(&db.pool, sample("B", "Peckham")).await.unwrap();
        insert(&db.pool, sample("C", "Shoreditch")).await.unwrap();

        let hits = find_by_location(&db.pool, "Peckham").await.unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|c| c.location == "Peckham"));

        assert!(find_by_location(&db.pool, "peckham").await.unwrap().is_empty());
        assert!(find_by_location(&db.pool, "Peckh").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_name_and_location_matches_the_pair() {
        let db = DbService::in_memory().await.unwrap();
        insert(&db.pool, sample("A", "Peckham")).await.unwrap();

        assert_eq!(
            find_by_name_and_location(&db.pool, "A", "Peckham")
                .await
                .unwrap()
                .len(),
            1
        );
        assert!(
            find_by_name_and_location(&db.pool, "A", "Shoreditch")
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn update_price_touches_only_coffee_price() {
        let db = DbService::in_memory().await.unwrap();
        let id = insert(&db.pool, sample("A", "Peckham")).await.unwrap();

        assert!(update_price(&db.pool, id, Some("£3.00")).await.unwrap());
        let cafe = find_by_id(&db.pool, id).await.unwrap().unwrap();
        assert_eq!(cafe.coffee_price.as_deref(), Some("£3.00"));
        assert_eq!(cafe.name, "A");
        assert_eq!(cafe.seats, "20-30");

        // Absent price clears the column
        assert!(update_price(&db.pool, id, None).await.unwrap());
        let cafe = find_by_id(&db.pool, id).await.unwrap().unwrap();
        assert!(cafe.coffee_price.is_none());

        assert!(!update_price(&db.pool, 9999, Some("£1.00")).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_row() {
        let db = DbService::in_memory().await.unwrap();
        let id_a = insert(&db.pool, sample("A", "Peckham")).await.unwrap();
        insert(&db.pool, sample("B", "Peckham")).await.unwrap();

        assert!(delete(&db.pool, id_a).await.unwrap());
        assert!(!delete(&db.pool, id_a).await.unwrap());

        let remaining = find_all(&db.pool).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "B");
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let db = DbService::in_memory().await.unwrap();
        let id_a = insert(&db.pool, sample("A", "Peckham")).await.unwrap();
        assert!(delete(&db.pool, id_a).await.unwrap());

        let id_b = insert(&db.pool, sample("B", "Peckham")).await.unwrap();
        assert!(id_b > id_a);
    }

    #[tokio::test]
    async fn duplicate_pair_violates_unique_index() {
        let db = DbService::in_memory().await.unwrap();
        insert(&db.pool, sample("A", "Peckham")).await.unwrap();

        // Same name is rejected outright (name is UNIQUE on its own)
        assert!(insert(&db.pool, sample("A", "Peckham")).await.is_err());
    }
}
