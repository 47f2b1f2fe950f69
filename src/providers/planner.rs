//! ContentPlannerModel - scheduled social-media posts (`tb_content_planner`)

use sqlx::SqlitePool;

use crate::models::errors::AppResult;
use crate::models::types::{ContentPlannerEntry, NewContentPlannerEntry};

#[derive(Debug, Clone)]
pub struct ContentPlannerModel {
    pool: SqlitePool,
}

impl ContentPlannerModel {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn save(&self, entry: NewContentPlannerEntry) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO tb_content_planner \
             (sosial_media, content_type, content_pillar, status, caption, cta_link, hashtag, \
              post_date, file_content, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(entry.sosial_media)
        .bind(entry.content_type)
        .bind(entry.content_pillar)
        .bind(entry.status)
        .bind(entry.caption)
        .bind(entry.cta_link)
        .bind(entry.hashtag)
        .bind(entry.post_date)
        .bind(entry.file_content)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// All entries by post date (upcoming first), then insertion order
    pub async fn find_all(&self) -> AppResult<Vec<ContentPlannerEntry>> {
        let rows = sqlx::query_as::<_, ContentPlannerEntry>(
            "SELECT id_content_planner, sosial_media, content_type, content_pillar, status, \
             caption, cta_link, hashtag, post_date, file_content, created_at \
             FROM tb_content_planner ORDER BY post_date ASC, id_content_planner ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::database::Database;
    use chrono::NaiveDate;

    fn entry(day: u32, file: Option<&str>) -> NewContentPlannerEntry {
        NewContentPlannerEntry {
            sosial_media: "Instagram".to_string(),
            content_type: "Reels".to_string(),
            content_pillar: "Educational".to_string(),
            status: "Draft".to_string(),
            caption: "Caption".to_string(),
            cta_link: String::new(),
            hashtag: "#rust".to_string(),
            post_date: NaiveDate::from_ymd_opt(2026, 11, day).unwrap(),
            file_content: file.map(str::to_string),
            created_at: NaiveDate::from_ymd_opt(2026, 10, 16)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn test_save_and_list_by_post_date() {
        let db = Database::in_memory().await.unwrap();
        db.init().await.unwrap();
        let model = ContentPlannerModel::new(db.pool().clone());

        model.save(entry(20, None)).await.unwrap();
        model.save(entry(3, Some("a.png"))).await.unwrap();

        let all = model.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].post_date, NaiveDate::from_ymd_opt(2026, 11, 3).unwrap());
        assert_eq!(all[0].file_content.as_deref(), Some("a.png"));
        assert!(all[1].file_content.is_none());
    }
}
