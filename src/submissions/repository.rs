// Database repository for assessment submissions

use sqlx::PgPool;

use crate::error::ApiError;
use crate::submissions::models::Submission;

/// Repository for submission operations
#[derive(Clone)]
pub struct SubmissionsRepository {
    pool: PgPool,
}

impl SubmissionsRepository {
    /// Create a new SubmissionsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new submission
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        company_code: Option<&str>,
        core_values: &[String],
    ) -> Result<Submission, ApiError> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (name, email, company_code, core_values)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, company_code, core_values, date_submitted
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(company_code)
        .bind(core_values)
        .fetch_one(&self.pool)
        .await?;

        Ok(submission)
    }

    /// List all submissions, newest first
    pub async fn find_all(&self) -> Result<Vec<Submission>, ApiError> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT id, name, email, company_code, core_values, date_submitted
            FROM submissions
            ORDER BY date_submitted DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }

    /// List submissions for a company code (exact match), newest first
    pub async fn find_by_company_code(&self, company_code: &str) -> Result<Vec<Submission>, ApiError> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT id, name, email, company_code, core_values, date_submitted
            FROM submissions
            WHERE company_code = $1
            ORDER BY date_submitted DESC
            "#,
        )
        .bind(company_code)
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }

    /// List the distinct non-empty company codes present in storage
    pub async fn find_company_codes(&self) -> Result<Vec<String>, ApiError> {
        let codes: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT company_code
            FROM submissions
            WHERE company_code IS NOT NULL AND company_code <> ''
            ORDER BY company_code
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(codes)
    }
}
