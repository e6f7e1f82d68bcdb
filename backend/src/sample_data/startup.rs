//! Startup seeding orchestration.

use chrono::{Duration, Utc};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::ports::{QuestionRepository, RepositoryError};
use crate::domain::{Category, Question, QuestionDraft};
use crate::outbound::persistence::{DbPool, DieselQuestionRepository};
use crate::sample_data::SampleDataSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum SampleSeedError {
    /// Seed persistence failed.
    #[error("sample data seeding error: {0}")]
    Storage(#[from] RepositoryError),
}

/// Outcome of a startup seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSeedOutcome {
    /// Seeding was disabled or no database was configured.
    Skipped,
    /// The board already had content; nothing was seeded.
    AlreadyPopulated,
    /// Sample questions were inserted.
    Seeded {
        /// Number of questions inserted.
        count: usize,
    },
}

fn sample_questions() -> Vec<Question> {
    let now = Utc::now();
    let sample = |title: &str, body: &str, category, replies, upvotes, hours_ago| {
        Question::from_stored(
            QuestionDraft {
                id: Uuid::new_v4(),
                title: title.to_owned(),
                body: body.to_owned(),
                category,
                created_at: now - Duration::hours(hours_ago),
            },
            replies,
            upvotes,
        )
    };

    vec![
        sample(
            "How do I come out to my parents?",
            "I'm 16 and want to come out to my parents but I'm scared...",
            Category::ComingOut,
            12,
            24,
            2,
        ),
        sample(
            "Resources for trans youth?",
            "Looking for resources about transitioning and finding supportive doctors...",
            Category::TransIssues,
            8,
            18,
            5,
        ),
        sample(
            "Dealing with school bullying",
            "I'm being bullied at school for being gay. What can I do?",
            Category::Support,
            15,
            31,
            24,
        ),
        sample(
            "Finding LGBTQ+ friends",
            "I don't know any other LGBTQ+ people my age. How can I meet people?",
            Category::Community,
            20,
            42,
            48,
        ),
    ]
}

async fn seed_into(
    repository: &dyn QuestionRepository,
) -> Result<SampleSeedOutcome, SampleSeedError> {
    let existing = repository.list_newest_first().await?;
    if !existing.is_empty() {
        info!(
            questions = existing.len(),
            "board already populated; sample seeding skipped"
        );
        return Ok(SampleSeedOutcome::AlreadyPopulated);
    }

    let questions = sample_questions();
    for question in &questions {
        repository.insert(question).await?;
    }

    info!(count = questions.len(), "sample questions seeded");
    Ok(SampleSeedOutcome::Seeded {
        count: questions.len(),
    })
}

/// Apply sample questions on startup when enabled.
pub async fn seed_sample_questions_on_startup(
    settings: &SampleDataSettings,
    db_pool: Option<&DbPool>,
) -> Result<SampleSeedOutcome, SampleSeedError> {
    if !settings.enabled {
        info!(reason = "disabled", "sample data seeding skipped");
        return Ok(SampleSeedOutcome::Skipped);
    }

    let Some(db_pool) = db_pool else {
        warn!("sample data seeding enabled but no database is configured; skipping");
        return Ok(SampleSeedOutcome::Skipped);
    };

    let repository = DieselQuestionRepository::new(db_pool.clone());
    seed_into(&repository).await
}

#[cfg(test)]
mod tests {
    //! Behaviour tests for startup seeding.

    use rstest::rstest;

    use super::*;
    use crate::domain::ports::MockQuestionRepository;

    #[rstest]
    #[tokio::test]
    async fn seeds_an_empty_board_with_four_questions() {
        let mut repository = MockQuestionRepository::new();
        repository
            .expect_list_newest_first()
            .returning(|| Ok(Vec::new()));
        repository.expect_insert().times(4).returning(|_| Ok(()));

        let outcome = seed_into(&repository).await.expect("seeding succeeds");
        assert_eq!(outcome, SampleSeedOutcome::Seeded { count: 4 });
    }

    #[rstest]
    #[tokio::test]
    async fn does_not_reseed_a_populated_board() {
        let mut repository = MockQuestionRepository::new();
        repository
            .expect_list_newest_first()
            .returning(|| Ok(sample_questions()));
        repository.expect_insert().times(0);

        let outcome = seed_into(&repository).await.expect("check succeeds");
        assert_eq!(outcome, SampleSeedOutcome::AlreadyPopulated);
    }

    #[rstest]
    #[tokio::test]
    async fn disabled_settings_skip_seeding() {
        let settings = SampleDataSettings { enabled: false };
        let outcome = seed_sample_questions_on_startup(&settings, None)
            .await
            .expect("skip succeeds");
        assert_eq!(outcome, SampleSeedOutcome::Skipped);
    }

    #[rstest]
    fn sample_questions_carry_the_site_counters() {
        let questions = sample_questions();
        assert_eq!(questions.len(), 4);
        assert_eq!(questions[0].reply_count(), 12);
        assert_eq!(questions[0].upvote_count(), 24);
    }
}
