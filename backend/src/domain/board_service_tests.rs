//! Behaviour tests for the question board service.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Local, Utc};
use mockable::Clock;
use rstest::rstest;
use uuid::Uuid;

use super::*;
use crate::domain::ports::{
    MockLikeRepository, MockQuestionRepository, MockReplyRepository,
};
use crate::domain::{AnonymousToken, Category, ErrorCode};

/// Clock double that advances by one second on every reading, so inserts
/// get strictly increasing timestamps.
struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut guard = self.now.lock().expect("clock lock");
        let current = *guard;
        *guard = current + Duration::seconds(1);
        current
    }
}

/// In-memory store implementing all three repository ports.
#[derive(Default)]
struct InMemoryBoardStore {
    questions: Mutex<Vec<Question>>,
    replies: Mutex<Vec<Reply>>,
    likes: Mutex<Vec<LikeRecord>>,
}

#[async_trait]
impl QuestionRepository for InMemoryBoardStore {
    async fn insert(&self, question: &Question) -> Result<(), RepositoryError> {
        self.questions
            .lock()
            .expect("store lock")
            .push(question.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Question>, RepositoryError> {
        Ok(self
            .questions
            .lock()
            .expect("store lock")
            .iter()
            .find(|q| q.id() == *id)
            .cloned())
    }

    async fn list_newest_first(&self) -> Result<Vec<Question>, RepositoryError> {
        let mut listed = self.questions.lock().expect("store lock").clone();
        listed.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(listed)
    }

    async fn increment_reply_count(&self, id: &Uuid) -> Result<(), RepositoryError> {
        let mut questions = self.questions.lock().expect("store lock");
        let Some(question) = questions.iter_mut().find(|q| q.id() == *id) else {
            return Err(RepositoryError::query("question not found"));
        };
        *question = Question::from_stored(
            QuestionDraft {
                id: question.id(),
                title: question.title().to_owned(),
                body: question.body().to_owned(),
                category: question.category(),
                created_at: question.created_at(),
            },
            question.reply_count() + 1,
            question.upvote_count(),
        );
        Ok(())
    }

    async fn increment_upvote_count(&self, id: &Uuid) -> Result<u32, RepositoryError> {
        let mut questions = self.questions.lock().expect("store lock");
        let Some(question) = questions.iter_mut().find(|q| q.id() == *id) else {
            return Err(RepositoryError::query("question not found"));
        };
        let bumped = question.upvote_count() + 1;
        *question = Question::from_stored(
            QuestionDraft {
                id: question.id(),
                title: question.title().to_owned(),
                body: question.body().to_owned(),
                category: question.category(),
                created_at: question.created_at(),
            },
            question.reply_count(),
            bumped,
        );
        Ok(bumped)
    }
}

#[async_trait]
impl ReplyRepository for InMemoryBoardStore {
    async fn insert(&self, reply: &Reply) -> Result<(), RepositoryError> {
        self.replies.lock().expect("store lock").push(reply.clone());
        Ok(())
    }

    async fn list_for_question(&self, question_id: &Uuid) -> Result<Vec<Reply>, RepositoryError> {
        Ok(self
            .replies
            .lock()
            .expect("store lock")
            .iter()
            .filter(|reply| reply.question_id() == *question_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl LikeRepository for InMemoryBoardStore {
    async fn exists(
        &self,
        question_id: &Uuid,
        token: &AnonymousToken,
    ) -> Result<bool, RepositoryError> {
        Ok(self
            .likes
            .lock()
            .expect("store lock")
            .iter()
            .any(|like| like.question_id() == *question_id && like.token() == token))
    }

    async fn insert(&self, like: &LikeRecord) -> Result<LikeInsertOutcome, RepositoryError> {
        let mut likes = self.likes.lock().expect("store lock");
        let duplicate = likes
            .iter()
            .any(|l| l.question_id() == like.question_id() && l.token() == like.token());
        if duplicate {
            return Ok(LikeInsertOutcome::AlreadyLiked);
        }
        likes.push(like.clone());
        Ok(LikeInsertOutcome::Recorded)
    }
}

type InMemoryBoard = QuestionBoard<InMemoryBoardStore, InMemoryBoardStore, InMemoryBoardStore>;

fn in_memory_board() -> InMemoryBoard {
    let store = Arc::new(InMemoryBoardStore::default());
    QuestionBoard::new(
        store.clone(),
        store.clone(),
        store,
        Arc::new(SteppingClock::starting_at(Utc::now())),
    )
}

fn question_request(title: &str) -> SubmitQuestionRequest {
    SubmitQuestionRequest {
        title: title.to_owned(),
        body: "Some more detail about the situation.".to_owned(),
        category: Category::Support,
    }
}

#[rstest]
#[tokio::test]
async fn empty_title_is_rejected_before_any_storage_call() {
    let questions = MockQuestionRepository::new();
    let replies = MockReplyRepository::new();
    let likes = MockLikeRepository::new();
    // No expectations registered: any repository call fails the test.
    let board = QuestionBoard::new(
        Arc::new(questions),
        Arc::new(replies),
        Arc::new(likes),
        Arc::new(mockable::DefaultClock),
    );

    let err = board
        .submit_question(question_request("   "))
        .await
        .expect_err("blank title rejected");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn empty_reply_is_rejected_before_any_storage_call() {
    let board = QuestionBoard::new(
        Arc::new(MockQuestionRepository::new()),
        Arc::new(MockReplyRepository::new()),
        Arc::new(MockLikeRepository::new()),
        Arc::new(mockable::DefaultClock),
    );

    let err = board
        .submit_reply(SubmitReplyRequest {
            question_id: Uuid::new_v4(),
            content: "  ".to_owned(),
        })
        .await
        .expect_err("blank reply rejected");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn submitted_question_appears_in_subsequent_list() {
    let board = in_memory_board();

    let submitted = board
        .submit_question(question_request("How do I come out to my parents?"))
        .await
        .expect("submission succeeds");

    let listed = board.list_questions().await.expect("list succeeds");
    assert_eq!(listed.questions.len(), 1);
    assert_eq!(listed.questions[0].id(), submitted.id());
}

#[rstest]
#[tokio::test]
async fn list_orders_newest_first() {
    let board = in_memory_board();

    board
        .submit_question(question_request("First question"))
        .await
        .expect("first submission");
    let second = board
        .submit_question(question_request("Second question"))
        .await
        .expect("second submission");

    let listed = board.list_questions().await.expect("list succeeds");
    assert_eq!(listed.questions[0].id(), second.id());
}

#[rstest]
#[tokio::test]
async fn reply_bumps_the_question_counter() {
    let board = in_memory_board();
    let question = board
        .submit_question(question_request("Dealing with school bullying"))
        .await
        .expect("submission succeeds");

    let reply = board
        .submit_reply(SubmitReplyRequest {
            question_id: question.id(),
            content: "Talk to a teacher you trust.".to_owned(),
        })
        .await
        .expect("reply succeeds");
    assert_eq!(reply.question_id(), question.id());

    let listed = board.list_questions().await.expect("list succeeds");
    assert_eq!(listed.questions[0].reply_count(), 1);

    let replies = board
        .list_replies(ListRepliesRequest {
            question_id: question.id(),
        })
        .await
        .expect("replies listed");
    assert_eq!(replies.replies.len(), 1);
}

#[rstest]
#[tokio::test]
async fn reply_to_missing_question_is_not_found() {
    let board = in_memory_board();

    let err = board
        .submit_reply(SubmitReplyRequest {
            question_id: Uuid::new_v4(),
            content: "hello".to_owned(),
        })
        .await
        .expect_err("missing question");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn second_like_with_same_token_is_rejected() {
    let board = in_memory_board();
    let question = board
        .submit_question(question_request("Resources for trans youth?"))
        .await
        .expect("submission succeeds");
    let token = AnonymousToken::mint();

    let first = board
        .like_question(LikeQuestionRequest {
            question_id: question.id(),
            token: token.clone(),
        })
        .await
        .expect("first like succeeds");
    assert_eq!(first.upvote_count, 1);

    let err = board
        .like_question(LikeQuestionRequest {
            question_id: question.id(),
            token,
        })
        .await
        .expect_err("second like rejected");
    assert_eq!(err.code(), ErrorCode::Conflict);
    let details = err.details().expect("details present");
    assert_eq!(details["code"], "already_liked");

    let listed = board.list_questions().await.expect("list succeeds");
    assert_eq!(listed.questions[0].upvote_count(), 1);
}

#[rstest]
#[tokio::test]
async fn distinct_tokens_each_count_once() {
    let board = in_memory_board();
    let question = board
        .submit_question(question_request("Finding LGBTQ+ friends"))
        .await
        .expect("submission succeeds");

    for expected in 1..=2 {
        let response = board
            .like_question(LikeQuestionRequest {
                question_id: question.id(),
                token: AnonymousToken::mint(),
            })
            .await
            .expect("like succeeds");
        assert_eq!(response.upvote_count, expected);
    }
}

#[rstest]
#[tokio::test]
async fn lost_race_on_insert_reports_already_liked() {
    // The pre-insert check passes but the storage key reports a duplicate,
    // as happens when two like calls race.
    let mut likes = MockLikeRepository::new();
    likes.expect_exists().returning(|_, _| Ok(false));
    likes
        .expect_insert()
        .returning(|_| Ok(LikeInsertOutcome::AlreadyLiked));

    let mut questions = MockQuestionRepository::new();
    let question = Question::new(QuestionDraft {
        id: Uuid::new_v4(),
        title: "racing".to_owned(),
        body: "likes".to_owned(),
        category: Category::Community,
        created_at: Utc::now(),
    })
    .expect("valid question");
    let stored = question.clone();
    questions
        .expect_find_by_id()
        .returning(move |_| Ok(Some(stored.clone())));
    questions.expect_increment_upvote_count().times(0);

    let board = QuestionBoard::new(
        Arc::new(questions),
        Arc::new(MockReplyRepository::new()),
        Arc::new(likes),
        Arc::new(mockable::DefaultClock),
    );

    let err = board
        .like_question(LikeQuestionRequest {
            question_id: question.id(),
            token: AnonymousToken::mint(),
        })
        .await
        .expect_err("duplicate reported");
    assert_eq!(err.code(), ErrorCode::Conflict);
}

#[rstest]
#[case(RepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(RepositoryError::query("broken"), ErrorCode::InternalError)]
#[tokio::test]
async fn failed_load_maps_storage_errors(
    #[case] error: RepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut questions = MockQuestionRepository::new();
    let returned = error.clone();
    questions
        .expect_list_newest_first()
        .returning(move || Err(returned.clone()));

    let board = QuestionBoard::new(
        Arc::new(questions),
        Arc::new(MockReplyRepository::new()),
        Arc::new(MockLikeRepository::new()),
        Arc::new(mockable::DefaultClock),
    );

    let err = board.list_questions().await.expect_err("load fails");
    assert_eq!(err.code(), expected);
}
