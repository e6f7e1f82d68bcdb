//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation. When migrations change the schema, regenerate with
//! `diesel print-schema` or update by hand.

diesel::table! {
    /// Board questions with denormalised reply and upvote counters.
    questions (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Question title.
        title -> Varchar,
        /// Question body.
        body -> Text,
        /// Category identifier, kebab-case.
        category -> Varchar,
        /// Denormalised count of replies.
        reply_count -> Int4,
        /// Denormalised count of anonymous likes.
        upvote_count -> Int4,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Replies to questions, immutable after insert.
    replies (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Question this reply belongs to.
        question_id -> Uuid,
        /// Reply content.
        content -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Anonymous likes, keyed by (question, token) so a duplicate like is
    /// a key collision rather than a second row.
    question_likes (question_id, anon_token) {
        /// Question the like applies to.
        question_id -> Uuid,
        /// Anonymous token that recorded the like.
        anon_token -> Uuid,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(replies -> questions (question_id));
diesel::joinable!(question_likes -> questions (question_id));

diesel::allow_tables_to_appear_in_same_query!(questions, replies, question_likes);
