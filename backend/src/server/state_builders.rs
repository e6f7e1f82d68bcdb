//! Builders for HTTP state ports backed by the database when available.

use std::sync::Arc;

use actix_web::web;

use backend::domain::QuestionBoard;
use backend::domain::ports::{
    BoardCommand, BoardQuery, BuiltinContentCatalogue, FixtureBoardCommand, FixtureBoardQuery,
};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{
    DbPool, DieselLikeRepository, DieselQuestionRepository, DieselReplyRepository,
};

use super::ServerConfig;

type DieselBoard =
    QuestionBoard<DieselQuestionRepository, DieselReplyRepository, DieselLikeRepository>;

fn build_diesel_board(pool: &DbPool) -> DieselBoard {
    QuestionBoard::new(
        Arc::new(DieselQuestionRepository::new(pool.clone())),
        Arc::new(DieselReplyRepository::new(pool.clone())),
        Arc::new(DieselLikeRepository::new(pool.clone())),
        Arc::new(mockable::DefaultClock),
    )
}

/// Build the board command/query pair, using the database-backed service
/// when a pool is configured and fixtures otherwise.
fn build_board_pair(config: &ServerConfig) -> (Arc<dyn BoardCommand>, Arc<dyn BoardQuery>) {
    match &config.db_pool {
        Some(pool) => {
            let board = Arc::new(build_diesel_board(pool));
            (
                board.clone() as Arc<dyn BoardCommand>,
                board as Arc<dyn BoardQuery>,
            )
        }
        None => (
            Arc::new(FixtureBoardCommand) as Arc<dyn BoardCommand>,
            Arc::new(FixtureBoardQuery) as Arc<dyn BoardQuery>,
        ),
    }
}

/// Build the shared HTTP state from configured ports and fixture fallbacks.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (board, board_query) = build_board_pair(config);

    web::Data::new(HttpState::new(
        board,
        board_query,
        Arc::new(BuiltinContentCatalogue),
    ))
}
