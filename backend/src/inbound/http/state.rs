//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BoardCommand, BoardQuery, BuiltinContentCatalogue, ContentQuery, FixtureBoardCommand,
    FixtureBoardQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Board mutation port.
    pub board: Arc<dyn BoardCommand>,
    /// Board read port.
    pub board_query: Arc<dyn BoardQuery>,
    /// Curated content port.
    pub content: Arc<dyn ContentQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::{
    ///     BuiltinContentCatalogue, FixtureBoardCommand, FixtureBoardQuery,
    /// };
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureBoardCommand),
    ///     Arc::new(FixtureBoardQuery),
    ///     Arc::new(BuiltinContentCatalogue),
    /// );
    /// let _board = state.board.clone();
    /// ```
    pub fn new(
        board: Arc<dyn BoardCommand>,
        board_query: Arc<dyn BoardQuery>,
        content: Arc<dyn ContentQuery>,
    ) -> Self {
        Self {
            board,
            board_query,
            content,
        }
    }

    /// State backed entirely by fixtures: an empty board and the built-in
    /// content catalogue. Used when no database is configured and by tests.
    pub fn fixtures() -> Self {
        Self::new(
            Arc::new(FixtureBoardCommand),
            Arc::new(FixtureBoardQuery),
            Arc::new(BuiltinContentCatalogue),
        )
    }
}
