//! HTTP server configuration object.

use std::net::SocketAddr;

use todo_list_backend::config::RuntimeEnvironment;
use todo_list_backend::outbound::persistence::DbPool;

/// Everything `create_server` needs beyond the route table.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) environment: RuntimeEnvironment,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, environment: RuntimeEnvironment) -> Self {
        Self {
            bind_addr,
            environment,
            db_pool: None,
        }
    }

    /// Store todo items in PostgreSQL instead of process memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
