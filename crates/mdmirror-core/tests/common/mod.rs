pub mod docs_server;
